//! Cache event log.
//!
//! Every cache level consulted by a load or store produces one
//! [`CacheEvent`]. Its `Display` form is the fixed-width log line:
//!
//! ```text
//! L1 MISS  pc:    3	addr:   32	row:   0
//! ```
//!
//! Events go to an [`EventSink`]; the simulator forwards them in program order.

use std::fmt;
use std::io::{self, Write};

use crate::common::Addr;

/// Identifies a level of the cache hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CacheLevel {
    /// First-level cache, closest to the core.
    L1,
    /// Second-level cache, between L1 and memory.
    L2,
}

impl CacheLevel {
    /// Returns the level for a zero-based position in the hierarchy.
    pub const fn from_index(idx: usize) -> Self {
        if idx == 0 { Self::L1 } else { Self::L2 }
    }

    /// Name printed in logs and reports.
    pub const fn name(self) -> &'static str {
        match self {
            Self::L1 => "L1",
            Self::L2 => "L2",
        }
    }
}

impl fmt::Display for CacheLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of one access at one cache level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CacheStatus {
    /// Load found the block resident.
    Hit,
    /// Load did not find the block.
    Miss,
    /// Store (reported regardless of residency).
    Sw,
}

impl CacheStatus {
    /// Text printed in the log line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hit => "HIT",
            Self::Miss => "MISS",
            Self::Sw => "SW",
        }
    }
}

impl fmt::Display for CacheStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One logged cache access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheEvent {
    /// Level that was consulted.
    pub level: CacheLevel,
    /// What happened there.
    pub status: CacheStatus,
    /// Address of the `lw`/`sw` instruction.
    pub pc: u16,
    /// Data address accessed.
    pub addr: Addr,
    /// Row the address maps to at this level.
    pub row: usize,
}

impl fmt::Display for CacheEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = format!("{} {}", self.level, self.status);
        write!(
            f,
            "{tag:<8} pc:{:>5}\taddr:{:>5}\trow:{:>4}",
            self.pc, self.addr, self.row
        )
    }
}

/// Receives cache events as they happen.
pub trait EventSink {
    /// Records one event.
    fn record(&mut self, event: CacheEvent);
}

impl EventSink for Vec<CacheEvent> {
    fn record(&mut self, event: CacheEvent) {
        self.push(event);
    }
}

/// Writes each event as one line to an [`io::Write`].
///
/// Write failures do not interrupt the simulation; the first one is kept and
/// can be collected with [`WriterSink::finish`].
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> WriterSink<W> {
    /// Wraps a writer.
    pub const fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Flushes the writer and returns the first error seen, if any.
    ///
    /// # Errors
    ///
    /// The first write or flush error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> EventSink for WriterSink<W> {
    fn record(&mut self, event: CacheEvent) {
        if self.error.is_none() {
            if let Err(err) = writeln!(self.out, "{event}") {
                self.error = Some(err);
            }
        }
    }
}
