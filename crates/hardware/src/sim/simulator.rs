//! Simulator: owns the machine, its memory hierarchy and its statistics.
//!
//! Keeping the three side by side lets the execution engine borrow the state
//! and the hierarchy mutably at the same time.

use std::path::Path;

use tracing::info;

use super::loader;
use crate::common::SimError;
use crate::config::Config;
use crate::core::units::cache::event::{CacheEvent, EventSink};
use crate::core::{MachineState, MemoryHierarchy, StepOutcome};
use crate::soc::Memory;
use crate::stats::SimStats;

/// Top-level simulator.
#[derive(Debug)]
pub struct Simulator {
    /// Architectural state.
    pub state: MachineState,
    /// Caches serving data accesses.
    pub hierarchy: MemoryHierarchy,
    /// Run statistics.
    pub stats: SimStats,
    verbose: bool,
    halted: bool,
    pending: Vec<CacheEvent>,
}

impl Simulator {
    /// Creates a simulator with zeroed memory.
    ///
    /// # Errors
    ///
    /// [`SimError::Config`] if the configuration does not validate.
    pub fn new(config: &Config) -> Result<Self, SimError> {
        config.validate()?;
        let hierarchy = MemoryHierarchy::new(&config.cache);
        let levels: Vec<_> = hierarchy.levels().iter().map(|c| c.level()).collect();
        Ok(Self {
            state: MachineState::new(),
            hierarchy,
            stats: SimStats::new(&levels),
            verbose: config.general.trace_instructions,
            halted: false,
            pending: Vec::new(),
        })
    }

    /// Creates a simulator with `image` loaded at address 0.
    ///
    /// # Errors
    ///
    /// A configuration error, or [`crate::common::LoadError::ProgramTooBig`].
    pub fn with_image(config: &Config, image: &[u16]) -> Result<Self, SimError> {
        let mut sim = Self::new(config)?;
        let mut mem = Memory::new();
        mem.load_image(image)?;
        sim.state = MachineState::with_memory(mem);
        Ok(sim)
    }

    /// Creates a simulator from an image file.
    ///
    /// # Errors
    ///
    /// Any load or configuration error.
    pub fn from_file(config: &Config, path: impl AsRef<Path>) -> Result<Self, SimError> {
        let image = loader::load_image(path)?;
        Self::with_image(config, &image)
    }

    /// Returns `true` once the machine has halted.
    pub const fn is_halted(&self) -> bool {
        self.halted
    }

    /// Executes one instruction, forwarding its cache events to `sink`.
    ///
    /// # Returns
    ///
    /// `None` if the machine had already halted.
    pub fn step(&mut self, sink: &mut dyn EventSink) -> Option<StepOutcome> {
        if self.halted {
            return None;
        }

        let outcome = self
            .state
            .step(&mut self.hierarchy, &mut self.pending, self.verbose);

        self.stats.record_step(&outcome);
        for event in self.pending.drain(..) {
            self.stats.record_event(&event);
            sink.record(event);
        }

        if outcome.halted {
            self.halted = true;
            info!(
                pc = outcome.pc.val(),
                steps = self.stats.instructions_retired,
                "halted"
            );
        }
        Some(outcome)
    }

    /// Runs until the machine halts.
    ///
    /// # Returns
    ///
    /// The number of instructions executed by this call.
    pub fn run(&mut self, sink: &mut dyn EventSink) -> u64 {
        let mut steps = 0;
        while self.step(sink).is_some() {
            steps += 1;
        }
        steps
    }

    /// Runs until the machine halts, collecting the cache events.
    pub fn run_collect(&mut self) -> Vec<CacheEvent> {
        let mut events = Vec::new();
        let _ = self.run(&mut events);
        events
    }
}
