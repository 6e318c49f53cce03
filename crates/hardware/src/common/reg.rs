//! E20 Register File.
//!
//! This module provides the `RegisterFile` struct holding the eight 16-bit
//! general-purpose registers. It performs the following:
//! 1. **Storage:** Maintains registers `$0`-`$7`.
//! 2. **Invariant Enforcement:** Register `$0` reads as zero and discards writes,
//!    so callers never special-case it.
//! 3. **Observability:** Exposes a snapshot of all registers for reports and tests.

use super::constants::NUM_REGS;

/// Eight general-purpose 16-bit registers. Register `$0` is hardwired to zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u16; NUM_REGS],
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index. Only the low three bits are used, matching
    ///   the width of every register field in the encoding.
    ///
    /// # Returns
    ///
    /// The register value; `$0` always returns 0.
    #[inline]
    pub fn read(&self, idx: usize) -> u16 {
        let idx = idx % NUM_REGS;
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes a register. Writes to `$0` are discarded.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (low three bits are used).
    /// * `val` - The 16-bit value to store.
    #[inline]
    pub fn write(&mut self, idx: usize, val: u16) {
        let idx = idx % NUM_REGS;
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Returns a copy of all eight registers, `$0` first.
    pub fn snapshot(&self) -> [u16; NUM_REGS] {
        let mut out = self.regs;
        out[0] = 0;
        out
    }
}
