//! Global Machine Constants.
//!
//! This module defines the fixed parameters of the E20 machine:
//! 1. **Memory Constants:** Number of words in main memory.
//! 2. **Register Constants:** Register count and the link register used by `jal`.
//! 3. **Report Constants:** How much memory the final-state report dumps.

/// Number of 16-bit words in main memory (2^13).
///
/// Every address computed by the machine is reduced modulo this value.
pub const MEM_SIZE: usize = 1 << 13;

/// Mask selecting the low 13 bits of a word, i.e. a valid memory address.
pub const ADDR_MASK: u16 = (MEM_SIZE - 1) as u16;

/// Number of general-purpose registers (`$0`..`$7`).
pub const NUM_REGS: usize = 8;

/// Register written with the return address by `jal`.
pub const LINK_REG: usize = 7;

/// Number of memory words printed by the final-state report.
pub const MEM_DUMP_WORDS: usize = 128;

/// Number of memory words printed per line of the final-state report.
pub const MEM_DUMP_COLUMNS: usize = 8;
