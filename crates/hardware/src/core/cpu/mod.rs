//! Architectural State.
//!
//! This module defines [`MachineState`], the complete state of an E20 machine:
//! 1. **Registers:** The eight-entry [`RegisterFile`].
//! 2. **Memory:** Main [`Memory`], populated by the loader before the run.
//! 3. **Program Counter:** Always a valid address in `[0, MEM_SIZE)`.
//!
//! The execution engine that advances this state lives in [`execution`].

/// Fetch, decode and execute of a single instruction.
pub mod execution;

pub use self::execution::StepOutcome;

use crate::common::{Addr, RegisterFile};
use crate::soc::Memory;

/// Registers, memory and program counter of one machine.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MachineState {
    /// General-purpose registers.
    pub regs: RegisterFile,
    /// Main memory.
    pub mem: Memory,
    /// Program counter.
    pub pc: Addr,
}

impl MachineState {
    /// Creates a zeroed machine with the program counter at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a machine whose memory holds `mem`.
    pub fn with_memory(mem: Memory) -> Self {
        Self {
            mem,
            ..Self::default()
        }
    }
}
