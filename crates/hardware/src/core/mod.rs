//! Core processor implementation.
//!
//! This module contains the E20 machine state and execution engine, the
//! functional units it uses, and the memory hierarchy that serves its data
//! accesses.

/// Machine state and the fetch/decode/execute step.
pub mod cpu;

/// Cache levels in front of main memory.
pub mod hierarchy;

/// Functional units (ALU, caches).
pub mod units;

pub use self::cpu::{MachineState, StepOutcome};
pub use self::hierarchy::MemoryHierarchy;
