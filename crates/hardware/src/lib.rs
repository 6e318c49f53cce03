//! E20 system simulator library.
//!
//! This crate implements an instruction-level simulator for the 16-bit E20
//! teaching architecture with an optional write-through cache hierarchy:
//! 1. **Core:** Register file, program counter, and the fetch/decode/execute engine.
//! 2. **Memory:** 8192-word main memory and up to two set-associative LRU caches
//!    that log every data access.
//! 3. **ISA:** Decoding and disassembly of the register, immediate and jump forms.
//! 4. **Simulation:** Image loader, configuration, reports, and statistics.
//!
//! ```
//! use e20sim_core::{Config, Simulator};
//!
//! // addi $1, $0, 5 ; j 1
//! let image = [0b001_000_001_0000101, 0b010_0000000000001];
//! let mut sim = Simulator::with_image(&Config::default(), &image).unwrap();
//! let events = sim.run_collect();
//! assert!(events.is_empty());
//! assert_eq!(sim.state.regs.read(1), 5);
//! assert_eq!(sim.state.pc.val(), 1);
//! ```

/// Common types and constants (addresses, registers, errors).
pub mod common;
/// Simulator configuration (cache hierarchy, tracing options).
pub mod config;
/// CPU core (machine state, execution, ALU, caches, memory hierarchy).
pub mod core;
/// Instruction set (opcodes, field extraction, decode, disassembly).
pub mod isa;
/// Image loader, simulator driver and reports.
pub mod sim;
/// Main memory.
pub mod soc;
/// Simulation statistics collection.
pub mod stats;

/// Root configuration type; use `Config::default()` for the no-cache machine.
pub use crate::config::Config;
/// Architectural state of one machine.
pub use crate::core::MachineState;
/// Top-level simulator; owns the machine, its caches and its statistics.
pub use crate::sim::Simulator;
