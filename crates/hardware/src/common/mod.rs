//! Common utilities and types used throughout the E20 simulator.
//!
//! This module provides the building blocks shared by every other component:
//! 1. **Addresses:** A strong type for memory addresses reduced modulo the memory size.
//! 2. **Constants:** Machine-wide sizes (memory words, register count, dump width).
//! 3. **Error Handling:** Load, configuration and simulation error types.
//! 4. **Register Management:** The eight-entry register file with `$0` hardwired to zero.

/// Address type definitions.
pub mod addr;

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for image loading, configuration and simulation.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use addr::Addr;
pub use constants::{MEM_SIZE, NUM_REGS};
pub use error::{ConfigError, LoadError, SimError};
pub use reg::RegisterFile;
