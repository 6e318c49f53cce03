//! Execution units and functional components.
//!
//! This module contains the ALU and the cache model used by the memory hierarchy.

/// Arithmetic Logic Unit for 16-bit integer operations.
pub mod alu;

/// Set-associative cache with LRU replacement and its event log.
pub mod cache;
