//! Simulation front end.
//!
//! Loads machine-code images, drives the machine to completion, and renders
//! the textual reports.

/// Machine-code image parsing.
pub mod loader;
/// Fixed-format text reports.
pub mod report;
/// Top-level simulator.
pub mod simulator;

pub use self::simulator::Simulator;
