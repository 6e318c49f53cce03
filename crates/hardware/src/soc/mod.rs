//! System components outside the core.
//!
//! The E20 system is just main memory; caches live with the core in
//! [`crate::core::units::cache`] and [`crate::core::hierarchy`].

/// Main memory.
pub mod memory;

pub use memory::Memory;
