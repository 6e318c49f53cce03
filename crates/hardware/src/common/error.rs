//! Error definitions.
//!
//! This module defines the failures the simulator can report. It provides:
//! 1. **Load Errors:** Problems reading or parsing a machine-code image.
//! 2. **Config Errors:** Malformed or impossible cache configurations.
//! 3. **Simulation Errors:** The umbrella type returned by the top-level API.
//!
//! Undefined instruction encodings are not errors; the execution engine
//! treats them as no-ops (see [`crate::core::cpu`]).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure while loading a machine-code image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The image file could not be read.
    #[error("Can't open file {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A line did not match `ram[<addr>] = 16'b<bits>;`.
    #[error("Can't parse line {line}: {text}")]
    Unparsable {
        /// One-based line number.
        line: usize,
        /// The offending line.
        text: String,
    },

    /// Addresses must start at zero and increase by one.
    #[error("Memory addresses encountered out of sequence: {addr} (expected {expected})")]
    OutOfSequence {
        /// Address found in the image.
        addr: usize,
        /// Address that should have come next.
        expected: usize,
    },

    /// The image does not fit in main memory.
    #[error("Program too big for memory: address {addr}")]
    ProgramTooBig {
        /// First address that does not fit.
        addr: usize,
    },
}

/// Failure while building a cache configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `--cache` takes exactly three or six comma-separated fields.
    #[error("Invalid cache config: expected 3 or 6 fields, found {0}")]
    WrongFieldCount(usize),

    /// A `--cache` field is not an unsigned integer.
    #[error("Invalid cache config: '{0}' is not a number")]
    InvalidNumber(String),

    /// A size, associativity or blocksize of zero.
    #[error("Invalid cache config: {level} {field} must be non-zero")]
    ZeroParameter {
        /// Cache level name (`L1`/`L2`).
        level: &'static str,
        /// Which parameter was zero.
        field: &'static str,
    },

    /// The parameters leave the cache with no rows.
    #[error(
        "Invalid cache config: {level} size {size} is smaller than associativity {assoc} x blocksize {blocksize}"
    )]
    NoRows {
        /// Cache level name.
        level: &'static str,
        /// Total size in words.
        size: usize,
        /// Associativity.
        assoc: usize,
        /// Block size in words.
        blocksize: usize,
    },

    /// A parameter exceeds the number of words in memory.
    #[error("Invalid cache config: {level} {field} {value} exceeds memory size {limit}")]
    TooLarge {
        /// Cache level name.
        level: &'static str,
        /// Which parameter was too large.
        field: &'static str,
        /// The rejected value.
        value: usize,
        /// Largest accepted value.
        limit: usize,
    },

    /// An L2 cache was configured without an L1 in front of it.
    #[error("Invalid cache config: L2 requires an L1 cache")]
    L2WithoutL1,

    /// A JSON configuration file could not be parsed.
    #[error("Invalid config file: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration file could not be read.
    #[error("Can't open config file {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Top-level error returned by the simulator API.
#[derive(Debug, Error)]
pub enum SimError {
    /// Image loading failed.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
