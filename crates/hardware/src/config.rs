//! Configuration system for the E20 simulator.
//!
//! This module defines the configuration structures used to parameterize
//! the simulator. It provides:
//! 1. **Defaults:** The no-cache machine with per-instruction tracing off.
//! 2. **Structures:** Hierarchical config for general options and the cache hierarchy.
//! 3. **Sources:** The compact `--cache` argument form, JSON text, and JSON files.
//!
//! A configuration is checked with [`Config::validate`] before a simulator is built
//! from it; the cache model itself never divides by a zero parameter.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::{ConfigError, MEM_SIZE};

/// Geometry of one cache level.
///
/// All three values are counted in words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Total capacity in words.
    pub size: usize,
    /// Blocks per row.
    pub associativity: usize,
    /// Words per block.
    pub blocksize: usize,
}

impl CacheConfig {
    /// Creates a cache geometry.
    pub const fn new(size: usize, associativity: usize, blocksize: usize) -> Self {
        Self {
            size,
            associativity,
            blocksize,
        }
    }

    /// Number of rows: `size / (associativity * blocksize)`.
    ///
    /// Returns 0 when either divisor is 0.
    pub const fn rows(&self) -> usize {
        match self.associativity.checked_mul(self.blocksize) {
            Some(0) | None => 0,
            Some(per_row) => self.size / per_row,
        }
    }

    fn validate(&self, level: &'static str) -> Result<(), ConfigError> {
        for (field, value) in [
            ("size", self.size),
            ("associativity", self.associativity),
            ("blocksize", self.blocksize),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroParameter { level, field });
            }
        }
        if self.rows() == 0 {
            return Err(ConfigError::NoRows {
                level,
                size: self.size,
                assoc: self.associativity,
                blocksize: self.blocksize,
            });
        }
        for (field, value) in [
            ("associativity", self.associativity),
            ("blocksize", self.blocksize),
            ("rows", self.rows()),
        ] {
            if value > MEM_SIZE {
                return Err(ConfigError::TooLarge {
                    level,
                    field,
                    value,
                    limit: MEM_SIZE,
                });
            }
        }
        Ok(())
    }
}

/// Cache hierarchy: no cache, L1 only, or L1 and L2.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheHierarchyConfig {
    /// First-level cache.
    pub l1: Option<CacheConfig>,
    /// Second-level cache; requires `l1`.
    pub l2: Option<CacheConfig>,
}

impl CacheHierarchyConfig {
    /// Parses the compact `--cache` form.
    ///
    /// Three comma-separated integers configure L1 only; six configure L1 then L2.
    /// Each triple is `size,associativity,blocksize`.
    ///
    /// # Arguments
    ///
    /// * `arg` - The raw argument, e.g. `"8,2,2,16,4,2"`.
    ///
    /// # Returns
    ///
    /// The parsed hierarchy, not yet validated.
    ///
    /// # Errors
    ///
    /// [`ConfigError::WrongFieldCount`] for any count other than 3 or 6, and
    /// [`ConfigError::InvalidNumber`] when a field is not a non-negative integer.
    pub fn from_arg(arg: &str) -> Result<Self, ConfigError> {
        let fields = arg
            .split(',')
            .map(|field| {
                let field = field.trim();
                field
                    .parse::<usize>()
                    .map_err(|_| ConfigError::InvalidNumber(field.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        match fields.as_slice() {
            &[size, assoc, bs] => Ok(Self {
                l1: Some(CacheConfig::new(size, assoc, bs)),
                l2: None,
            }),
            &[s1, a1, b1, s2, a2, b2] => Ok(Self {
                l1: Some(CacheConfig::new(s1, a1, b1)),
                l2: Some(CacheConfig::new(s2, a2, b2)),
            }),
            other => Err(ConfigError::WrongFieldCount(other.len())),
        }
    }

    /// Returns the configured levels in order, L1 first.
    pub fn levels(&self) -> Vec<CacheConfig> {
        self.l1.iter().chain(self.l2.iter()).copied().collect()
    }

    /// Returns `true` when no cache is configured.
    pub const fn is_empty(&self) -> bool {
        self.l1.is_none() && self.l2.is_none()
    }

    /// Checks every configured level.
    ///
    /// # Errors
    ///
    /// A zero parameter, a geometry with no rows, or an L2 without an L1.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.l2.is_some() && self.l1.is_none() {
            return Err(ConfigError::L2WithoutL1);
        }
        if let Some(l1) = &self.l1 {
            l1.validate("L1")?;
        }
        if let Some(l2) = &self.l2 {
            l2.validate("L2")?;
        }
        Ok(())
    }
}

/// General simulation options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Emit every executed instruction at `debug` level instead of `trace`.
    pub trace_instructions: bool,
}

/// Root simulator configuration.
///
/// `Config::default()` is the no-cache machine. A JSON document may give any
/// subset of the fields:
///
/// ```
/// use e20sim_core::Config;
///
/// let cfg = Config::from_json(r#"{ "cache": { "l1": { "size": 8, "associativity": 1, "blocksize": 2 } } }"#)
///     .unwrap();
/// assert_eq!(cfg.cache.l1.map(|c| c.rows()), Some(4));
/// assert!(!cfg.general.trace_instructions);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General options.
    pub general: GeneralConfig,
    /// Cache hierarchy.
    pub cache: CacheHierarchyConfig,
}

impl Config {
    /// Parses a JSON configuration and validates it.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Json`] on malformed input, or any validation error.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] when the file cannot be read, otherwise as
    /// [`Config::from_json`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Checks the whole configuration.
    ///
    /// # Errors
    ///
    /// See [`CacheHierarchyConfig::validate`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.cache.validate()
    }
}
