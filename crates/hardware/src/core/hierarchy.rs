//! Memory hierarchy.
//!
//! Routes data loads and stores through zero, one or two cache levels in front
//! of main memory and reports one [`CacheEvent`] per level consulted.
//!
//! 1. **Loads:** L1 is always consulted. Each lower level is consulted only when
//!    every level above it missed. A lower level that hits is left unchanged; one
//!    that misses is filled. L1 is always filled from memory on a miss.
//! 2. **Stores:** Memory is written through, then every level updates or
//!    allocates the block and reports `SW`.
//!
//! Instruction fetches never come through here.

use crate::common::Addr;
use crate::config::CacheHierarchyConfig;
use crate::core::units::cache::Cache;
use crate::core::units::cache::event::{CacheEvent, CacheLevel, CacheStatus, EventSink};
use crate::soc::Memory;

/// Ordered cache levels, L1 first.
#[derive(Debug, Default)]
pub struct MemoryHierarchy {
    levels: Vec<Cache>,
}

impl MemoryHierarchy {
    /// Builds the caches described by `config`.
    ///
    /// An empty config gives a pass-through hierarchy that talks to memory directly.
    pub fn new(config: &CacheHierarchyConfig) -> Self {
        let levels = config
            .levels()
            .iter()
            .enumerate()
            .map(|(idx, cfg)| Cache::new(CacheLevel::from_index(idx), cfg))
            .collect();
        Self { levels }
    }

    /// Cache levels, L1 first.
    pub fn levels(&self) -> &[Cache] {
        &self.levels
    }

    /// Returns `true` if no cache is configured.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Performs a data load.
    ///
    /// # Arguments
    ///
    /// * `mem` - Main memory.
    /// * `addr` - Word address to read.
    /// * `pc` - Address of the `lw` instruction, for the event log.
    /// * `sink` - Receives one event per level consulted.
    ///
    /// # Returns
    ///
    /// The loaded word. It always equals `mem.read(addr)`.
    pub fn load(
        &mut self,
        mem: &Memory,
        addr: Addr,
        pc: u16,
        sink: &mut dyn EventSink,
    ) -> u16 {
        let mut value = None;

        for (idx, cache) in self.levels.iter_mut().enumerate() {
            let probe = if idx == 0 {
                let (word, probe) = cache.load(addr, mem);
                value = Some(word);
                probe
            } else {
                cache.allocate(addr, mem)
            };

            let status = if probe.hit {
                CacheStatus::Hit
            } else {
                CacheStatus::Miss
            };
            sink.record(CacheEvent {
                level: cache.level(),
                status,
                pc,
                addr,
                row: probe.row,
            });

            if probe.hit {
                break;
            }
        }

        value.unwrap_or_else(|| mem.read(addr))
    }

    /// Performs a data store through every level.
    ///
    /// # Arguments
    ///
    /// * `mem` - Main memory; written first.
    /// * `addr` - Word address to write.
    /// * `value` - Word to store.
    /// * `pc` - Address of the `sw` instruction, for the event log.
    /// * `sink` - Receives one `SW` event per level.
    pub fn store(
        &mut self,
        mem: &mut Memory,
        addr: Addr,
        value: u16,
        pc: u16,
        sink: &mut dyn EventSink,
    ) {
        mem.write(addr, value);
        for cache in &mut self.levels {
            let probe = cache.store(addr, value, mem);
            sink.record(CacheEvent {
                level: cache.level(),
                status: CacheStatus::Sw,
                pc,
                addr,
                row: probe.row,
            });
        }
    }
}
