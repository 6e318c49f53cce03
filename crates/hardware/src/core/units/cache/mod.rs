//! Set-Associative Cache.
//!
//! This module implements one level of a write-through, write-allocate,
//! set-associative cache with LRU replacement. It provides:
//! 1. **Mapping:** `block = addr / blocksize`, `row = block % rows`, `tag = block / rows`.
//! 2. **Loads:** Hits promote the tag to MRU; misses evict the LRU tag of a full
//!    row and fill the whole block from memory.
//! 3. **Stores:** Memory is always written first; the block is then updated in
//!    place or allocated from the already-written memory.
//!
//! Blocks hold real data words. Because every store writes through, a resident
//! block always equals the words in memory it was filled from.

/// Cache event records and sinks.
pub mod event;

/// Cache replacement policy implementations.
pub mod policies;

use std::collections::HashMap;

use tracing::debug;

use self::event::CacheLevel;
use self::policies::{LruPolicy, ReplacementPolicy};
use crate::common::Addr;
use crate::config::CacheConfig;
use crate::soc::Memory;

/// Where an address lands in a cache, and whether it is resident.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Probe {
    /// Row (set) index.
    pub row: usize,
    /// Tag within the row.
    pub tag: usize,
    /// `true` if the block is resident.
    pub hit: bool,
}

/// One row of the cache: the resident blocks keyed by tag.
#[derive(Clone, Debug, Default)]
struct CacheRow {
    blocks: HashMap<usize, Vec<u16>>,
}

/// A single cache level.
#[derive(Debug)]
pub struct Cache {
    level: CacheLevel,
    config: CacheConfig,
    rows: Vec<CacheRow>,
    num_rows: usize,
    ways: usize,
    blocksize: usize,
    policy: Box<dyn ReplacementPolicy>,
}

impl Cache {
    /// Creates an empty cache.
    ///
    /// # Arguments
    ///
    /// * `level` - Which level this cache is, used in events and logs.
    /// * `config` - Size, associativity and block size in words.
    ///
    /// # Returns
    ///
    /// A cache with every row empty. Zero parameters are clamped to one so that
    /// an unvalidated config cannot cause a division by zero.
    pub fn new(level: CacheLevel, config: &CacheConfig) -> Self {
        let ways = config.associativity.max(1);
        let blocksize = config.blocksize.max(1);
        let num_rows = config.rows().max(1);

        Self {
            level,
            config: *config,
            rows: vec![CacheRow::default(); num_rows],
            num_rows,
            ways,
            blocksize,
            policy: Box::new(LruPolicy::new(num_rows)),
        }
    }

    /// Level of this cache.
    pub const fn level(&self) -> CacheLevel {
        self.level
    }

    /// Configuration this cache was built from.
    pub const fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Number of rows.
    pub const fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Looks up an address without changing any state.
    pub fn probe(&self, addr: Addr) -> Probe {
        let block_id = addr.index() / self.blocksize;
        let row = block_id % self.num_rows;
        let tag = block_id / self.num_rows;
        Probe {
            row,
            tag,
            hit: self.rows[row].blocks.contains_key(&tag),
        }
    }

    /// Returns `true` if the block holding `addr` is resident.
    pub fn contains(&self, addr: Addr) -> bool {
        self.probe(addr).hit
    }

    /// Tags resident in `row`, most recently used first.
    pub fn resident_tags(&self, row: usize) -> Vec<usize> {
        self.policy.order(row)
    }

    /// Reads one word through the cache.
    ///
    /// # Arguments
    ///
    /// * `addr` - Word address to read.
    /// * `mem` - Backing memory, used to fill on a miss.
    ///
    /// # Returns
    ///
    /// The word, and the probe taken before the access (so `hit` reports
    /// whether the block was already resident).
    pub fn load(&mut self, addr: Addr, mem: &Memory) -> (u16, Probe) {
        let probe = self.probe(addr);
        if probe.hit {
            self.policy.touch(probe.row, probe.tag);
        } else {
            self.fill(addr, probe, mem);
        }
        let offset = addr.index() % self.blocksize;
        let value = self.rows[probe.row]
            .blocks
            .get(&probe.tag)
            .and_then(|block| block.get(offset))
            .copied()
            .unwrap_or_else(|| mem.read(addr));
        (value, probe)
    }

    /// Brings the block holding `addr` in on a miss without reading a word.
    ///
    /// A resident block is left untouched, including its recency.
    ///
    /// # Returns
    ///
    /// The probe taken before the fill.
    pub fn allocate(&mut self, addr: Addr, mem: &Memory) -> Probe {
        let probe = self.probe(addr);
        if !probe.hit {
            self.fill(addr, probe, mem);
        }
        probe
    }

    /// Writes one word through the cache.
    ///
    /// Memory is written first. A resident block is then patched in place; a
    /// missing block is allocated from memory, which already holds `value`.
    /// Either way the tag becomes most recently used.
    ///
    /// # Returns
    ///
    /// The probe taken before the access.
    pub fn store(&mut self, addr: Addr, value: u16, mem: &mut Memory) -> Probe {
        mem.write(addr, value);

        let probe = self.probe(addr);
        let offset = addr.index() % self.blocksize;
        match self.rows[probe.row].blocks.get_mut(&probe.tag) {
            Some(block) => {
                if let Some(word) = block.get_mut(offset) {
                    *word = value;
                }
                self.policy.touch(probe.row, probe.tag);
            }
            None => self.fill(addr, probe, mem),
        }
        probe
    }

    /// Inserts the block for `addr` as MRU, evicting the LRU tag if the row is full.
    fn fill(&mut self, addr: Addr, probe: Probe, mem: &Memory) {
        let Probe { row, tag, .. } = probe;

        if self.rows[row].blocks.len() >= self.ways {
            if let Some(victim) = self.policy.victim(row) {
                let _ = self.rows[row].blocks.remove(&victim);
                self.policy.remove(row, victim);
                debug!(level = %self.level, row, tag = victim, "evict");
            }
        }

        let start = Addr::from((addr.index() - addr.index() % self.blocksize) as u16);
        let block = mem.read_block(start, self.blocksize);
        let _ = self.rows[row].blocks.insert(tag, block);
        self.policy.touch(row, tag);
        debug!(level = %self.level, row, tag, start = start.val(), "fill");
    }
}
