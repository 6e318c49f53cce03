//! Simulation statistics collection and reporting.
//!
//! This module tracks what a run did. It provides:
//! 1. **Instruction mix:** Retired instructions by class (ALU, load, store, jump/branch).
//! 2. **Control flow:** How many control transfers were taken.
//! 3. **Cache hierarchy:** Hit, miss and store counts for each configured level.
//!
//! Statistics serialize with `serde`, so front ends can emit them as JSON.

use serde::Serialize;

use crate::core::StepOutcome;
use crate::core::units::cache::event::{CacheEvent, CacheLevel, CacheStatus};
use crate::isa::instruction::{ImmOp, Instruction, RegFunc};

/// Access counts for one cache level.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CacheLevelStats {
    /// Level name (`L1`, `L2`).
    pub name: String,
    /// Loads that found the block resident.
    pub hits: u64,
    /// Loads that did not.
    pub misses: u64,
    /// Stores seen by this level.
    pub stores: u64,
}

impl CacheLevelStats {
    /// Fraction of loads that missed, or 0 when there were no loads.
    pub fn miss_rate(&self) -> f64 {
        let loads = self.hits + self.misses;
        if loads == 0 {
            0.0
        } else {
            self.misses as f64 / loads as f64
        }
    }
}

/// Simulation statistics structure tracking the metrics of one run.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SimStats {
    /// Number of instructions executed, including the halting one.
    pub instructions_retired: u64,
    /// Register-group arithmetic, `addi` and `slti`.
    pub inst_alu: u64,
    /// `lw` instructions.
    pub inst_load: u64,
    /// `sw` instructions.
    pub inst_store: u64,
    /// `j`, `jal`, `jr` and `jeq` instructions.
    pub inst_branch: u64,
    /// Register-group words with an undefined function selector.
    pub inst_undefined: u64,
    /// Control transfers that changed the flow.
    pub branches_taken: u64,
    /// One entry per configured cache level, L1 first.
    pub caches: Vec<CacheLevelStats>,
}

impl SimStats {
    /// Creates empty statistics for the given cache levels.
    pub fn new(levels: &[CacheLevel]) -> Self {
        Self {
            caches: levels
                .iter()
                .map(|level| CacheLevelStats {
                    name: level.name().to_string(),
                    ..CacheLevelStats::default()
                })
                .collect(),
            ..Self::default()
        }
    }

    /// Counts one executed instruction.
    pub fn record_step(&mut self, outcome: &StepOutcome) {
        self.instructions_retired += 1;
        match outcome.instruction {
            Instruction::Reg { func: RegFunc::Jr, .. } | Instruction::Jump { .. } => {
                self.inst_branch += 1;
            }
            Instruction::Reg {
                func: RegFunc::Undefined(_),
                ..
            } => self.inst_undefined += 1,
            Instruction::Imm { op: ImmOp::Jeq, .. } => self.inst_branch += 1,
            Instruction::Imm { op: ImmOp::Lw, .. } => self.inst_load += 1,
            Instruction::Imm { op: ImmOp::Sw, .. } => self.inst_store += 1,
            Instruction::Reg { .. } | Instruction::Imm { .. } => self.inst_alu += 1,
        }
        if outcome.taken {
            self.branches_taken += 1;
        }
    }

    /// Counts one cache event against its level.
    pub fn record_event(&mut self, event: &CacheEvent) {
        let Some(level) = self
            .caches
            .iter_mut()
            .find(|c| c.name == event.level.name())
        else {
            return;
        };
        match event.status {
            CacheStatus::Hit => level.hits += 1,
            CacheStatus::Miss => level.misses += 1,
            CacheStatus::Sw => level.stores += 1,
        }
    }

    /// Renders the statistics as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` serialization failures.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
