//! Text reports.
//!
//! Formats the two fixed reports of the simulator:
//! 1. **Final state:** `pc`, the eight registers, and the first 128 memory words
//!    as four-digit lowercase hex, eight per line.
//! 2. **Cache configuration:** One line per cache level, printed before a cached run.

use std::fmt::Write as _;

use crate::common::constants::{MEM_DUMP_COLUMNS, MEM_DUMP_WORDS};
use crate::core::MachineState;
use crate::core::units::cache::Cache;

/// Renders the final-state report.
///
/// ```text
/// Final state:
/// 	pc=    0
/// 	$0=    0
/// ...
/// 0000 0000 0000 0000 0000 0000 0000 0000
/// ```
///
/// Every memory word is followed by a single space, including the last one on a line.
pub fn final_state(state: &MachineState) -> String {
    let mut out = String::from("Final state:\n");
    let _ = writeln!(out, "\tpc={:>5}", state.pc.val());
    for (idx, value) in state.regs.snapshot().iter().enumerate() {
        let _ = writeln!(out, "\t${idx}={value:>5}");
    }
    for row in state.mem.slice(0..MEM_DUMP_WORDS).chunks(MEM_DUMP_COLUMNS) {
        for word in row {
            let _ = write!(out, "{word:04x} ");
        }
        out.push('\n');
    }
    out
}

/// Renders the configuration line of one cache level.
pub fn cache_config_line(cache: &Cache) -> String {
    let cfg = cache.config();
    format!(
        "Cache {} has size {}, associativity {}, blocksize {}, rows {}",
        cache.level(),
        cfg.size,
        cfg.associativity,
        cfg.blocksize,
        cfg.rows()
    )
}

/// Renders the configuration lines of every level, L1 first.
pub fn cache_config(levels: &[Cache]) -> String {
    levels
        .iter()
        .map(|cache| cache_config_line(cache) + "\n")
        .collect()
}
