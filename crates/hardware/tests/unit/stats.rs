//! # Statistics Tests

use e20sim_core::stats::{CacheLevelStats, SimStats};

use crate::common::harness::TestContext;
use crate::unit::sim::scenarios::sum_loop_program;

#[test]
fn test_instruction_mix_of_sum_loop() {
    let mut ctx = TestContext::with_cache("8,2,2").load_program(&sum_loop_program());
    let _ = ctx.run();
    let stats = &ctx.sim.stats;

    assert_eq!(stats.instructions_retired, 27);
    assert_eq!(stats.inst_load, 4);
    assert_eq!(stats.inst_store, 1);
    assert_eq!(stats.inst_branch, 8);
    assert_eq!(stats.inst_alu, 14);
    assert_eq!(stats.inst_undefined, 0);
    assert_eq!(stats.branches_taken, 5);
}

#[test]
fn test_cache_counters_per_level() {
    let mut ctx = TestContext::with_cache("8,2,2").load_program(&sum_loop_program());
    let _ = ctx.run();
    assert_eq!(
        ctx.sim.stats.caches,
        vec![CacheLevelStats {
            name: "L1".to_string(),
            hits: 2,
            misses: 2,
            stores: 1,
        }]
    );
    assert!((ctx.sim.stats.caches[0].miss_rate() - 0.5).abs() < f64::EPSILON);
}

#[test]
fn test_no_cache_has_no_levels() {
    let mut ctx = TestContext::new().load_program(&sum_loop_program());
    let _ = ctx.run();
    assert!(ctx.sim.stats.caches.is_empty());
    assert_eq!(ctx.sim.stats.instructions_retired, 27);
}

#[test]
fn test_stats_serialize_to_json() {
    let stats = SimStats::default();
    let json: serde_json::Value =
        serde_json::from_str(&stats.to_json().expect("serializes")).expect("valid json");
    assert_eq!(json["instructions_retired"], 0);
    assert!(json["caches"].as_array().is_some_and(Vec::is_empty));
}

#[test]
fn test_miss_rate_without_loads() {
    assert_eq!(CacheLevelStats::default().miss_rate(), 0.0);
}
