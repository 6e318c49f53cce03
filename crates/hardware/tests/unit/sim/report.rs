//! # Report Formatting Tests

use e20sim_core::config::CacheHierarchyConfig;
use e20sim_core::core::MemoryHierarchy;
use e20sim_core::sim::report;
use pretty_assertions::assert_eq;

use crate::common::builder::instruction::*;
use crate::common::harness::TestContext;

const ZERO_LINE: &str = "0000 0000 0000 0000 0000 0000 0000 0000 \n";

#[test]
fn test_final_state_of_halt_only_program() {
    let mut ctx = TestContext::new().load_program(&[halt(0)]);
    let _ = ctx.run();

    let mut expected = String::from("Final state:\n\tpc=    0\n");
    for i in 0..8 {
        expected.push_str(&format!("\t${i}=    0\n"));
    }
    expected.push_str("4000 0000 0000 0000 0000 0000 0000 0000 \n");
    for _ in 1..16 {
        expected.push_str(ZERO_LINE);
    }

    assert_eq!(report::final_state(&ctx.sim.state), expected);
}

#[test]
fn test_final_state_registers_and_memory() {
    let mut ctx = TestContext::new().load_program(&[
        addi(1, 0, -1),
        addi(2, 0, 63),
        sw(2, 2, 63),
        halt(3),
    ]);
    let _ = ctx.run();
    let text = report::final_state(&ctx.sim.state);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 1 + 1 + 8 + 16);
    assert_eq!(lines[1], "\tpc=    3");
    assert_eq!(lines[3], "\t$1=65535");
    assert_eq!(lines[4], "\t$2=   63");
    assert_eq!(lines[10], "20ff 213f a93f 4003 0000 0000 0000 0000 ");
    assert_eq!(lines[25], "0000 0000 0000 0000 0000 0000 003f 0000 ");
}

#[test]
fn test_cache_config_report() {
    let hierarchy =
        MemoryHierarchy::new(&CacheHierarchyConfig::from_arg("8,2,2,16,4,2").expect("valid"));
    assert_eq!(
        report::cache_config(hierarchy.levels()),
        "Cache L1 has size 8, associativity 2, blocksize 2, rows 2\n\
         Cache L2 has size 16, associativity 4, blocksize 2, rows 2\n"
    );
}

#[test]
fn test_cache_config_report_empty_without_cache() {
    assert_eq!(report::cache_config(MemoryHierarchy::default().levels()), "");
}
