//! # ALU Tests

use e20sim_core::core::units::alu::Alu;
use e20sim_core::isa::instruction::RegFunc;
use rstest::rstest;

#[rstest]
#[case(RegFunc::Add, 0x7FFF, 1, 0x8000)]
#[case(RegFunc::Add, 0xFFFF, 1, 0)]
#[case(RegFunc::Sub, 0, 1, 0xFFFF)]
#[case(RegFunc::Or, 0x0F0F, 0x00FF, 0x0FFF)]
#[case(RegFunc::And, 0x0F0F, 0x00FF, 0x000F)]
#[case(RegFunc::Slt, 0x8000, 0x7FFF, 1)]
#[case(RegFunc::Slt, 0x7FFF, 0x8000, 0)]
fn test_alu_execute(#[case] func: RegFunc, #[case] a: u16, #[case] b: u16, #[case] out: u16) {
    assert_eq!(Alu::execute(func, a, b), Some(out));
}

#[test]
fn test_alu_add_wraps() {
    assert_eq!(Alu::add(0xFFFF, 0xFFFF), 0xFFFE);
}
