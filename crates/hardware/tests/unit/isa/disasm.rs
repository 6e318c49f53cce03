//! # Disassembler Tests

use e20sim_core::isa::disasm::disassemble;
use rstest::rstest;

use crate::common::builder::instruction::*;

#[rstest]
#[case(add(1, 2, 3), "add $1, $2, $3")]
#[case(sub(4, 5, 6), "sub $4, $5, $6")]
#[case(or(1, 1, 1), "or $1, $1, $1")]
#[case(and(7, 0, 2), "and $7, $0, $2")]
#[case(slt(3, 2, 1), "slt $3, $2, $1")]
#[case(jr(7), "jr $7")]
#[case(addi(1, 0, 5), "addi $1, $0, 5")]
#[case(slti(2, 1, -1), "slti $2, $1, -1")]
#[case(lw(1, 2, -3), "lw $1, -3($2)")]
#[case(sw(3, 0, 12), "sw $3, 12($0)")]
#[case(jeq(1, 2, -64), "jeq $1, $2, -64")]
#[case(j(17), "j 17")]
#[case(jal(8191), "jal 8191")]
fn test_disassemble(#[case] word: u16, #[case] text: &str) {
    assert_eq!(disassemble(word), text);
}

#[test]
fn test_undefined_func_renders_as_fill() {
    let word = reg_raw(5, 0, 0, 0);
    assert_eq!(disassemble(word), format!(".fill {word}"));
}
