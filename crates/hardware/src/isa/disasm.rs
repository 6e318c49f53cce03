//! Instruction Disassembler for the E20 machine.
//!
//! Converts a raw 16-bit word into assembly text for instruction tracing and
//! test diagnostics.
//!
//! ```
//! use e20sim_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0b001_000_001_0000101), "addi $1, $0, 5");
//! assert_eq!(disassemble(0b010_0000000000000), "j 0");
//! ```

use crate::isa::decode::decode;
use crate::isa::instruction::{ImmOp, Instruction, JumpOp, RegFunc};

/// Disassembles one instruction word.
///
/// Register-group words with an undefined function selector render as
/// `.fill <word>` since no mnemonic produces them.
pub fn disassemble(word: u16) -> String {
    match decode(word) {
        Instruction::Reg {
            func,
            reg_a,
            reg_b,
            reg_dst,
        } => {
            let mnemonic = match func {
                RegFunc::Add => "add",
                RegFunc::Sub => "sub",
                RegFunc::Or => "or",
                RegFunc::And => "and",
                RegFunc::Slt => "slt",
                RegFunc::Jr => return format!("jr ${reg_a}"),
                RegFunc::Undefined(_) => return format!(".fill {word}"),
            };
            format!("{mnemonic} ${reg_dst}, ${reg_a}, ${reg_b}")
        }
        Instruction::Imm {
            op,
            reg_a,
            reg_b,
            imm,
        } => {
            let imm = imm as i16;
            match op {
                ImmOp::Addi => format!("addi ${reg_b}, ${reg_a}, {imm}"),
                ImmOp::Slti => format!("slti ${reg_b}, ${reg_a}, {imm}"),
                ImmOp::Lw => format!("lw ${reg_b}, {imm}(${reg_a})"),
                ImmOp::Sw => format!("sw ${reg_b}, {imm}(${reg_a})"),
                ImmOp::Jeq => format!("jeq ${reg_a}, ${reg_b}, {imm}"),
            }
        }
        Instruction::Jump { op, target } => match op {
            JumpOp::J => format!("j {target}"),
            JumpOp::Jal => format!("jal {target}"),
        },
    }
}
