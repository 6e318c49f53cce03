//! E20 Instruction Decoder.
//!
//! Turns a raw 16-bit word into an [`Instruction`]. Decoding is total: every
//! word decodes to something, and register-group words with an unassigned
//! function selector decode to [`RegFunc::Undefined`].

use crate::common::Addr;
use crate::isa::instruction::{
    IMM7_EXTEND, IMM7_SIGN_BIT, ImmOp, Instruction, InstructionBits, JumpOp, RegFunc,
};
use crate::isa::opcodes;

/// Decodes a raw instruction word.
///
/// # Arguments
///
/// * `word` - The 16-bit instruction encoding.
///
/// # Returns
///
/// The decoded instruction with sign-extended immediates and a wrapped jump target.
pub fn decode(word: u16) -> Instruction {
    match word.opcode() {
        opcodes::OP_REG => Instruction::Reg {
            func: decode_func(word.func()),
            reg_a: word.reg_a(),
            reg_b: word.reg_b(),
            reg_dst: word.reg_dst(),
        },
        opcodes::OP_J => Instruction::Jump {
            op: JumpOp::J,
            target: Addr::wrap(word.imm13()),
        },
        opcodes::OP_JAL => Instruction::Jump {
            op: JumpOp::Jal,
            target: Addr::wrap(word.imm13()),
        },
        opcode => {
            let op = match opcode {
                opcodes::OP_ADDI => ImmOp::Addi,
                opcodes::OP_LW => ImmOp::Lw,
                opcodes::OP_SW => ImmOp::Sw,
                opcodes::OP_JEQ => ImmOp::Jeq,
                _ => ImmOp::Slti,
            };
            Instruction::Imm {
                op,
                reg_a: word.reg_a(),
                reg_b: word.reg_b(),
                imm: sign_extend_imm7(word.imm7()),
            }
        }
    }
}

fn decode_func(func: u16) -> RegFunc {
    match func {
        opcodes::FUNC_ADD => RegFunc::Add,
        opcodes::FUNC_SUB => RegFunc::Sub,
        opcodes::FUNC_OR => RegFunc::Or,
        opcodes::FUNC_AND => RegFunc::And,
        opcodes::FUNC_SLT => RegFunc::Slt,
        opcodes::FUNC_JR => RegFunc::Jr,
        other => RegFunc::Undefined(other),
    }
}

/// Sign-extends a 7-bit immediate to 16 bits.
///
/// If bit 6 is set the value is OR-ed with `0xFF80`, otherwise it is returned unchanged.
#[inline]
pub const fn sign_extend_imm7(imm: u16) -> u16 {
    if imm & IMM7_SIGN_BIT != 0 {
        imm | IMM7_EXTEND
    } else {
        imm
    }
}
