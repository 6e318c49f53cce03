//! Instruction encoding and decoded-instruction types.
//!
//! Provides bit extraction for the three E20 encodings and the tagged
//! [`Instruction`] variant produced by [`crate::isa::decode::decode`].
//!
//! ```text
//!  15  13 12  10 9   7 6   4 3    0
//! +------+------+-----+-----+------+
//! |  000 | regA | regB| dst | func |   register form
//! +------+------+-----+-----+------+
//! |  op  | regA | regB|   imm7     |   immediate form
//! +------+------+-----+------------+
//! |  op  |       imm13             |   jump form
//! +------+-------------------------+
//! ```

use crate::common::Addr;

/// Bit shift of the opcode field (bits 15-13).
pub const OPCODE_SHIFT: u16 = 13;
/// Bit mask for the opcode field after shifting.
pub const OPCODE_MASK: u16 = 0x7;
/// Bit shift of the first register field (bits 12-10).
pub const REG_A_SHIFT: u16 = 10;
/// Bit shift of the second register field (bits 9-7).
pub const REG_B_SHIFT: u16 = 7;
/// Bit shift of the register-form destination field (bits 6-4).
pub const REG_DST_SHIFT: u16 = 4;
/// Bit mask for a 3-bit register field after shifting.
pub const REG_MASK: u16 = 0x7;
/// Bit mask for the register-form function selector (bits 3-0).
pub const FUNC_MASK: u16 = 0xF;
/// Bit mask for the 7-bit immediate field (bits 6-0).
pub const IMM7_MASK: u16 = 0x7F;
/// Sign bit of the 7-bit immediate.
pub const IMM7_SIGN_BIT: u16 = 0x40;
/// Bits OR-ed into a negative 7-bit immediate to sign-extend it to 16 bits.
pub const IMM7_EXTEND: u16 = 0xFF80;
/// Bit mask for the 13-bit jump-form address (bits 12-0).
pub const IMM13_MASK: u16 = 0x1FFF;

/// Field extraction for raw 16-bit instruction words.
pub trait InstructionBits {
    /// Extracts the opcode (bits 15-13).
    fn opcode(&self) -> u16;
    /// Extracts the first register field (bits 12-10).
    fn reg_a(&self) -> usize;
    /// Extracts the second register field (bits 9-7).
    fn reg_b(&self) -> usize;
    /// Extracts the register-form destination field (bits 6-4).
    fn reg_dst(&self) -> usize;
    /// Extracts the register-form function selector (bits 3-0).
    fn func(&self) -> u16;
    /// Extracts the raw, unextended 7-bit immediate (bits 6-0).
    fn imm7(&self) -> u16;
    /// Extracts the 13-bit jump address (bits 12-0).
    fn imm13(&self) -> u16;
}

impl InstructionBits for u16 {
    #[inline(always)]
    fn opcode(&self) -> u16 {
        (self >> OPCODE_SHIFT) & OPCODE_MASK
    }

    #[inline(always)]
    fn reg_a(&self) -> usize {
        ((self >> REG_A_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn reg_b(&self) -> usize {
        ((self >> REG_B_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn reg_dst(&self) -> usize {
        ((self >> REG_DST_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn func(&self) -> u16 {
        self & FUNC_MASK
    }

    #[inline(always)]
    fn imm7(&self) -> u16 {
        self & IMM7_MASK
    }

    #[inline(always)]
    fn imm13(&self) -> u16 {
        self & IMM13_MASK
    }
}

/// Operation selected by the function field of the register group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegFunc {
    /// `dst = a + b`
    Add,
    /// `dst = a - b`
    Sub,
    /// `dst = a | b`
    Or,
    /// `dst = a & b`
    And,
    /// `dst = (a as i16) < (b as i16)`
    Slt,
    /// `pc = a`
    Jr,
    /// A function selector with no defined meaning; executes as a no-op.
    Undefined(u16),
}

/// Operation of an immediate-form instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImmOp {
    /// `b = a + imm`
    Addi,
    /// `b = (a as i16) < (imm as i16)`
    Slti,
    /// `b = mem[a + imm]`
    Lw,
    /// `mem[a + imm] = b`
    Sw,
    /// `if a == b { pc = pc + 1 + imm }`
    Jeq,
}

/// Operation of a jump-form instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JumpOp {
    /// `pc = target`
    J,
    /// `$7 = pc + 1; pc = target`
    Jal,
}

/// A decoded E20 instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// Register-register form (opcode 0).
    Reg {
        /// Function selected by bits 3-0.
        func: RegFunc,
        /// First source register (bits 12-10).
        reg_a: usize,
        /// Second source register (bits 9-7).
        reg_b: usize,
        /// Destination register (bits 6-4).
        reg_dst: usize,
    },
    /// Immediate form.
    Imm {
        /// Which immediate operation.
        op: ImmOp,
        /// Source or base register (bits 12-10).
        reg_a: usize,
        /// Destination, store-source, or second compare register (bits 9-7).
        reg_b: usize,
        /// 7-bit immediate, already sign-extended to 16 bits.
        imm: u16,
    },
    /// Jump form.
    Jump {
        /// Which jump operation.
        op: JumpOp,
        /// Absolute target address.
        target: Addr,
    },
}
