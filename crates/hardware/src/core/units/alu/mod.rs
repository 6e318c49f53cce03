//! Arithmetic Logic Unit (ALU).
//!
//! Implements the E20 register-group and immediate arithmetic. All operands
//! and results are 16-bit words; add and subtract wrap modulo 2^16, and the
//! set-less-than operations compare the operands as two's-complement.

use crate::isa::instruction::RegFunc;

/// Integer ALU for 16-bit words.
#[derive(Debug, Clone, Copy)]
pub struct Alu;

impl Alu {
    /// Executes a register-group operation.
    ///
    /// # Arguments
    ///
    /// * `func` - The decoded function selector.
    /// * `a`    - Value of `regA`.
    /// * `b`    - Value of `regB`.
    ///
    /// # Returns
    ///
    /// `Some(result)` for the arithmetic functions, `None` for `jr` and
    /// undefined selectors, which write no register.
    pub fn execute(func: RegFunc, a: u16, b: u16) -> Option<u16> {
        match func {
            RegFunc::Add => Some(a.wrapping_add(b)),
            RegFunc::Sub => Some(a.wrapping_sub(b)),
            RegFunc::Or => Some(a | b),
            RegFunc::And => Some(a & b),
            RegFunc::Slt => Some(Self::slt(a, b)),
            RegFunc::Jr | RegFunc::Undefined(_) => None,
        }
    }

    /// Wrapping 16-bit add, used by `addi` and address generation.
    #[inline]
    pub const fn add(a: u16, b: u16) -> u16 {
        a.wrapping_add(b)
    }

    /// Signed less-than, used by `slt` and `slti`. Returns 1 or 0.
    #[inline]
    pub const fn slt(a: u16, b: u16) -> u16 {
        ((a as i16) < (b as i16)) as u16
    }
}
