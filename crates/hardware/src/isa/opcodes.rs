//! E20 opcode and function-selector constants.
//!
//! The opcode is the top three bits of every instruction. Opcode
//! [`OP_REG`] is further split by the 4-bit function selector in bits 3-0.

/// Register-register group (`add`, `sub`, `or`, `and`, `slt`, `jr`).
pub const OP_REG: u16 = 0b000;
/// Add immediate.
pub const OP_ADDI: u16 = 0b001;
/// Unconditional jump to a 13-bit absolute address.
pub const OP_J: u16 = 0b010;
/// Jump and link (`$7` receives the return address).
pub const OP_JAL: u16 = 0b011;
/// Load word.
pub const OP_LW: u16 = 0b100;
/// Store word.
pub const OP_SW: u16 = 0b101;
/// Branch if equal, pc-relative.
pub const OP_JEQ: u16 = 0b110;
/// Set if less than immediate (signed).
pub const OP_SLTI: u16 = 0b111;

/// Function selector: `add`.
pub const FUNC_ADD: u16 = 0b0000;
/// Function selector: `sub`.
pub const FUNC_SUB: u16 = 0b0001;
/// Function selector: `or`.
pub const FUNC_OR: u16 = 0b0010;
/// Function selector: `and`.
pub const FUNC_AND: u16 = 0b0011;
/// Function selector: `slt` (signed).
pub const FUNC_SLT: u16 = 0b0100;
/// Function selector: `jr`.
pub const FUNC_JR: u16 = 0b1000;
