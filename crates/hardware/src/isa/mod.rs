//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains opcodes, field extraction and decoding for the E20 machine's
//! three instruction encodings (register, immediate, jump).

/// Instruction decoding into the tagged [`instruction::Instruction`] variant.
pub mod decode;

/// Instruction disassembler for tracing and diagnostics.
pub mod disasm;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// Opcode and function-selector constants.
pub mod opcodes;

pub use decode::decode;
pub use instruction::{ImmOp, Instruction, JumpOp, RegFunc};
