//! Instruction Execution.
//!
//! This module implements one step of the E20 execution engine. It performs
//! the following:
//! 1. **Fetch:** Reads the word at `pc` straight from memory (fetches are never cached).
//! 2. **Decode:** Turns the word into an [`Instruction`].
//! 3. **Execute:** Updates registers, sends `lw`/`sw` through the memory hierarchy,
//!    and computes the next program counter.
//! 4. **Halt detection:** A control transfer whose target is the instruction's own
//!    address stops the machine.

use tracing::{debug, trace};

use super::MachineState;
use crate::common::Addr;
use crate::common::constants::LINK_REG;
use crate::core::hierarchy::MemoryHierarchy;
use crate::core::units::alu::Alu;
use crate::core::units::cache::event::EventSink;
use crate::isa::decode::decode;
use crate::isa::disasm::disassemble;
use crate::isa::instruction::{ImmOp, Instruction, JumpOp, RegFunc};

/// Result of executing one instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    /// Address the instruction was fetched from.
    pub pc: Addr,
    /// The executed instruction.
    pub instruction: Instruction,
    /// `true` when a control transfer changed the flow (taken `jeq`, `j`, `jal`, `jr`).
    pub taken: bool,
    /// `true` when the instruction jumped to itself; `pc` was not advanced.
    pub halted: bool,
}

impl MachineState {
    /// Executes the instruction at `pc`.
    ///
    /// # Arguments
    ///
    /// * `hierarchy` - Caches that serve `lw` and `sw`.
    /// * `sink` - Receives the cache events of this instruction.
    /// * `verbose` - Report the instruction at `debug` level instead of `trace`.
    ///
    /// # Returns
    ///
    /// What was executed, and whether the machine halted. After a halt `pc`
    /// still points at the halting instruction.
    pub fn step(
        &mut self,
        hierarchy: &mut MemoryHierarchy,
        sink: &mut dyn EventSink,
        verbose: bool,
    ) -> StepOutcome {
        let pc = self.pc;
        let word = self.mem.read(pc);
        let instruction = decode(word);

        if verbose {
            debug!(pc = pc.val(), word, asm = %disassemble(word), "exec");
        } else {
            trace!(pc = pc.val(), word, asm = %disassemble(word), "exec");
        }

        let fallthrough = pc.val().wrapping_add(1);
        let mut pc_next = fallthrough;

        match instruction {
            Instruction::Reg {
                func,
                reg_a,
                reg_b,
                reg_dst,
            } => {
                let a = self.regs.read(reg_a);
                let b = self.regs.read(reg_b);
                if func == RegFunc::Jr {
                    pc_next = Addr::wrap(a).val();
                } else if let Some(result) = Alu::execute(func, a, b) {
                    self.regs.write(reg_dst, result);
                }
            }
            Instruction::Imm {
                op,
                reg_a,
                reg_b,
                imm,
            } => {
                let a = self.regs.read(reg_a);
                match op {
                    ImmOp::Addi => self.regs.write(reg_b, Alu::add(a, imm)),
                    ImmOp::Slti => self.regs.write(reg_b, Alu::slt(a, imm)),
                    ImmOp::Lw => {
                        let addr = Addr::wrap(Alu::add(a, imm));
                        let value = hierarchy.load(&self.mem, addr, pc.val(), sink);
                        self.regs.write(reg_b, value);
                    }
                    ImmOp::Sw => {
                        let addr = Addr::wrap(Alu::add(a, imm));
                        let value = self.regs.read(reg_b);
                        hierarchy.store(&mut self.mem, addr, value, pc.val(), sink);
                    }
                    ImmOp::Jeq => {
                        if a == self.regs.read(reg_b) {
                            pc_next = pc_next.wrapping_add(imm);
                        }
                    }
                }
            }
            Instruction::Jump { op, target } => {
                if op == JumpOp::Jal {
                    self.regs.write(LINK_REG, fallthrough);
                }
                pc_next = target.val();
            }
        }

        let halted = pc_next == pc.val();
        if !halted {
            self.pc = Addr::wrap(pc_next);
        }

        StepOutcome {
            pc,
            instruction,
            taken: pc_next != fallthrough,
            halted,
        }
    }
}
