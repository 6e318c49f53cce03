use e20sim_core::isa::opcodes::*;

/// Fluent encoder for a single E20 instruction word.
///
/// Fields are masked to their width when the word is built, so negative
/// immediates can be passed directly.
pub struct InstructionBuilder {
    opcode: u16,
    reg_a: u16,
    reg_b: u16,
    reg_dst: u16,
    func: u16,
    imm: i32,
}

impl InstructionBuilder {
    pub fn new() -> Self {
        Self {
            opcode: 0,
            reg_a: 0,
            reg_b: 0,
            reg_dst: 0,
            func: 0,
            imm: 0,
        }
    }

    pub fn opcode(mut self, op: u16) -> Self {
        self.opcode = op;
        self
    }

    pub fn reg_a(mut self, r: u16) -> Self {
        self.reg_a = r;
        self
    }

    pub fn reg_b(mut self, r: u16) -> Self {
        self.reg_b = r;
        self
    }

    pub fn reg_dst(mut self, r: u16) -> Self {
        self.reg_dst = r;
        self
    }

    pub fn func(mut self, func: u16) -> Self {
        self.func = func;
        self
    }

    pub fn imm(mut self, imm: i32) -> Self {
        self.imm = imm;
        self
    }

    pub fn build_reg(self) -> u16 {
        (self.opcode << 13)
            | ((self.reg_a & 0x7) << 10)
            | ((self.reg_b & 0x7) << 7)
            | ((self.reg_dst & 0x7) << 4)
            | (self.func & 0xF)
    }

    pub fn build_imm(self) -> u16 {
        (self.opcode << 13)
            | ((self.reg_a & 0x7) << 10)
            | ((self.reg_b & 0x7) << 7)
            | ((self.imm as u16) & 0x7F)
    }

    pub fn build_jump(self) -> u16 {
        (self.opcode << 13) | ((self.imm as u16) & 0x1FFF)
    }
}

impl Default for InstructionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn reg_op(func: u16, dst: u16, a: u16, b: u16) -> u16 {
    InstructionBuilder::new()
        .opcode(OP_REG)
        .reg_a(a)
        .reg_b(b)
        .reg_dst(dst)
        .func(func)
        .build_reg()
}

fn imm_op(op: u16, a: u16, b: u16, imm: i32) -> u16 {
    InstructionBuilder::new()
        .opcode(op)
        .reg_a(a)
        .reg_b(b)
        .imm(imm)
        .build_imm()
}

pub fn add(dst: u16, a: u16, b: u16) -> u16 {
    reg_op(FUNC_ADD, dst, a, b)
}

pub fn sub(dst: u16, a: u16, b: u16) -> u16 {
    reg_op(FUNC_SUB, dst, a, b)
}

pub fn or(dst: u16, a: u16, b: u16) -> u16 {
    reg_op(FUNC_OR, dst, a, b)
}

pub fn and(dst: u16, a: u16, b: u16) -> u16 {
    reg_op(FUNC_AND, dst, a, b)
}

pub fn slt(dst: u16, a: u16, b: u16) -> u16 {
    reg_op(FUNC_SLT, dst, a, b)
}

pub fn jr(a: u16) -> u16 {
    reg_op(FUNC_JR, 0, a, 0)
}

/// Register-group word with an arbitrary function selector.
pub fn reg_raw(func: u16, dst: u16, a: u16, b: u16) -> u16 {
    reg_op(func, dst, a, b)
}

pub fn addi(dst: u16, src: u16, imm: i32) -> u16 {
    imm_op(OP_ADDI, src, dst, imm)
}

pub fn slti(dst: u16, src: u16, imm: i32) -> u16 {
    imm_op(OP_SLTI, src, dst, imm)
}

pub fn lw(dst: u16, base: u16, imm: i32) -> u16 {
    imm_op(OP_LW, base, dst, imm)
}

pub fn sw(src: u16, base: u16, imm: i32) -> u16 {
    imm_op(OP_SW, base, src, imm)
}

pub fn jeq(a: u16, b: u16, rel: i32) -> u16 {
    imm_op(OP_JEQ, a, b, rel)
}

pub fn j(target: u16) -> u16 {
    InstructionBuilder::new()
        .opcode(OP_J)
        .imm(i32::from(target))
        .build_jump()
}

pub fn jal(target: u16) -> u16 {
    InstructionBuilder::new()
        .opcode(OP_JAL)
        .imm(i32::from(target))
        .build_jump()
}

/// `j` to its own address: the halt idiom.
pub fn halt(at: u16) -> u16 {
    j(at)
}
