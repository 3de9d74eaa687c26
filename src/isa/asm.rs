//! Instruction Assembler Helpers.
//!
//! One constructor per RV32I, Zicsr and machine-mode instruction, built on
//! [`encode`]. Operands wider than their slot are truncated, as the hardware
//! would see them. Used by the test suites and by hand-assembled firmware.

use crate::isa::instruction::{encode, Fields, Format};
use crate::isa::opcodes::*;

fn r_type(funct3: u32, funct7: u32, rd: u32, rs1: u32, rs2: u32) -> u32 {
    encode(
        Format::R,
        &Fields {
            opcode: OP_REG,
            rd,
            funct3,
            rs1,
            rs2,
            funct7,
            imm: 0,
        },
    )
}

fn i_type(opcode: u32, funct3: u32, rd: u32, rs1: u32, imm: i32) -> u32 {
    encode(
        Format::I,
        &Fields {
            opcode,
            rd,
            funct3,
            rs1,
            imm,
            ..Default::default()
        },
    )
}

fn s_type(funct3: u32, rs1: u32, rs2: u32, imm: i32) -> u32 {
    encode(
        Format::S,
        &Fields {
            opcode: OP_STORE,
            funct3,
            rs1,
            rs2,
            imm,
            ..Default::default()
        },
    )
}

fn b_type(funct3: u32, rs1: u32, rs2: u32, imm: i32) -> u32 {
    encode(
        Format::B,
        &Fields {
            opcode: OP_BRANCH,
            funct3,
            rs1,
            rs2,
            imm,
            ..Default::default()
        },
    )
}

fn u_type(opcode: u32, rd: u32, imm: i32) -> u32 {
    encode(
        Format::U,
        &Fields {
            opcode,
            rd,
            imm,
            ..Default::default()
        },
    )
}

fn csr_type(funct3: u32, rd: u32, rs1_zimm: u32, csr: u32) -> u32 {
    i_type(OP_SYSTEM, funct3, rd, rs1_zimm, (csr & 0xFFF) as i32)
}

fn shift_imm(funct3: u32, funct7: u32, rd: u32, rs1: u32, shamt: u32) -> u32 {
    i_type(OP_IMM, funct3, rd, rs1, ((funct7 << 5) | (shamt & 0x1F)) as i32)
}

/// `lui rd, imm`; the low twelve bits of `imm` are dropped.
pub fn lui(rd: u32, imm: i32) -> u32 {
    u_type(OP_LUI, rd, imm)
}

/// `auipc rd, imm`; the low twelve bits of `imm` are dropped.
pub fn auipc(rd: u32, imm: i32) -> u32 {
    u_type(OP_AUIPC, rd, imm)
}

/// `jal rd, offset`
pub fn jal(rd: u32, imm: i32) -> u32 {
    encode(
        Format::J,
        &Fields {
            opcode: OP_JAL,
            rd,
            imm,
            ..Default::default()
        },
    )
}

/// `jalr rd, imm(rs1)`
pub fn jalr(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(OP_JALR, funct3::JALR, rd, rs1, imm)
}

pub fn beq(rs1: u32, rs2: u32, imm: i32) -> u32 {
    b_type(funct3::BEQ, rs1, rs2, imm)
}

pub fn bne(rs1: u32, rs2: u32, imm: i32) -> u32 {
    b_type(funct3::BNE, rs1, rs2, imm)
}

pub fn blt(rs1: u32, rs2: u32, imm: i32) -> u32 {
    b_type(funct3::BLT, rs1, rs2, imm)
}

pub fn bge(rs1: u32, rs2: u32, imm: i32) -> u32 {
    b_type(funct3::BGE, rs1, rs2, imm)
}

pub fn bltu(rs1: u32, rs2: u32, imm: i32) -> u32 {
    b_type(funct3::BLTU, rs1, rs2, imm)
}

pub fn bgeu(rs1: u32, rs2: u32, imm: i32) -> u32 {
    b_type(funct3::BGEU, rs1, rs2, imm)
}

pub fn lb(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(OP_LOAD, funct3::LB, rd, rs1, imm)
}

pub fn lh(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(OP_LOAD, funct3::LH, rd, rs1, imm)
}

pub fn lw(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(OP_LOAD, funct3::LW, rd, rs1, imm)
}

pub fn lbu(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(OP_LOAD, funct3::LBU, rd, rs1, imm)
}

pub fn lhu(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(OP_LOAD, funct3::LHU, rd, rs1, imm)
}

/// `sb rs2, imm(rs1)`
pub fn sb(rs2: u32, rs1: u32, imm: i32) -> u32 {
    s_type(funct3::SB, rs1, rs2, imm)
}

/// `sh rs2, imm(rs1)`
pub fn sh(rs2: u32, rs1: u32, imm: i32) -> u32 {
    s_type(funct3::SH, rs1, rs2, imm)
}

/// `sw rs2, imm(rs1)`
pub fn sw(rs2: u32, rs1: u32, imm: i32) -> u32 {
    s_type(funct3::SW, rs1, rs2, imm)
}

pub fn addi(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(OP_IMM, funct3::ADD_SUB, rd, rs1, imm)
}

pub fn slti(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(OP_IMM, funct3::SLT, rd, rs1, imm)
}

pub fn sltiu(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(OP_IMM, funct3::SLTU, rd, rs1, imm)
}

pub fn xori(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(OP_IMM, funct3::XOR, rd, rs1, imm)
}

pub fn ori(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(OP_IMM, funct3::OR, rd, rs1, imm)
}

pub fn andi(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(OP_IMM, funct3::AND, rd, rs1, imm)
}

pub fn slli(rd: u32, rs1: u32, shamt: u32) -> u32 {
    shift_imm(funct3::SLL, funct7::DEFAULT, rd, rs1, shamt)
}

pub fn srli(rd: u32, rs1: u32, shamt: u32) -> u32 {
    shift_imm(funct3::SRL_SRA, funct7::DEFAULT, rd, rs1, shamt)
}

pub fn srai(rd: u32, rs1: u32, shamt: u32) -> u32 {
    shift_imm(funct3::SRL_SRA, funct7::ALT, rd, rs1, shamt)
}

pub fn add(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(funct3::ADD_SUB, funct7::DEFAULT, rd, rs1, rs2)
}

pub fn sub(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(funct3::ADD_SUB, funct7::ALT, rd, rs1, rs2)
}

pub fn sll(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(funct3::SLL, funct7::DEFAULT, rd, rs1, rs2)
}

pub fn slt(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(funct3::SLT, funct7::DEFAULT, rd, rs1, rs2)
}

pub fn sltu(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(funct3::SLTU, funct7::DEFAULT, rd, rs1, rs2)
}

pub fn xor(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(funct3::XOR, funct7::DEFAULT, rd, rs1, rs2)
}

pub fn srl(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(funct3::SRL_SRA, funct7::DEFAULT, rd, rs1, rs2)
}

pub fn sra(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(funct3::SRL_SRA, funct7::ALT, rd, rs1, rs2)
}

pub fn or(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(funct3::OR, funct7::DEFAULT, rd, rs1, rs2)
}

pub fn and(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(funct3::AND, funct7::DEFAULT, rd, rs1, rs2)
}

/// `fence pred, succ` with 4-bit predecessor/successor sets.
pub fn fence(pred: u32, succ: u32) -> u32 {
    (pred & 0xF) << 24 | (succ & 0xF) << 20 | OP_MISC_MEM
}

pub fn fence_i() -> u32 {
    funct3::FENCE_I << 12 | OP_MISC_MEM
}

pub fn ecall() -> u32 {
    sys_ops::ECALL
}

pub fn ebreak() -> u32 {
    sys_ops::EBREAK
}

pub fn mret() -> u32 {
    sys_ops::MRET
}

pub fn wfi() -> u32 {
    sys_ops::WFI
}

pub fn csrrw(rd: u32, rs1: u32, csr: u32) -> u32 {
    csr_type(sys_ops::CSRRW, rd, rs1, csr)
}

pub fn csrrs(rd: u32, rs1: u32, csr: u32) -> u32 {
    csr_type(sys_ops::CSRRS, rd, rs1, csr)
}

pub fn csrrc(rd: u32, rs1: u32, csr: u32) -> u32 {
    csr_type(sys_ops::CSRRC, rd, rs1, csr)
}

pub fn csrrwi(rd: u32, zimm: u32, csr: u32) -> u32 {
    csr_type(sys_ops::CSRRWI, rd, zimm, csr)
}

pub fn csrrsi(rd: u32, zimm: u32, csr: u32) -> u32 {
    csr_type(sys_ops::CSRRSI, rd, zimm, csr)
}

pub fn csrrci(rd: u32, zimm: u32, csr: u32) -> u32 {
    csr_type(sys_ops::CSRRCI, rd, zimm, csr)
}
