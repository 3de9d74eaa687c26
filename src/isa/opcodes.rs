//! RV32I Opcodes and Function Codes.
//!
//! Major opcodes (bits 6-0), funct3 (bits 14-12) and funct7 (bits 31-25)
//! values for the base integer set, Zicsr and the machine-mode privileged
//! instructions.

/// Load instructions (LB, LH, LW, LBU, LHU).
pub const OP_LOAD: u32 = 0b0000011;

/// Memory ordering instructions (FENCE, FENCE.I).
pub const OP_MISC_MEM: u32 = 0b0001111;

/// Immediate arithmetic instructions (ADDI, ANDI, SLLI, etc.).
pub const OP_IMM: u32 = 0b0010011;

/// Add Upper Immediate to PC (AUIPC).
pub const OP_AUIPC: u32 = 0b0010111;

/// Store instructions (SB, SH, SW).
pub const OP_STORE: u32 = 0b0100011;

/// Register-Register arithmetic (ADD, SUB, SLL, etc.).
pub const OP_REG: u32 = 0b0110011;

/// Load Upper Immediate (LUI).
pub const OP_LUI: u32 = 0b0110111;

/// Conditional Branch instructions (BEQ, BNE, etc.).
pub const OP_BRANCH: u32 = 0b1100011;

/// Jump and Link Register (JALR).
pub const OP_JALR: u32 = 0b1100111;

/// Jump and Link (JAL).
pub const OP_JAL: u32 = 0b1101111;

/// System instructions (ECALL, EBREAK, MRET, WFI, CSR access).
pub const OP_SYSTEM: u32 = 0b1110011;

pub mod funct3 {
    pub const BEQ: u32 = 0b000;
    pub const BNE: u32 = 0b001;
    pub const BLT: u32 = 0b100;
    pub const BGE: u32 = 0b101;
    pub const BLTU: u32 = 0b110;
    pub const BGEU: u32 = 0b111;

    pub const LB: u32 = 0b000;
    pub const LH: u32 = 0b001;
    pub const LW: u32 = 0b010;
    pub const LBU: u32 = 0b100;
    pub const LHU: u32 = 0b101;

    pub const SB: u32 = 0b000;
    pub const SH: u32 = 0b001;
    pub const SW: u32 = 0b010;

    pub const ADD_SUB: u32 = 0b000;
    pub const SLL: u32 = 0b001;
    pub const SLT: u32 = 0b010;
    pub const SLTU: u32 = 0b011;
    pub const XOR: u32 = 0b100;
    pub const SRL_SRA: u32 = 0b101;
    pub const OR: u32 = 0b110;
    pub const AND: u32 = 0b111;

    pub const JALR: u32 = 0b000;

    pub const FENCE: u32 = 0b000;
    pub const FENCE_I: u32 = 0b001;
}

pub mod funct7 {
    /// Plain encoding (ADD, SRL, and every non-paired operation).
    pub const DEFAULT: u32 = 0b0000000;
    /// Alternate encoding, instruction bit 30 set (SUB, SRA).
    pub const ALT: u32 = 0b0100000;
}

/// System instruction encodings.
pub mod sys_ops {
    /// Environment call.
    pub const ECALL: u32 = 0x0000_0073;
    /// Breakpoint.
    pub const EBREAK: u32 = 0x0010_0073;
    /// Return from machine-mode trap.
    pub const MRET: u32 = 0x3020_0073;
    /// Wait for interrupt.
    pub const WFI: u32 = 0x1050_0073;

    /// funct3 selecting the privileged (non-CSR) group.
    pub const PRIV: u32 = 0b000;
    pub const CSRRW: u32 = 0b001;
    pub const CSRRS: u32 = 0b010;
    pub const CSRRC: u32 = 0b011;
    pub const CSRRWI: u32 = 0b101;
    pub const CSRRSI: u32 = 0b110;
    pub const CSRRCI: u32 = 0b111;
}
