//! Instruction Disassembler.
//!
//! Best-effort mnemonic rendering for traces and the `disasm` command.
//! Encodings it cannot name render as an `illegal` diagnostic instead of
//! failing. The decoder, not this module, decides legality.

use crate::core::arch::csr;
use crate::isa::instruction::{imm, Format, InstructionBits};
use crate::isa::opcodes::*;

fn illegal(what: &str) -> String {
    format!("illegal instruction: {}", what)
}

fn csr_operand(addr: u32) -> String {
    match csr::name(addr) {
        Some(name) => name.to_string(),
        None => format!("{:#05x}", addr),
    }
}

/// Renders `inst` as assembly text.
pub fn disassemble(inst: u32) -> String {
    let rd = inst.rd();
    let rs1 = inst.rs1();
    let rs2 = inst.rs2();
    let f3 = inst.funct3();
    let alt = inst.funct7() == funct7::ALT;

    match inst.opcode() {
        OP_LUI => format!("lui x{}, {:#x}", rd, inst >> 12),
        OP_AUIPC => format!("auipc x{}, {:#x}", rd, inst >> 12),
        OP_JAL => format!("jal x{}, {}", rd, imm(Format::J, inst)),
        OP_JALR => format!("jalr x{}, {}(x{})", rd, imm(Format::I, inst), rs1),
        OP_BRANCH => {
            let name = match f3 {
                funct3::BEQ => "beq",
                funct3::BNE => "bne",
                funct3::BLT => "blt",
                funct3::BGE => "bge",
                funct3::BLTU => "bltu",
                funct3::BGEU => "bgeu",
                _ => return illegal(&format!("branch funct3 {}", f3)),
            };
            format!("{} x{}, x{}, {}", name, rs1, rs2, imm(Format::B, inst))
        }
        OP_LOAD => {
            let name = match f3 {
                funct3::LB => "lb",
                funct3::LH => "lh",
                funct3::LW => "lw",
                funct3::LBU => "lbu",
                funct3::LHU => "lhu",
                _ => return illegal("load"),
            };
            format!("{} x{}, {}(x{})", name, rd, imm(Format::I, inst), rs1)
        }
        OP_STORE => {
            let name = match f3 {
                funct3::SB => "sb",
                funct3::SH => "sh",
                funct3::SW => "sw",
                _ => return illegal("store"),
            };
            format!("{} x{}, {}(x{})", name, rs2, imm(Format::S, inst), rs1)
        }
        OP_IMM => {
            let i = imm(Format::I, inst);
            let shamt = rs2;
            match f3 {
                funct3::ADD_SUB => format!("addi x{}, x{}, {}", rd, rs1, i),
                funct3::SLT => format!("slti x{}, x{}, {}", rd, rs1, i),
                funct3::SLTU => format!("sltiu x{}, x{}, {}", rd, rs1, i),
                funct3::XOR => format!("xori x{}, x{}, {}", rd, rs1, i),
                funct3::OR => format!("ori x{}, x{}, {}", rd, rs1, i),
                funct3::AND => format!("andi x{}, x{}, {}", rd, rs1, i),
                funct3::SLL => format!("slli x{}, x{}, {}", rd, rs1, shamt),
                funct3::SRL_SRA if alt => format!("srai x{}, x{}, {}", rd, rs1, shamt),
                funct3::SRL_SRA => format!("srli x{}, x{}, {}", rd, rs1, shamt),
                _ => illegal("alui"),
            }
        }
        OP_REG => {
            let name = match (f3, alt) {
                (funct3::ADD_SUB, false) => "add",
                (funct3::ADD_SUB, true) => "sub",
                (funct3::SLL, _) => "sll",
                (funct3::SLT, _) => "slt",
                (funct3::SLTU, _) => "sltu",
                (funct3::XOR, _) => "xor",
                (funct3::SRL_SRA, false) => "srl",
                (funct3::SRL_SRA, true) => "sra",
                (funct3::OR, _) => "or",
                (funct3::AND, _) => "and",
                _ => return illegal("alu"),
            };
            format!("{} x{}, x{}, x{}", name, rd, rs1, rs2)
        }
        OP_MISC_MEM => match f3 {
            funct3::FENCE => "fence".to_string(),
            funct3::FENCE_I => "fence.i".to_string(),
            _ => illegal("misc-mem"),
        },
        OP_SYSTEM => {
            let target = csr_operand(inst.csr());
            match f3 {
                sys_ops::PRIV => match inst {
                    sys_ops::ECALL => "ecall".to_string(),
                    sys_ops::EBREAK => "ebreak".to_string(),
                    sys_ops::MRET => "mret".to_string(),
                    sys_ops::WFI => "wfi".to_string(),
                    _ => illegal("system"),
                },
                sys_ops::CSRRW => format!("csrrw x{}, {}, x{}", rd, target, rs1),
                sys_ops::CSRRS => format!("csrrs x{}, {}, x{}", rd, target, rs1),
                sys_ops::CSRRC => format!("csrrc x{}, {}, x{}", rd, target, rs1),
                sys_ops::CSRRWI => format!("csrrwi x{}, {}, {}", rd, target, rs1),
                sys_ops::CSRRSI => format!("csrrsi x{}, {}, {}", rd, target, rs1),
                sys_ops::CSRRCI => format!("csrrci x{}, {}, {}", rd, target, rs1),
                _ => illegal("system"),
            }
        }
        _ => illegal("invalid opcode"),
    }
}
