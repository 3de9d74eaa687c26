//! Instruction Decode Stage.
//!
//! [`decode`] maps a 32-bit instruction word onto the control vocabulary in
//! [`crate::core::control`]. Dispatch is one match per opcode over the
//! (funct3, funct7) pairs that opcode defines. Anything else, including a
//! recognised operation with bit 30 set where bit 30 means nothing, lands in
//! a single `Illegal` arm.

use log::trace;

use crate::common::error::Trap;
use crate::core::control::{
    AluOp, ControlSignals, CsrAccess, CsrOp, CsrSource, Decoded, MemWidth, NextPc, OpASrc,
    OpBSrc, Operands, ShiftType, SystemOp, WbSrc,
};
use crate::core::latches::{IdEx, IfId};
use crate::core::Cpu;
use crate::isa::disasm::disassemble;
use crate::isa::instruction::{imm, Format, InstructionBits};
use crate::isa::opcodes::*;

/// Decodes one instruction word.
pub fn decode(inst: u32) -> Decoded {
    let rd = inst.rd();
    let rs1 = inst.rs1();
    let rs2 = inst.rs2();
    let f3 = inst.funct3();
    let f7 = inst.funct7();

    let datapath = |ctrl: ControlSignals, rs1: usize, rs2: usize, imm: i32| Decoded::Datapath {
        ctrl,
        operands: Operands { rd, rs1, rs2, imm },
    };

    let mut c = ControlSignals {
        a_src: OpASrc::Rs1,
        b_src: OpBSrc::Imm,
        alu: AluOp::Add,
        ..Default::default()
    };

    match inst.opcode() {
        OP_LUI => {
            c.reg_write = true;
            datapath(c, 0, 0, imm(Format::U, inst))
        }
        OP_AUIPC => {
            c.reg_write = true;
            c.a_src = OpASrc::Pc;
            datapath(c, 0, 0, imm(Format::U, inst))
        }
        OP_JAL => {
            // x0 & imm is zero, so the branch-if-zero path always takes pc + imm.
            c.alu = AluOp::And;
            c.reg_write = true;
            c.next_pc = NextPc::BranchIfZero;
            c.wb_src = WbSrc::Pc;
            datapath(c, 0, 0, imm(Format::J, inst))
        }
        OP_JALR => {
            if f3 != funct3::JALR {
                return Decoded::Illegal;
            }
            c.reg_write = true;
            c.next_pc = NextPc::AluResult;
            c.wb_src = WbSrc::Pc;
            datapath(c, rs1, 0, imm(Format::I, inst))
        }
        OP_BRANCH => {
            let (alu, next_pc) = match f3 {
                funct3::BEQ => (AluOp::Xor, NextPc::BranchIfZero),
                funct3::BNE => (AluOp::Xor, NextPc::BranchIfNonZero),
                funct3::BLT => (AluOp::Cmp, NextPc::BranchIfNonZero),
                funct3::BGE => (AluOp::Cmp, NextPc::BranchIfZero),
                funct3::BLTU => (AluOp::Cmpu, NextPc::BranchIfNonZero),
                funct3::BGEU => (AluOp::Cmpu, NextPc::BranchIfZero),
                _ => return Decoded::Illegal,
            };
            c.alu = alu;
            c.next_pc = next_pc;
            c.b_src = OpBSrc::Rs2;
            datapath(c, rs1, rs2, imm(Format::B, inst))
        }
        OP_LOAD => {
            let (width, signed) = match f3 {
                funct3::LB => (MemWidth::Byte, true),
                funct3::LH => (MemWidth::Half, true),
                funct3::LW => (MemWidth::Word, true),
                funct3::LBU => (MemWidth::Byte, false),
                funct3::LHU => (MemWidth::Half, false),
                _ => return Decoded::Illegal,
            };
            c.reg_write = true;
            c.wb_src = WbSrc::Mem;
            c.width = width;
            c.signed_load = signed;
            datapath(c, rs1, 0, imm(Format::I, inst))
        }
        OP_STORE => {
            c.width = match f3 {
                funct3::SB => MemWidth::Byte,
                funct3::SH => MemWidth::Half,
                funct3::SW => MemWidth::Word,
                _ => return Decoded::Illegal,
            };
            c.mem_write = true;
            datapath(c, rs1, rs2, imm(Format::S, inst))
        }
        OP_IMM => {
            c.reg_write = true;
            match (f3, f7) {
                (funct3::SLL, funct7::DEFAULT) => {
                    c.alu = AluOp::Shl;
                    c.shift_type = ShiftType::Logical;
                }
                (funct3::SRL_SRA, funct7::DEFAULT) => {
                    c.alu = AluOp::Shr;
                    c.shift_type = ShiftType::Logical;
                }
                (funct3::SRL_SRA, funct7::ALT) => {
                    c.alu = AluOp::Shr;
                    c.shift_type = ShiftType::Arithmetic;
                }
                (funct3::SLL, _) | (funct3::SRL_SRA, _) => return Decoded::Illegal,
                (funct3::ADD_SUB, _) => c.alu = AluOp::Add,
                (funct3::SLT, _) => c.alu = AluOp::Cmp,
                (funct3::SLTU, _) => c.alu = AluOp::Cmpu,
                (funct3::XOR, _) => c.alu = AluOp::Xor,
                (funct3::OR, _) => c.alu = AluOp::Or,
                (funct3::AND, _) => c.alu = AluOp::And,
                _ => return Decoded::Illegal,
            }
            // Shifts carry only the 5-bit shamt.
            let operand = if c.shift_type == ShiftType::None {
                imm(Format::I, inst)
            } else {
                rs2 as i32
            };
            datapath(c, rs1, 0, operand)
        }
        OP_REG => {
            c.reg_write = true;
            c.b_src = OpBSrc::Rs2;
            let (alu, shift_type, negate_b) = match (f3, f7) {
                (funct3::ADD_SUB, funct7::DEFAULT) => (AluOp::Add, ShiftType::None, false),
                (funct3::ADD_SUB, funct7::ALT) => (AluOp::Add, ShiftType::None, true),
                (funct3::SLL, funct7::DEFAULT) => (AluOp::Shl, ShiftType::Logical, false),
                (funct3::SLT, funct7::DEFAULT) => (AluOp::Cmp, ShiftType::None, false),
                (funct3::SLTU, funct7::DEFAULT) => (AluOp::Cmpu, ShiftType::None, false),
                (funct3::XOR, funct7::DEFAULT) => (AluOp::Xor, ShiftType::None, false),
                (funct3::SRL_SRA, funct7::DEFAULT) => (AluOp::Shr, ShiftType::Logical, false),
                (funct3::SRL_SRA, funct7::ALT) => (AluOp::Shr, ShiftType::Arithmetic, false),
                (funct3::OR, funct7::DEFAULT) => (AluOp::Or, ShiftType::None, false),
                (funct3::AND, funct7::DEFAULT) => (AluOp::And, ShiftType::None, false),
                _ => return Decoded::Illegal,
            };
            c.alu = alu;
            c.shift_type = shift_type;
            c.negate_b = negate_b;
            datapath(c, rs1, rs2, 0)
        }
        OP_MISC_MEM => match f3 {
            funct3::FENCE | funct3::FENCE_I => Decoded::System(SystemOp::Nop),
            _ => Decoded::Illegal,
        },
        OP_SYSTEM => decode_system(inst),
        _ => Decoded::Illegal,
    }
}

fn decode_system(inst: u32) -> Decoded {
    let (op, source) = match inst.funct3() {
        sys_ops::PRIV => {
            return match inst {
                sys_ops::ECALL => Decoded::System(SystemOp::Ecall),
                sys_ops::EBREAK => Decoded::System(SystemOp::Ebreak),
                sys_ops::MRET => Decoded::System(SystemOp::Mret),
                sys_ops::WFI => Decoded::System(SystemOp::Nop),
                _ => Decoded::Illegal,
            };
        }
        sys_ops::CSRRW => (CsrOp::Write, CsrSource::Reg(inst.rs1())),
        sys_ops::CSRRS => (CsrOp::Set, CsrSource::Reg(inst.rs1())),
        sys_ops::CSRRC => (CsrOp::Clear, CsrSource::Reg(inst.rs1())),
        sys_ops::CSRRWI => (CsrOp::Write, CsrSource::Imm(inst.rs1() as u32)),
        sys_ops::CSRRSI => (CsrOp::Set, CsrSource::Imm(inst.rs1() as u32)),
        sys_ops::CSRRCI => (CsrOp::Clear, CsrSource::Imm(inst.rs1() as u32)),
        _ => return Decoded::Illegal,
    };
    Decoded::Csr(CsrAccess {
        op,
        rd: inst.rd(),
        source,
        addr: inst.csr(),
    })
}

/// Decodes the fetched instruction and reads its source registers.
///
/// # Returns
///
/// The decode latch, or an illegal-instruction trap.
pub fn decode_stage(cpu: &Cpu, if_id: &IfId) -> Result<IdEx, Trap> {
    let decoded = decode(if_id.inst);

    if cpu.trace {
        trace!("ID  pc={:#x} {}", if_id.pc, disassemble(if_id.inst));
    }

    if decoded.is_illegal() {
        return Err(Trap::IllegalInstruction(if_id.inst));
    }

    let rs2 = match decoded {
        Decoded::Datapath { operands, .. } => operands.rs2,
        _ => 0,
    };

    Ok(IdEx {
        pc: if_id.pc,
        inst: if_id.inst,
        decoded,
        rv1: cpu.regs.read(decoded.rs1()),
        rv2: cpu.regs.read(rs2),
    })
}
