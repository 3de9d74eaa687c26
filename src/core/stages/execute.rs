use log::trace;

use crate::common::constants::INSTRUCTION_SIZE;
use crate::common::data::AccessType;
use crate::common::error::Trap;
use crate::core::control::{
    ControlSignals, CsrAccess, CsrOp, CsrSource, Decoded, MemWidth, NextPc, OpASrc, OpBSrc,
    Operands, SystemOp, WbSrc,
};
use crate::core::latches::{CsrWrite, ExMem, IdEx, InstClass};
use crate::core::units::alu::Alu;
use crate::core::units::lsu::Lsu;
use crate::core::Cpu;

pub fn execute_stage(cpu: &Cpu, id_ex: &IdEx) -> Result<ExMem, Trap> {
    let ex = match id_ex.decoded {
        Decoded::Datapath { ctrl, operands } => execute_datapath(id_ex, &ctrl, &operands)?,
        Decoded::System(op) => execute_system(cpu, id_ex, op)?,
        Decoded::Csr(access) => execute_csr(cpu, id_ex, &access)?,
        Decoded::Illegal => return Err(Trap::IllegalInstruction(id_ex.inst)),
    };

    if cpu.trace {
        trace!(
            "EX  pc={:#x} res={:#x} next_pc={:#x}",
            ex.pc,
            ex.alu,
            ex.next_pc
        );
    }

    Ok(ex)
}

fn execute_datapath(id_ex: &IdEx, ctrl: &ControlSignals, ops: &Operands) -> Result<ExMem, Trap> {
    let pc = id_ex.pc;
    let fallthrough = pc.wrapping_add(INSTRUCTION_SIZE);
    let target = pc.wrapping_add(ops.imm as u32);

    let a = match ctrl.a_src {
        OpASrc::Rs1 => id_ex.rv1,
        OpASrc::Pc => pc,
    };
    let b = match ctrl.b_src {
        OpBSrc::Rs2 => id_ex.rv2,
        OpBSrc::Imm => ops.imm as u32,
    };

    let alu = Alu::execute(ctrl.alu, a, b, ctrl.negate_b, ctrl.shift_type);

    let next_pc = match ctrl.next_pc {
        NextPc::Inc => fallthrough,
        NextPc::BranchIfZero if alu == 0 => target,
        NextPc::BranchIfNonZero if alu != 0 => target,
        NextPc::BranchIfZero | NextPc::BranchIfNonZero => fallthrough,
        NextPc::AluResult => alu & !1,
    };
    Lsu::check_alignment(next_pc, MemWidth::Word, AccessType::Fetch)?;

    let class = if ctrl.mem_write {
        InstClass::Store
    } else if ctrl.wb_src == WbSrc::Mem {
        InstClass::Load
    } else if ctrl.wb_src == WbSrc::Pc {
        InstClass::Jump
    } else if ctrl.next_pc != NextPc::Inc {
        InstClass::Branch
    } else {
        InstClass::Alu
    };

    Ok(ExMem {
        pc,
        inst: id_ex.inst,
        rd: ops.rd,
        reg_write: ctrl.reg_write,
        wb_src: ctrl.wb_src,
        alu,
        store_data: id_ex.rv2,
        mem_write: ctrl.mem_write,
        width: ctrl.width,
        signed_load: ctrl.signed_load,
        next_pc,
        csr_write: None,
        mret: false,
        class,
    })
}

fn execute_system(cpu: &Cpu, id_ex: &IdEx, op: SystemOp) -> Result<ExMem, Trap> {
    let mut ex = ExMem {
        pc: id_ex.pc,
        inst: id_ex.inst,
        next_pc: id_ex.pc.wrapping_add(INSTRUCTION_SIZE),
        class: InstClass::System,
        ..Default::default()
    };

    match op {
        SystemOp::Nop => {}
        SystemOp::Ecall => return Err(Trap::EnvironmentCallFromMMode),
        SystemOp::Ebreak => return Err(Trap::Breakpoint(id_ex.pc)),
        SystemOp::Mret => {
            ex.mret = true;
            ex.next_pc = cpu.trap_ctl.csrs.mepc;
        }
    }
    Ok(ex)
}

/// Computes a CSR read-modify-write.
///
/// The old value goes to `rd`. The new value is staged for write back, and
/// set/clear forms with a zero source (x0 or immediate 0) stage nothing.
fn execute_csr(cpu: &Cpu, id_ex: &IdEx, access: &CsrAccess) -> Result<ExMem, Trap> {
    let old = cpu
        .trap_ctl
        .csrs
        .read(access.addr)
        .ok_or(Trap::IllegalInstruction(id_ex.inst))?;

    let (src, zero_source) = match access.source {
        CsrSource::Reg(rs1) => (id_ex.rv1, rs1 == 0),
        CsrSource::Imm(zimm) => (zimm, zimm == 0),
    };

    let new = match access.op {
        CsrOp::Write => Some(src),
        CsrOp::Set if !zero_source => Some(old | src),
        CsrOp::Clear if !zero_source => Some(old & !src),
        CsrOp::Set | CsrOp::Clear => None,
    };

    Ok(ExMem {
        pc: id_ex.pc,
        inst: id_ex.inst,
        rd: access.rd,
        reg_write: true,
        wb_src: WbSrc::Alu,
        alu: old,
        next_pc: id_ex.pc.wrapping_add(INSTRUCTION_SIZE),
        csr_write: new.map(|value| CsrWrite {
            addr: access.addr,
            value,
        }),
        class: InstClass::Csr,
        ..Default::default()
    })
}
