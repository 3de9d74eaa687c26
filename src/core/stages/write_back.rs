use log::trace;

use crate::core::latches::{InstClass, MemWb};
use crate::core::Cpu;

/// Commits a completed instruction.
///
/// Applies the register write, the staged store and CSR update, performs
/// `mret`, moves the pc and counts the instruction as retired.
pub fn wb_stage(cpu: &mut Cpu, wb: &MemWb) {
    cpu.trap_ctl.retire();
    cpu.stats.instructions_retired += 1;
    match wb.class {
        InstClass::Alu => cpu.stats.inst_alu += 1,
        InstClass::Load => cpu.stats.inst_load += 1,
        InstClass::Store => cpu.stats.inst_store += 1,
        InstClass::Branch => cpu.stats.inst_branch += 1,
        InstClass::Jump => cpu.stats.inst_jump += 1,
        InstClass::Csr => cpu.stats.inst_csr += 1,
        InstClass::System => cpu.stats.inst_system += 1,
    }

    if wb.reg_write {
        if cpu.trace {
            trace!("WB  pc={:#x} x{} <= {:#x}", wb.pc, wb.rd, wb.value);
        }
        cpu.regs.write(wb.rd, wb.value);
    } else if cpu.trace {
        trace!("WB  pc={:#x}", wb.pc);
    }

    if let Some(store) = wb.store {
        cpu.mem.store(store.addr, store.width, store.data);
    }

    if let Some(write) = wb.csr_write {
        cpu.trap_ctl.csrs.write(write.addr, write.value);
    }

    if wb.mret {
        cpu.trap_ctl.mret();
    }

    cpu.pc = wb.next_pc;
}
