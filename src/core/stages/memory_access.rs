use log::trace;

use crate::common::constants::INSTRUCTION_SIZE;
use crate::common::data::AccessType;
use crate::common::error::Trap;
use crate::core::control::WbSrc;
use crate::core::latches::{ExMem, MemWb, Store};
use crate::core::units::ext::extend;
use crate::core::units::lsu::Lsu;
use crate::core::Cpu;

/// Performs the load or checks the store of the executing instruction.
///
/// Loads read memory here, which has no side effects. Stores are only
/// validated and staged; write back applies them.
pub fn mem_stage(cpu: &Cpu, ex: &ExMem) -> Result<MemWb, Trap> {
    let addr = ex.alu;
    let mut load_data = 0;
    let mut store = None;

    if ex.is_load() {
        Lsu::check_alignment(addr, ex.width, AccessType::Read)?;
        let raw = cpu
            .mem
            .load(addr, ex.width)
            .ok_or_else(|| AccessType::Read.access_fault(addr))?;
        load_data = extend(raw, ex.width, ex.signed_load);

        if cpu.trace {
            trace!("MEM pc={:#x} LOAD addr={:#x} data={:#x}", ex.pc, addr, load_data);
        }
    } else if ex.mem_write {
        Lsu::check_alignment(addr, ex.width, AccessType::Write)?;
        if !cpu.mem.is_writable(addr, ex.width) {
            return Err(AccessType::Write.access_fault(addr));
        }
        store = Some(Store {
            addr,
            width: ex.width,
            data: ex.store_data,
        });

        if cpu.trace {
            trace!(
                "MEM pc={:#x} STORE addr={:#x} data={:#x}",
                ex.pc,
                addr,
                ex.store_data
            );
        }
    }

    let value = match ex.wb_src {
        WbSrc::Alu => ex.alu,
        WbSrc::Mem => load_data,
        WbSrc::Pc => ex.pc.wrapping_add(INSTRUCTION_SIZE),
    };

    Ok(MemWb {
        pc: ex.pc,
        inst: ex.inst,
        rd: ex.rd,
        reg_write: ex.reg_write,
        value,
        store,
        next_pc: ex.next_pc,
        csr_write: ex.csr_write,
        mret: ex.mret,
        class: ex.class,
    })
}
