use log::trace;

use crate::common::data::AccessType;
use crate::common::error::Trap;
use crate::core::control::MemWidth;
use crate::core::latches::IfId;
use crate::core::units::lsu::Lsu;
use crate::core::Cpu;

pub fn fetch_stage(cpu: &Cpu) -> Result<IfId, Trap> {
    let pc = cpu.pc;
    Lsu::check_alignment(pc, MemWidth::Word, AccessType::Fetch)?;

    let inst = cpu
        .mem
        .fetch(pc)
        .ok_or_else(|| AccessType::Fetch.access_fault(pc))?;

    if cpu.trace {
        trace!("IF  pc={:#x} inst={:#010x}", pc, inst);
    }

    Ok(IfId { pc, inst })
}
