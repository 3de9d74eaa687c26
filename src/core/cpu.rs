//! The Cycle-Stepped Core.
//!
//! `Cpu` ties the stages, the register file, memory and the trap controller
//! together. Each [`Cpu::tick`] is one clock: the lines are sampled, the
//! instruction at `pc` runs through every stage, and the result is either
//! committed or dropped in favour of a trap.

use log::{debug, trace};

use crate::common::error::{LoaderError, Trap};
use crate::config::Config;
use crate::core::arch::csr;
use crate::core::arch::gpr::Gpr;
use crate::core::arch::trap::{ControllerState, TrapController};
use crate::core::control::MemWidth;
use crate::core::latches::MemWb;
use crate::core::stages;
use crate::sim::loader;
use crate::soc::memory::Memory;
use crate::stats::SimStats;

pub struct Cpu {
    pub regs: Gpr,
    pub pc: u32,
    pub trace: bool,
    pub mem: Memory,
    pub trap_ctl: TrapController,
    pub stats: SimStats,
}

impl Cpu {
    pub fn new(config: &Config) -> Self {
        Self {
            regs: Gpr::new(),
            pc: config.general.start_pc_val(),
            trace: config.general.trace_instructions || cfg!(feature = "always-trace"),
            mem: Memory::from_config(&config.memory),
            trap_ctl: TrapController::new(config.trap.vector_val()),
            stats: SimStats::default(),
        }
    }

    /// Advances the core by one clock.
    ///
    /// A fault raised by the current instruction is taken first. Otherwise
    /// an enabled pending interrupt preempts the instruction before it
    /// commits. Otherwise the instruction retires.
    ///
    /// # Returns
    ///
    /// The trap taken this cycle, if any.
    pub fn tick(&mut self) -> Option<Trap> {
        self.trap_ctl.sample();

        let taken = match self.evaluate() {
            Err(fault) => Some(fault),
            Ok(wb) => match self.trap_ctl.pending_interrupt() {
                Some(irq) => {
                    if self.trace {
                        trace!("discarding pc={:#x} for {}", wb.pc, irq);
                    }
                    Some(irq)
                }
                None => {
                    stages::write_back::wb_stage(self, &wb);
                    None
                }
            },
        };

        if let Some(trap) = taken {
            self.take_trap(trap);
        }

        self.trap_ctl.tick();
        self.stats.cycles += 1;
        taken
    }

    /// Alias of [`Cpu::tick`].
    pub fn step(&mut self) -> Option<Trap> {
        self.tick()
    }

    /// Runs the instruction at `pc` through every stage without committing.
    fn evaluate(&self) -> Result<MemWb, Trap> {
        let if_id = stages::fetch::fetch_stage(self)?;
        let id_ex = stages::decode::decode_stage(self, &if_id)?;
        let ex_mem = stages::execute::execute_stage(self, &id_ex)?;
        stages::memory_access::mem_stage(self, &ex_mem)
    }

    fn take_trap(&mut self, trap: Trap) {
        let record = self.trap_ctl.enter(trap, self.pc);
        if trap.is_interrupt() {
            self.stats.interrupts_taken += 1;
        } else {
            self.stats.traps_taken += 1;
        }
        self.pc = record.vector;
    }

    /// Ticks `cycles` times.
    pub fn run(&mut self, cycles: u64) {
        for _ in 0..cycles {
            self.tick();
        }
    }

    /// Ticks until `pc` equals `target` or `bound` cycles have elapsed.
    ///
    /// # Returns
    ///
    /// `true` if the target was reached.
    pub fn run_until_pc(&mut self, target: u32, bound: u64) -> bool {
        for _ in 0..bound {
            if self.pc == target {
                return true;
            }
            self.tick();
        }
        self.pc == target
    }

    /// Reads `x[idx & 31]`.
    pub fn reg(&self, idx: usize) -> u32 {
        self.regs.read(idx)
    }

    /// Writes `x[idx & 31]`; writes to x0 are dropped.
    pub fn set_reg(&mut self, idx: usize, val: u32) {
        self.regs.write(idx, val);
    }

    pub fn pc(&self) -> u32 {
        self.pc
    }

    pub fn mcause(&self) -> u32 {
        self.trap_ctl.csrs.mcause
    }

    pub fn mtval(&self) -> u32 {
        self.trap_ctl.csrs.mtval
    }

    pub fn mepc(&self) -> u32 {
        self.trap_ctl.csrs.mepc
    }

    pub fn mstatus(&self) -> u32 {
        self.trap_ctl.csrs.mstatus
    }

    /// Sets `mstatus`; only MIE and MPIE are kept.
    pub fn set_mstatus(&mut self, val: u32) {
        self.trap_ctl.csrs.write(csr::MSTATUS, val);
    }

    pub fn mie(&self) -> u32 {
        self.trap_ctl.csrs.mie
    }

    pub fn set_mie(&mut self, val: u32) {
        self.trap_ctl.csrs.write(csr::MIE, val);
    }

    pub fn mip(&self) -> u32 {
        self.trap_ctl.csrs.mip
    }

    pub fn mscratch(&self) -> u32 {
        self.trap_ctl.csrs.mscratch
    }

    pub fn cycle_count(&self) -> u64 {
        self.trap_ctl.csrs.cycle
    }

    pub fn instret(&self) -> u64 {
        self.trap_ctl.csrs.instret
    }

    pub fn trap_state(&self) -> ControllerState {
        self.trap_ctl.state()
    }

    /// Stores instruction words into the ROM starting at byte address `base`.
    pub fn write_imem(&mut self, base: u32, words: &[u32]) {
        for (i, &word) in words.iter().enumerate() {
            let addr = base.wrapping_add(4 * i as u32);
            if !self.mem.write_rom(addr, word) {
                debug!("write_imem: {:#x} is outside the ROM", addr);
            }
        }
    }

    /// Stores a word into data memory.
    pub fn write_ram(&mut self, addr: u32, word: u32) -> bool {
        self.mem.store(addr, MemWidth::Word, word)
    }

    /// Reads a word from memory, `None` when unmapped.
    pub fn read_ram(&self, addr: u32) -> Option<u32> {
        self.mem.load(addr, MemWidth::Word)
    }

    pub fn set_irq_timer(&mut self, level: bool) {
        self.trap_ctl.lines.timer = level;
    }

    pub fn set_irq_software(&mut self, level: bool) {
        self.trap_ctl.lines.software = level;
    }

    pub fn set_irq_external(&mut self, level: bool) {
        self.trap_ctl.lines.external = level;
    }

    /// Loads a raw firmware image into the ROM.
    pub fn load_firmware(&mut self, path: &str) -> Result<usize, LoaderError> {
        let image = loader::load_binary(path)?;
        self.mem.load_rom(&image)?;
        debug!("loaded {} bytes from {}", image.len(), path);
        Ok(image.len())
    }

    pub fn dump_state(&self) {
        println!("PC = {:#010x}", self.pc);
        self.regs.dump();
        println!(
            "mstatus={:#010x} mie={:#010x} mip={:#010x} mcause={:#010x} mtval={:#010x} mepc={:#010x}",
            self.mstatus(),
            self.mie(),
            self.mip(),
            self.mcause(),
            self.mtval(),
            self.mepc()
        );
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
