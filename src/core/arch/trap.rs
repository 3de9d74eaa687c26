//! Trap and Interrupt Controller.
//!
//! Owns the machine-mode CSR file and the three interrupt request lines.
//! Each cycle the core samples the lines into `mip`, asks for a pending
//! interrupt, and on a fault or accepted interrupt hands the trap to
//! [`TrapController::enter`], which performs the whole entry sequence at
//! once. `mret` reverses it.

use log::debug;

use crate::common::error::Trap;
use crate::core::arch::csr::{self, Csrs};

/// Level-sensitive interrupt request lines driven from outside the core.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InterruptLines {
    pub timer: bool,
    pub software: bool,
    pub external: bool,
}

impl InterruptLines {
    /// The lines as `mip` bits.
    pub fn as_mip(&self) -> u32 {
        let mut mip = 0;
        if self.software {
            mip |= csr::MIP_MSIP;
        }
        if self.timer {
            mip |= csr::MIP_MTIP;
        }
        if self.external {
            mip |= csr::MIP_MEIP;
        }
        mip
    }
}

/// Controller state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ControllerState {
    /// Executing ordinary code.
    #[default]
    Normal,
    /// A trap has been entered and not yet returned from with `mret`.
    TrapEntry,
}

/// Values committed by a trap entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrapRecord {
    pub cause: u32,
    pub tval: u32,
    /// Address of the faulting or interrupted instruction.
    pub epc: u32,
    /// Where fetch resumes.
    pub vector: u32,
}

/// Interrupt sources in arbitration order.
const PRIORITY: [(u32, Trap); 3] = [
    (csr::MIP_MEIP, Trap::MachineExternalInterrupt),
    (csr::MIP_MSIP, Trap::MachineSoftwareInterrupt),
    (csr::MIP_MTIP, Trap::MachineTimerInterrupt),
];

pub struct TrapController {
    pub csrs: Csrs,
    pub lines: InterruptLines,
    state: ControllerState,
    vector: u32,
}

impl TrapController {
    /// Creates a controller that vectors every trap to `vector`.
    pub fn new(vector: u32) -> Self {
        Self {
            csrs: Csrs::new(),
            lines: InterruptLines::default(),
            state: ControllerState::Normal,
            vector,
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn vector(&self) -> u32 {
        self.vector
    }

    /// Latches the interrupt lines into `mip`.
    pub fn sample(&mut self) {
        self.csrs.mip = self.lines.as_mip();
    }

    /// Highest-priority interrupt that is pending, enabled and globally
    /// unmasked, if any.
    pub fn pending_interrupt(&self) -> Option<Trap> {
        if self.csrs.mstatus & csr::MSTATUS_MIE == 0 {
            return None;
        }
        let ready = self.csrs.mip & self.csrs.mie;
        PRIORITY
            .iter()
            .find(|(bit, _)| ready & bit != 0)
            .map(|&(_, trap)| trap)
    }

    /// Enters the trap handler.
    ///
    /// Writes `mcause`, `mtval` and `mepc`, moves `MIE` into `MPIE` and
    /// clears `MIE`.
    ///
    /// # Arguments
    ///
    /// * `trap` - The fault or interrupt being taken
    /// * `epc` - Address of the instruction that did not retire
    pub fn enter(&mut self, trap: Trap, epc: u32) -> TrapRecord {
        let record = TrapRecord {
            cause: trap.cause(),
            tval: trap.tval(),
            epc,
            vector: self.vector,
        };

        self.csrs.mcause = record.cause;
        self.csrs.mtval = record.tval;
        self.csrs.mepc = epc;

        let mut mstatus = self.csrs.mstatus;
        if mstatus & csr::MSTATUS_MIE != 0 {
            mstatus |= csr::MSTATUS_MPIE;
        } else {
            mstatus &= !csr::MSTATUS_MPIE;
        }
        mstatus &= !csr::MSTATUS_MIE;
        self.csrs.mstatus = mstatus;

        self.state = ControllerState::TrapEntry;
        debug!(
            "trap: {} mcause={:#010x} mtval={:#x} mepc={:#x}",
            trap, record.cause, record.tval, epc
        );
        record
    }

    /// Returns from a trap handler.
    ///
    /// Restores `MIE` from `MPIE`, sets `MPIE` and returns the address in
    /// `mepc` to resume at.
    pub fn mret(&mut self) -> u32 {
        let mut mstatus = self.csrs.mstatus;
        if mstatus & csr::MSTATUS_MPIE != 0 {
            mstatus |= csr::MSTATUS_MIE;
        } else {
            mstatus &= !csr::MSTATUS_MIE;
        }
        mstatus |= csr::MSTATUS_MPIE;
        self.csrs.mstatus = mstatus;

        self.state = ControllerState::Normal;
        debug!("mret to {:#x}", self.csrs.mepc);
        self.csrs.mepc
    }

    /// Advances the cycle counter. Called once per clock.
    pub fn tick(&mut self) {
        self.csrs.cycle = self.csrs.cycle.wrapping_add(1);
    }

    /// Counts one retired instruction.
    pub fn retire(&mut self) {
        self.csrs.instret = self.csrs.instret.wrapping_add(1);
    }
}

impl Default for TrapController {
    fn default() -> Self {
        Self::new(0)
    }
}
