//! Trap and Error Definitions.
//!
//! This module defines the `Trap` type, the architectural outcome of an
//! instruction that cannot retire (synchronous exceptions) or of an accepted
//! interrupt, together with the host-side error types returned by the
//! configuration and firmware loading paths.

use thiserror::Error;

use crate::common::constants::CAUSE_INTERRUPT_BIT;

/// Machine-mode trap causes.
///
/// Exceptions carry the value later written to `mtval` (a faulting address)
/// or, for illegal instructions, the offending instruction word kept for
/// diagnostics only. Interrupts carry nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Trap {
    /// Fetch or jump target not aligned to four bytes (cause 0).
    #[error("instruction address misaligned: {0:#010x}")]
    InstructionAddressMisaligned(u32),

    /// Fetch outside mapped instruction memory (cause 1).
    #[error("instruction access fault: {0:#010x}")]
    InstructionAccessFault(u32),

    /// Unrecognised or reserved encoding (cause 2).
    #[error("illegal instruction: {0:#010x}")]
    IllegalInstruction(u32),

    /// EBREAK executed at the given pc (cause 3).
    #[error("breakpoint at {0:#010x}")]
    Breakpoint(u32),

    /// Load address not aligned to the access width (cause 4).
    #[error("load address misaligned: {0:#010x}")]
    LoadAddressMisaligned(u32),

    /// Load outside mapped memory (cause 5).
    #[error("load access fault: {0:#010x}")]
    LoadAccessFault(u32),

    /// Store address not aligned to the access width (cause 6).
    #[error("store address misaligned: {0:#010x}")]
    StoreAddressMisaligned(u32),

    /// Store outside mapped memory (cause 7).
    #[error("store access fault: {0:#010x}")]
    StoreAccessFault(u32),

    /// ECALL executed in machine mode (cause 11).
    #[error("environment call from M-mode")]
    EnvironmentCallFromMMode,

    /// Machine software interrupt (interrupt code 3).
    #[error("machine software interrupt")]
    MachineSoftwareInterrupt,

    /// Machine timer interrupt (interrupt code 7).
    #[error("machine timer interrupt")]
    MachineTimerInterrupt,

    /// Machine external interrupt (interrupt code 11).
    #[error("machine external interrupt")]
    MachineExternalInterrupt,
}

impl Trap {
    /// Returns `true` for asynchronous interrupts.
    pub fn is_interrupt(&self) -> bool {
        matches!(
            self,
            Trap::MachineSoftwareInterrupt
                | Trap::MachineTimerInterrupt
                | Trap::MachineExternalInterrupt
        )
    }

    /// Exception or interrupt code, without the interrupt bit.
    pub fn code(&self) -> u32 {
        match self {
            Trap::InstructionAddressMisaligned(_) => 0,
            Trap::InstructionAccessFault(_) => 1,
            Trap::IllegalInstruction(_) => 2,
            Trap::Breakpoint(_) => 3,
            Trap::LoadAddressMisaligned(_) => 4,
            Trap::LoadAccessFault(_) => 5,
            Trap::StoreAddressMisaligned(_) => 6,
            Trap::StoreAccessFault(_) => 7,
            Trap::EnvironmentCallFromMMode => 11,
            Trap::MachineSoftwareInterrupt => 3,
            Trap::MachineTimerInterrupt => 7,
            Trap::MachineExternalInterrupt => 11,
        }
    }

    /// Value written to `mcause` on trap entry.
    pub fn cause(&self) -> u32 {
        if self.is_interrupt() {
            CAUSE_INTERRUPT_BIT | self.code()
        } else {
            self.code()
        }
    }

    /// Value written to `mtval` on trap entry.
    ///
    /// Address faults report the offending address, a breakpoint reports its
    /// pc, everything else reports zero.
    pub fn tval(&self) -> u32 {
        match *self {
            Trap::InstructionAddressMisaligned(addr)
            | Trap::InstructionAccessFault(addr)
            | Trap::Breakpoint(addr)
            | Trap::LoadAddressMisaligned(addr)
            | Trap::LoadAccessFault(addr)
            | Trap::StoreAddressMisaligned(addr)
            | Trap::StoreAccessFault(addr) => addr,
            _ => 0,
        }
    }
}

/// Errors raised while reading or parsing a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("ROM of {rom_size} bytes overlaps RAM at {ram_base:#x}")]
    Overlap { rom_size: usize, ram_base: u32 },
}

/// Errors raised while loading a firmware image.
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("could not read image {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("image of {size} bytes does not fit in {capacity} bytes of memory")]
    TooLarge { size: usize, capacity: usize },
}
