//! Memory Access Types.
//!
//! This module defines the classification of memory accesses used by the
//! alignment checker and the memory collaborator. The access kind decides
//! which misalignment or access-fault cause a failed access reports.

use crate::common::error::Trap;

/// Type of memory access operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessType {
    /// Instruction fetch, or the target of a taken jump or branch.
    Fetch,

    /// Data read access (loads).
    Read,

    /// Data write access (stores).
    Write,
}

impl AccessType {
    /// Trap reported when an access of this kind is misaligned.
    pub fn misaligned(self, addr: u32) -> Trap {
        match self {
            AccessType::Fetch => Trap::InstructionAddressMisaligned(addr),
            AccessType::Read => Trap::LoadAddressMisaligned(addr),
            AccessType::Write => Trap::StoreAddressMisaligned(addr),
        }
    }

    /// Trap reported when an access of this kind hits unmapped memory.
    pub fn access_fault(self, addr: u32) -> Trap {
        match self {
            AccessType::Fetch => Trap::InstructionAccessFault(addr),
            AccessType::Read => Trap::LoadAccessFault(addr),
            AccessType::Write => Trap::StoreAccessFault(addr),
        }
    }
}
