//! Global Constants.
//!
//! System-wide constants shared by the decoder, the trap controller and the
//! core harness.

/// Set in `mcause` when the trap is an interrupt.
pub const CAUSE_INTERRUPT_BIT: u32 = 1 << 31;

/// Size of every RV32I instruction in bytes.
pub const INSTRUCTION_SIZE: u32 = 4;

/// Number of general-purpose registers.
pub const NUM_REGS: usize = 32;

/// Canonical NOP (`addi x0, x0, 0`).
pub const NOP: u32 = 0x0000_0013;

/// Default size of the instruction ROM mapped at address zero.
pub const DEFAULT_ROM_SIZE: usize = 4096;

/// Default base address of data RAM.
pub const DEFAULT_RAM_BASE: u32 = 0x1000;

/// Default size of data RAM (RAM plus peripheral window).
pub const DEFAULT_RAM_SIZE: usize = 8208;

/// Default trap vector.
pub const DEFAULT_TRAP_VECTOR: u32 = 0;
