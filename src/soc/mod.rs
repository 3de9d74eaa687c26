//! System-on-Chip components.

/// Instruction ROM and data RAM.
pub mod memory;

pub use memory::Memory;
