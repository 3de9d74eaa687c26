//! Per-instruction stages.
//!
//! Every stage but write back is free of side effects and returns the next
//! latch or the trap the instruction raised.

/// Instruction decode and register read.
pub mod decode;

/// ALU, branch resolution and CSR read-modify-write.
pub mod execute;

/// Instruction fetch.
pub mod fetch;

/// Loads and store validation.
pub mod memory_access;

/// Commit.
pub mod write_back;
