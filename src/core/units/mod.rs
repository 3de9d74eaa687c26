//! Execution units.

/// Integer ALU.
pub mod alu;

/// Sub-word load extension.
pub mod ext;

/// Alignment checks for memory and control-flow targets.
pub mod lsu;
