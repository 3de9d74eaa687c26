//! CPU core implementation.
//!
//! Architectural state, the control-signal vocabulary, execution units, the
//! per-instruction stages and the cycle-stepped `Cpu` that drives them.

/// Register file, CSR file and trap controller.
pub mod arch;

/// Control signals produced by the decoder.
pub mod control;

/// The core and its test harness surface.
pub mod cpu;

/// Stage-to-stage latches.
pub mod latches;

/// Fetch, decode, execute, memory access and write back.
pub mod stages;

/// ALU, extension unit and alignment checks.
pub mod units;

pub use cpu::Cpu;
