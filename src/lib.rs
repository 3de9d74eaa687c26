//! RV32I Decode and Trap Control Unit.
//!
//! This crate implements the control path of a machine-mode RV32I core: the
//! instruction codec, the decoder that turns instruction words into control
//! signals, the load extension unit, and the trap and CSR controller that
//! handles faults, interrupts and `mret`. A small cycle-stepped core drives
//! them so the whole contract can be exercised end to end.
//!
//! # Architecture
//!
//! * **Core**: single-issue; one instruction is fetched, decoded, executed
//!   and either committed or discarded per clock.
//! * **Traps**: synchronous faults beat interrupts; interrupts are arbitrated
//!   external > software > timer and preempt the uncommitted instruction.
//! * **Memory**: instruction ROM at address 0 plus a data RAM window.
//!
//! # Modules
//!
//! * `common`: Trap and error types, constants.
//! * `config`: Configuration loading and parsing.
//! * `core`: CPU core implementation.
//! * `isa`: Instruction Set Architecture definitions.
//! * `sim`: Firmware loading.
//! * `soc`: Memory map.
//! * `stats`: Run statistics.

/// Shared trap and error types and constants.
pub mod common;

/// TOML configuration for memory layout, trap vector and tracing.
pub mod config;

/// Decoder, control signals, execution units, CSRs, trap controller and the
/// cycle-stepped core.
pub mod core;

/// RV32I opcode tables, the instruction codec, assembler helpers and the
/// disassembler.
pub mod isa;

/// Firmware image loading.
pub mod sim;

/// Instruction ROM and data RAM.
pub mod soc;

/// Run statistics.
pub mod stats;
