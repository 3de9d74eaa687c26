//! RISC-V architecture-specific components.
//!
//! This module contains the architectural state of the core: the
//! machine-mode control and status registers, the register file and the
//! trap controller that owns privileged state.

/// Control and Status Register (CSR) definitions and access logic.
pub mod csr;

/// General-Purpose Register file implementation.
pub mod gpr;

/// Trap entry, `mret` and interrupt arbitration.
pub mod trap;
