//! Test module organization.
//!
//! This module organizes all integration tests for the RV32I control unit.


/// Register file and trap controller tests.
mod arch_tests;

/// Trap type and configuration tests.
mod common_tests;

/// CSR file tests.
mod csr_tests;



/// Instruction encoding, field extraction and disassembly tests.
mod isa_tests;

/// Load extension and alignment tests.
mod lsu_tests;
