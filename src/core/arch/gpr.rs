//! RISC-V General-Purpose Register File.
//!
//! This module implements the General-Purpose Register (GPR) file, containing
//! 32 registers (x0-x31). Register x0 always reads as zero.

use crate::common::constants::NUM_REGS;

const REG_MASK: usize = NUM_REGS - 1;

/// General-Purpose Register file.
///
/// Contains 32 general-purpose 32-bit registers. Writes to x0 are dropped.
#[derive(Clone, Debug, Default)]
pub struct Gpr {
    regs: [u32; NUM_REGS],
}

impl Gpr {
    /// Creates a register file with every register cleared.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index; only the low five bits are used
    ///
    /// # Returns
    ///
    /// The stored value, or 0 for x0.
    pub fn read(&self, idx: usize) -> u32 {
        match idx & REG_MASK {
            0 => 0,
            i => self.regs[i],
        }
    }

    /// Writes a value to a general-purpose register.
    ///
    /// Only the low five bits of `idx` are used. Writes to x0 are silently
    /// ignored.
    pub fn write(&mut self, idx: usize, val: u32) {
        match idx & REG_MASK {
            0 => {}
            i => self.regs[i] = val,
        }
    }

    /// Dumps the contents of all general-purpose registers to stdout.
    ///
    /// Four registers per line, hexadecimal.
    pub fn dump(&self) {
        for i in (0..NUM_REGS).step_by(4) {
            println!(
                "x{:<2}={:#010x} x{:<2}={:#010x} x{:<2}={:#010x} x{:<2}={:#010x}",
                i,
                self.read(i),
                i + 1,
                self.regs[i + 1],
                i + 2,
                self.regs[i + 2],
                i + 3,
                self.regs[i + 3]
            );
        }
    }
}
