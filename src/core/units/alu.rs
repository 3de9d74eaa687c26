//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used in the Execute stage. Eight
//! operations cover every RV32I computation: SUB is ADD with `negate_b`, and
//! one comparator serves both the branch conditions and the SLT family.

use crate::core::control::{AluOp, ShiftType};

/// Bit mask for shift amounts (5 bits: 0-31).
const SHAMT_MASK: u32 = 0x1f;

/// Arithmetic Logic Unit (ALU) for integer operations.
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a` - First operand
    /// * `b` - Second operand, also the shift amount
    /// * `negate_b` - Add the two's complement of `b` instead of `b`
    /// * `shift` - Fill mode for right shifts
    ///
    /// # Returns
    ///
    /// The 32-bit result. Comparisons return 0 or 1.
    pub fn execute(op: AluOp, a: u32, b: u32, negate_b: bool, shift: ShiftType) -> u32 {
        let sh = b & SHAMT_MASK;
        match op {
            AluOp::Add => {
                if negate_b {
                    a.wrapping_add((!b).wrapping_add(1))
                } else {
                    a.wrapping_add(b)
                }
            }
            AluOp::Shl => a.wrapping_shl(sh),
            AluOp::Cmp => ((a as i32) < (b as i32)) as u32,
            AluOp::Cmpu => (a < b) as u32,
            AluOp::Xor => a ^ b,
            AluOp::Shr => match shift {
                ShiftType::Arithmetic => ((a as i32) >> sh) as u32,
                _ => a.wrapping_shr(sh),
            },
            AluOp::Or => a | b,
            AluOp::And => a & b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negate_b_subtracts() {
        assert_eq!(Alu::execute(AluOp::Add, 5, 7, true, ShiftType::None), -2i32 as u32);
    }

    #[test]
    fn shift_amount_wraps_at_32() {
        assert_eq!(Alu::execute(AluOp::Shl, 1, 33, false, ShiftType::Logical), 2);
    }
}
