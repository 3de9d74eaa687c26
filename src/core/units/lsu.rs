//! Load/Store Unit (LSU) Helpers.
//!
//! Alignment checking for fetches, jump targets, loads and stores. The
//! access kind selects which misalignment cause is reported.

use crate::common::data::AccessType;
use crate::common::error::Trap;
use crate::core::control::MemWidth;

/// Load/Store Unit address checks.
pub struct Lsu;

impl Lsu {
    /// Checks that `addr` is aligned to `width`.
    ///
    /// # Returns
    ///
    /// `Ok(())` when aligned, otherwise the misalignment trap for `access`
    /// carrying `addr`.
    pub fn check_alignment(addr: u32, width: MemWidth, access: AccessType) -> Result<(), Trap> {
        let align_mask = match width {
            MemWidth::Nop | MemWidth::Byte => 0,
            MemWidth::Half => 1,
            MemWidth::Word => 3,
        };
        if addr & align_mask != 0 {
            Err(access.misaligned(addr))
        } else {
            Ok(())
        }
    }
}
