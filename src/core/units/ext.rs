//! Load Data Extension Unit.
//!
//! Sign- or zero-extends sub-word load data to 32 bits.

use crate::core::control::MemWidth;

/// Extends raw load data.
///
/// `Word` passes `data` through. `Byte` and `Half` keep the low 8 or 16 bits
/// and sign-extend them when `signed` is set, zero-extend otherwise. `Nop`
/// yields zero.
pub fn extend(data: u32, width: MemWidth, signed: bool) -> u32 {
    match (width, signed) {
        (MemWidth::Word, _) => data,
        (MemWidth::Half, true) => data as u16 as i16 as i32 as u32,
        (MemWidth::Half, false) => data as u16 as u32,
        (MemWidth::Byte, true) => data as u8 as i8 as i32 as u32,
        (MemWidth::Byte, false) => data as u8 as u32,
        (MemWidth::Nop, _) => 0,
    }
}
