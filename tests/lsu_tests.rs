//! Load extension and alignment tests.

use rv32_control::common::data::AccessType;
use rv32_control::common::error::Trap;
use rv32_control::core::control::MemWidth;
use rv32_control::core::units::ext::extend;
use rv32_control::core::units::lsu::Lsu;

/// Tests that an unsigned byte ignores the upper bits.
#[test]
fn test_extend_byte_unsigned() {
    assert_eq!(extend(0x8001, MemWidth::Byte, false), 1);
    assert_eq!(extend(0x80, MemWidth::Byte, false), 0x80);
}

/// Tests that a word passes through unchanged.
#[test]
fn test_extend_word() {
    assert_eq!(extend(0x8001, MemWidth::Word, false), 0x8001);
    assert_eq!(extend(0xFFFF_FFFF, MemWidth::Word, true), 0xFFFF_FFFF);
}

/// Tests signed half-word extension.
#[test]
fn test_extend_half_signed() {
    assert_eq!(extend(0xFFFF, MemWidth::Half, true) as i32, -1);
    assert_eq!(extend(0x7FFF, MemWidth::Half, true), 0x7FFF);
    assert_eq!(extend(0xFFFF, MemWidth::Half, false), 0xFFFF);
}

/// Tests signed byte extension.
#[test]
fn test_extend_byte_signed() {
    assert_eq!(extend(0x80, MemWidth::Byte, true), 0xFFFF_FF80);
    assert_eq!(extend(0x1234_567F, MemWidth::Byte, true), 0x7F);
}

/// Tests alignment requirements per width.
#[test]
fn test_alignment_per_width() {
    assert!(Lsu::check_alignment(3, MemWidth::Byte, AccessType::Read).is_ok());
    assert!(Lsu::check_alignment(2, MemWidth::Half, AccessType::Read).is_ok());
    assert!(Lsu::check_alignment(8, MemWidth::Word, AccessType::Read).is_ok());
    assert_eq!(
        Lsu::check_alignment(1, MemWidth::Half, AccessType::Read),
        Err(Trap::LoadAddressMisaligned(1))
    );
}

/// Tests that the access kind selects the misalignment cause.
#[test]
fn test_alignment_cause_by_access() {
    assert_eq!(
        Lsu::check_alignment(2, MemWidth::Word, AccessType::Fetch),
        Err(Trap::InstructionAddressMisaligned(2))
    );
    assert_eq!(
        Lsu::check_alignment(6, MemWidth::Word, AccessType::Write),
        Err(Trap::StoreAddressMisaligned(6))
    );
}
