//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction for the fixed instruction fields and an exact
//! encode/decode pair for the RV32I formats. Immediates of every format are
//! described by one declarative table of bit slices, so the scattered B and
//! J layouts are written down once and shared by both directions.

use crate::isa::opcodes::*;

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for a register index field.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;
/// Bit mask for extracting the CSR address field (bits 20-31).
pub const CSR_MASK: u32 = 0xFFF;

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 15-19).
    ///
    /// This is the raw field. U-type and JAL encodings reuse these bits for
    /// their immediate; the decoder gates them off for those opcodes.
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 20-24).
    fn rs2(&self) -> usize;

    /// Extracts the funct3 field (bits 12-14).
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    fn funct7(&self) -> u32;

    /// Extracts the CSR address field (bits 20-31).
    fn csr(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> 7) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> 15) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> 20) & REG_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> 12) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> 25) & FUNCT7_MASK
    }

    #[inline(always)]
    fn csr(&self) -> u32 {
        (self >> 20) & CSR_MASK
    }
}

/// One contiguous run of immediate bits and where it sits in the word.
#[derive(Clone, Copy, Debug)]
struct ImmSlice {
    /// Lowest immediate bit covered by the slice.
    imm_lo: u32,
    /// Number of bits in the slice.
    width: u32,
    /// Instruction bit receiving `imm_lo`.
    inst_lo: u32,
}

const fn slice(imm_lo: u32, width: u32, inst_lo: u32) -> ImmSlice {
    ImmSlice {
        imm_lo,
        width,
        inst_lo,
    }
}

/// imm[11:0] -> inst[31:20]
const I_IMM: &[ImmSlice] = &[slice(0, 12, 20)];

/// imm[11:5] -> inst[31:25], imm[4:0] -> inst[11:7]
const S_IMM: &[ImmSlice] = &[slice(5, 7, 25), slice(0, 5, 7)];

/// imm[12] -> inst[31], imm[10:5] -> inst[30:25], imm[4:1] -> inst[11:8], imm[11] -> inst[7]
const B_IMM: &[ImmSlice] = &[
    slice(12, 1, 31),
    slice(5, 6, 25),
    slice(1, 4, 8),
    slice(11, 1, 7),
];

/// imm[31:12] -> inst[31:12]
const U_IMM: &[ImmSlice] = &[slice(12, 20, 12)];

/// imm[20] -> inst[31], imm[10:1] -> inst[30:21], imm[11] -> inst[20], imm[19:12] -> inst[19:12]
const J_IMM: &[ImmSlice] = &[
    slice(20, 1, 31),
    slice(1, 10, 21),
    slice(11, 1, 20),
    slice(12, 8, 12),
];

#[inline]
fn low_bits(width: u32) -> u32 {
    if width >= 32 {
        u32::MAX
    } else {
        (1 << width) - 1
    }
}

fn pack_imm(map: &[ImmSlice], imm: i32) -> u32 {
    let imm = imm as u32;
    map.iter().fold(0, |word, s| {
        word | ((imm >> s.imm_lo) & low_bits(s.width)) << s.inst_lo
    })
}

fn unpack_imm(map: &[ImmSlice], sign_bit: u32, word: u32) -> i32 {
    let raw = map.iter().fold(0u32, |imm, s| {
        imm | ((word >> s.inst_lo) & low_bits(s.width)) << s.imm_lo
    });
    let shift = 31 - sign_bit;
    ((raw << shift) as i32) >> shift
}

/// RV32I instruction formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    /// Register-register: funct7 rs2 rs1 funct3 rd opcode.
    R,
    /// Immediate: imm[11:0] rs1 funct3 rd opcode.
    I,
    /// Store: imm[11:5] rs2 rs1 funct3 imm[4:0] opcode.
    S,
    /// Branch: S layout with a scrambled, even, 13-bit immediate.
    B,
    /// Upper immediate: imm[31:12] rd opcode.
    U,
    /// Jump: scrambled, even, 21-bit immediate and rd.
    J,
}

impl Format {
    /// Format used by a major opcode, `None` for opcodes outside RV32I.
    pub fn from_opcode(opcode: u32) -> Option<Format> {
        match opcode & OPCODE_MASK {
            OP_REG => Some(Format::R),
            OP_IMM | OP_LOAD | OP_JALR | OP_SYSTEM | OP_MISC_MEM => Some(Format::I),
            OP_STORE => Some(Format::S),
            OP_BRANCH => Some(Format::B),
            OP_LUI | OP_AUIPC => Some(Format::U),
            OP_JAL => Some(Format::J),
            _ => None,
        }
    }

    fn imm_layout(self) -> Option<(&'static [ImmSlice], u32)> {
        match self {
            Format::R => None,
            Format::I => Some((I_IMM, 11)),
            Format::S => Some((S_IMM, 11)),
            Format::B => Some((B_IMM, 12)),
            Format::U => Some((U_IMM, 31)),
            Format::J => Some((J_IMM, 20)),
        }
    }

    pub fn has_rd(self) -> bool {
        matches!(self, Format::R | Format::I | Format::U | Format::J)
    }

    pub fn has_funct3(self) -> bool {
        matches!(self, Format::R | Format::I | Format::S | Format::B)
    }

    pub fn has_rs1(self) -> bool {
        self.has_funct3()
    }

    pub fn has_rs2(self) -> bool {
        matches!(self, Format::R | Format::S | Format::B)
    }

    pub fn has_funct7(self) -> bool {
        self == Format::R
    }
}

/// Operand fields of an encoded instruction.
///
/// Fields a format does not carry are zero after decoding and ignored when
/// encoding. `imm` is the architectural value: sign-extended, in bytes for
/// B and J, and already shifted into bits 31:12 for U.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Fields {
    pub opcode: u32,
    pub rd: u32,
    pub funct3: u32,
    pub rs1: u32,
    pub rs2: u32,
    pub funct7: u32,
    pub imm: i32,
}

/// Packs `fields` into a 32-bit word using `format`'s layout.
///
/// Values wider than their slot are truncated to the low bits.
pub fn encode(format: Format, fields: &Fields) -> u32 {
    let mut word = fields.opcode & OPCODE_MASK;
    if format.has_rd() {
        word |= (fields.rd & REG_MASK) << 7;
    }
    if format.has_funct3() {
        word |= (fields.funct3 & FUNCT3_MASK) << 12;
    }
    if format.has_rs1() {
        word |= (fields.rs1 & REG_MASK) << 15;
    }
    if format.has_rs2() {
        word |= (fields.rs2 & REG_MASK) << 20;
    }
    if format.has_funct7() {
        word |= (fields.funct7 & FUNCT7_MASK) << 25;
    }
    if let Some((map, _)) = format.imm_layout() {
        word |= pack_imm(map, fields.imm);
    }
    word
}

/// Splits `word` into the fields `format` defines.
pub fn decode_fields(format: Format, word: u32) -> Fields {
    Fields {
        opcode: word.opcode(),
        rd: if format.has_rd() { word.rd() as u32 } else { 0 },
        funct3: if format.has_funct3() { word.funct3() } else { 0 },
        rs1: if format.has_rs1() { word.rs1() as u32 } else { 0 },
        rs2: if format.has_rs2() { word.rs2() as u32 } else { 0 },
        funct7: if format.has_funct7() { word.funct7() } else { 0 },
        imm: format
            .imm_layout()
            .map_or(0, |(map, sign_bit)| unpack_imm(map, sign_bit, word)),
    }
}

/// Decodes `word` with the format implied by its opcode.
pub fn decode_word(word: u32) -> Option<(Format, Fields)> {
    Format::from_opcode(word.opcode()).map(|format| (format, decode_fields(format, word)))
}

/// Sign-extended immediate of `word` in `format`.
pub fn imm(format: Format, word: u32) -> i32 {
    format
        .imm_layout()
        .map_or(0, |(map, sign_bit)| unpack_imm(map, sign_bit, word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn b_slices_cover_bits_1_to_12_once() {
        let mut seen = 0u32;
        for s in B_IMM {
            let bits = low_bits(s.width) << s.imm_lo;
            assert_eq!(seen & bits, 0);
            seen |= bits;
        }
        assert_eq!(seen, 0x1FFE);
    }

    #[test]
    fn j_slices_cover_bits_1_to_20_once() {
        let mut seen = 0u32;
        for s in J_IMM {
            let bits = low_bits(s.width) << s.imm_lo;
            assert_eq!(seen & bits, 0);
            seen |= bits;
        }
        assert_eq!(seen, 0x1F_FFFE);
    }

    #[test]
    fn unpack_sign_extends() {
        assert_eq!(unpack_imm(I_IMM, 11, 0xFFF0_0000), -1);
        assert_eq!(unpack_imm(I_IMM, 11, 0x7FF0_0000), 2047);
        assert_eq!(unpack_imm(U_IMM, 31, 0x8000_0000), i32::MIN);
    }
}
