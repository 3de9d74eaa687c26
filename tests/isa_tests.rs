//! Instruction codec, assembler and disassembler tests.

use rv32_control::isa::asm;
use rv32_control::isa::instruction::{decode_fields, decode_word, encode, imm, Fields, Format};
use rv32_control::isa::opcodes::*;
use rv32_control::isa::{disassemble, InstructionBits};

/// Tests that fixed fields are extracted from their standard bit positions.
#[test]
fn test_field_extraction() {
    // add x3, x1, x2
    let inst = 0x0020_81B3u32;
    assert_eq!(inst.opcode(), OP_REG);
    assert_eq!(inst.rd(), 3);
    assert_eq!(inst.rs1(), 1);
    assert_eq!(inst.rs2(), 2);
    assert_eq!(inst.funct3(), 0);
    assert_eq!(inst.funct7(), 0);
}

fn assert_round_trip(format: Format, fields: Fields) {
    let word = encode(format, &fields);
    assert_eq!(
        decode_fields(format, word),
        fields,
        "{:?} word {:#010x}",
        format,
        word
    );
}

/// Tests R-type round trips over every register, funct3 and funct7 value.
#[test]
fn test_r_type_round_trip() {
    for reg in 0..32 {
        for funct3 in 0..8 {
            assert_round_trip(
                Format::R,
                Fields {
                    opcode: OP_REG,
                    rd: reg,
                    funct3,
                    rs1: 31 - reg,
                    rs2: reg ^ 0b10101,
                    funct7: 0,
                    imm: 0,
                },
            );
        }
    }
    for funct7 in 0..0x80 {
        assert_round_trip(
            Format::R,
            Fields {
                opcode: OP_REG,
                rd: 31,
                funct3: 7,
                rs1: 31,
                rs2: 31,
                funct7,
                imm: 0,
            },
        );
    }
}

/// Tests I-type round trips over the whole 12-bit signed range.
#[test]
fn test_i_type_round_trip() {
    for value in -2048..=2047 {
        let reg = (value as u32) & 31;
        assert_round_trip(
            Format::I,
            Fields {
                opcode: OP_IMM,
                rd: reg,
                funct3: (value as u32 >> 5) & 7,
                rs1: 31 - reg,
                imm: value,
                ..Default::default()
            },
        );
    }
}

/// Tests S-type round trips, whose immediate is split across two slots.
#[test]
fn test_s_type_round_trip() {
    for value in -2048..=2047 {
        let reg = (value as u32) & 31;
        assert_round_trip(
            Format::S,
            Fields {
                opcode: OP_STORE,
                funct3: (value as u32 >> 5) & 7,
                rs1: reg,
                rs2: 31 - reg,
                imm: value,
                ..Default::default()
            },
        );
    }
}

/// Tests every even B-type offset, including the bits moved to 7 and 31.
#[test]
fn test_b_type_round_trip() {
    for value in (-4096..=4094).step_by(2) {
        let reg = (value as u32 >> 1) & 31;
        assert_round_trip(
            Format::B,
            Fields {
                opcode: OP_BRANCH,
                funct3: (value as u32 >> 6) & 7,
                rs1: reg,
                rs2: 31 - reg,
                imm: value,
                ..Default::default()
            },
        );
    }
}

/// Tests every U-type upper immediate.
#[test]
fn test_u_type_round_trip() {
    for upper in 0u32..1 << 20 {
        assert_round_trip(
            Format::U,
            Fields {
                opcode: OP_LUI,
                rd: upper & 31,
                imm: (upper << 12) as i32,
                ..Default::default()
            },
        );
    }
}

/// Tests every even J-type offset across the 21-bit range.
#[test]
fn test_j_type_round_trip() {
    for value in (-(1 << 20)..(1 << 20)).step_by(2) {
        assert_round_trip(
            Format::J,
            Fields {
                opcode: OP_JAL,
                rd: (value as u32 >> 1) & 31,
                imm: value,
                ..Default::default()
            },
        );
    }
}

/// Tests that out-of-range fields are truncated rather than rejected.
#[test]
fn test_encode_truncates_fields() {
    let word = encode(
        Format::R,
        &Fields {
            opcode: OP_REG,
            rd: 33,
            rs1: 0x21,
            rs2: 0x3F,
            funct3: 0xF,
            funct7: 0,
            imm: 0,
        },
    );
    assert_eq!(word.rd(), 1);
    assert_eq!(word.rs1(), 1);
    assert_eq!(word.rs2(), 31);
    assert_eq!(word.funct3(), 7);
    assert_eq!(asm::slli(1, 1, 33).rs2(), 1);
}

/// Tests that the opcode picks the format.
#[test]
fn test_decode_word_selects_format() {
    let (format, fields) = decode_word(asm::beq(1, 2, -8)).expect("branch");
    assert_eq!(format, Format::B);
    assert_eq!(fields.imm, -8);
    assert!(decode_word(0).is_none());
}

/// Tests a few assembler encodings against known machine code.
#[test]
fn test_asm_known_encodings() {
    assert_eq!(asm::addi(1, 0, 5), 0x0050_0093);
    assert_eq!(asm::add(3, 1, 2), 0x0020_81B3);
    assert_eq!(asm::sub(3, 1, 2), 0x4020_81B3);
    assert_eq!(asm::lui(5, 0x12345000), 0x1234_52B7);
    assert_eq!(asm::jal(0, 0), 0x0000_006F);
    assert_eq!(asm::jalr(0, 1, 0), 0x0000_8067);
    assert_eq!(asm::sw(2, 0, 4), 0x0020_2223);
    assert_eq!(asm::srai(1, 1, 3), 0x4030_D093);
    assert_eq!(asm::ecall(), 0x0000_0073);
    assert_eq!(asm::mret(), 0x3020_0073);
    assert_eq!(asm::csrrw(3, 0, 0xC02), 0xC020_11F3);
    assert_eq!(asm::fence_i(), 0x0000_100F);
}

/// Tests that the B-type immediate of the assembler matches `imm`.
#[test]
fn test_branch_offset_round_trip() {
    let word = asm::blt(1, 2, -4);
    assert_eq!(imm(Format::B, word), -4);
    assert_eq!(word.rs1(), 1);
    assert_eq!(word.rs2(), 2);
}

/// Tests disassembly of common instructions.
#[test]
fn test_disassemble_mnemonics() {
    assert_eq!(disassemble(asm::addi(1, 0, 5)), "addi x1, x0, 5");
    assert_eq!(disassemble(asm::sub(3, 1, 2)), "sub x3, x1, x2");
    assert_eq!(disassemble(asm::sw(2, 0, 4)), "sw x2, 4(x0)");
    assert_eq!(disassemble(asm::jal(1, -8)), "jal x1, -8");
    assert_eq!(disassemble(asm::blt(1, 2, -4)), "blt x1, x2, -4");
    assert_eq!(disassemble(asm::srai(4, 5, 7)), "srai x4, x5, 7");
    assert_eq!(disassemble(asm::mret()), "mret");
    assert_eq!(disassemble(asm::fence(0xF, 0xF)), "fence");
}

/// Tests that CSR operands use register names when known.
#[test]
fn test_disassemble_csr_operands() {
    assert_eq!(disassemble(asm::csrrwi(1, 5, 0x340)), "csrrwi x1, mscratch, 5");
    assert_eq!(disassemble(asm::csrrs(1, 0, 0xC82)), "csrrs x1, instreth, x0");
    assert_eq!(disassemble(asm::csrrw(1, 2, 0x7C0)), "csrrw x1, 0x7c0, x2");
}

/// Tests that unknown encodings produce a diagnostic instead of failing.
#[test]
fn test_disassemble_illegal() {
    assert!(disassemble(0).starts_with("illegal"));
    assert!(disassemble(0xFFFF_FFFF).starts_with("illegal"));
    assert!(disassemble(asm::ecall() | 1 << 7).starts_with("illegal"));
}
