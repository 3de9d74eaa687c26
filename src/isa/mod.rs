//! RV32I Instruction Set Architecture definitions.
//!
//! Opcode tables, the instruction field codec, assembler helpers used to build
//! instruction words, and the disassembler used for traces.

/// Assembler helpers, one function per instruction.
pub mod asm;

/// Mnemonic rendering of instruction words.
pub mod disasm;

/// Field extraction and the format codec.
pub mod instruction;

/// Opcode, funct3, funct7 and system encodings.
pub mod opcodes;

pub use disasm::disassemble;
pub use instruction::{decode_fields, decode_word, encode, Fields, Format, InstructionBits};
