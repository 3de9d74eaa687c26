//! Stage latch structures.
//!
//! One instruction flows through fetch, decode, execute, memory access and
//! write back inside a single clock. The latches carry it between stages.
//! Nothing becomes architecturally visible until write back consumes a
//! [`MemWb`]; dropping the latch discards the instruction.

use crate::core::control::{Decoded, MemWidth, WbSrc};

/// Fetch to Decode.
#[derive(Clone, Copy, Debug)]
pub struct IfId {
    pub pc: u32,
    pub inst: u32,
}

/// Decode to Execute.
#[derive(Clone, Copy, Debug)]
pub struct IdEx {
    pub pc: u32,
    pub inst: u32,
    pub decoded: Decoded,
    /// Value read from rs1.
    pub rv1: u32,
    /// Value read from rs2.
    pub rv2: u32,
}

/// Instruction class, for the run statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InstClass {
    #[default]
    Alu,
    Load,
    Store,
    Branch,
    Jump,
    Csr,
    System,
}

/// A CSR update performed when the instruction retires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CsrWrite {
    pub addr: u32,
    pub value: u32,
}

/// A memory store performed when the instruction retires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Store {
    pub addr: u32,
    pub width: MemWidth,
    pub data: u32,
}

/// Execute to Memory.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExMem {
    pub pc: u32,
    pub inst: u32,
    pub rd: usize,
    pub reg_write: bool,
    pub wb_src: WbSrc,
    /// ALU result, load/store address, or the prior CSR value.
    pub alu: u32,
    pub store_data: u32,
    pub mem_write: bool,
    pub width: MemWidth,
    pub signed_load: bool,
    pub next_pc: u32,
    pub csr_write: Option<CsrWrite>,
    pub mret: bool,
    pub class: InstClass,
}

impl ExMem {
    pub fn is_load(&self) -> bool {
        self.wb_src == WbSrc::Mem && self.width != MemWidth::Nop
    }
}

/// Memory to Write Back: everything the instruction will commit.
#[derive(Clone, Copy, Debug, Default)]
pub struct MemWb {
    pub pc: u32,
    pub inst: u32,
    pub rd: usize,
    pub reg_write: bool,
    /// Value for `rd`.
    pub value: u32,
    pub store: Option<Store>,
    pub next_pc: u32,
    pub csr_write: Option<CsrWrite>,
    pub mret: bool,
    pub class: InstClass,
}
