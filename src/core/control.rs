//! Control Signals.
//!
//! The decoder's output vocabulary. A legal datapath instruction produces one
//! `ControlSignals` bundle plus its register and immediate operands; system
//! instructions and CSR accesses get their own variants of [`Decoded`].

/// Operation selected on the ALU.
///
/// One comparator serves both branch conditions and the SLT family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// Two's-complement addition, of `-b` when `negate_b` is set.
    #[default]
    Add,
    /// Left shift by `b & 31`.
    Shl,
    /// `1` when `a < b` as signed integers, else `0`.
    Cmp,
    /// `1` when `a < b` as unsigned integers, else `0`.
    Cmpu,
    Xor,
    /// Right shift by `b & 31`; fill depends on [`ShiftType`].
    Shr,
    Or,
    And,
}

/// Source of the ALU's first operand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpASrc {
    #[default]
    Rs1,
    Pc,
}

/// Source of the ALU's second operand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpBSrc {
    #[default]
    Rs2,
    Imm,
}

/// How the next pc is chosen once the instruction retires.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NextPc {
    /// Fall through to `pc + 4`.
    #[default]
    Inc,
    /// Take `pc + imm` when the ALU result is zero.
    BranchIfZero,
    /// Take `pc + imm` when the ALU result is non-zero.
    BranchIfNonZero,
    /// Jump to the ALU result with bit 0 cleared (JALR).
    AluResult,
}

/// Value written back to `rd`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WbSrc {
    #[default]
    Alu,
    /// Extended load data.
    Mem,
    /// Link address, `pc + 4`.
    Pc,
}

/// Fill behaviour of right shifts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShiftType {
    /// Not a shift.
    #[default]
    None,
    /// Zero fill (SLL, SRL and their immediates).
    Logical,
    /// Sign fill (SRA, SRAI).
    Arithmetic,
}

/// Width of a memory access.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MemWidth {
    /// No memory access.
    #[default]
    Nop,
    Byte,
    Half,
    Word,
}

impl MemWidth {
    /// Number of bytes moved by the access.
    pub fn bytes(self) -> u32 {
        match self {
            MemWidth::Nop => 0,
            MemWidth::Byte => 1,
            MemWidth::Half => 2,
            MemWidth::Word => 4,
        }
    }
}

/// Control-signal bundle for datapath instructions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlSignals {
    pub alu: AluOp,
    pub a_src: OpASrc,
    pub b_src: OpBSrc,
    pub negate_b: bool,
    pub mem_write: bool,
    pub reg_write: bool,
    pub next_pc: NextPc,
    pub wb_src: WbSrc,
    pub shift_type: ShiftType,
    /// Load or store width, `Nop` for everything else.
    pub width: MemWidth,
    /// Sign-extend sub-word load data.
    pub signed_load: bool,
}

/// Register and immediate operands of a datapath instruction.
///
/// `rs1` is zero for formats without an rs1 field (LUI, AUIPC, JAL) and
/// `rs2` is zero unless the format carries one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Operands {
    pub rd: usize,
    pub rs1: usize,
    pub rs2: usize,
    pub imm: i32,
}

/// Non-CSR system instructions. Exactly one is produced per decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SystemOp {
    /// FENCE, FENCE.I and WFI retire without effect.
    Nop,
    Ecall,
    Ebreak,
    Mret,
}

/// CSR read-modify-write flavour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CsrOp {
    /// Replace the CSR with the source.
    Write,
    /// OR the source into the CSR.
    Set,
    /// Clear the source bits from the CSR.
    Clear,
}

/// Source operand of a CSR instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CsrSource {
    /// Register index (CSRRW, CSRRS, CSRRC).
    Reg(usize),
    /// 5-bit zero-extended immediate (CSRRWI, CSRRSI, CSRRCI).
    Imm(u32),
}

/// A decoded CSR instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CsrAccess {
    pub op: CsrOp,
    pub rd: usize,
    pub source: CsrSource,
    /// 12-bit CSR address.
    pub addr: u32,
}

/// Result of decoding one instruction word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decoded {
    /// Ordinary ALU, memory, branch or jump instruction.
    Datapath {
        ctrl: ControlSignals,
        operands: Operands,
    },
    /// Fence, wait-for-interrupt or privileged control transfer.
    System(SystemOp),
    /// CSR read-modify-write.
    Csr(CsrAccess),
    /// Unrecognised or reserved encoding.
    Illegal,
}

impl Decoded {
    pub fn is_illegal(&self) -> bool {
        matches!(self, Decoded::Illegal)
    }

    /// Source register 1 read by the instruction, `0` when none is read.
    pub fn rs1(&self) -> usize {
        match self {
            Decoded::Datapath { operands, .. } => operands.rs1,
            Decoded::Csr(CsrAccess {
                source: CsrSource::Reg(rs1),
                ..
            }) => *rs1,
            _ => 0,
        }
    }

    /// Control bundle of a datapath instruction.
    pub fn ctrl(&self) -> Option<&ControlSignals> {
        match self {
            Decoded::Datapath { ctrl, .. } => Some(ctrl),
            _ => None,
        }
    }
}
