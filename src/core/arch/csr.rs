//! Control and Status Registers.
//!
//! The machine-mode CSR file: trap state, interrupt enable/pending masks, a
//! scratch register and the 64-bit cycle and retired-instruction counters
//! exposed as 32-bit halves. Only the bits the core models are stored;
//! everything else reads as zero.

/// Machine status register.
pub const MSTATUS: u32 = 0x300;
/// Machine ISA register.
pub const MISA: u32 = 0x301;
/// Machine interrupt-enable register.
pub const MIE: u32 = 0x304;
/// Machine scratch register.
pub const MSCRATCH: u32 = 0x340;
/// Machine exception program counter.
pub const MEPC: u32 = 0x341;
/// Machine trap cause.
pub const MCAUSE: u32 = 0x342;
/// Machine trap value.
pub const MTVAL: u32 = 0x343;
/// Machine interrupt-pending register.
pub const MIP: u32 = 0x344;

/// Writable machine cycle counter, low half.
pub const MCYCLE: u32 = 0xB00;
/// Writable machine retired-instruction counter, low half.
pub const MINSTRET: u32 = 0xB02;
pub const MCYCLEH: u32 = 0xB80;
pub const MINSTRETH: u32 = 0xB82;

/// Read-only cycle counter shadow, low half.
pub const CYCLE: u32 = 0xC00;
/// Read-only retired-instruction counter shadow, low half.
pub const INSTRET: u32 = 0xC02;
pub const CYCLEH: u32 = 0xC80;
pub const INSTRETH: u32 = 0xC82;

/// Global machine interrupt enable.
pub const MSTATUS_MIE: u32 = 1 << 3;
/// Interrupt enable saved on trap entry.
pub const MSTATUS_MPIE: u32 = 1 << 7;

pub const MIP_MSIP: u32 = 1 << 3;
pub const MIP_MTIP: u32 = 1 << 7;
pub const MIP_MEIP: u32 = 1 << 11;

pub const MIE_MSIE: u32 = MIP_MSIP;
pub const MIE_MTIE: u32 = MIP_MTIP;
pub const MIE_MEIE: u32 = MIP_MEIP;

/// `MISA` value: MXL = 1 (32-bit), extension I.
pub const MISA_RV32I: u32 = (1 << 30) | (1 << 8);

const MSTATUS_MASK: u32 = MSTATUS_MIE | MSTATUS_MPIE;
const INTERRUPT_MASK: u32 = MIP_MSIP | MIP_MTIP | MIP_MEIP;

/// Human-readable name of a CSR, `None` for unimplemented addresses.
pub fn name(addr: u32) -> Option<&'static str> {
    let name = match addr {
        MSTATUS => "mstatus",
        MISA => "misa",
        MIE => "mie",
        MSCRATCH => "mscratch",
        MEPC => "mepc",
        MCAUSE => "mcause",
        MTVAL => "mtval",
        MIP => "mip",
        MCYCLE => "mcycle",
        MINSTRET => "minstret",
        MCYCLEH => "mcycleh",
        MINSTRETH => "minstreth",
        CYCLE => "cycle",
        INSTRET => "instret",
        CYCLEH => "cycleh",
        INSTRETH => "instreth",
        _ => return None,
    };
    Some(name)
}

/// Machine-mode CSR storage.
#[derive(Clone, Debug, Default)]
pub struct Csrs {
    pub mstatus: u32,
    pub mie: u32,
    /// Latched from the interrupt lines every cycle.
    pub mip: u32,
    pub mscratch: u32,
    pub mepc: u32,
    pub mcause: u32,
    pub mtval: u32,
    pub cycle: u64,
    pub instret: u64,
}

impl Csrs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a CSR.
    ///
    /// # Returns
    ///
    /// The register value, or `None` when `addr` is not implemented.
    pub fn read(&self, addr: u32) -> Option<u32> {
        let val = match addr {
            MSTATUS => self.mstatus & MSTATUS_MASK,
            MISA => MISA_RV32I,
            MIE => self.mie & INTERRUPT_MASK,
            MIP => self.mip & INTERRUPT_MASK,
            MSCRATCH => self.mscratch,
            MEPC => self.mepc,
            MCAUSE => self.mcause,
            MTVAL => self.mtval,
            MCYCLE | CYCLE => self.cycle as u32,
            MCYCLEH | CYCLEH => (self.cycle >> 32) as u32,
            MINSTRET | INSTRET => self.instret as u32,
            MINSTRETH | INSTRETH => (self.instret >> 32) as u32,
            _ => return None,
        };
        Some(val)
    }

    /// Writes a CSR.
    ///
    /// Read-only registers (`misa`, `mip` and the user counter shadows)
    /// ignore the write. Fields the core does not model are masked off.
    pub fn write(&mut self, addr: u32, val: u32) {
        match addr {
            MSTATUS => self.mstatus = val & MSTATUS_MASK,
            MIE => self.mie = val & INTERRUPT_MASK,
            MSCRATCH => self.mscratch = val,
            MEPC => self.mepc = val & !0b11,
            MCAUSE => self.mcause = val,
            MTVAL => self.mtval = val,
            MCYCLE => self.cycle = (self.cycle & !0xFFFF_FFFF) | val as u64,
            MCYCLEH => self.cycle = (self.cycle & 0xFFFF_FFFF) | (val as u64) << 32,
            MINSTRET => self.instret = (self.instret & !0xFFFF_FFFF) | val as u64,
            MINSTRETH => self.instret = (self.instret & 0xFFFF_FFFF) | (val as u64) << 32,
            _ => {}
        }
    }
}
