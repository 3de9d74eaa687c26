//! CSR file tests.

use rv32_control::core::arch::csr::*;

/// Tests read/write of the plain machine registers.
#[test]
fn test_csr_read_write_machine_csrs() {
    let mut csrs = Csrs::default();

    let test_csrs = vec![
        (MSCRATCH, 0xDEAD_BEEF),
        (MEPC, 0x2000_0000),
        (MCAUSE, 0x8000_0003),
        (MTVAL, 0x3000_0000),
    ];

    for (addr, val) in test_csrs {
        csrs.write(addr, val);
        assert_eq!(csrs.read(addr), Some(val), "CSR {:#x} write/read mismatch", addr);
    }
}

/// Tests that mstatus keeps only MIE and MPIE.
#[test]
fn test_csr_mstatus_mask() {
    let mut csrs = Csrs::default();
    csrs.write(MSTATUS, 0xFFFF_FFFF);
    assert_eq!(csrs.read(MSTATUS), Some(MSTATUS_MIE | MSTATUS_MPIE));

    csrs.write(MSTATUS, MSTATUS_MPIE);
    assert_eq!(csrs.read(MSTATUS), Some(MSTATUS_MPIE));
}

/// Tests that mie keeps only the three machine interrupt bits.
#[test]
fn test_csr_mie_mask() {
    let mut csrs = Csrs::default();
    csrs.write(MIE, 0xFFFF_FFFF);
    assert_eq!(csrs.read(MIE), Some(MIE_MSIE | MIE_MTIE | MIE_MEIE));
}

/// Tests that misa, mip and the user counters ignore writes.
#[test]
fn test_csr_read_only_registers() {
    let mut csrs = Csrs::default();
    csrs.instret = 20;
    csrs.write(MISA, 0);
    csrs.write(MIP, 0xFFFF_FFFF);
    csrs.write(INSTRET, 0);
    csrs.write(CYCLE, 0x1234);

    assert_eq!(csrs.read(MISA), Some(MISA_RV32I));
    assert_eq!(csrs.read(MIP), Some(0));
    assert_eq!(csrs.read(INSTRET), Some(20));
    assert_eq!(csrs.read(CYCLE), Some(0));
}

/// Tests that the 64-bit counters split into low and high halves.
#[test]
fn test_csr_counter_halves() {
    let mut csrs = Csrs::default();
    csrs.cycle = 0x0000_0002_0000_0005;
    csrs.instret = 0x0000_0001_FFFF_FFFF;

    assert_eq!(csrs.read(CYCLE), Some(5));
    assert_eq!(csrs.read(CYCLEH), Some(2));
    assert_eq!(csrs.read(MCYCLE), Some(5));
    assert_eq!(csrs.read(INSTRET), Some(0xFFFF_FFFF));
    assert_eq!(csrs.read(INSTRETH), Some(1));
}

/// Tests that the machine counters are writable half by half.
#[test]
fn test_csr_machine_counter_writes() {
    let mut csrs = Csrs::default();
    csrs.write(MINSTRET, 7);
    csrs.write(MINSTRETH, 1);
    assert_eq!(csrs.instret, 0x1_0000_0007);

    csrs.write(MCYCLEH, 3);
    csrs.write(MCYCLE, 9);
    assert_eq!(csrs.cycle, 0x3_0000_0009);
}

/// Tests that mepc drops the low two bits.
#[test]
fn test_csr_mepc_alignment() {
    let mut csrs = Csrs::default();
    csrs.write(MEPC, 0x1003);
    assert_eq!(csrs.read(MEPC), Some(0x1000));
}

/// Tests that unimplemented addresses read as `None`.
#[test]
fn test_csr_unknown_address() {
    let csrs = Csrs::default();
    assert_eq!(csrs.read(0x7C0), None);
    assert_eq!(csrs.read(0x180), None);
    assert_eq!(name(0x7C0), None);
    assert_eq!(name(MSCRATCH), Some("mscratch"));
}
