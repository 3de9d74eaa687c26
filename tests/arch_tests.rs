//! Register file and trap controller tests.

use rv32_control::common::error::Trap;
use rv32_control::core::arch::csr;
use rv32_control::core::arch::gpr::Gpr;
use rv32_control::core::arch::trap::{ControllerState, InterruptLines, TrapController};

/// Tests that x0 is hardwired to zero.
#[test]
fn test_gpr_x0_hardwired() {
    let mut gpr = Gpr::new();
    gpr.write(0, 0xDEAD_BEEF);
    assert_eq!(gpr.read(0), 0);
}

/// Tests ordinary register reads and writes.
#[test]
fn test_gpr_read_write() {
    let mut gpr = Gpr::new();
    for i in 1..32 {
        gpr.write(i, i as u32 * 3);
    }
    for i in 1..32 {
        assert_eq!(gpr.read(i), i as u32 * 3);
    }
}

/// Tests that register indices wrap to their low five bits.
#[test]
fn test_gpr_index_masked() {
    let mut gpr = Gpr::new();
    gpr.write(33, 7);
    assert_eq!(gpr.read(1), 7);
    gpr.write(32, 9);
    assert_eq!(gpr.read(32), 0);
    assert_eq!(gpr.read(0), 0);
}

fn enabled_controller() -> TrapController {
    let mut ctl = TrapController::new(0);
    ctl.csrs.mstatus = csr::MSTATUS_MIE;
    ctl.csrs.mie = csr::MIE_MSIE | csr::MIE_MTIE | csr::MIE_MEIE;
    ctl
}

/// Tests that sampling copies the lines into mip.
#[test]
fn test_trap_sample_lines() {
    let mut ctl = TrapController::new(0);
    ctl.lines = InterruptLines {
        timer: true,
        software: false,
        external: true,
    };
    ctl.sample();
    assert_eq!(ctl.csrs.mip, csr::MIP_MTIP | csr::MIP_MEIP);

    ctl.lines.timer = false;
    ctl.sample();
    assert_eq!(ctl.csrs.mip, csr::MIP_MEIP);
}

/// Tests external > software > timer arbitration.
#[test]
fn test_trap_interrupt_priority() {
    let mut ctl = enabled_controller();
    ctl.lines = InterruptLines {
        timer: true,
        software: true,
        external: true,
    };
    ctl.sample();
    assert_eq!(ctl.pending_interrupt(), Some(Trap::MachineExternalInterrupt));

    ctl.lines.external = false;
    ctl.sample();
    assert_eq!(ctl.pending_interrupt(), Some(Trap::MachineSoftwareInterrupt));

    ctl.lines.software = false;
    ctl.sample();
    assert_eq!(ctl.pending_interrupt(), Some(Trap::MachineTimerInterrupt));
}

/// Tests that mstatus.MIE and the per-source enables gate interrupts.
#[test]
fn test_trap_interrupt_gating() {
    let mut ctl = enabled_controller();
    ctl.lines.timer = true;
    ctl.sample();

    ctl.csrs.mie = csr::MIE_MSIE;
    assert_eq!(ctl.pending_interrupt(), None);

    ctl.csrs.mie = csr::MIE_MTIE;
    ctl.csrs.mstatus = 0;
    assert_eq!(ctl.pending_interrupt(), None);

    ctl.csrs.mstatus = csr::MSTATUS_MIE;
    assert_eq!(ctl.pending_interrupt(), Some(Trap::MachineTimerInterrupt));
}

/// Tests the CSR updates performed on trap entry.
#[test]
fn test_trap_enter() {
    let mut ctl = TrapController::new(0x40);
    ctl.csrs.mstatus = csr::MSTATUS_MIE;

    let record = ctl.enter(Trap::LoadAddressMisaligned(0x1001), 0x24);
    assert_eq!(record.cause, 4);
    assert_eq!(record.tval, 0x1001);
    assert_eq!(record.epc, 0x24);
    assert_eq!(record.vector, 0x40);

    assert_eq!(ctl.csrs.mcause, 4);
    assert_eq!(ctl.csrs.mtval, 0x1001);
    assert_eq!(ctl.csrs.mepc, 0x24);
    assert_eq!(ctl.csrs.mstatus & csr::MSTATUS_MIE, 0);
    assert_ne!(ctl.csrs.mstatus & csr::MSTATUS_MPIE, 0);
    assert_eq!(ctl.state(), ControllerState::TrapEntry);
}

/// Tests interrupt causes carry bit 31 and no mtval.
#[test]
fn test_trap_enter_interrupt_cause() {
    let mut ctl = enabled_controller();
    ctl.csrs.mtval = 0x55;
    let record = ctl.enter(Trap::MachineExternalInterrupt, 0x8);
    assert_eq!(record.cause, 0x8000_000B);
    assert_eq!(ctl.csrs.mtval, 0);
}

/// Tests that mret restores MIE from MPIE and returns mepc.
#[test]
fn test_trap_mret() {
    let mut ctl = enabled_controller();
    ctl.enter(Trap::IllegalInstruction(0), 0x10);

    assert_eq!(ctl.mret(), 0x10);
    assert_ne!(ctl.csrs.mstatus & csr::MSTATUS_MIE, 0);
    assert_ne!(ctl.csrs.mstatus & csr::MSTATUS_MPIE, 0);
    assert_eq!(ctl.state(), ControllerState::Normal);
}

/// Tests that a trap taken with MIE clear leaves MIE clear after mret.
#[test]
fn test_trap_mret_preserves_disabled() {
    let mut ctl = TrapController::new(0);
    ctl.enter(Trap::Breakpoint(4), 4);
    assert_eq!(ctl.csrs.mstatus & csr::MSTATUS_MPIE, 0);
    ctl.mret();
    assert_eq!(ctl.csrs.mstatus & csr::MSTATUS_MIE, 0);
}

/// Tests the cycle and retire counters.
#[test]
fn test_trap_counters() {
    let mut ctl = TrapController::new(0);
    ctl.tick();
    ctl.tick();
    ctl.retire();
    assert_eq!(ctl.csrs.cycle, 2);
    assert_eq!(ctl.csrs.instret, 1);
}
