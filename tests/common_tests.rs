//! Trap type and configuration tests.

use rv32_control::common::constants::CAUSE_INTERRUPT_BIT;
use rv32_control::common::data::AccessType;
use rv32_control::common::error::{ConfigError, Trap};
use rv32_control::config::Config;

/// Tests exception cause codes.
#[test]
fn test_trap_exception_causes() {
    assert_eq!(Trap::InstructionAddressMisaligned(2).cause(), 0);
    assert_eq!(Trap::InstructionAccessFault(0).cause(), 1);
    assert_eq!(Trap::IllegalInstruction(0).cause(), 2);
    assert_eq!(Trap::Breakpoint(0).cause(), 3);
    assert_eq!(Trap::LoadAddressMisaligned(1).cause(), 4);
    assert_eq!(Trap::LoadAccessFault(0).cause(), 5);
    assert_eq!(Trap::StoreAddressMisaligned(1).cause(), 6);
    assert_eq!(Trap::StoreAccessFault(0).cause(), 7);
    assert_eq!(Trap::EnvironmentCallFromMMode.cause(), 11);
}

/// Tests interrupt cause codes.
#[test]
fn test_trap_interrupt_causes() {
    assert_eq!(
        Trap::MachineSoftwareInterrupt.cause(),
        CAUSE_INTERRUPT_BIT | 3
    );
    assert_eq!(Trap::MachineTimerInterrupt.cause(), 0x8000_0007);
    assert_eq!(Trap::MachineExternalInterrupt.cause(), 0x8000_000B);
    assert!(Trap::MachineTimerInterrupt.is_interrupt());
    assert!(!Trap::Breakpoint(0).is_interrupt());
}

/// Tests which traps report a value in mtval.
#[test]
fn test_trap_tval() {
    assert_eq!(Trap::LoadAddressMisaligned(0x1001).tval(), 0x1001);
    assert_eq!(Trap::Breakpoint(0x20).tval(), 0x20);
    assert_eq!(Trap::IllegalInstruction(0xFFFF_FFFF).tval(), 0);
    assert_eq!(Trap::EnvironmentCallFromMMode.tval(), 0);
    assert_eq!(Trap::MachineTimerInterrupt.tval(), 0);
}

/// Tests the access-kind to fault mapping.
#[test]
fn test_access_type_faults() {
    assert_eq!(
        AccessType::Fetch.access_fault(8),
        Trap::InstructionAccessFault(8)
    );
    assert_eq!(AccessType::Read.access_fault(8), Trap::LoadAccessFault(8));
    assert_eq!(AccessType::Write.misaligned(9), Trap::StoreAddressMisaligned(9));
}

/// Tests that an empty configuration yields the defaults.
#[test]
fn test_config_defaults() {
    let config = Config::from_toml_str("").expect("empty config");
    assert!(!config.general.trace_instructions);
    assert_eq!(config.general.start_pc_val(), 0);
    assert_eq!(config.memory.rom_size, 4096);
    assert_eq!(config.memory.ram_base_val(), 0x1000);
    assert_eq!(config.memory.ram_size, 8208);
    assert_eq!(config.trap.vector_val(), 0);
}

/// Tests parsing of every section.
#[test]
fn test_config_parse() {
    let text = r#"
        [general]
        trace_instructions = true
        start_pc = "0x100"

        [memory]
        rom_size = 1024
        ram_base = "0x8000"
        ram_size = 256

        [trap]
        vector = "0x80"
    "#;
    let config = Config::from_toml_str(text).expect("valid config");
    assert!(config.general.trace_instructions);
    assert_eq!(config.general.start_pc_val(), 0x100);
    assert_eq!(config.memory.rom_size, 1024);
    assert_eq!(config.memory.ram_base_val(), 0x8000);
    assert_eq!(config.memory.ram_size, 256);
    assert_eq!(config.trap.vector_val(), 0x80);
}

/// Tests that malformed TOML is reported as an error.
#[test]
fn test_config_parse_error() {
    assert!(Config::from_toml_str("[memory]\nrom_size = \"big\"").is_err());
    assert!(Config::from_file("/nonexistent/rv32.toml").is_err());
}

/// Tests that a ROM reaching past the RAM base is rejected.
#[test]
fn test_config_rejects_rom_ram_overlap() {
    let result = Config::from_toml_str("[memory]\nrom_size = 8192");
    assert!(matches!(
        result,
        Err(ConfigError::Overlap {
            rom_size: 8192,
            ram_base: 0x1000
        })
    ));
    assert!(Config::from_toml_str("[memory]\nrom_size = 4096").is_ok());
}
