use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::constants::{
    DEFAULT_RAM_BASE, DEFAULT_RAM_SIZE, DEFAULT_ROM_SIZE, DEFAULT_TRAP_VECTOR,
};
use crate::common::error::ConfigError;

const DEFAULT_START_PC: u32 = 0;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub memory: MemoryConfig,
    #[serde(default)]
    pub trap: TrapConfig,
}

impl Config {
    /// Reads and parses a TOML configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Parses a configuration from TOML text. Missing keys take defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.memory.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Deserialize)]
pub struct GeneralConfig {
    #[serde(default)]
    pub trace_instructions: bool,
    #[serde(default = "default_start_pc")]
    pub start_pc: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            start_pc: default_start_pc(),
        }
    }
}

impl GeneralConfig {
    pub fn start_pc_val(&self) -> u32 {
        parse_hex(&self.start_pc, DEFAULT_START_PC)
    }
}

#[derive(Debug, Deserialize)]
pub struct MemoryConfig {
    /// Instruction ROM size in bytes, mapped at address 0.
    #[serde(default = "default_rom_size")]
    pub rom_size: usize,

    #[serde(default = "default_ram_base")]
    pub ram_base: String,

    #[serde(default = "default_ram_size")]
    pub ram_size: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            rom_size: default_rom_size(),
            ram_base: default_ram_base(),
            ram_size: default_ram_size(),
        }
    }
}

impl MemoryConfig {
    pub fn ram_base_val(&self) -> u32 {
        parse_hex(&self.ram_base, DEFAULT_RAM_BASE)
    }

    /// Checks that the ROM ends at or below the start of RAM.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ram_base = self.ram_base_val();
        if self.rom_size as u64 > ram_base as u64 {
            return Err(ConfigError::Overlap {
                rom_size: self.rom_size,
                ram_base,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct TrapConfig {
    #[serde(default = "default_trap_vector")]
    pub vector: String,
}

impl Default for TrapConfig {
    fn default() -> Self {
        Self {
            vector: default_trap_vector(),
        }
    }
}

impl TrapConfig {
    pub fn vector_val(&self) -> u32 {
        parse_hex(&self.vector, DEFAULT_TRAP_VECTOR)
    }
}

fn parse_hex(s: &str, default: u32) -> u32 {
    let s = s.trim_start_matches("0x");
    u32::from_str_radix(s, 16).unwrap_or(default)
}

fn default_start_pc() -> String {
    format!("{:#x}", DEFAULT_START_PC)
}

fn default_rom_size() -> usize {
    DEFAULT_ROM_SIZE
}

fn default_ram_base() -> String {
    format!("{:#x}", DEFAULT_RAM_BASE)
}

fn default_ram_size() -> usize {
    DEFAULT_RAM_SIZE
}

fn default_trap_vector() -> String {
    format!("{:#x}", DEFAULT_TRAP_VECTOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_falls_back_on_garbage() {
        assert_eq!(parse_hex("0x1000", 7), 0x1000);
        assert_eq!(parse_hex("80", 7), 0x80);
        assert_eq!(parse_hex("zz", 7), 7);
    }

    #[test]
    fn rom_may_end_at_ram_base() {
        let memory = MemoryConfig {
            rom_size: 0x1000,
            ..Default::default()
        };
        assert!(memory.validate().is_ok());

        let memory = MemoryConfig {
            rom_size: 0x1001,
            ..Default::default()
        };
        assert!(memory.validate().is_err());
    }
}
