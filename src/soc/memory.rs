//! Flat Memory Map.
//!
//! An instruction ROM mapped at address zero and a data RAM window at
//! `ram_base`. Both are little-endian byte arrays. The core fetches and loads
//! from either region; stores reach RAM only, and the ROM shadows any RAM it
//! overlaps. Accesses outside both regions return `None` so the caller can
//! raise the matching access fault.

use log::warn;

use crate::common::error::LoaderError;
use crate::config::MemoryConfig;
use crate::core::control::MemWidth;

pub struct Memory {
    rom: Vec<u8>,
    ram_base: u32,
    ram: Vec<u8>,
}

impl Memory {
    /// Creates zero-filled memories.
    ///
    /// # Arguments
    ///
    /// * `rom_size` - Bytes of instruction ROM at address 0
    /// * `ram_base` - Address of the first RAM byte
    /// * `ram_size` - Bytes of RAM
    pub fn new(rom_size: usize, ram_base: u32, ram_size: usize) -> Self {
        Self {
            rom: vec![0; rom_size],
            ram_base,
            ram: vec![0; ram_size],
        }
    }

    pub fn from_config(config: &MemoryConfig) -> Self {
        Self::new(config.rom_size, config.ram_base_val(), config.ram_size)
    }

    pub fn rom_size(&self) -> usize {
        self.rom.len()
    }

    pub fn ram_base(&self) -> u32 {
        self.ram_base
    }

    fn rom_range(&self, addr: u32, len: usize) -> Option<std::ops::Range<usize>> {
        let start = addr as usize;
        let end = start.checked_add(len)?;
        (end <= self.rom.len()).then_some(start..end)
    }

    fn ram_range(&self, addr: u32, len: usize) -> Option<std::ops::Range<usize>> {
        let start = addr.checked_sub(self.ram_base)? as usize;
        let end = start.checked_add(len)?;
        (end <= self.ram.len()).then_some(start..end)
    }

    /// RAM bytes a store may reach. The ROM shadows any RAM it overlaps.
    fn writable_range(&self, addr: u32, len: usize) -> Option<std::ops::Range<usize>> {
        if (addr as usize) < self.rom.len() {
            return None;
        }
        self.ram_range(addr, len)
    }

    fn bytes(&self, addr: u32, len: usize) -> Option<&[u8]> {
        if let Some(r) = self.rom_range(addr, len) {
            return Some(&self.rom[r]);
        }
        if let Some(r) = self.ram_range(addr, len) {
            return Some(&self.ram[r]);
        }
        warn!("access to unmapped address {:#x}", addr);
        None
    }

    /// Fetches an instruction word.
    pub fn fetch(&self, addr: u32) -> Option<u32> {
        self.load(addr, MemWidth::Word)
    }

    /// Reads `width` bytes little-endian, zero-extended.
    pub fn load(&self, addr: u32, width: MemWidth) -> Option<u32> {
        let bytes = self.bytes(addr, width.bytes() as usize)?;
        Some(
            bytes
                .iter()
                .rev()
                .fold(0u32, |acc, &b| (acc << 8) | b as u32),
        )
    }

    /// Whether a store of `width` bytes at `addr` lands entirely in RAM.
    pub fn is_writable(&self, addr: u32, width: MemWidth) -> bool {
        self.writable_range(addr, width.bytes() as usize).is_some()
    }

    /// Writes the low `width` bytes of `data`.
    ///
    /// # Returns
    ///
    /// `false` when the range is not RAM; nothing is written then.
    pub fn store(&mut self, addr: u32, width: MemWidth, data: u32) -> bool {
        let Some(r) = self.writable_range(addr, width.bytes() as usize) else {
            warn!("store to unmapped address {:#x}", addr);
            return false;
        };
        let le = data.to_le_bytes();
        let len = r.len();
        self.ram[r].copy_from_slice(&le[..len]);
        true
    }

    /// Writes one word into the ROM, bypassing its read-only mapping.
    ///
    /// `addr` is a byte address; out-of-range writes are dropped.
    pub fn write_rom(&mut self, addr: u32, word: u32) -> bool {
        match self.rom_range(addr, 4) {
            Some(r) => {
                self.rom[r].copy_from_slice(&word.to_le_bytes());
                true
            }
            None => false,
        }
    }

    /// Copies a raw image into the ROM from address 0.
    pub fn load_rom(&mut self, image: &[u8]) -> Result<(), LoaderError> {
        if image.len() > self.rom.len() {
            return Err(LoaderError::TooLarge {
                size: image.len(),
                capacity: self.rom.len(),
            });
        }
        self.rom[..image.len()].copy_from_slice(image);
        Ok(())
    }
}
