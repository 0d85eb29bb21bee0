//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from specific
//! memory implementations, and `AddressSpace`, the flat 64KB store the core is
//! normally driven with.
//!
//! ## Design Principles
//!
//! The MemoryBus trait follows 6502 hardware behavior:
//! - No bus errors - every 16-bit address is valid
//! - Word accesses wrap from 0xFFFF to 0x0000
//! - The bus itself charges no cycles, except `write_word`, which models a
//!   two-cycle bus write and charges the caller's budget
//!
//! The CPU never owns a bus. Callers keep the memory and lend it to each
//! `reset`/`execute` call.

use crate::CycleBudget;

/// Size of the 6502 address space in bytes.
pub const ADDRESS_SPACE_SIZE: usize = 0x1_0000;

/// Memory bus trait for CPU to read/write bytes.
///
/// # Examples
///
/// ```
/// use cyc6502::{MemoryBus, AddressSpace};
///
/// let mut mem = AddressSpace::new();
///
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use cyc6502::MemoryBus;
///
/// struct RomRamMemory {
///     ram: [u8; 0x8000],  // 32KB RAM (0x0000-0x7FFF)
///     rom: [u8; 0x8000],  // 32KB ROM (0x8000-0xFFFF)
/// }
///
/// impl MemoryBus for RomRamMemory {
///     fn read(&self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///         // Writes to ROM (0x8000+) are silently ignored
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// This method must never panic.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// This method must never panic. Read-only or unmapped regions may ignore
    /// the write.
    fn write(&mut self, addr: u16, value: u8);

    /// Zero-fills the bus. Called by `CPU::reset`.
    ///
    /// The default writes 0x00 to every address one at a time, so ROM-backed
    /// implementations keep their contents.
    fn initialize(&mut self) {
        for addr in 0..=u16::MAX {
            self.write(addr, 0x00);
        }
    }

    /// Writes a little-endian word: low byte at `addr`, high byte at `addr + 1`.
    ///
    /// A word write is two bus cycles, charged to `budget`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyc6502::{AddressSpace, CycleBudget, MemoryBus};
    ///
    /// let mut mem = AddressSpace::new();
    /// let mut budget = CycleBudget::new(10);
    ///
    /// mem.write_word(0x1234, 0x0200, &mut budget);
    ///
    /// assert_eq!(mem.read(0x0200), 0x34);
    /// assert_eq!(mem.read(0x0201), 0x12);
    /// assert_eq!(budget.remaining(), 8);
    /// ```
    fn write_word(&mut self, value: u16, addr: u16, budget: &mut CycleBudget) {
        self.write(addr, (value & 0xFF) as u8);
        self.write(addr.wrapping_add(1), (value >> 8) as u8);
        budget.spend(2);
    }
}

/// Flat 64KB address space.
///
/// All 65536 addresses (0x0000-0xFFFF) map to a single heap-allocated array.
/// The array is allocated once and never resized.
///
/// # Examples
///
/// ```
/// use cyc6502::{AddressSpace, CPU};
///
/// let mut memory = AddressSpace::new();
/// let mut cpu = CPU::new();
/// cpu.reset(&mut memory);
///
/// // Load a program at the literal reset vector
/// memory.load(0xFFFC, &[0xA9, 0x00]); // LDA #$00
///
/// assert_eq!(cpu.execute(2, &mut memory), Ok(2));
/// assert!(cpu.flag_z());
/// ```
pub struct AddressSpace {
    data: Box<[u8; ADDRESS_SPACE_SIZE]>,
}

impl AddressSpace {
    /// Creates a new address space with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; ADDRESS_SPACE_SIZE]),
        }
    }

    /// Zero-fills every byte.
    pub fn initialize(&mut self) {
        self.data.fill(0);
    }

    /// Reads the byte at `addr`. No cycles are charged.
    pub fn read_byte(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    /// Writes `value` at `addr`. No cycles are charged.
    pub fn write_byte(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }

    /// Copies a program image into memory starting at `start`.
    ///
    /// The image wraps from 0xFFFF back to 0x0000; bytes beyond 64KB
    /// overwrite the start of the image. No cycles are charged.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyc6502::AddressSpace;
    ///
    /// let mut mem = AddressSpace::new();
    /// mem.load(0xFFFE, &[0x01, 0x02, 0x03]);
    ///
    /// assert_eq!(mem.read_byte(0xFFFE), 0x01);
    /// assert_eq!(mem.read_byte(0xFFFF), 0x02);
    /// assert_eq!(mem.read_byte(0x0000), 0x03);
    /// ```
    pub fn load(&mut self, start: u16, bytes: &[u8]) {
        let mut addr = start;
        for &byte in bytes {
            self.write_byte(addr, byte);
            addr = addr.wrapping_add(1);
        }
    }

    /// Returns the 256 bytes of `page` (0x00 = zero page, 0x01 = stack page).
    pub fn page(&self, page: u8) -> &[u8] {
        let start = (page as usize) << 8;
        &self.data[start..start + 0x100]
    }
}

impl Default for AddressSpace {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for AddressSpace {
    fn read(&self, addr: u16) -> u8 {
        self.read_byte(addr)
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.write_byte(addr, value);
    }

    fn initialize(&mut self) {
        AddressSpace::initialize(self);
    }
}
