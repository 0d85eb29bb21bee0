//! # 6502 Cycle-Counting Core
//!
//! A cycle-counting NMOS 6502 CPU core built around a table-driven
//! fetch-decode-execute loop.
//!
//! The core charges every bus operation against an explicit [`CycleBudget`],
//! so the cycle cost of an instruction falls out of the memory accesses its
//! addressing mode performs, including the page-crossing and zero-page
//! wraparound quirks of the real silicon.
//!
//! ## Quick Start
//!
//! ```rust
//! use cyc6502::{opcodes, AddressSpace, CPU};
//!
//! let mut memory = AddressSpace::new();
//! let mut cpu = CPU::new();
//! cpu.reset(&mut memory);
//!
//! // The reset vector is taken literally: execution starts at 0xFFFC.
//! memory.write_byte(0xFFFC, opcodes::LDA_IMMEDIATE);
//! memory.write_byte(0xFFFD, 0x84);
//!
//! let cycles_used = cpu.execute(2, &mut memory).unwrap();
//!
//! assert_eq!(cycles_used, 2);
//! assert_eq!(cpu.a(), 0x84);
//! assert!(cpu.flag_n());
//! assert!(!cpu.flag_z());
//! ```
//!
//! ## Architecture
//!
//! - The CPU never owns memory. Every operation borrows a [`MemoryBus`]
//!   implementation from the caller.
//! - Instruction bodies only touch memory through the CPU's fetch/read
//!   primitives, which keeps cycle accounting uniform across instructions.
//! - Opcode decoding goes through [`OPCODE_TABLE`], a dense 256-entry table of
//!   mnemonic, addressing mode, base cycle cost and size.
//! - Reset, stack and page-crossing behavior are selected by [`CoreConfig`].
//!
//! ## Modules
//!
//! - `cpu` - CPU state, primitives and the execution loop
//! - `memory` - MemoryBus trait and the flat 64KB address space
//! - `cycles` - Cycle budget threaded through every bus operation
//! - `config` - Core configuration
//! - `opcodes` - Opcode constants and metadata table
//! - `addressing` - Addressing mode enumeration

pub mod addressing;
pub mod config;
pub mod cpu;
pub mod cycles;
pub mod memory;
pub mod opcodes;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::AddressingMode;
pub use config::{CoreConfig, PageCrossRule, ResetMode, StackModel};
pub use cpu::CPU;
pub use cycles::CycleBudget;
pub use memory::{AddressSpace, MemoryBus};
pub use opcodes::{Mnemonic, OpcodeMetadata, INSTRUCTIONS, OPCODE_TABLE};

#[cfg(feature = "wasm")]
pub use wasm::Emulator6502;

/// Errors that can occur during CPU execution.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// The fetched opcode has no entry in the opcode table.
    ///
    /// Execution stops at the offending opcode. PC has already moved past it
    /// and its fetch cycle is counted.
    #[error("opcode 0x{opcode:02X} at 0x{pc:04X} is not implemented")]
    UnimplementedOpcode {
        /// The offending opcode byte
        opcode: u8,
        /// Address the opcode was fetched from
        pc: u16,
    },
}
