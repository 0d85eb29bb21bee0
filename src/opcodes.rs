//! # Opcode Metadata Table
//!
//! Stable opcode constants and the 256-entry table the execution loop decodes
//! through. Assemblers, loaders and test harnesses use the constants to build
//! program images.
//!
//! Each defined entry records:
//! - Mnemonic (operation tag)
//! - Addressing mode
//! - Base cycle cost (excluding page-crossing penalties)
//! - Instruction size in bytes
//!
//! Opcodes with no entry are rejected by the CPU.

use crate::addressing::AddressingMode;

pub const LDA_IMMEDIATE: u8 = 0xA9;
pub const LDA_ZERO_PAGE: u8 = 0xA5;
pub const LDA_ZERO_PAGE_X: u8 = 0xB5;
pub const LDA_ABSOLUTE: u8 = 0xAD;
pub const LDA_ABSOLUTE_X: u8 = 0xBD;
pub const LDA_ABSOLUTE_Y: u8 = 0xB9;
pub const LDA_INDIRECT_X: u8 = 0xA1;
pub const LDA_INDIRECT_Y: u8 = 0xB1;

pub const LDX_IMMEDIATE: u8 = 0xA2;
pub const LDX_ZERO_PAGE: u8 = 0xA6;
pub const LDX_ZERO_PAGE_Y: u8 = 0xB6;
pub const LDX_ABSOLUTE: u8 = 0xAE;
pub const LDX_ABSOLUTE_Y: u8 = 0xBE;

pub const LDY_IMMEDIATE: u8 = 0xA0;
pub const LDY_ZERO_PAGE: u8 = 0xA4;
pub const LDY_ZERO_PAGE_X: u8 = 0xB4;
pub const LDY_ABSOLUTE: u8 = 0xAC;
pub const LDY_ABSOLUTE_X: u8 = 0xBC;

pub const JSR_ABSOLUTE: u8 = 0x20;
pub const RTS_IMPLICIT: u8 = 0x60;

/// Operation performed by an opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    /// Load Accumulator
    Lda,
    /// Load X Register
    Ldx,
    /// Load Y Register
    Ldy,
    /// Jump to Subroutine
    Jsr,
    /// Return from Subroutine
    Rts,
}

impl Mnemonic {
    /// Assembler spelling of the mnemonic.
    pub fn as_str(self) -> &'static str {
        match self {
            Mnemonic::Lda => "LDA",
            Mnemonic::Ldx => "LDX",
            Mnemonic::Ldy => "LDY",
            Mnemonic::Jsr => "JSR",
            Mnemonic::Rts => "RTS",
        }
    }
}

impl std::fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata for a single 6502 opcode.
///
/// # Examples
///
/// ```
/// use cyc6502::{AddressingMode, Mnemonic, OPCODE_TABLE};
///
/// // Look up LDA immediate (opcode 0xA9)
/// let lda_imm = OPCODE_TABLE[0xA9].unwrap();
/// assert_eq!(lda_imm.mnemonic, Mnemonic::Lda);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes, 2);
///
/// // Opcodes outside the implemented set have no entry
/// assert!(OPCODE_TABLE[0xEA].is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Opcode byte value.
    pub opcode: u8,

    /// Operation tag.
    pub mnemonic: Mnemonic,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Base cycle cost (before page crossing penalties).
    pub base_cycles: u8,

    /// Total instruction size in bytes (opcode + operands).
    pub size_bytes: u8,
}

const fn entry(
    opcode: u8,
    mnemonic: Mnemonic,
    addressing_mode: AddressingMode,
    base_cycles: u8,
) -> OpcodeMetadata {
    let operand_bytes = match addressing_mode {
        AddressingMode::Implicit => 0,
        AddressingMode::Absolute | AddressingMode::AbsoluteX | AddressingMode::AbsoluteY => 2,
        _ => 1,
    };

    OpcodeMetadata {
        opcode,
        mnemonic,
        addressing_mode,
        base_cycles,
        size_bytes: 1 + operand_bytes,
    }
}

/// Every implemented instruction, in opcode order within each family.
pub const INSTRUCTIONS: [OpcodeMetadata; 20] = [
    entry(LDA_IMMEDIATE, Mnemonic::Lda, AddressingMode::Immediate, 2),
    entry(LDA_ZERO_PAGE, Mnemonic::Lda, AddressingMode::ZeroPage, 3),
    entry(LDA_ZERO_PAGE_X, Mnemonic::Lda, AddressingMode::ZeroPageX, 4),
    entry(LDA_ABSOLUTE, Mnemonic::Lda, AddressingMode::Absolute, 4),
    entry(LDA_ABSOLUTE_X, Mnemonic::Lda, AddressingMode::AbsoluteX, 4),
    entry(LDA_ABSOLUTE_Y, Mnemonic::Lda, AddressingMode::AbsoluteY, 4),
    entry(LDA_INDIRECT_X, Mnemonic::Lda, AddressingMode::IndirectX, 6),
    entry(LDA_INDIRECT_Y, Mnemonic::Lda, AddressingMode::IndirectY, 5),
    entry(LDX_IMMEDIATE, Mnemonic::Ldx, AddressingMode::Immediate, 2),
    entry(LDX_ZERO_PAGE, Mnemonic::Ldx, AddressingMode::ZeroPage, 3),
    entry(LDX_ZERO_PAGE_Y, Mnemonic::Ldx, AddressingMode::ZeroPageY, 4),
    entry(LDX_ABSOLUTE, Mnemonic::Ldx, AddressingMode::Absolute, 4),
    entry(LDX_ABSOLUTE_Y, Mnemonic::Ldx, AddressingMode::AbsoluteY, 4),
    entry(LDY_IMMEDIATE, Mnemonic::Ldy, AddressingMode::Immediate, 2),
    entry(LDY_ZERO_PAGE, Mnemonic::Ldy, AddressingMode::ZeroPage, 3),
    entry(LDY_ZERO_PAGE_X, Mnemonic::Ldy, AddressingMode::ZeroPageX, 4),
    entry(LDY_ABSOLUTE, Mnemonic::Ldy, AddressingMode::Absolute, 4),
    entry(LDY_ABSOLUTE_X, Mnemonic::Ldy, AddressingMode::AbsoluteX, 4),
    entry(JSR_ABSOLUTE, Mnemonic::Jsr, AddressingMode::Absolute, 6),
    entry(RTS_IMPLICIT, Mnemonic::Rts, AddressingMode::Implicit, 6),
];

const fn build_table() -> [Option<OpcodeMetadata>; 256] {
    let mut table = [None; 256];
    let mut i = 0;
    while i < INSTRUCTIONS.len() {
        table[INSTRUCTIONS[i].opcode as usize] = Some(INSTRUCTIONS[i]);
        i += 1;
    }
    table
}

/// Dense 256-entry decode table indexed by opcode byte value.
///
/// `None` marks an opcode the core does not implement.
pub const OPCODE_TABLE: [Option<OpcodeMetadata>; 256] = build_table();
