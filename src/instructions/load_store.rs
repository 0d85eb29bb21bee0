//! # Load Instructions
//!
//! This module implements the load family:
//! - LDA: Load Accumulator
//! - LDX: Load X Register
//! - LDY: Load Y Register
//!
//! Every load sets Z and N from the loaded value and leaves C, I, D, B and V
//! untouched.

use crate::addressing::Operand;
use crate::{AddressingMode, CycleBudget, MemoryBus, CPU};

/// Resolves the operand for `mode` and reads the value it designates.
fn load_operand<M: MemoryBus>(
    cpu: &mut CPU,
    mode: AddressingMode,
    budget: &mut CycleBudget,
    memory: &M,
) -> u8 {
    match cpu.resolve_operand(mode, budget, memory) {
        Operand::Value(value) => value,
        Operand::Address(addr) => cpu.read_byte(budget, addr, memory),
        Operand::Implied => cpu.a,
    }
}

/// Zero flag: set if the value is 0. Negative flag: set if bit 7 is set.
fn set_zero_and_negative(cpu: &mut CPU, value: u8) {
    cpu.flag_z = value == 0;
    cpu.flag_n = (value & 0x80) != 0;
}

/// Executes the LDA (Load Accumulator) instruction.
///
/// # Cycle timing
///
/// - Immediate: 2, Zero Page: 3, Zero Page,X: 4, Absolute: 4
/// - Absolute,X / Absolute,Y: 4 (+1 if page crossed)
/// - (Indirect,X): 6, (Indirect),Y: 5 (+1 if page crossed)
pub(crate) fn execute_lda<M: MemoryBus>(
    cpu: &mut CPU,
    mode: AddressingMode,
    budget: &mut CycleBudget,
    memory: &M,
) {
    let value = load_operand(cpu, mode, budget, memory);
    cpu.a = value;
    set_zero_and_negative(cpu, value);
}

/// Executes the LDX (Load X Register) instruction.
///
/// Supports Immediate, Zero Page, Zero Page,Y, Absolute and Absolute,Y.
pub(crate) fn execute_ldx<M: MemoryBus>(
    cpu: &mut CPU,
    mode: AddressingMode,
    budget: &mut CycleBudget,
    memory: &M,
) {
    let value = load_operand(cpu, mode, budget, memory);
    cpu.x = value;
    set_zero_and_negative(cpu, value);
}

/// Executes the LDY (Load Y Register) instruction.
///
/// Supports Immediate, Zero Page, Zero Page,X, Absolute and Absolute,X.
pub(crate) fn execute_ldy<M: MemoryBus>(
    cpu: &mut CPU,
    mode: AddressingMode,
    budget: &mut CycleBudget,
    memory: &M,
) {
    let value = load_operand(cpu, mode, budget, memory);
    cpu.y = value;
    set_zero_and_negative(cpu, value);
}
