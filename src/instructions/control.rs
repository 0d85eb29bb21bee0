//! # Control Flow Instructions
//!
//! - JSR: Jump to Subroutine
//! - RTS: Return from Subroutine
//!
//! Both go through the CPU's stack helpers, so the configured stack model
//! decides where the return address lives. Neither touches a flag.

use crate::{CycleBudget, MemoryBus, CPU};

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// 1. Fetches the 16-bit target address
/// 2. Pushes PC - 1, the address of the last byte of the JSR itself
/// 3. Loads PC with the target
///
/// Cycle timing: 6 cycles (opcode 1, target 2, push 2, internal 1)
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut CPU, budget: &mut CycleBudget, memory: &mut M) {
    let target = cpu.fetch_word(budget, &*memory);
    let return_address = cpu.pc.wrapping_sub(1);

    cpu.push_word(return_address, budget, memory);
    cpu.pc = target;
    budget.spend(1);
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// Pulls the address JSR pushed and resumes at the byte after it.
///
/// Cycle timing: 6 cycles (opcode 1, pull 2, internal 3)
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU, budget: &mut CycleBudget, memory: &M) {
    let return_address = cpu.pull_word(budget, memory);
    cpu.pc = return_address.wrapping_add(1);
    budget.spend(3);
}
