//! Fuzz target for CPU step execution.
//!
//! This target creates arbitrary CPU states, configurations and memory
//! contents, then executes one instruction looking for panics and broken
//! cycle accounting.

#![no_main]

use arbitrary::Arbitrary;
use cyc6502::{AddressSpace, CoreConfig, PageCrossRule, StackModel, CPU, OPCODE_TABLE};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    /// Accumulator register
    a: u8,
    /// X index register
    x: u8,
    /// Y index register
    y: u8,
    /// Stack pointer
    sp: u8,
    /// Program counter
    pc: u16,
    /// Carry flag
    flag_c: bool,
    /// Zero flag
    flag_z: bool,
    /// Interrupt disable flag
    flag_i: bool,
    /// Decimal mode flag
    flag_d: bool,
    /// Break flag
    flag_b: bool,
    /// Overflow flag
    flag_v: bool,
    /// Negative flag
    flag_n: bool,
    /// Use the descending stack
    descending_stack: bool,
    /// Use the displacement page-crossing rule
    displacement_rule: bool,
}

/// Memory region for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (instruction + operands)
    instruction_bytes: [u8; 3],
    /// Zero page contents
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
    /// Small region of memory for absolute addressing
    main_memory: [u8; 256],
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
}

fuzz_target!(|input: FuzzInput| {
    let state = &input.cpu_state;

    let mut config = CoreConfig::default();
    if state.descending_stack {
        config = config.with_stack_model(StackModel::Descending);
    }
    if state.displacement_rule {
        config = config.with_page_cross_rule(PageCrossRule::Displacement);
    }

    let mut memory = AddressSpace::new();
    memory.load(0x0000, &input.memory.zero_page);
    memory.load(0x0100, &input.memory.stack_page);
    memory.load(0x4000, &input.memory.main_memory);
    memory.load(state.pc, &input.memory.instruction_bytes);

    let mut cpu = CPU::with_config(config);
    cpu.set_a(state.a);
    cpu.set_x(state.x);
    cpu.set_y(state.y);
    cpu.set_sp(state.sp);
    cpu.set_pc(state.pc);
    cpu.set_flag_c(state.flag_c);
    cpu.set_flag_z(state.flag_z);
    cpu.set_flag_i(state.flag_i);
    cpu.set_flag_d(state.flag_d);
    cpu.set_flag_b(state.flag_b);
    cpu.set_flag_v(state.flag_v);
    cpu.set_flag_n(state.flag_n);

    let opcode = input.memory.instruction_bytes[0];
    let result = cpu.step(&mut memory);

    match OPCODE_TABLE[opcode as usize] {
        Some(metadata) => {
            let cycles = result.expect("implemented opcode must execute");
            let base = metadata.base_cycles as i32;
            assert!(cycles == base || cycles == base + 1);
            assert_eq!(cpu.cycles(), cycles as u64);
        }
        None => {
            assert!(result.is_err());
            assert_eq!(cpu.pc(), state.pc.wrapping_add(1));
            assert_eq!(cpu.cycles(), 1);
        }
    }
});
