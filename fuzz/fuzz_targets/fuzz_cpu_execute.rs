//! Fuzz target for budgeted execution of arbitrary programs.
//!
//! Loads an arbitrary image at the reset vector and runs it for an arbitrary
//! cycle budget. Checks the budget contract whenever the run finishes
//! without hitting an unimplemented opcode.

#![no_main]

use arbitrary::Arbitrary;
use cyc6502::{AddressSpace, CPU};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    /// Requested cycle budget
    requested: i16,
    /// Program image placed at 0x8000
    program: Vec<u8>,
    /// Zero page contents
    zero_page: [u8; 256],
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = AddressSpace::new();
    let mut cpu = CPU::new();
    cpu.reset_to(0x8000, &mut memory);

    memory.load(0x0000, &input.zero_page);
    memory.load(0x8000, &input.program);

    let requested = input.requested as i32;
    let before = cpu.clone();

    match cpu.execute(requested, &mut memory) {
        Ok(used) if requested <= 0 => {
            assert_eq!(used, 0);
            assert_eq!(cpu, before);
        }
        Ok(used) => {
            // An instruction never costs more than 7 cycles
            assert!(used >= requested);
            assert!(used < requested + 7);
            assert_eq!(cpu.cycles(), used as u64);
        }
        Err(_) => {}
    }
});
