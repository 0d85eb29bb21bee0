//! Comprehensive tests for the LDA (Load Accumulator) instruction.
//!
//! Tests cover:
//! - All 8 addressing modes
//! - Flag updates (Z, N) and preservation of C, I, D, B, V
//! - Cycle counts including page crossing penalties
//! - Zero page wraparound for indexed and indirect modes

use cyc6502::{opcodes, AddressSpace, CoreConfig, PageCrossRule, CPU};

/// Helper function to create a reset CPU and its memory. PC starts at 0xFFFC.
fn setup_cpu() -> (CPU, AddressSpace) {
    let mut memory = AddressSpace::new();
    let mut cpu = CPU::new();
    cpu.reset(&mut memory);
    (cpu, memory)
}

/// Loads must leave every flag other than Z and N alone.
fn assert_unmodified_flags(cpu: &CPU, before: &CPU) {
    assert_eq!(cpu.flag_c(), before.flag_c());
    assert_eq!(cpu.flag_i(), before.flag_i());
    assert_eq!(cpu.flag_d(), before.flag_d());
    assert_eq!(cpu.flag_b(), before.flag_b());
    assert_eq!(cpu.flag_v(), before.flag_v());
}

// ========== Immediate ==========

#[test]
fn test_lda_immediate_loads_value() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.write_byte(0xFFFC, opcodes::LDA_IMMEDIATE);
    memory.write_byte(0xFFFD, 0x84);
    let before = cpu.clone();

    let cycles_used = cpu.execute(2, &mut memory).unwrap();

    assert_eq!(cpu.a(), 0x84);
    assert_eq!(cycles_used, 2);
    assert!(!cpu.flag_z());
    assert!(cpu.flag_n());
    assert_eq!(cpu.pc(), 0xFFFE);
    assert_unmodified_flags(&cpu, &before);
}

#[test]
fn test_lda_immediate_sets_zero_flag() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.set_a(0x44);
    memory.write_byte(0xFFFC, opcodes::LDA_IMMEDIATE);
    memory.write_byte(0xFFFD, 0x00);
    let before = cpu.clone();

    cpu.execute(2, &mut memory).unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_unmodified_flags(&cpu, &before);
}

#[test]
fn test_lda_clears_negative_and_zero_flags() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.set_flag_n(true);
    cpu.set_flag_z(true);
    memory.write_byte(0xFFFC, opcodes::LDA_IMMEDIATE);
    memory.write_byte(0xFFFD, 0x7F);

    cpu.execute(2, &mut memory).unwrap();

    assert_eq!(cpu.a(), 0x7F);
    assert!(!cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_lda_preserves_other_flags_when_all_set() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.set_flag_c(true);
    cpu.set_flag_i(true);
    cpu.set_flag_d(true);
    cpu.set_flag_b(true);
    cpu.set_flag_v(true);
    memory.write_byte(0xFFFC, opcodes::LDA_IMMEDIATE);
    memory.write_byte(0xFFFD, 0x00);
    let before = cpu.clone();

    cpu.execute(2, &mut memory).unwrap();

    assert!(cpu.flag_z());
    assert_unmodified_flags(&cpu, &before);
}

// ========== Zero Page ==========

#[test]
fn test_lda_zero_page() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.write_byte(0xFFFC, opcodes::LDA_ZERO_PAGE);
    memory.write_byte(0xFFFD, 0x42);
    memory.write_byte(0x0042, 0x37);
    let before = cpu.clone();

    let cycles_used = cpu.execute(3, &mut memory).unwrap();

    assert_eq!(cpu.a(), 0x37);
    assert_eq!(cycles_used, 3);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_unmodified_flags(&cpu, &before);
}

#[test]
fn test_lda_zero_page_x() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.set_x(5);
    memory.write_byte(0xFFFC, opcodes::LDA_ZERO_PAGE_X);
    memory.write_byte(0xFFFD, 0x42);
    memory.write_byte(0x0047, 0x37);
    let before = cpu.clone();

    let cycles_used = cpu.execute(4, &mut memory).unwrap();

    assert_eq!(cpu.a(), 0x37);
    assert_eq!(cycles_used, 4);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_unmodified_flags(&cpu, &before);
}

#[test]
fn test_lda_zero_page_x_wraps_within_zero_page() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.set_x(0xFF);
    memory.write_byte(0xFFFC, opcodes::LDA_ZERO_PAGE_X);
    memory.write_byte(0xFFFD, 0x80);
    memory.write_byte(0x007F, 0x37);
    memory.write_byte(0x017F, 0x99); // Must not be read
    let before = cpu.clone();

    let cycles_used = cpu.execute(4, &mut memory).unwrap();

    assert_eq!(cpu.a(), 0x37);
    assert_eq!(cycles_used, 4);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_unmodified_flags(&cpu, &before);
}

// ========== Absolute ==========

#[test]
fn test_lda_absolute() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.write_byte(0xFFFC, opcodes::LDA_ABSOLUTE);
    memory.write_byte(0xFFFD, 0x80);
    memory.write_byte(0xFFFE, 0x44); // 0x4480
    memory.write_byte(0x4480, 0x37);
    let before = cpu.clone();

    let cycles_used = cpu.execute(4, &mut memory).unwrap();

    assert_eq!(cpu.a(), 0x37);
    assert_eq!(cycles_used, 4);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_unmodified_flags(&cpu, &before);
}

#[test]
fn test_lda_absolute_updates_flags() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.write_byte(0xFFFC, opcodes::LDA_ABSOLUTE);
    memory.write_byte(0xFFFD, 0x80);
    memory.write_byte(0xFFFE, 0x44);
    memory.write_byte(0x4480, 0x80);

    cpu.execute(4, &mut memory).unwrap();

    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_lda_absolute_x() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.set_x(1);
    memory.write_byte(0xFFFC, opcodes::LDA_ABSOLUTE_X);
    memory.write_byte(0xFFFD, 0x80);
    memory.write_byte(0xFFFE, 0x44); // 0x4480
    memory.write_byte(0x4481, 0x37);
    let before = cpu.clone();

    let cycles_used = cpu.execute(4, &mut memory).unwrap();

    assert_eq!(cpu.a(), 0x37);
    assert_eq!(cycles_used, 4);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_unmodified_flags(&cpu, &before);
}

#[test]
fn test_lda_absolute_x_page_crossing() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.set_x(0xFF);
    memory.write_byte(0xFFFC, opcodes::LDA_ABSOLUTE_X);
    memory.write_byte(0xFFFD, 0x02);
    memory.write_byte(0xFFFE, 0x44); // 0x4402
    memory.write_byte(0x4501, 0x37); // 0x4402 + 0xFF crosses page boundary
    let before = cpu.clone();

    let cycles_used = cpu.execute(5, &mut memory).unwrap();

    assert_eq!(cpu.a(), 0x37);
    assert_eq!(cycles_used, 5);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_unmodified_flags(&cpu, &before);
}

#[test]
fn test_lda_absolute_x_index_ff_without_crossing() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.set_x(0xFF);
    memory.write_byte(0xFFFC, opcodes::LDA_ABSOLUTE_X);
    memory.write_byte(0xFFFD, 0x00);
    memory.write_byte(0xFFFE, 0x44); // 0x4400 + 0xFF stays in page 0x44
    memory.write_byte(0x44FF, 0x37);

    let cycles_used = cpu.execute(4, &mut memory).unwrap();

    assert_eq!(cpu.a(), 0x37);
    assert_eq!(cycles_used, 4);
}

#[test]
fn test_lda_absolute_x_displacement_rule_charges_index_ff() {
    let mut memory = AddressSpace::new();
    let mut cpu = CPU::with_config(
        CoreConfig::default().with_page_cross_rule(PageCrossRule::Displacement),
    );
    cpu.reset(&mut memory);
    cpu.set_x(0xFF);
    memory.write_byte(0xFFFC, opcodes::LDA_ABSOLUTE_X);
    memory.write_byte(0xFFFD, 0x00);
    memory.write_byte(0xFFFE, 0x44);
    memory.write_byte(0x44FF, 0x37);

    let cycles_used = cpu.execute(4, &mut memory).unwrap();

    assert_eq!(cpu.a(), 0x37);
    assert_eq!(cycles_used, 5);
}

#[test]
fn test_lda_absolute_x_wraps_address_space() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.set_x(0x10);
    memory.write_byte(0xFFFC, opcodes::LDA_ABSOLUTE_X);
    memory.write_byte(0xFFFD, 0xF8);
    memory.write_byte(0xFFFE, 0xFF); // 0xFFF8 + 0x10 = 0x0008
    memory.write_byte(0x0008, 0x37);

    let cycles_used = cpu.execute(4, &mut memory).unwrap();

    assert_eq!(cpu.a(), 0x37);
    assert_eq!(cycles_used, 5);
}

#[test]
fn test_lda_absolute_y() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.set_y(1);
    memory.write_byte(0xFFFC, opcodes::LDA_ABSOLUTE_Y);
    memory.write_byte(0xFFFD, 0x80);
    memory.write_byte(0xFFFE, 0x44); // 0x4480
    memory.write_byte(0x4481, 0x37);
    let before = cpu.clone();

    let cycles_used = cpu.execute(4, &mut memory).unwrap();

    assert_eq!(cpu.a(), 0x37);
    assert_eq!(cycles_used, 4);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_unmodified_flags(&cpu, &before);
}

#[test]
fn test_lda_absolute_y_page_crossing() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.set_y(0xFF);
    memory.write_byte(0xFFFC, opcodes::LDA_ABSOLUTE_Y);
    memory.write_byte(0xFFFD, 0x02);
    memory.write_byte(0xFFFE, 0x44); // 0x4402
    memory.write_byte(0x4501, 0x37); // 0x4402 + 0xFF crosses page boundary
    let before = cpu.clone();

    let cycles_used = cpu.execute(5, &mut memory).unwrap();

    assert_eq!(cpu.a(), 0x37);
    assert_eq!(cycles_used, 5);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_unmodified_flags(&cpu, &before);
}

// ========== Indirect ==========

#[test]
fn test_lda_indirect_x() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.set_x(0x04);
    memory.write_byte(0xFFFC, opcodes::LDA_INDIRECT_X);
    memory.write_byte(0xFFFD, 0x02);
    memory.write_byte(0x0006, 0x00); // 0x02 + 0x04
    memory.write_byte(0x0007, 0x80);
    memory.write_byte(0x8000, 0x37);
    let before = cpu.clone();

    let cycles_used = cpu.execute(6, &mut memory).unwrap();

    assert_eq!(cpu.a(), 0x37);
    assert_eq!(cycles_used, 6);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_unmodified_flags(&cpu, &before);
}

#[test]
fn test_lda_indirect_x_pointer_wraps_within_zero_page() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.set_x(0x01);
    memory.write_byte(0xFFFC, opcodes::LDA_INDIRECT_X);
    memory.write_byte(0xFFFD, 0xFE); // 0xFE + 0x01 = 0xFF
    memory.write_byte(0x00FF, 0x00); // pointer low
    memory.write_byte(0x0000, 0x80); // pointer high wraps to 0x0000
    memory.write_byte(0x0100, 0x12); // not part of the pointer
    memory.write_byte(0x8000, 0x37);

    let cycles_used = cpu.execute(6, &mut memory).unwrap();

    assert_eq!(cpu.a(), 0x37);
    assert_eq!(cycles_used, 6);
}

#[test]
fn test_lda_indirect_y() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.set_y(0x04);
    memory.write_byte(0xFFFC, opcodes::LDA_INDIRECT_Y);
    memory.write_byte(0xFFFD, 0x02);
    memory.write_byte(0x0002, 0x00);
    memory.write_byte(0x0003, 0x80);
    memory.write_byte(0x8004, 0x37); // 0x8000 + 0x04
    let before = cpu.clone();

    let cycles_used = cpu.execute(5, &mut memory).unwrap();

    assert_eq!(cpu.a(), 0x37);
    assert_eq!(cycles_used, 5);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_unmodified_flags(&cpu, &before);
}

#[test]
fn test_lda_indirect_y_page_crossing() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.set_y(0xFF);
    memory.write_byte(0xFFFC, opcodes::LDA_INDIRECT_Y);
    memory.write_byte(0xFFFD, 0x02);
    memory.write_byte(0x0002, 0x02);
    memory.write_byte(0x0003, 0x80);
    memory.write_byte(0x8101, 0x37); // 0x8002 + 0xFF
    let before = cpu.clone();

    let cycles_used = cpu.execute(6, &mut memory).unwrap();

    assert_eq!(cpu.a(), 0x37);
    assert_eq!(cycles_used, 6);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_unmodified_flags(&cpu, &before);
}

// ========== Sequencing ==========

#[test]
fn test_lda_sequence_runs_until_budget_spent() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.set_pc(0x8000);
    // LDA #$01 ; LDA $10 ; LDA #$00
    memory.load(0x8000, &[0xA9, 0x01, 0xA5, 0x10, 0xA9, 0x00]);
    memory.write_byte(0x0010, 0x90);

    let cycles_used = cpu.execute(5, &mut memory).unwrap();

    // 2 + 3 = 5: the third load never starts
    assert_eq!(cycles_used, 5);
    assert_eq!(cpu.a(), 0x90);
    assert!(cpu.flag_n());
    assert_eq!(cpu.pc(), 0x8004);
}
