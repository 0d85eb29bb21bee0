//! # 6502 Instruction Implementations
//!
//! Each instruction is a standalone function taking the CPU, the cycle budget
//! and the memory bus. The opcode byte has already been fetched and charged by
//! the execution loop when a body runs.
//!
//! ## Categories
//!
//! - **load_store**: Load instructions (LDA, LDX, LDY)
//! - **control**: Subroutine call and return (JSR, RTS)

pub mod control;
pub mod load_store;
