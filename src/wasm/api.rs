//! WASM API for the 6502 core.
//!
//! Provides JavaScript-callable interfaces for reset, execution, memory access
//! and state inspection.

use crate::{AddressSpace, CoreConfig, ExecutionError, CPU};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl From<ExecutionError> for JsError {
    fn from(error: ExecutionError) -> Self {
        JsError::new(&error.to_string())
    }
}

/// Emulator handle owning a CPU and its 64KB address space.
#[wasm_bindgen]
pub struct Emulator6502 {
    cpu: CPU,
    memory: AddressSpace,
}

#[wasm_bindgen]
impl Emulator6502 {
    /// Create an emulator with the default configuration, already reset
    #[wasm_bindgen(constructor)]
    pub fn new() -> Emulator6502 {
        let mut memory = AddressSpace::new();
        let mut cpu = CPU::with_config(CoreConfig::default());
        cpu.reset(&mut memory);

        Emulator6502 { cpu, memory }
    }

    /// Reset the CPU and clear memory
    pub fn reset(&mut self) {
        self.cpu.reset(&mut self.memory);
    }

    /// Reset the CPU through an explicit vector and clear memory
    pub fn reset_to(&mut self, reset_vector: u16) {
        self.cpu.reset_to(reset_vector, &mut self.memory);
    }

    /// Execute a single instruction and return its cycle cost
    pub fn step(&mut self) -> Result<i32, JsError> {
        Ok(self.cpu.step(&mut self.memory)?)
    }

    /// Execute for a cycle budget and return the cycles actually consumed
    pub fn execute(&mut self, cycles: i32) -> Result<i32, JsError> {
        Ok(self.cpu.execute(cycles, &mut self.memory)?)
    }

    /// Copy a program image into memory at `start_addr`
    pub fn load_program(&mut self, program: &[u8], start_addr: u16) {
        self.memory.load(start_addr, program);
    }

    /// Read a single byte from memory
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.memory.read_byte(addr)
    }

    /// Write a single byte to memory
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.memory.write_byte(addr, value);
    }

    /// Copy of one 256-byte page (0x00 = zero page, 0x01 = stack)
    pub fn memory_page(&self, page: u8) -> js_sys::Uint8Array {
        js_sys::Uint8Array::from(self.memory.page(page))
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.cpu.cycles() as f64 // Convert u64 to f64 for JavaScript
    }

    // Flag getters
    #[wasm_bindgen(getter)]
    pub fn flag_n(&self) -> bool {
        self.cpu.flag_n()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_v(&self) -> bool {
        self.cpu.flag_v()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_b(&self) -> bool {
        self.cpu.flag_b()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_d(&self) -> bool {
        self.cpu.flag_d()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_i(&self) -> bool {
        self.cpu.flag_i()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_z(&self) -> bool {
        self.cpu.flag_z()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_c(&self) -> bool {
        self.cpu.flag_c()
    }
}

impl Default for Emulator6502 {
    fn default() -> Self {
        Self::new()
    }
}
