//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state,
//! the bus primitives instruction bodies use, addressing-mode resolution and
//! the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status flags**: N, V, B, D, I, Z, C (individual bool fields)
//! - **Cycle counter**: u64 running total since the last reset
//!
//! The CPU holds no memory. Each call borrows a `MemoryBus` from the caller.
//!
//! ## Execution Model
//!
//! - `execute()`: Run instructions until a cycle budget is exhausted
//! - `step()`: Run exactly one instruction
//!
//! The budget is only checked between instructions, so `execute()` may
//! consume more cycles than requested.

use crate::addressing::Operand;
use crate::instructions::{control, load_store};
use crate::{
    AddressingMode, CoreConfig, CycleBudget, ExecutionError, MemoryBus, Mnemonic, ResetMode,
    StackModel, OPCODE_TABLE,
};

/// Base address of the hardware stack page.
pub const STACK_PAGE: u16 = 0x0100;

/// 6502 CPU state.
///
/// # Examples
///
/// ```
/// use cyc6502::{opcodes, AddressSpace, CPU};
///
/// let mut memory = AddressSpace::new();
/// let mut cpu = CPU::new();
/// cpu.reset(&mut memory);
///
/// assert_eq!(cpu.pc(), 0xFFFC);
/// assert_eq!(cpu.sp(), 0x00);
/// assert_eq!(cpu.cycles(), 0);
///
/// // LDA $0042
/// memory.write_byte(0xFFFC, opcodes::LDA_ZERO_PAGE);
/// memory.write_byte(0xFFFD, 0x42);
/// memory.write_byte(0x0042, 0x37);
///
/// assert_eq!(cpu.execute(3, &mut memory), Ok(3));
/// assert_eq!(cpu.a(), 0x37);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CPU {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub(crate) sp: u8,

    /// Negative flag (set if bit 7 of result is 1)
    pub(crate) flag_n: bool,

    /// Overflow flag (set on signed overflow)
    pub(crate) flag_v: bool,

    /// Break flag
    pub(crate) flag_b: bool,

    /// Decimal mode flag
    pub(crate) flag_d: bool,

    /// Interrupt disable flag
    pub(crate) flag_i: bool,

    /// Zero flag (set if result is zero)
    pub(crate) flag_z: bool,

    /// Carry flag
    pub(crate) flag_c: bool,

    /// Cycles executed since the last reset
    pub(crate) cycles: u64,

    config: CoreConfig,
}

impl CPU {
    /// Creates a CPU with the default configuration.
    ///
    /// Registers start in their reset state with PC at the reset vector
    /// address; call [`reset`](CPU::reset) to also clear memory.
    pub fn new() -> Self {
        Self::with_config(CoreConfig::default())
    }

    /// Creates a CPU with the given configuration.
    pub fn with_config(config: CoreConfig) -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: config.reset_vector,
            sp: config.stack_model.initial_sp(),
            flag_n: false,
            flag_v: false,
            flag_b: false,
            flag_d: false,
            flag_i: false,
            flag_z: false,
            flag_c: false,
            cycles: 0,
            config,
        }
    }

    /// Returns the configuration this CPU runs with.
    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    /// Resets the CPU through the configured reset vector.
    ///
    /// Zero-fills `memory`, clears A, X, Y, every flag and the cycle counter,
    /// puts SP at the stack model's initial value and loads PC from the
    /// reset vector. Resetting twice leaves the same state as resetting once.
    pub fn reset<M: MemoryBus>(&mut self, memory: &mut M) {
        self.reset_to(self.config.reset_vector, memory);
    }

    /// Resets the CPU through an explicit reset vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyc6502::{AddressSpace, CPU};
    ///
    /// let mut memory = AddressSpace::new();
    /// memory.write_byte(0x1234, 0xFF);
    ///
    /// let mut cpu = CPU::new();
    /// cpu.reset_to(0x8000, &mut memory);
    ///
    /// assert_eq!(cpu.pc(), 0x8000);
    /// assert_eq!(memory.read_byte(0x1234), 0x00);
    /// ```
    pub fn reset_to<M: MemoryBus>(&mut self, reset_vector: u16, memory: &mut M) {
        memory.initialize();
        self.reset_state(reset_vector, memory);
    }

    /// Resets registers and flags without touching memory.
    ///
    /// With [`ResetMode::Indirect`] this is how a program image that already
    /// holds its reset vector gets started.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyc6502::{AddressSpace, CoreConfig, ResetMode, CPU};
    ///
    /// let mut memory = AddressSpace::new();
    /// memory.write_byte(0xFFFC, 0x00);
    /// memory.write_byte(0xFFFD, 0x80);
    ///
    /// let mut cpu = CPU::with_config(CoreConfig::default().with_reset_mode(ResetMode::Indirect));
    /// cpu.reset_registers(&memory);
    ///
    /// assert_eq!(cpu.pc(), 0x8000);
    /// ```
    pub fn reset_registers<M: MemoryBus>(&mut self, memory: &M) {
        self.reset_state(self.config.reset_vector, memory);
    }

    fn reset_state<M: MemoryBus>(&mut self, reset_vector: u16, memory: &M) {
        let config = self.config;
        *self = Self::with_config(config);

        self.pc = match config.reset_mode {
            ResetMode::Literal => reset_vector,
            ResetMode::Indirect => {
                let lo = memory.read(reset_vector) as u16;
                let hi = memory.read(reset_vector.wrapping_add(1)) as u16;
                (hi << 8) | lo
            }
        };

        log::debug!(
            target: "cpu",
            "reset: vector 0x{:04X} ({:?}) -> PC 0x{:04X}, SP 0x{:02X}",
            reset_vector,
            config.reset_mode,
            self.pc,
            self.sp
        );
    }

    // ========== Bus Primitives ==========

    /// Reads the byte at PC and advances PC. Costs 1 cycle.
    pub fn fetch_byte<M: MemoryBus>(&mut self, budget: &mut CycleBudget, memory: &M) -> u8 {
        let data = memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        budget.spend(1);
        data
    }

    /// Reads a little-endian word at PC and advances PC by 2. Costs 2 cycles.
    pub fn fetch_word<M: MemoryBus>(&mut self, budget: &mut CycleBudget, memory: &M) -> u16 {
        let lo = self.fetch_byte(budget, memory) as u16;
        let hi = self.fetch_byte(budget, memory) as u16;
        (hi << 8) | lo
    }

    /// Reads the byte at `addr`. Costs 1 cycle.
    pub fn read_byte<M: MemoryBus>(&self, budget: &mut CycleBudget, addr: u16, memory: &M) -> u8 {
        budget.spend(1);
        memory.read(addr)
    }

    /// Reads a little-endian word from `addr` and `addr + 1`. Costs 2 cycles.
    pub fn read_word<M: MemoryBus>(&self, budget: &mut CycleBudget, addr: u16, memory: &M) -> u16 {
        let lo = self.read_byte(budget, addr, memory) as u16;
        let hi = self.read_byte(budget, addr.wrapping_add(1), memory) as u16;
        (hi << 8) | lo
    }

    /// Reads a pointer from zero page. The high byte comes from `zp + 1`
    /// wrapped within zero page, so a pointer at 0xFF reads 0x00FF and 0x0000.
    /// Costs 2 cycles.
    pub fn read_zero_page_word<M: MemoryBus>(
        &self,
        budget: &mut CycleBudget,
        zp: u8,
        memory: &M,
    ) -> u16 {
        let lo = self.read_byte(budget, zp as u16, memory) as u16;
        let hi = self.read_byte(budget, zp.wrapping_add(1) as u16, memory) as u16;
        (hi << 8) | lo
    }

    /// Writes `value` at `addr`. Costs 1 cycle.
    pub fn write_byte<M: MemoryBus>(
        &self,
        budget: &mut CycleBudget,
        addr: u16,
        value: u8,
        memory: &mut M,
    ) {
        budget.spend(1);
        memory.write(addr, value);
    }

    // ========== Addressing ==========

    /// Resolves the operand of the instruction being executed, consuming its
    /// operand bytes and charging the mode's extra cycles.
    pub(crate) fn resolve_operand<M: MemoryBus>(
        &mut self,
        mode: AddressingMode,
        budget: &mut CycleBudget,
        memory: &M,
    ) -> Operand {
        match mode {
            AddressingMode::Implicit => Operand::Implied,
            AddressingMode::Immediate => Operand::Value(self.fetch_byte(budget, memory)),
            AddressingMode::ZeroPage => Operand::Address(self.fetch_byte(budget, memory) as u16),
            AddressingMode::ZeroPageX => {
                let zp = self.fetch_byte(budget, memory).wrapping_add(self.x);
                budget.spend(1);
                Operand::Address(zp as u16)
            }
            AddressingMode::ZeroPageY => {
                let zp = self.fetch_byte(budget, memory).wrapping_add(self.y);
                budget.spend(1);
                Operand::Address(zp as u16)
            }
            AddressingMode::Absolute => Operand::Address(self.fetch_word(budget, memory)),
            AddressingMode::AbsoluteX => {
                let base = self.fetch_word(budget, memory);
                Operand::Address(self.index_address(base, self.x, budget))
            }
            AddressingMode::AbsoluteY => {
                let base = self.fetch_word(budget, memory);
                Operand::Address(self.index_address(base, self.y, budget))
            }
            AddressingMode::IndirectX => {
                let zp = self.fetch_byte(budget, memory).wrapping_add(self.x);
                budget.spend(1);
                Operand::Address(self.read_zero_page_word(budget, zp, memory))
            }
            AddressingMode::IndirectY => {
                let zp = self.fetch_byte(budget, memory);
                let base = self.read_zero_page_word(budget, zp, memory);
                Operand::Address(self.index_address(base, self.y, budget))
            }
        }
    }

    /// Adds an index register to a 16-bit base, charging the page-crossing
    /// cycle when the configured rule says the adder carried.
    fn index_address(&self, base: u16, index: u8, budget: &mut CycleBudget) -> u16 {
        let effective = base.wrapping_add(index as u16);
        if self.config.page_cross_rule.crossed(base, effective) {
            budget.spend(1);
        }
        effective
    }

    // ========== Stack ==========

    /// Returns the full address SP points at (0x0100-0x01FF).
    pub fn stack_address(&self) -> u16 {
        STACK_PAGE | self.sp as u16
    }

    /// Pushes a word per the configured stack model. Costs 2 cycles.
    pub(crate) fn push_word<M: MemoryBus>(
        &mut self,
        value: u16,
        budget: &mut CycleBudget,
        memory: &mut M,
    ) {
        match self.config.stack_model {
            StackModel::Ascending => {
                memory.write_word(value, self.stack_address(), budget);
                self.sp = self.sp.wrapping_add(2);
            }
            StackModel::Descending => {
                self.write_byte(budget, self.stack_address(), (value >> 8) as u8, memory);
                self.sp = self.sp.wrapping_sub(1);
                self.write_byte(budget, self.stack_address(), (value & 0xFF) as u8, memory);
                self.sp = self.sp.wrapping_sub(1);
            }
        }
    }

    /// Pulls a word pushed by [`push_word`](CPU::push_word). Costs 2 cycles.
    pub(crate) fn pull_word<M: MemoryBus>(&mut self, budget: &mut CycleBudget, memory: &M) -> u16 {
        match self.config.stack_model {
            StackModel::Ascending => {
                self.sp = self.sp.wrapping_sub(2);
                self.read_word(budget, self.stack_address(), memory)
            }
            StackModel::Descending => {
                self.sp = self.sp.wrapping_add(1);
                let lo = self.read_byte(budget, self.stack_address(), memory) as u16;
                self.sp = self.sp.wrapping_add(1);
                let hi = self.read_byte(budget, self.stack_address(), memory) as u16;
                (hi << 8) | lo
            }
        }
    }

    // ========== Execution ==========

    /// Runs instructions until `requested_cycles` are used up and returns the
    /// number of cycles consumed.
    ///
    /// The budget is checked only between instructions: an instruction that
    /// starts with budget left always completes, so the result may exceed the
    /// request. A request of zero or less does nothing and returns 0. The
    /// returned count saturates at `i32::MAX`; [`cycles`](CPU::cycles) always
    /// advances by the exact amount.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionError::UnimplementedOpcode`] when the fetched opcode
    /// has no table entry. Execution stops at that point.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyc6502::{opcodes, AddressSpace, CPU};
    ///
    /// let mut memory = AddressSpace::new();
    /// let mut cpu = CPU::new();
    /// cpu.reset(&mut memory);
    ///
    /// memory.write_byte(0xFFFC, opcodes::LDA_IMMEDIATE);
    /// memory.write_byte(0xFFFD, 0x84);
    ///
    /// // One cycle requested, but LDA #imm needs two
    /// assert_eq!(cpu.execute(1, &mut memory), Ok(2));
    /// ```
    pub fn execute<M: MemoryBus>(
        &mut self,
        requested_cycles: i32,
        memory: &mut M,
    ) -> Result<i32, ExecutionError> {
        let mut budget = CycleBudget::new(requested_cycles);

        let mut outcome = Ok(());
        while !budget.is_exhausted() {
            outcome = self.execute_instruction(&mut budget, memory);
            if outcome.is_err() {
                break;
            }
        }

        self.finish(&budget, outcome)
    }

    /// Runs exactly one instruction and returns its cycle cost.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyc6502::{opcodes, AddressSpace, CPU};
    ///
    /// let mut memory = AddressSpace::new();
    /// let mut cpu = CPU::new();
    /// cpu.reset(&mut memory);
    ///
    /// memory.load(0xFFFC, &[opcodes::JSR_ABSOLUTE, 0x00, 0x80]);
    ///
    /// assert_eq!(cpu.step(&mut memory), Ok(6));
    /// assert_eq!(cpu.pc(), 0x8000);
    /// ```
    pub fn step<M: MemoryBus>(&mut self, memory: &mut M) -> Result<i32, ExecutionError> {
        let mut budget = CycleBudget::new(0);
        let outcome = self.execute_instruction(&mut budget, memory);
        self.finish(&budget, outcome)
    }

    /// Adds the cycles charged to `budget` to the running total and reports them.
    fn finish(
        &mut self,
        budget: &CycleBudget,
        outcome: Result<(), ExecutionError>,
    ) -> Result<i32, ExecutionError> {
        self.cycles += budget.used().max(0) as u64;
        outcome.map(|()| budget.used_saturating())
    }

    fn execute_instruction<M: MemoryBus>(
        &mut self,
        budget: &mut CycleBudget,
        memory: &mut M,
    ) -> Result<(), ExecutionError> {
        let pc = self.pc;
        let opcode = self.fetch_byte(budget, &*memory);

        let Some(metadata) = OPCODE_TABLE[opcode as usize] else {
            log::warn!(target: "cpu", "halting on unimplemented opcode 0x{:02X} at 0x{:04X}", opcode, pc);
            return Err(ExecutionError::UnimplementedOpcode { opcode, pc });
        };

        log::trace!(
            target: "cpu",
            "{:04X}  {:02X}  {} {:?}",
            pc,
            opcode,
            metadata.mnemonic,
            metadata.addressing_mode
        );

        let mode = metadata.addressing_mode;
        match metadata.mnemonic {
            Mnemonic::Lda => load_store::execute_lda(self, mode, budget, &*memory),
            Mnemonic::Ldx => load_store::execute_ldx(self, mode, budget, &*memory),
            Mnemonic::Ldy => load_store::execute_ldy(self, mode, budget, &*memory),
            Mnemonic::Jsr => control::execute_jsr(self, budget, memory),
            Mnemonic::Rts => control::execute_rts(self, budget, &*memory),
        }

        Ok(())
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// The full stack address is 0x0100 + SP.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register as a packed byte.
    ///
    /// Bit layout (NV-BDIZC):
    /// - Bit 7: N (Negative)
    /// - Bit 6: V (Overflow)
    /// - Bit 5: (unused, always 1)
    /// - Bit 4: B (Break)
    /// - Bit 3: D (Decimal)
    /// - Bit 2: I (Interrupt Disable)
    /// - Bit 1: Z (Zero)
    /// - Bit 0: C (Carry)
    ///
    /// # Examples
    ///
    /// ```
    /// use cyc6502::CPU;
    ///
    /// let mut cpu = CPU::new();
    /// assert_eq!(cpu.status(), 0b00100000);
    ///
    /// cpu.set_flag_n(true);
    /// cpu.set_flag_c(true);
    /// assert_eq!(cpu.status(), 0b10100001);
    /// ```
    pub fn status(&self) -> u8 {
        let mut status: u8 = 0b00100000;

        if self.flag_n {
            status |= 0b10000000;
        }
        if self.flag_v {
            status |= 0b01000000;
        }
        if self.flag_b {
            status |= 0b00010000;
        }
        if self.flag_d {
            status |= 0b00001000;
        }
        if self.flag_i {
            status |= 0b00000100;
        }
        if self.flag_z {
            status |= 0b00000010;
        }
        if self.flag_c {
            status |= 0b00000001;
        }

        status
    }

    /// Returns the number of cycles executed since the last reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.flag_n
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.flag_v
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.flag_b
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.flag_d
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.flag_i
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.flag_z
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.flag_c
    }

    // ========== Setters (test harness preconditions) ==========

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Sets the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.flag_n = value;
    }

    /// Sets the Overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.flag_v = value;
    }

    /// Sets the Break flag.
    pub fn set_flag_b(&mut self, value: bool) {
        self.flag_b = value;
    }

    /// Sets the Decimal mode flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.flag_d = value;
    }

    /// Sets the Interrupt Disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.flag_i = value;
    }

    /// Sets the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.flag_z = value;
    }

    /// Sets the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.flag_c = value;
    }
}

impl Default for CPU {
    fn default() -> Self {
        Self::new()
    }
}
