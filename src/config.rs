//! # Core Configuration
//!
//! Three behaviors of the core have a simplified form and a hardware form:
//! reset vector handling, the page-crossing test and the stack layout.
//! `CoreConfig` picks one of each. The defaults select the simplified forms;
//! [`CoreConfig::hardware`] selects NMOS behavior throughout.

/// Address of the 6502 reset vector.
pub const DEFAULT_RESET_VECTOR: u16 = 0xFFFC;

/// How `CPU::reset` derives the program counter from the reset vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetMode {
    /// The vector address itself becomes the program counter.
    #[default]
    Literal,

    /// The program counter is the little-endian word stored at the vector,
    /// as on real hardware.
    Indirect,
}

/// Rule deciding whether an indexed access crossed a page boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageCrossRule {
    /// The high byte of the base address differs from the high byte of the
    /// indexed address. This is what the 6502's address adder does.
    #[default]
    HighByte,

    /// The 16-bit displacement `(base + index) - base` is at least 0xFF.
    ///
    /// Charges the penalty for any index of 0xFF whether or not a carry
    /// reached the high byte.
    Displacement,
}

impl PageCrossRule {
    /// Returns true if indexing `base` to reach `effective` costs an extra cycle.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyc6502::PageCrossRule;
    ///
    /// assert!(PageCrossRule::HighByte.crossed(0x4402, 0x4501));
    /// assert!(!PageCrossRule::HighByte.crossed(0x4400, 0x44FF));
    /// assert!(PageCrossRule::Displacement.crossed(0x4400, 0x44FF));
    /// ```
    pub fn crossed(self, base: u16, effective: u16) -> bool {
        match self {
            PageCrossRule::HighByte => (base & 0xFF00) != (effective & 0xFF00),
            PageCrossRule::Displacement => effective.wrapping_sub(base) >= 0xFF,
        }
    }
}

/// Direction and layout of the hardware stack in page 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StackModel {
    /// Pushes write a little-endian word at `0x0100 + SP` and advance SP by
    /// two. SP starts at 0x00.
    #[default]
    Ascending,

    /// Pushes store one byte at `0x0100 + SP` then decrement SP, high byte
    /// first, wrapping within page 1. SP starts at 0xFF.
    Descending,
}

impl StackModel {
    /// Stack pointer value right after reset.
    pub fn initial_sp(self) -> u8 {
        match self {
            StackModel::Ascending => 0x00,
            StackModel::Descending => 0xFF,
        }
    }
}

/// Behavior switches for a [`CPU`](crate::CPU).
///
/// # Examples
///
/// ```
/// use cyc6502::{CoreConfig, ResetMode, StackModel, CPU};
///
/// let config = CoreConfig::default()
///     .with_reset_mode(ResetMode::Indirect)
///     .with_stack_model(StackModel::Descending);
///
/// let cpu = CPU::with_config(config);
/// assert_eq!(cpu.config().stack_model, StackModel::Descending);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreConfig {
    /// Reset vector consulted by `CPU::reset`.
    pub reset_vector: u16,

    /// How the reset vector is turned into a program counter.
    pub reset_mode: ResetMode,

    /// Page-crossing penalty rule for Absolute,X, Absolute,Y and (Indirect),Y.
    pub page_cross_rule: PageCrossRule,

    /// Stack layout used by JSR and RTS.
    pub stack_model: StackModel,
}

impl CoreConfig {
    /// Sets the reset vector address.
    pub fn with_reset_vector(mut self, reset_vector: u16) -> Self {
        self.reset_vector = reset_vector;
        self
    }

    /// Sets the reset mode.
    pub fn with_reset_mode(mut self, reset_mode: ResetMode) -> Self {
        self.reset_mode = reset_mode;
        self
    }

    /// Sets the page-crossing rule.
    pub fn with_page_cross_rule(mut self, page_cross_rule: PageCrossRule) -> Self {
        self.page_cross_rule = page_cross_rule;
        self
    }

    /// Sets the stack model.
    pub fn with_stack_model(mut self, stack_model: StackModel) -> Self {
        self.stack_model = stack_model;
        self
    }

    /// Configuration matching NMOS hardware: indirect reset vector, high-byte
    /// page-crossing rule and a descending stack.
    ///
    /// [`CPU::reset`](crate::CPU::reset) zero-fills memory before reading the
    /// vector, so on an [`AddressSpace`](crate::AddressSpace) it always
    /// starts at 0x0000. Load the image first and start it with
    /// [`CPU::reset_registers`](crate::CPU::reset_registers) instead, or use a
    /// bus whose `initialize` leaves the vector in ROM.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyc6502::{opcodes, AddressSpace, CoreConfig, CPU};
    ///
    /// let mut memory = AddressSpace::new();
    /// memory.load(0xFFFC, &[0x00, 0x80]);
    /// memory.load(0x8000, &[opcodes::LDA_IMMEDIATE, 0x42]);
    ///
    /// let mut cpu = CPU::with_config(CoreConfig::hardware());
    /// cpu.reset_registers(&memory);
    ///
    /// assert_eq!(cpu.pc(), 0x8000);
    /// assert_eq!(cpu.sp(), 0xFF);
    /// assert_eq!(cpu.execute(2, &mut memory), Ok(2));
    /// assert_eq!(cpu.a(), 0x42);
    /// ```
    pub fn hardware() -> Self {
        Self {
            reset_vector: DEFAULT_RESET_VECTOR,
            reset_mode: ResetMode::Indirect,
            page_cross_rule: PageCrossRule::HighByte,
            stack_model: StackModel::Descending,
        }
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            reset_vector: DEFAULT_RESET_VECTOR,
            reset_mode: ResetMode::default(),
            page_cross_rule: PageCrossRule::default(),
            stack_model: StackModel::default(),
        }
    }
}
