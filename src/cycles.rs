//! # Cycle Budget
//!
//! Every bus operation the CPU performs is charged against a [`CycleBudget`].
//! The budget is created by the caller of [`CPU::execute`](crate::CPU::execute)
//! and threaded by `&mut` through the fetch/read primitives, so the cost of an
//! instruction is exactly the sum of the bus operations its addressing mode
//! performs plus any internal cycles the instruction adds.
//!
//! The budget is a soft limit. It is only consulted at instruction boundaries,
//! so `remaining` may go negative while a multi-cycle instruction completes.
//! Counts are kept in `i64` so a request near `i32::MAX` can still be overrun
//! by the last instruction without overflowing.

/// Signed cycle budget for one call into the execution loop.
///
/// # Examples
///
/// ```
/// use cyc6502::CycleBudget;
///
/// let mut budget = CycleBudget::new(3);
/// budget.spend(2);
/// assert_eq!(budget.remaining(), 1);
/// assert!(!budget.is_exhausted());
///
/// budget.spend(2);
/// assert_eq!(budget.remaining(), -1);
/// assert!(budget.is_exhausted());
/// assert_eq!(budget.used(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleBudget {
    requested: i64,
    remaining: i64,
}

impl CycleBudget {
    /// Creates a budget of `requested` cycles. Zero or negative budgets are
    /// already exhausted.
    pub fn new(requested: i32) -> Self {
        Self {
            requested: requested as i64,
            remaining: requested as i64,
        }
    }

    /// Charges `cycles` against the budget.
    pub fn spend(&mut self, cycles: i32) {
        self.remaining -= cycles as i64;
    }

    /// Cycles left before the budget is exhausted (negative once overspent).
    pub fn remaining(&self) -> i64 {
        self.remaining
    }

    /// The number of cycles the budget was created with.
    pub fn requested(&self) -> i64 {
        self.requested
    }

    /// Cycles charged so far.
    pub fn used(&self) -> i64 {
        self.requested - self.remaining
    }

    /// Cycles charged so far, clamped to the `i32` range `execute` reports in.
    pub fn used_saturating(&self) -> i32 {
        i32::try_from(self.used()).unwrap_or(i32::MAX)
    }

    /// Returns true once no cycles remain.
    pub fn is_exhausted(&self) -> bool {
        self.remaining <= 0
    }
}
