//! The operand stack: a growable sequence of f64 values with a hard depth cap
//!
//! `Vec` would happily grow forever, so the stack tracks its own logical
//! capacity and reimplements the clamped growth policy: start at
//! [`INITIAL_CAPACITY`], grow by [`GROWTH_STEP`] on overflow, never exceed
//! [`MAX_DEPTH`]. A push against the cap is rejected without touching the
//! stack.

use crate::eval::EvalError;

/// Slots allocated at startup
pub const INITIAL_CAPACITY: usize = 10;
/// Slots added on each overflow
pub const GROWTH_STEP: usize = 10;
/// Hard maximum number of values the stack will hold
pub const MAX_DEPTH: usize = 99;

/// The operand stack. Top of stack is the `x` register, second is `y`.
#[derive(Debug, Clone)]
pub struct Stack {
    values: Vec<f64>,
    capacity: usize,
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}

impl Stack {
    pub fn new() -> Self {
        Stack {
            values: Vec::with_capacity(INITIAL_CAPACITY),
            capacity: INITIAL_CAPACITY,
        }
    }

    /// Push a value on top of the stack, growing the clamped capacity when
    /// full. At [`MAX_DEPTH`] the push is rejected and the stack is left
    /// unchanged.
    pub fn push(&mut self, value: f64) -> Result<(), EvalError> {
        if self.values.len() >= self.capacity {
            if self.capacity >= MAX_DEPTH {
                return Err(EvalError::StackFull(self.capacity));
            }
            self.capacity = (self.capacity + GROWTH_STEP).min(MAX_DEPTH);
            self.values.reserve(self.capacity - self.values.len());
        }
        self.values.push(value);
        Ok(())
    }

    /// Pop the top value. Underflow is an error the caller is expected to
    /// surface to the user.
    pub fn pop(&mut self) -> Result<f64, EvalError> {
        self.values.pop().ok_or(EvalError::StackEmpty)
    }

    /// Value at 1-indexed depth `n` from the bottom, without popping.
    /// `n == 0` returns 0.0 as a defensive default for empty-stack queries.
    pub fn peek(&self, n: usize) -> f64 {
        if n == 0 {
            return 0.0;
        }
        self.values.get(n - 1).copied().unwrap_or(0.0)
    }

    /// The top value, or 0.0 when empty.
    pub fn top(&self) -> f64 {
        self.peek(self.values.len())
    }

    /// Reset length to zero. Capacity is kept.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Exchange the two topmost values; no-op with fewer than two.
    pub fn swap(&mut self) {
        let len = self.values.len();
        if len < 2 {
            return;
        }
        self.values.swap(len - 1, len - 2);
    }

    /// Rotate the bottom value to the top, shifting everything else down.
    pub fn roll_left(&mut self) {
        if self.values.is_empty() {
            return;
        }
        let bottom = self.values.remove(0);
        self.values.push(bottom);
    }

    /// Rotate the top value to the bottom, shifting everything else up.
    pub fn roll_right(&mut self) {
        if let Some(top) = self.values.pop() {
            self.values.insert(0, top);
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
