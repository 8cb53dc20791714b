//! The operation library: what each classified command computes
//!
//! Binary operand order follows RPN entry order: `y` is the value popped
//! first (entered last), `x` the value popped second. `3 4 -` computes
//! `3 - 4`; `2 8 ^` computes `2^8`. Division by zero and out-of-domain
//! inputs follow IEEE semantics — NaN and infinities propagate, nothing is
//! validated or raised.

use crate::command::{BinaryOp, TrigOp, UnaryOp};

impl BinaryOp {
    /// Apply with `x` = second-popped, `y` = first-popped operand.
    pub fn apply(self, x: f64, y: f64) -> f64 {
        match self {
            BinaryOp::Add => x + y,
            BinaryOp::Sub => x - y,
            BinaryOp::Mul => x * y,
            BinaryOp::Div => x / y,
            BinaryOp::Pow => x.powf(y),
        }
    }
}

impl UnaryOp {
    pub fn apply(self, x: f64) -> f64 {
        match self {
            // Continuous factorial; accepts non-integer input and goes
            // NaN/inf outside gamma's domain.
            UnaryOp::Factorial => libm::tgamma(x + 1.0),
            UnaryOp::Sqrt => x.sqrt(),
            UnaryOp::Log10 => x.log10(),
            UnaryOp::Ln => x.ln(),
            UnaryOp::Reciprocal => 1.0 / x,
        }
    }
}

impl TrigOp {
    /// Apply to an operand already expressed in radians. The degree
    /// conversion (forward direction only) is the evaluator's job; inverse
    /// results are always radians regardless of angle mode.
    pub fn apply(self, radians: f64) -> f64 {
        match self {
            TrigOp::Sin => radians.sin(),
            TrigOp::Cos => radians.cos(),
            TrigOp::Tan => radians.tan(),
            TrigOp::Asin => radians.asin(),
            TrigOp::Acos => radians.acos(),
            TrigOp::Atan => radians.atan(),
        }
    }
}

/// Uniformly distributed pseudorandom value in [0, 1).
pub fn random_unit() -> f64 {
    rand::random::<f64>()
}
