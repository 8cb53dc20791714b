//! rpncalc - a terminal RPN calculator engine
//!
//! # Overview
//!
//! rpncalc is a Reverse-Polish-Notation calculator: operands go onto a
//! stack, operators pop them and push results. No precedence, no
//! parentheses.
//!
//! ```text
//! 3          # Stack: [3]
//! 4          # Stack: [3, 4]
//! +          # Stack: [7], history: "4 + 3 = 7"
//! ```
//!
//! # Core Concepts
//!
//! ## The operand stack
//!
//! The top value is the `x` register, the second the `y` register. Binary
//! operators combine them in entry order: `3 4 -` is `3 - 4`, `2 8 ^` is
//! `2^8`. Stack depth is capped at 99; pushing past the cap is rejected
//! with an error, never silently dropped on top of existing values.
//!
//! ## Named memories
//!
//! `store name` snapshots the current top of the stack (without popping),
//! `load name` pushes the stored value back, `del name` forgets it.
//! Values survive a stack `clear`.
//!
//! ## The history log
//!
//! Every completed arithmetic operation appends one record, e.g.
//! `4 + 3 = 7`. The log is append-only and unbounded.
//!
//! ## Modes
//!
//! `deg`/`rad` select the angle unit for the trigonometric functions
//! (forward conversion only; inverse results are always radians), and
//! `fix`/`sci` select the display format.
//!
//! # Example
//!
//! ```rust
//! use rpncalc::{Evaluator, Outcome};
//!
//! let mut calc = Evaluator::new();
//! calc.evaluate("3");
//! calc.evaluate("4");
//! calc.evaluate("+");
//! assert_eq!(calc.stack().values(), &[7.0]);
//! assert_eq!(calc.evaluate("quit"), Outcome::Exit);
//! ```

pub mod command;
pub mod eval;
pub mod history;
pub mod memory;
pub mod ops;
pub mod stack;
pub mod state;

// Re-export commonly used items
pub use command::{BinaryOp, Command, NullaryOp, ParamOp, TrigOp, UnaryOp};
pub use eval::{EvalError, Evaluator, Outcome};
pub use history::History;
pub use memory::{MemoryEntry, MemoryStore};
pub use stack::Stack;
pub use state::{AngleMode, NumericFormat, Panel, Screen};

/// Convenience function: evaluate one command per line against a fresh
/// engine and return it for inspection.
pub fn eval(script: &str) -> Evaluator {
    let mut evaluator = Evaluator::new();
    for line in script.lines() {
        if evaluator.evaluate(line) == Outcome::Exit {
            break;
        }
    }
    evaluator
}
