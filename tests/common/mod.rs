//! Common test utilities for rpncalc integration tests

pub use rpncalc::{Evaluator, Outcome};

/// Run each command through a fresh engine and return it for inspection.
pub fn eval(commands: &[&str]) -> Evaluator {
    let mut evaluator = Evaluator::new();
    for command in commands {
        evaluator.evaluate(command);
    }
    evaluator
}

/// Run commands and return the final stack contents.
#[allow(dead_code)]
pub fn eval_stack(commands: &[&str]) -> Vec<f64> {
    eval(commands).stack().values().to_vec()
}
