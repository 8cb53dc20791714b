//! Integration tests for arithmetic and the operation history

#[path = "common/mod.rs"]
mod common;
use common::{eval, eval_stack};

const EPS: f64 = 1e-12;

#[test]
fn test_addition() {
    let calc = eval(&["3", "4", "+"]);
    assert_eq!(calc.stack().values(), &[7.0]);
    assert_eq!(calc.history().entries(), &["4 + 3 = 7".to_string()]);
}

#[test]
fn test_subtraction_entry_order() {
    assert_eq!(eval_stack(&["4", "3", "-"]), vec![1.0]);
    assert_eq!(eval_stack(&["3", "4", "-"]), vec![-1.0]);
}

#[test]
fn test_multiplication() {
    assert_eq!(eval_stack(&["6", "7", "*"]), vec![42.0]);
}

#[test]
fn test_division_entry_order() {
    assert_eq!(eval_stack(&["10", "4", "/"]), vec![2.5]);
}

#[test]
fn test_division_by_zero_is_ieee() {
    let calc = eval(&["1", "0", "/"]);
    assert_eq!(calc.stack().values(), &[f64::INFINITY]);
    assert!(calc.error().is_none());
}

#[test]
fn test_power_base_entered_first() {
    assert_eq!(eval_stack(&["2", "8", "^"]), vec![256.0]);
    assert_eq!(eval_stack(&["2", "8", "pow"]), vec![256.0]);
    assert_eq!(eval_stack(&["2", "8", "power"]), vec![256.0]);
}

#[test]
fn test_sqrt() {
    assert_eq!(eval_stack(&["9", "sqrt"]), vec![3.0]);
}

#[test]
fn test_sqrt_of_negative_is_nan_not_error() {
    let calc = eval(&["-4", "sqrt"]);
    assert!(calc.stack().values()[0].is_nan());
    assert!(calc.error().is_none());
    // the operation completed, so it is logged
    assert_eq!(calc.history().len(), 1);
}

#[test]
fn test_logarithms() {
    let calc = eval(&["100", "log10"]);
    assert!((calc.stack().top() - 2.0).abs() < EPS);

    let calc = eval(&["e", "ln"]);
    assert!((calc.stack().top() - 1.0).abs() < EPS);

    // log is an alias for the natural log
    let calc = eval(&["e", "log"]);
    assert!((calc.stack().top() - 1.0).abs() < EPS);
}

#[test]
fn test_reciprocal_aliases() {
    for alias in ["rec", "reciprocal", "\\"] {
        assert_eq!(eval_stack(&["4", alias]), vec![0.25]);
    }
}

#[test]
fn test_factorial_via_gamma() {
    let calc = eval(&["5", "!"]);
    assert!((calc.stack().top() - 120.0).abs() < 1e-9);

    // continuous gamma accepts non-integers
    let calc = eval(&["0.5", "!"]);
    let expected = std::f64::consts::PI.sqrt() / 2.0;
    assert!((calc.stack().top() - expected).abs() < 1e-12);
}

#[test]
fn test_degree_mode_sin() {
    let deg = eval(&["deg", "90", "sin"]);
    assert!((deg.stack().top() - 1.0).abs() < EPS);

    // the same computed directly in radians
    let rad = eval(&["pi", "2", "/", "sin"]);
    assert!((deg.stack().top() - rad.stack().top()).abs() < EPS);

    // radian-mode sin(90) is a different animal
    let raw = eval(&["90", "sin"]);
    assert!((raw.stack().top() - deg.stack().top()).abs() > 0.1);
}

#[test]
fn test_trig_roundtrip_in_radian_mode() {
    let calc = eval(&["0.5", "sin", "asin"]);
    assert!((calc.stack().top() - 0.5).abs() < EPS);
}

#[test]
fn test_constants() {
    assert_eq!(eval_stack(&["pi"]), vec![std::f64::consts::PI]);
    assert_eq!(eval_stack(&["e"]), vec![std::f64::consts::E]);
}

#[test]
fn test_random_in_unit_interval() {
    for alias in ["rnd", "random"] {
        let calc = eval(&[alias]);
        assert!((0.0..1.0).contains(&calc.stack().top()));
    }
}

#[test]
fn test_each_operation_logs_once() {
    let calc = eval(&["3", "4", "+", "2", "*", "sqrt"]);
    assert_eq!(calc.history().len(), 3);
    assert_eq!(calc.history().entries()[1], "2 * 7 = 14");
}

#[test]
fn test_failed_operations_do_not_log() {
    let calc = eval(&["sqrt", "+", "frobnicate"]);
    assert!(calc.history().is_empty());
    assert!(calc.stack().is_empty());
}

#[test]
fn test_chained_expression() {
    // (3 + 4) * (10 - 8) = 14
    let calc = eval(&["3", "4", "+", "10", "8", "-", "*"]);
    assert_eq!(calc.stack().values(), &[14.0]);
}
