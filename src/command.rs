//! Command classification: from a typed token to an operation
//!
//! Five token tables are consulted in a fixed priority order — binary,
//! unary, trigonometric, parameterized, nullary. The tables are mutually
//! exclusive, so at most one ever matches; the order still matters because
//! it is part of the dispatch contract. A token that parses entirely as a
//! floating-point literal short-circuits everything and pushes.
//!
//! The synthetic `arrow_*` tokens come from the raw-keyboard input layer,
//! which translates escape sequences into command strings; to the
//! classifier they are ordinary nullary commands.

/// Two-operand arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

/// Single-operand functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Factorial,
    Sqrt,
    Log10,
    Ln,
    Reciprocal,
}

/// Single-operand trigonometric functions. Kept apart from [`UnaryOp`]
/// because the evaluator converts the operand to radians first when in
/// degrees mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrigOp {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
}

/// Operations taking a free-text parameter instead of stack operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamOp {
    Store,
    Load,
    Delete,
}

/// Operations taking no operands: constants, stack housekeeping, mode
/// switches, panel control and session control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullaryOp {
    Exit,
    Help,
    Credits,
    License,
    PushPi,
    PushE,
    PushRandom,
    RadMode,
    DegMode,
    SciFormat,
    FixFormat,
    Clear,
    Drop,
    Swap,
    RollRight,
    RollLeft,
    HistoryPanel,
    MemoryPanel,
    ScrollUp,
    ScrollDown,
}

/// The classified form of one input token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// A numeric literal to push.
    Push(f64),
    Binary(BinaryOp),
    Unary(UnaryOp),
    Trig(TrigOp),
    WithParam(ParamOp),
    Nullary(NullaryOp),
    /// Not in any table. Ignored unless the evaluator runs strict.
    Unknown,
}

impl Command {
    /// Classify one lower-cased token.
    pub fn classify(token: &str) -> Command {
        if let Ok(value) = token.parse::<f64>() {
            return Command::Push(value);
        }
        if let Some(op) = binary_op(token) {
            return Command::Binary(op);
        }
        if let Some(op) = unary_op(token) {
            return Command::Unary(op);
        }
        if let Some(op) = trig_op(token) {
            return Command::Trig(op);
        }
        if let Some(op) = param_op(token) {
            return Command::WithParam(op);
        }
        if let Some(op) = nullary_op(token) {
            return Command::Nullary(op);
        }
        Command::Unknown
    }
}

fn binary_op(token: &str) -> Option<BinaryOp> {
    match token {
        "+" => Some(BinaryOp::Add),
        "-" => Some(BinaryOp::Sub),
        "*" => Some(BinaryOp::Mul),
        "/" => Some(BinaryOp::Div),
        "^" | "pow" | "power" => Some(BinaryOp::Pow),
        _ => None,
    }
}

fn unary_op(token: &str) -> Option<UnaryOp> {
    match token {
        "!" => Some(UnaryOp::Factorial),
        "sqrt" => Some(UnaryOp::Sqrt),
        "log10" => Some(UnaryOp::Log10),
        "log" | "ln" => Some(UnaryOp::Ln),
        "\\" | "rec" | "reciprocal" => Some(UnaryOp::Reciprocal),
        _ => None,
    }
}

fn trig_op(token: &str) -> Option<TrigOp> {
    match token {
        "sin" => Some(TrigOp::Sin),
        "cos" => Some(TrigOp::Cos),
        "tan" => Some(TrigOp::Tan),
        "asin" => Some(TrigOp::Asin),
        "acos" => Some(TrigOp::Acos),
        "atan" => Some(TrigOp::Atan),
        _ => None,
    }
}

fn param_op(token: &str) -> Option<ParamOp> {
    match token {
        "store" => Some(ParamOp::Store),
        "load" => Some(ParamOp::Load),
        "del" => Some(ParamOp::Delete),
        _ => None,
    }
}

fn nullary_op(token: &str) -> Option<NullaryOp> {
    match token {
        "exit" | "quit" | "q" => Some(NullaryOp::Exit),
        "help" | "h" => Some(NullaryOp::Help),
        "credits" | "?" => Some(NullaryOp::Credits),
        "license" => Some(NullaryOp::License),
        "pi" => Some(NullaryOp::PushPi),
        "e" => Some(NullaryOp::PushE),
        "random" | "rnd" => Some(NullaryOp::PushRandom),
        "rad" => Some(NullaryOp::RadMode),
        "deg" => Some(NullaryOp::DegMode),
        "sci" => Some(NullaryOp::SciFormat),
        "fix" => Some(NullaryOp::FixFormat),
        "clear" | "c" => Some(NullaryOp::Clear),
        "drop" | "d" => Some(NullaryOp::Drop),
        "swap" | "s" => Some(NullaryOp::Swap),
        "roll" | "rroll" | "arrow_right" => Some(NullaryOp::RollRight),
        "unroll" | "lroll" | "arrow_left" => Some(NullaryOp::RollLeft),
        "arrow_up" => Some(NullaryOp::ScrollUp),
        "arrow_down" => Some(NullaryOp::ScrollDown),
        "history" => Some(NullaryOp::HistoryPanel),
        "memory" => Some(NullaryOp::MemoryPanel),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_literals_short_circuit() {
        assert_eq!(Command::classify("3.5"), Command::Push(3.5));
        assert_eq!(Command::classify("-2"), Command::Push(-2.0));
        assert_eq!(Command::classify("1e3"), Command::Push(1000.0));
    }

    #[test]
    fn trailing_characters_break_the_numeric_check() {
        // "2x" must not be treated as "push 2"
        assert_eq!(Command::classify("2x"), Command::Unknown);
        assert_eq!(Command::classify("1.2.3"), Command::Unknown);
    }

    #[test]
    fn minus_is_subtraction_not_a_sign() {
        assert_eq!(Command::classify("-"), Command::Binary(BinaryOp::Sub));
    }

    #[test]
    fn operator_aliases() {
        assert_eq!(Command::classify("^"), Command::Binary(BinaryOp::Pow));
        assert_eq!(Command::classify("pow"), Command::Binary(BinaryOp::Pow));
        assert_eq!(Command::classify("power"), Command::Binary(BinaryOp::Pow));
        assert_eq!(Command::classify("ln"), Command::Unary(UnaryOp::Ln));
        assert_eq!(Command::classify("log"), Command::Unary(UnaryOp::Ln));
        assert_eq!(Command::classify("log10"), Command::Unary(UnaryOp::Log10));
        assert_eq!(Command::classify("\\"), Command::Unary(UnaryOp::Reciprocal));
        assert_eq!(Command::classify("rec"), Command::Unary(UnaryOp::Reciprocal));
    }

    #[test]
    fn trig_commands() {
        for (tok, op) in [
            ("sin", TrigOp::Sin),
            ("cos", TrigOp::Cos),
            ("tan", TrigOp::Tan),
            ("asin", TrigOp::Asin),
            ("acos", TrigOp::Acos),
            ("atan", TrigOp::Atan),
        ] {
            assert_eq!(Command::classify(tok), Command::Trig(op));
        }
    }

    #[test]
    fn parameterized_commands() {
        assert_eq!(Command::classify("store"), Command::WithParam(ParamOp::Store));
        assert_eq!(Command::classify("load"), Command::WithParam(ParamOp::Load));
        assert_eq!(Command::classify("del"), Command::WithParam(ParamOp::Delete));
    }

    #[test]
    fn nullary_aliases() {
        for tok in ["exit", "quit", "q"] {
            assert_eq!(Command::classify(tok), Command::Nullary(NullaryOp::Exit));
        }
        for tok in ["roll", "rroll", "arrow_right"] {
            assert_eq!(Command::classify(tok), Command::Nullary(NullaryOp::RollRight));
        }
        for tok in ["unroll", "lroll", "arrow_left"] {
            assert_eq!(Command::classify(tok), Command::Nullary(NullaryOp::RollLeft));
        }
        assert_eq!(Command::classify("d"), Command::Nullary(NullaryOp::Drop));
        assert_eq!(Command::classify("s"), Command::Nullary(NullaryOp::Swap));
        assert_eq!(Command::classify("c"), Command::Nullary(NullaryOp::Clear));
        assert_eq!(Command::classify("?"), Command::Nullary(NullaryOp::Credits));
    }

    #[test]
    fn unknown_tokens() {
        assert_eq!(Command::classify("frobnicate"), Command::Unknown);
        assert_eq!(Command::classify(""), Command::Unknown);
    }

    #[test]
    fn e_is_a_constant_not_a_literal() {
        // "e" alone does not parse as f64, so the nullary table gets it
        assert_eq!(Command::classify("e"), Command::Nullary(NullaryOp::PushE));
    }
}
