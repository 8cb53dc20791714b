//! Mode flags shared between the engine and the display layer

/// Angle unit used by the trigonometric operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleMode {
    #[default]
    Radians,
    Degrees,
}

impl AngleMode {
    /// Short label shown in the mode box.
    pub fn label(self) -> &'static str {
        match self {
            AngleMode::Radians => "rad",
            AngleMode::Degrees => "deg",
        }
    }
}

/// Numeric display format. Read only by the display layer; the engine just
/// owns the flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumericFormat {
    #[default]
    Scientific,
    Fixed,
}

impl NumericFormat {
    pub fn label(self) -> &'static str {
        match self {
            NumericFormat::Scientific => "sci",
            NumericFormat::Fixed => "fix",
        }
    }
}

/// Which collection the side panel shows. Arrow-up/down scroll whichever
/// panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    History,
    Memory,
}

/// A full-screen page requested by a command, consumed by the display
/// layer via [`crate::Evaluator::take_screen`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Help,
    Credits,
    License,
}
