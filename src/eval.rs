//! The evaluator: tokenizes one input line, classifies it and applies it
//!
//! `Evaluator` is the single owning context for everything a command can
//! touch: the operand stack, the named memories, the operation history,
//! the mode flags, the panel scroll offsets and the one-slot error buffer.
//! One call to [`Evaluator::evaluate`] processes exactly one command to
//! completion; a command either completes or is rejected before any
//! mutation, so the shared state never ends up half-updated.
//!
//! Failed operations land in the error slot rather than bubbling out: the
//! display layer picks the message up with [`Evaluator::take_error`] and
//! the session keeps going. Only the exit command stops the loop, via
//! [`Outcome::Exit`].

use std::f64::consts;

use thiserror::Error;

use crate::command::{BinaryOp, Command, NullaryOp, ParamOp, TrigOp, UnaryOp};
use crate::history::History;
use crate::memory::MemoryStore;
use crate::ops::random_unit;
use crate::stack::Stack;
use crate::state::{AngleMode, NumericFormat, Panel, Screen};

/// Everything that can go wrong inside the engine. These are displayed
/// through the error slot, never raised out of `evaluate`.
#[derive(Error, Debug)]
pub enum EvalError {
    #[error("your stack can't hold more than {0} entries")]
    StackFull(usize),
    #[error("no value left in the stack")]
    StackEmpty,
    #[error("memory names can be at most {0} bytes long")]
    NameTooLong(usize),
    #[error("you can't memorize more than {0} entries")]
    MemoryFull(usize),
    #[error("{op}: needs {needed} more value(s) on the stack")]
    MissingOperands { op: String, needed: usize },
    #[error("unknown command: {0}")]
    UnknownCommand(String),
}

/// What the caller should do after one evaluated line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

/// The calculator engine.
pub struct Evaluator {
    pub(crate) stack: Stack,
    pub(crate) memory: MemoryStore,
    pub(crate) history: History,
    angle_mode: AngleMode,
    numeric_format: NumericFormat,
    panel: Panel,
    history_offset: usize,
    memory_offset: usize,
    error: Option<String>,
    screen: Option<Screen>,
    strict: bool,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    pub fn new() -> Self {
        Evaluator {
            stack: Stack::new(),
            memory: MemoryStore::new(),
            history: History::new(),
            angle_mode: AngleMode::default(),
            numeric_format: NumericFormat::default(),
            panel: Panel::default(),
            history_offset: 0,
            memory_offset: 0,
            error: None,
            screen: None,
            strict: false,
        }
    }

    /// Evaluate one line of input: command plus optional parameter,
    /// case-insensitive. Returns [`Outcome::Exit`] only for the exit
    /// command; everything else continues, whether it worked or not.
    pub fn evaluate(&mut self, line: &str) -> Outcome {
        let line = line.trim().to_lowercase();
        let mut tokens = line.split_whitespace();
        let command = match tokens.next() {
            Some(token) => token,
            None => return Outcome::Continue,
        };
        // extra tokens overwrite the parameter, last one wins
        let parameter = tokens.last().unwrap_or("");

        let result = match Command::classify(command) {
            Command::Push(value) => self.stack.push(value),
            Command::Binary(op) => self.eval_binary(op, command),
            Command::Unary(op) => self.eval_unary(op, command),
            Command::Trig(op) => self.eval_trig(op, command),
            Command::WithParam(op) => self.eval_param(op, parameter),
            Command::Nullary(op) => return self.eval_nullary(op),
            Command::Unknown => {
                if self.strict {
                    Err(EvalError::UnknownCommand(command.to_string()))
                } else {
                    Ok(())
                }
            }
        };

        if let Err(err) = result {
            self.report(err);
        }
        Outcome::Continue
    }

    fn eval_binary(&mut self, op: BinaryOp, token: &str) -> Result<(), EvalError> {
        if self.stack.len() < 2 {
            return self.missing_operands(token, 2 - self.stack.len());
        }
        let y = self.stack.pop()?;
        let x = self.stack.pop()?;
        let result = op.apply(x, y);
        self.stack.push(result)?;
        self.history.record_binary(y, x, token, result);
        Ok(())
    }

    fn eval_unary(&mut self, op: UnaryOp, token: &str) -> Result<(), EvalError> {
        if self.stack.is_empty() {
            return self.missing_operands(token, 1);
        }
        let x = self.stack.pop()?;
        let result = op.apply(x);
        self.stack.push(result)?;
        self.history.record_unary(x, token, result);
        Ok(())
    }

    fn eval_trig(&mut self, op: TrigOp, token: &str) -> Result<(), EvalError> {
        if self.stack.is_empty() {
            return self.missing_operands(token, 1);
        }
        let mut x = self.stack.pop()?;
        // forward conversion only; inverse results stay in radians
        if self.angle_mode == AngleMode::Degrees {
            x = x.to_radians();
        }
        let result = op.apply(x);
        self.stack.push(result)?;
        self.history.record_unary(x, token, result);
        Ok(())
    }

    fn eval_param(&mut self, op: ParamOp, parameter: &str) -> Result<(), EvalError> {
        match op {
            ParamOp::Store => self.memory.store(parameter, self.stack.top()),
            ParamOp::Load => {
                if let Some(value) = self.memory.load(parameter) {
                    self.stack.push(value)?;
                }
                Ok(())
            }
            ParamOp::Delete => {
                self.memory.delete(parameter);
                Ok(())
            }
        }
    }

    fn eval_nullary(&mut self, op: NullaryOp) -> Outcome {
        let result = match op {
            NullaryOp::Exit => return Outcome::Exit,
            NullaryOp::Help => {
                self.screen = Some(Screen::Help);
                Ok(())
            }
            NullaryOp::Credits => {
                self.screen = Some(Screen::Credits);
                Ok(())
            }
            NullaryOp::License => {
                self.screen = Some(Screen::License);
                Ok(())
            }
            NullaryOp::PushPi => self.stack.push(consts::PI),
            NullaryOp::PushE => self.stack.push(consts::E),
            NullaryOp::PushRandom => self.stack.push(random_unit()),
            NullaryOp::RadMode => {
                self.angle_mode = AngleMode::Radians;
                Ok(())
            }
            NullaryOp::DegMode => {
                self.angle_mode = AngleMode::Degrees;
                Ok(())
            }
            NullaryOp::SciFormat => {
                self.numeric_format = NumericFormat::Scientific;
                Ok(())
            }
            NullaryOp::FixFormat => {
                self.numeric_format = NumericFormat::Fixed;
                Ok(())
            }
            NullaryOp::Clear => {
                self.stack.clear();
                Ok(())
            }
            NullaryOp::Drop => self.stack.pop().map(|_| ()),
            NullaryOp::Swap => {
                self.stack.swap();
                Ok(())
            }
            NullaryOp::RollRight => {
                self.stack.roll_right();
                Ok(())
            }
            NullaryOp::RollLeft => {
                self.stack.roll_left();
                Ok(())
            }
            NullaryOp::HistoryPanel => {
                self.panel = Panel::History;
                Ok(())
            }
            NullaryOp::MemoryPanel => {
                self.panel = Panel::Memory;
                Ok(())
            }
            NullaryOp::ScrollUp => {
                match self.panel {
                    Panel::History => self.history_offset += 1,
                    Panel::Memory => self.memory_offset += 1,
                }
                Ok(())
            }
            NullaryOp::ScrollDown => {
                match self.panel {
                    Panel::History => self.history_offset = self.history_offset.saturating_sub(1),
                    Panel::Memory => self.memory_offset = self.memory_offset.saturating_sub(1),
                }
                Ok(())
            }
        };

        if let Err(err) = result {
            self.report(err);
        }
        Outcome::Continue
    }

    /// Insufficient operands: silent no-op by default, error slot when
    /// strict. Never pops, never logs.
    fn missing_operands(&self, token: &str, needed: usize) -> Result<(), EvalError> {
        if self.strict {
            Err(EvalError::MissingOperands {
                op: token.to_string(),
                needed,
            })
        } else {
            Ok(())
        }
    }

    fn report(&mut self, err: EvalError) {
        self.error = Some(format!("ERROR: {}", err));
    }

    // === Read access for the display layer ===

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    pub fn memory(&self) -> &MemoryStore {
        &self.memory
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    pub fn numeric_format(&self) -> NumericFormat {
        self.numeric_format
    }

    pub fn panel(&self) -> Panel {
        self.panel
    }

    pub fn history_offset(&self) -> usize {
        self.history_offset
    }

    pub fn memory_offset(&self) -> usize {
        self.memory_offset
    }

    /// Message from the most recent failed operation, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Take the error message for display, clearing the slot.
    pub fn take_error(&mut self) -> Option<String> {
        self.error.take()
    }

    /// Take the pending full-screen request, if a help/credits/license
    /// command set one.
    pub fn take_screen(&mut self) -> Option<Screen> {
        self.screen.take()
    }

    /// Pull an over-scrolled history offset back into range for a panel
    /// showing `visible` rows.
    pub fn clamp_history_offset(&mut self, visible: usize) {
        let max = self.history.len().saturating_sub(visible);
        self.history_offset = self.history_offset.min(max);
    }

    /// Same as [`Self::clamp_history_offset`], for the memory panel.
    pub fn clamp_memory_offset(&mut self, visible: usize) {
        let max = self.memory.len().saturating_sub(visible);
        self.memory_offset = self.memory_offset.min(max);
    }

    // === Configuration ===

    /// When strict, unknown commands and insufficient operands are
    /// reported through the error slot instead of being ignored. State is
    /// never mutated on those paths either way.
    pub fn set_strict(&mut self, strict: bool) {
        self.strict = strict;
    }

    pub fn set_angle_mode(&mut self, mode: AngleMode) {
        self.angle_mode = mode;
    }

    pub fn set_numeric_format(&mut self, format: NumericFormat) {
        self.numeric_format = format;
    }
}
