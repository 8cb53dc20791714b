//! Screen rendering: the status view redrawn before every prompt
//!
//! Layout: a small mode box, the stack box (top of stack at the bottom,
//! labelled `x`, second `y`), a side panel showing either the operation
//! history or the memories, the error line and the prompt. All positions
//! are fixed; this is a calculator, not a resizable TUI.

use std::io::{self, Stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

use rpncalc::history::format_compact;
use rpncalc::{Evaluator, NumericFormat, Panel, Screen};

use crate::input;

/// Stack rows shown before eliding the middle
const MAX_VIEWABLE_STACK: usize = 16;
/// Rows in the history/memory side panel
const PANEL_ROWS: usize = 17;
/// Column where the side panel starts (0-based)
const PANEL_COL: u16 = 39;
/// Row of the error line (0-based)
const ERROR_ROW: u16 = 22;
/// Row of the prompt rule (0-based)
const PROMPT_ROW: u16 = 23;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Clear the terminal and draw the full calculator status.
pub(crate) fn draw(calc: &mut Evaluator) -> io::Result<()> {
    let mut out = io::stdout();
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;

    draw_modes(&mut out, calc)?;
    draw_stack(&mut out, calc)?;
    match calc.panel() {
        Panel::History => draw_history(&mut out, calc)?,
        Panel::Memory => draw_memory(&mut out, calc)?,
    }

    execute!(out, MoveTo(0, ERROR_ROW))?;
    if let Some(message) = calc.take_error() {
        write!(out, "{}", message)?;
    }

    execute!(out, MoveTo(0, PROMPT_ROW))?;
    write!(out, "─────────\n‣ ")?;
    out.flush()
}

fn draw_modes(out: &mut Stdout, calc: &Evaluator) -> io::Result<()> {
    writeln!(out, "┌─────┬─────┐")?;
    writeln!(
        out,
        "│ {} │ {} │",
        calc.angle_mode().label(),
        calc.numeric_format().label()
    )?;
    writeln!(out, "└─────┴─────┘")
}

/// Register label for a stack row: `x` on top, `y` below it, plain
/// positions further down.
fn register_name(depth_from_top: usize) -> String {
    match depth_from_top {
        1 => " x".to_string(),
        2 => " y".to_string(),
        n => format!("{:2}", n),
    }
}

fn draw_stack(out: &mut Stdout, calc: &Evaluator) -> io::Result<()> {
    let values = calc.stack().values();
    let depth = values.len();
    let format = calc.numeric_format();

    writeln!(out, "┌────┬──────────STACK───────────┐")?;

    let mut start = 0;
    if depth > MAX_VIEWABLE_STACK {
        start = depth - (MAX_VIEWABLE_STACK - 1);
        // deepest value stays visible above an ellipsis row
        writeln!(
            out,
            "│ {} │ {}│",
            register_name(depth),
            format_value(values[0], format)
        )?;
        writeln!(out, "│....│..........................│")?;
    }

    for (i, value) in values.iter().enumerate().skip(start) {
        writeln!(
            out,
            "│ {} │ {}│",
            register_name(depth - i),
            format_value(*value, format)
        )?;
    }
    writeln!(out, "└────┴──────────────────────────┘")
}

fn draw_history(out: &mut Stdout, calc: &mut Evaluator) -> io::Result<()> {
    calc.clamp_history_offset(PANEL_ROWS);
    let entries = calc.history().entries();
    let offset = calc.history_offset();

    let begin = entries.len().saturating_sub(PANEL_ROWS + offset);
    let end = (begin + PANEL_ROWS).min(entries.len());

    execute!(out, MoveTo(PANEL_COL, 3))?;
    write!(out, "──────HISTORY─────")?;
    if begin > 0 {
        execute!(out, MoveTo(PANEL_COL + 1, 3))?;
        write!(out, "⇡")?;
    }

    for (row, i) in (begin..end).enumerate() {
        execute!(out, MoveTo(PANEL_COL, 4 + row as u16))?;
        write!(out, "{:4} │ {}", i + 1, entries[i])?;
    }

    if end < entries.len() {
        execute!(out, MoveTo(PANEL_COL + 1, 4 + (end - begin) as u16))?;
        write!(out, "⇣")?;
    }
    Ok(())
}

fn draw_memory(out: &mut Stdout, calc: &mut Evaluator) -> io::Result<()> {
    calc.clamp_memory_offset(PANEL_ROWS);
    let entries = calc.memory().entries();
    let offset = calc.memory_offset();

    let begin = entries.len().saturating_sub(PANEL_ROWS + offset);
    let end = (begin + PANEL_ROWS).min(entries.len());

    execute!(out, MoveTo(PANEL_COL, 3))?;
    write!(out, "──────MEMORY─────")?;
    if begin > 0 {
        execute!(out, MoveTo(PANEL_COL + 1, 3))?;
        write!(out, "⇡")?;
    }

    let mut row = 0u16;
    for entry in &entries[begin..end] {
        if entry.name.is_empty() {
            continue;
        }
        execute!(out, MoveTo(PANEL_COL, 4 + row))?;
        match calc.numeric_format() {
            NumericFormat::Fixed => write!(out, "{} - {:.6}", entry.name, entry.value)?,
            NumericFormat::Scientific => {
                write!(out, "{} - {}", entry.name, format_compact(entry.value))?
            }
        }
        row += 1;
    }

    if end < entries.len() {
        execute!(out, MoveTo(PANEL_COL + 1, 4 + row))?;
        write!(out, "⇣")?;
    }
    Ok(())
}

/// One stack cell, 25 columns wide. Very large and very small magnitudes
/// always render in exponent form, whatever the format flag says.
fn format_value(value: f64, format: NumericFormat) -> String {
    let abs = value.abs();
    if abs >= 1e10 || (abs > 0.0 && abs < 1e-6) {
        return format!("{:>25.15e}", value);
    }
    match format {
        NumericFormat::Fixed => format!("{:>25.6}", value),
        NumericFormat::Scientific => format!("{:>25}", format_general(value)),
    }
}

/// Shortest general form with up to 15 significant digits.
fn format_general(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let exp = value.abs().log10().floor() as i32;
    let decimals = (14 - exp).clamp(0, 17) as usize;
    let s = format!("{:.*}", decimals, value);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Show a requested full-screen page and wait for a key.
pub(crate) fn show_page(page: Screen) -> io::Result<()> {
    let mut out = io::stdout();
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;

    match page {
        Screen::Help => write_help(&mut out)?,
        Screen::Credits => write_credits(&mut out)?,
        Screen::License => write_license(&mut out)?,
    }

    writeln!(out)?;
    writeln!(out, "press any key to continue")?;
    out.flush()?;
    input::wait_for_key()
}

fn write_help(out: &mut Stdout) -> io::Result<()> {
    writeln!(out, "rpncalc - RPN Calculator v{}", VERSION)?;
    writeln!(out, "──────────────────────────────────────────────────────")?;
    writeln!(out)?;
    writeln!(out, " Basic Ops:     +  -  *  /  ^")?;
    writeln!(out, " Stack Ops:     d(drop)   s(swap)   c(clear)")?;
    writeln!(out, " Rotate Stack:  roll      unroll    ← → (keys)")?;
    writeln!(out, " Stack View:    ↑ ↓ (scroll history/memory)")?;
    writeln!(out)?;
    writeln!(out, " Functions:")?;
    writeln!(out, "  sqrt  log  ln  log10  ! (factorial)  \\ (recip)")?;
    writeln!(out, "  sin  cos  tan  asin  acos  atan")?;
    writeln!(out)?;
    writeln!(out, " Modes: deg / rad       Format: fix / sci")?;
    writeln!(out)?;
    writeln!(out, " Constants:     pi   e   rnd (random)")?;
    writeln!(out, " Memory:        store [name]   load [name]   del [name]")?;
    writeln!(out, " Panels:        history   memory")?;
    writeln!(out)?;
    writeln!(out, " Commands:")?;
    writeln!(out, "  h/help     Show this help screen")?;
    writeln!(out, "  ?          Show credits")?;
    writeln!(out, "  q/quit     Exit program")?;
    writeln!(out)?;
    writeln!(out, "──────────────────────────────────────────────────────")
}

fn write_credits(out: &mut Stdout) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "rpncalc")?;
    writeln!(out, "ˆˆˆˆˆˆˆ")?;
    writeln!(out, "a Reverse-Polish-Notation calculator for your terminal")?;
    writeln!(out)?;
    write_license(out)
}

fn write_license(out: &mut Stdout) -> io::Result<()> {
    writeln!(out, "rpncalc {}", VERSION)?;
    writeln!(out, "rpncalc comes with ABSOLUTELY NO WARRANTY.")?;
    writeln!(out, "This is free software released under the MIT license;")?;
    writeln!(out, "you are welcome to redistribute it under its terms.")
}
