//! Raw-mode keyboard input
//!
//! The calculator treats arrow keys as commands, so the usual cooked-mode
//! line reading is out: the terminal goes into raw mode for the duration
//! of one read, printable keys are echoed by hand, and an arrow key
//! immediately yields its synthetic command token (`arrow_up` and
//! friends) for the dispatch table.

use std::io::{self, Write};

use crossterm::event::{read, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

/// Longest accepted input line
const MAX_INPUT: usize = 100;

/// Read one command line. Returns on Enter, or immediately when an arrow
/// key is pressed. The result is already lower-cased.
pub(crate) fn read_command() -> io::Result<String> {
    enable_raw_mode()?;
    let result = read_in_raw_mode();
    disable_raw_mode()?;
    result
}

fn read_in_raw_mode() -> io::Result<String> {
    let mut out = io::stdout();
    let mut buffer = String::new();

    loop {
        let key = match read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            _ => continue,
        };

        match key.code {
            KeyCode::Enter => {
                out.write_all(b"\r\n")?;
                out.flush()?;
                break;
            }
            KeyCode::Up => return Ok("arrow_up".to_string()),
            KeyCode::Down => return Ok("arrow_down".to_string()),
            KeyCode::Right => return Ok("arrow_right".to_string()),
            KeyCode::Left => return Ok("arrow_left".to_string()),
            KeyCode::Backspace => {
                if buffer.pop().is_some() {
                    // erase the echoed character
                    out.write_all(b"\x08 \x08")?;
                    out.flush()?;
                }
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Ok("quit".to_string());
            }
            KeyCode::Char(c) => {
                if buffer.len() < MAX_INPUT - 1 {
                    buffer.push(c);
                    write!(out, "{}", c)?;
                    out.flush()?;
                }
            }
            _ => {}
        }
    }

    Ok(buffer.to_lowercase())
}

/// Block until any key is pressed. Used by the full-screen pages.
pub(crate) fn wait_for_key() -> io::Result<()> {
    enable_raw_mode()?;
    let result = loop {
        match read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => break Ok(()),
            Ok(_) => continue,
            Err(err) => break Err(err),
        }
    };
    disable_raw_mode()?;
    result
}
