//! rpncalc - a terminal-based RPN calculator
//!
//! Usage:
//!   rpncalc              Start the calculator
//!   rpncalc --deg --fix  Start in degrees mode with fixed-point display
//!   rpncalc --help       Show command-line help

mod cli;
mod input;
mod screen;

use std::io;
use std::process::ExitCode;

use rpncalc::{Evaluator, Outcome};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let cli = cli::parse_args(&args);

    if cli.help {
        cli::print_help();
        return ExitCode::SUCCESS;
    }
    if cli.version {
        cli::print_version();
        return ExitCode::SUCCESS;
    }

    let mut calc = cli::build_evaluator(&cli);
    match run(&mut calc) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

/// The read-eval-draw loop. Each iteration redraws the status view,
/// reads one command and evaluates it; full-screen pages requested by a
/// command are shown before the next redraw.
fn run(calc: &mut Evaluator) -> io::Result<()> {
    loop {
        screen::draw(calc)?;
        let line = input::read_command()?;
        if calc.evaluate(&line) == Outcome::Exit {
            break;
        }
        if let Some(page) = calc.take_screen() {
            screen::show_page(page)?;
        }
    }
    Ok(())
}
