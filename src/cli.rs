use rpncalc::{AngleMode, Evaluator, NumericFormat};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parsed command-line arguments
pub(crate) struct CliArgs {
    pub(crate) angle_mode: Option<AngleMode>,
    pub(crate) numeric_format: Option<NumericFormat>,
    pub(crate) strict: bool,
    pub(crate) help: bool,
    pub(crate) version: bool,
}

/// Parse command-line arguments
pub(crate) fn parse_args(args: &[String]) -> CliArgs {
    let mut cli = CliArgs {
        angle_mode: None,
        numeric_format: None,
        strict: false,
        help: false,
        version: false,
    };

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "-d" | "--deg" => cli.angle_mode = Some(AngleMode::Degrees),
            "-r" | "--rad" => cli.angle_mode = Some(AngleMode::Radians),
            "-s" | "--sci" => cli.numeric_format = Some(NumericFormat::Scientific),
            "-f" | "--fix" => cli.numeric_format = Some(NumericFormat::Fixed),
            "--strict" => cli.strict = true,
            "-h" | "--help" => cli.help = true,
            "-V" | "--version" => cli.version = true,
            _ => {}
        }
    }

    cli
}

/// Build the engine from the parsed flags.
pub(crate) fn build_evaluator(cli: &CliArgs) -> Evaluator {
    let mut calc = Evaluator::new();
    if let Some(mode) = cli.angle_mode {
        calc.set_angle_mode(mode);
    }
    if let Some(format) = cli.numeric_format {
        calc.set_numeric_format(format);
    }
    calc.set_strict(cli.strict);
    calc
}

pub(crate) fn print_help() {
    println!(
        r#"rpncalc {} - a terminal-based RPN calculator

USAGE:
    rpncalc [OPTION]...

OPTIONS:
    -d, --deg          Set angle mode to degrees
    -r, --rad          Set angle mode to radians (default)
    -s, --sci          Use scientific notation for numbers (default)
    -f, --fix          Use fixed-point notation for numbers
        --strict       Report unknown commands and missing operands
    -V, --version      Show version information and exit
    -h, --help         Display this help message and exit

EXAMPLES:
    rpncalc --deg --fix     Start in degrees mode with fixed-point display
    rpncalc -s              Start with scientific display mode

Inside the calculator, type numbers to push them and operators to
combine them; `help` shows the full command list."#,
        VERSION
    );
}

pub(crate) fn print_version() {
    println!("rpncalc {}", VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("rpncalc")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parses_mode_flags() {
        let cli = parse_args(&args(&["--deg", "--fix"]));
        assert_eq!(cli.angle_mode, Some(AngleMode::Degrees));
        assert_eq!(cli.numeric_format, Some(NumericFormat::Fixed));
        assert!(!cli.strict);
    }

    #[test]
    fn short_flags() {
        let cli = parse_args(&args(&["-r", "-s", "--strict"]));
        assert_eq!(cli.angle_mode, Some(AngleMode::Radians));
        assert_eq!(cli.numeric_format, Some(NumericFormat::Scientific));
        assert!(cli.strict);
    }

    #[test]
    fn no_flags_leaves_defaults() {
        let cli = parse_args(&args(&[]));
        assert_eq!(cli.angle_mode, None);
        assert_eq!(cli.numeric_format, None);
        assert!(!cli.help && !cli.version);
    }

    #[test]
    fn help_and_version() {
        assert!(parse_args(&args(&["--help"])).help);
        assert!(parse_args(&args(&["-V"])).version);
    }
}
