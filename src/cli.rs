use crate::repl::{dispatch_command, Command, Flow};
use crate::terminal::execute_line;
use smartcalc::VariableStore;
use std::fs;
use std::process::ExitCode;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parsed command-line arguments
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct CliArgs {
    pub(crate) command: Option<String>,
    pub(crate) script: Option<String>,
    pub(crate) help: bool,
    pub(crate) version: bool,
    pub(crate) norc: bool,
    pub(crate) trace: bool,
}

/// Parse command-line arguments
pub(crate) fn parse_args(args: &[String]) -> CliArgs {
    let mut cli = CliArgs::default();

    let mut i = 1; // Skip program name
    while i < args.len() {
        match args[i].as_str() {
            "--norc" => {
                cli.norc = true;
            }
            "--trace" => {
                cli.trace = true;
            }
            "-c" => {
                // Everything after -c is the expression
                if i + 1 < args.len() {
                    cli.command = Some(args[i + 1..].join(" "));
                    break;
                }
            }
            "--help" | "-h" => {
                cli.help = true;
            }
            "--version" | "-V" => {
                cli.version = true;
            }
            path => {
                // Assume it's a script file if not a flag
                if !path.starts_with('-') {
                    cli.script = Some(path.to_string());
                }
            }
        }
        i += 1;
    }

    cli
}

pub(crate) fn print_help() {
    println!(
        r#"smartcalc-{} Smart Calculator - integer expressions with variables

USAGE:
    smartcalc                   Start interactive calculator
    smartcalc -c <expr>         Evaluate a single line
    smartcalc <script>          Evaluate each line of a file
    smartcalc --norc            Do not load the startup file
    smartcalc --trace           Log tokenizing, parsing and evaluation to stderr
    smartcalc --help            Show this help message
    smartcalc --version         Show version

STARTUP:
    ~/.smartcalcrc              Executed on startup (if exists)
    SMARTCALC_RC=<path>         Use another startup file
    SMARTCALC_BANNER=1          Show startup banner (quiet by default)
    SMARTCALC_TRACE=1           Same as --trace

SYNTAX:
    2 + 3 * 4                   Operators: + - * / ^ (all left-associative)
    (2 + 3) * 4                 Parentheses group
    5 - -3                      Sign runs collapse: -- is +, --- is -
    7 / 2                       Division truncates toward zero
    x = 5                       Assign a literal or another variable
    x * 2                       Use a variable

COMMANDS:
    /help                       Show usage
    /exit                       Quit
"#,
        VERSION
    );
}

pub(crate) fn print_version() {
    println!("smartcalc-{}", VERSION);
}

/// Execute a single line given with -c
pub(crate) fn execute_command(store: &mut VariableStore, cmd: &str) -> ExitCode {
    if let Some(command) = Command::parse(cmd) {
        dispatch_command(&command);
        return ExitCode::SUCCESS;
    }

    match execute_line(store, cmd, true) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Execute a script file, stopping at the first error or `/exit`
pub(crate) fn execute_script(store: &mut VariableStore, path: &str) -> ExitCode {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error reading {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    for (line_num, line) in content.lines().enumerate() {
        let trimmed = line.trim();

        // Skip empty lines and comments
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if let Some(command) = Command::parse(trimmed) {
            if dispatch_command(&command) == Flow::Exit {
                break;
            }
            continue;
        }

        if let Err(e) = execute_line(store, trimmed, true) {
            eprintln!("Error at line {}: {}", line_num + 1, e);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
