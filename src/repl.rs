use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use smartcalc::{process_input, VariableStore};
use std::io::{self, BufRead};

use crate::rcfile::dirs_home;
use crate::terminal::stdin_is_terminal;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const PROMPT: &str = "> ";

pub(crate) const HELP_TEXT: &str = "\
This program supports basic arithmetic operations: addition and subtraction, and variable assignment.
Enter an expression to calculate its value or use one of the commands:
- /help to display this message.
- /exit to quit the program.";

/// A `/`-prefixed line
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Help,
    Exit,
    Unknown,
}

impl Command {
    /// Recognize a command line; `None` means the line is calculator input
    pub(crate) fn parse(line: &str) -> Option<Command> {
        if !line.starts_with('/') {
            return None;
        }
        Some(match line {
            "/exit" => Command::Exit,
            "/help" => Command::Help,
            _ => Command::Unknown,
        })
    }
}

/// Whether the read loop keeps going after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Exit,
}

/// Run a command, printing its output
pub(crate) fn dispatch_command(command: &Command) -> Flow {
    match command {
        Command::Exit => {
            println!("Bye!");
            return Flow::Exit;
        }
        Command::Help => println!("{}", HELP_TEXT),
        Command::Unknown => println!("Unknown command"),
    }
    Flow::Continue
}

/// Handle one line read by the loop. Errors are printed like results.
pub(crate) fn handle_line(store: &mut VariableStore, line: &str) -> Flow {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.is_empty() {
        return Flow::Continue;
    }

    if let Some(command) = Command::parse(line) {
        return dispatch_command(&command);
    }

    match process_input(line, store) {
        Ok(Some(value)) => println!("{}", value),
        Ok(None) => {}
        Err(e) => println!("{}", e),
    }
    Flow::Continue
}

/// Run the read loop until `/exit` or end of input
pub(crate) fn run_repl(store: &mut VariableStore) -> RlResult<()> {
    // Show banner only if SMARTCALC_BANNER=1
    if std::env::var("SMARTCALC_BANNER").is_ok_and(|v| v == "1") {
        println!("smartcalc-{} Smart Calculator", VERSION);
        println!("  Type /help for usage, /exit or Ctrl-D to quit");
    }

    if stdin_is_terminal() {
        run_interactive(store)
    } else {
        run_piped(store)?;
        Ok(())
    }
}

/// Line-edited loop for a terminal
fn run_interactive(store: &mut VariableStore) -> RlResult<()> {
    let mut rl = DefaultEditor::new()?;

    // Try to load history
    let history_path = dirs_home().map(|h| h.join(".smartcalc_history"));
    if let Some(ref path) = history_path {
        let _ = rl.load_history(path);
    }

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    let _ = rl.add_history_entry(trimmed);
                }
                if handle_line(store, &line) == Flow::Exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C - drop the current line
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl-D - exit
                println!("Bye!");
                break;
            }
            Err(err) => return Err(err),
        }
    }

    // Save history
    if let Some(ref path) = history_path {
        let _ = rl.save_history(path);
    }

    Ok(())
}

/// Plain line reader for piped or redirected stdin; no prompt
fn run_piped(store: &mut VariableStore) -> io::Result<()> {
    let stdin = io::stdin();
    read_lines(&mut stdin.lock(), store)
}

/// Feed raw lines to `handle_line` until `/exit` or end of input. Bytes that
/// are not UTF-8 are replaced, so such a line reaches the calculator as an
/// ordinary bad operand.
fn read_lines(reader: &mut impl BufRead, store: &mut VariableStore) -> io::Result<()> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }
        if handle_line(store, &String::from_utf8_lossy(&buf)) == Flow::Exit {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse("/exit"), Some(Command::Exit));
        assert_eq!(Command::parse("/help"), Some(Command::Help));
        assert_eq!(Command::parse("/go"), Some(Command::Unknown));
        assert_eq!(Command::parse("/exit now"), Some(Command::Unknown));
        assert_eq!(Command::parse("/"), Some(Command::Unknown));
    }

    #[test]
    fn non_commands_are_input() {
        assert_eq!(Command::parse("1 / 2"), None);
        assert_eq!(Command::parse(" /exit"), None);
        assert_eq!(Command::parse("x = 3"), None);
    }

    #[test]
    fn exit_stops_the_loop() {
        let mut store = VariableStore::new();
        assert_eq!(handle_line(&mut store, "/exit"), Flow::Exit);
        assert_eq!(handle_line(&mut store, "/exit\r\n"), Flow::Exit);
    }

    #[test]
    fn other_lines_continue() {
        let mut store = VariableStore::new();
        assert_eq!(handle_line(&mut store, ""), Flow::Continue);
        assert_eq!(handle_line(&mut store, "/help"), Flow::Continue);
        assert_eq!(handle_line(&mut store, "/nope"), Flow::Continue);
        assert_eq!(handle_line(&mut store, "10 / 0"), Flow::Continue);
        assert_eq!(handle_line(&mut store, "k = 4"), Flow::Continue);
        assert_eq!(store.get("k"), Some(4));
    }

    #[test]
    fn invalid_utf8_line_does_not_end_reading() {
        let mut store = VariableStore::new();
        let mut input: &[u8] = b"a = 2\n\xff\nb = a\n/exit\nc = 9\n";
        read_lines(&mut input, &mut store).unwrap();
        assert_eq!(store.get("b"), Some(2));
        assert_eq!(store.get("c"), None);
    }

    #[test]
    fn last_line_without_newline_is_read() {
        let mut store = VariableStore::new();
        let mut input: &[u8] = b"a = 5";
        read_lines(&mut input, &mut store).unwrap();
        assert_eq!(store.get("a"), Some(5));
    }
}
