//! Targets used for `tracing` events emitted by the calculator.

/// Turning a raw line into tokens.
pub const TOKENIZE: &str = "tokenize";
/// Infix to postfix conversion.
pub const PARSE: &str = "parse";
/// Postfix evaluation and assignments.
pub const EVAL: &str = "eval";
/// Lines read by the front end (REPL, scripts, rc file).
pub const INPUT: &str = "input";

/// All calculator targets, in the order they fire for one line.
pub const ALL: [&str; 4] = [INPUT, TOKENIZE, PARSE, EVAL];
