//! smartcalc - Smart Calculator
//!
//! # Overview
//!
//! smartcalc evaluates integer expressions with variables, parentheses and
//! the operators `+ - * / ^`. Each line is either an assignment or an
//! expression:
//!
//! ```text
//! a = 4               # store 4 under `a`
//! b = a               # copy a variable
//! a * (b + 2) ^ 2     # 144
//! 5 - -3              # sign runs collapse: 5 + 3 = 8
//! ```
//!
//! # Pipeline
//!
//! ```text
//! line -> tokenize -> to_postfix -> evaluate -> i64
//!      \-> assign (when the line contains `=`)
//! ```
//!
//! All operators are left-associative, including `^`. Division truncates
//! toward zero. Variables live in a [`VariableStore`] owned by the caller and
//! passed into [`process_input`] for every line.
//!
//! # Example
//!
//! ```rust
//! use smartcalc::{process_input, VariableStore};
//!
//! let mut store = VariableStore::new();
//! assert_eq!(process_input("x = 5", &mut store).unwrap(), None);
//! assert_eq!(process_input("x * 2 + 1", &mut store).unwrap(), Some(11));
//! assert_eq!(
//!     process_input("10 / 0", &mut store).unwrap_err().to_string(),
//!     "division by zero"
//! );
//! ```

pub mod assign;
pub mod calculator;
pub mod error;
pub mod eval;
pub mod lexer;
pub mod parser;
pub mod store;
pub mod trace_categories;

// Re-export commonly used items
pub use assign::assign;
pub use calculator::process_input;
pub use error::CalcError;
pub use eval::evaluate;
pub use lexer::{tokenize, Operator, Token};
pub use parser::to_postfix;
pub use store::{is_valid_variable, VariableStore};

/// Convenience function to evaluate a single line with an empty store
pub fn eval(input: &str) -> Result<Option<i64>, String> {
    let mut store = VariableStore::new();
    process_input(input, &mut store).map_err(|e| e.to_string())
}
