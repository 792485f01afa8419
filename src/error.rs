//! Error kinds for the calculator core
//!
//! Every failure a line can produce is one of these variants. The `Display`
//! text is exactly what the read loop prints back to the user.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// Unbalanced parentheses, a dangling `(`, a missing operand, or a value
    /// stack that does not end with exactly one value
    #[error("invalid expression")]
    InvalidExpression,
    #[error("division by zero")]
    DivisionByZero,
    /// A symbol that is not one of `+ - * / ^`
    #[error("invalid operator {0}")]
    InvalidOperator(String),
    #[error("unknown variable")]
    UnknownVariable,
    /// An operand that is neither a variable name nor an integer literal
    #[error("invalid identifier")]
    InvalidIdentifier,
    #[error("Invalid assignment")]
    InvalidAssignment,
    /// Result does not fit in a 64-bit signed integer
    #[error("overflow")]
    Overflow,
}
