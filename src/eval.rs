//! Postfix evaluation
//!
//! The evaluator runs a postfix token sequence on a value stack:
//! - Operands resolve (literal or variable) and push themselves
//! - Operators pop the right operand, then the left one, and push the result
//! - Exactly one value must be left when the sequence is exhausted

use crate::error::CalcError;
use crate::lexer::{Operator, Token};
use crate::store::VariableStore;
use crate::trace_categories;

/// Evaluate postfix tokens against the store
pub fn evaluate(postfix: &[Token], store: &VariableStore) -> Result<i64, CalcError> {
    let mut stack: Vec<i64> = Vec::with_capacity(postfix.len());

    for token in postfix {
        match token {
            Token::Operator(op) => {
                let (Some(b), Some(a)) = (stack.pop(), stack.pop()) else {
                    return Err(CalcError::InvalidExpression);
                };
                let result = apply(*op, a, b)?;
                tracing::debug!(target: trace_categories::EVAL, "{} {} {} = {}", a, op, b, result);
                stack.push(result);
            }
            Token::Operand(text) => stack.push(store.resolve(text)?),
            Token::LParen | Token::RParen => return Err(CalcError::InvalidExpression),
        }
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        _ => Err(CalcError::InvalidExpression),
    }
}

/// Apply a binary operator with checked 64-bit arithmetic
pub fn apply(op: Operator, a: i64, b: i64) -> Result<i64, CalcError> {
    match op {
        Operator::Add => a.checked_add(b).ok_or(CalcError::Overflow),
        Operator::Sub => a.checked_sub(b).ok_or(CalcError::Overflow),
        Operator::Mul => a.checked_mul(b).ok_or(CalcError::Overflow),
        Operator::Div => {
            if b == 0 {
                return Err(CalcError::DivisionByZero);
            }
            // Truncates toward zero; only i64::MIN / -1 can fail
            a.checked_div(b).ok_or(CalcError::Overflow)
        }
        Operator::Pow => power(a, b),
    }
}

/// Integer power. A negative exponent means `1 / base^|exp|`, truncated.
fn power(base: i64, exp: i64) -> Result<i64, CalcError> {
    match base {
        0 if exp < 0 => Err(CalcError::DivisionByZero),
        0 => Ok(if exp == 0 { 1 } else { 0 }),
        1 => Ok(1),
        -1 => Ok(if exp % 2 == 0 { 1 } else { -1 }),
        _ if exp < 0 => Ok(0),
        _ => {
            let exp = u32::try_from(exp).map_err(|_| CalcError::Overflow)?;
            base.checked_pow(exp).ok_or(CalcError::Overflow)
        }
    }
}
