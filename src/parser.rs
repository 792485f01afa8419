//! Infix to postfix conversion (shunting-yard)
//!
//! All operators are left-associative, `^` included: on equal precedence the
//! operator already on the stack is emitted first, so `2 ^ 3 ^ 2` is
//! `(2 ^ 3) ^ 2`.

use crate::error::CalcError;
use crate::lexer::{join_tokens, Token};
use crate::trace_categories;

/// Convert infix tokens into postfix order.
///
/// A `)` without a matching `(` is tolerated here; callers reject unbalanced
/// lines before tokenizing. A `(` that is never closed fails.
pub fn to_postfix(tokens: Vec<Token>) -> Result<Vec<Token>, CalcError> {
    let mut output = Vec::with_capacity(tokens.len());
    // Only operators and `(` are ever pushed
    let mut stack: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::LParen => stack.push(token),
            Token::RParen => {
                while let Some(top) = stack.pop() {
                    if top == Token::LParen {
                        break;
                    }
                    output.push(top);
                }
            }
            Token::Operator(op) => {
                while let Some(&Token::Operator(top)) = stack.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    stack.pop();
                    output.push(Token::Operator(top));
                }
                stack.push(token);
            }
            Token::Operand(_) => output.push(token),
        }
    }

    while let Some(top) = stack.pop() {
        if top == Token::LParen {
            return Err(CalcError::InvalidExpression);
        }
        output.push(top);
    }

    tracing::debug!(target: trace_categories::PARSE, "postfix: {}", join_tokens(&output));
    Ok(output)
}
