//! Line processing: the single entry point the front ends call

use crate::assign::assign;
use crate::error::CalcError;
use crate::eval::evaluate;
use crate::lexer::tokenize;
use crate::parser::to_postfix;
use crate::store::VariableStore;
use crate::trace_categories;

/// Process one input line.
///
/// Returns `Ok(Some(value))` for an expression and `Ok(None)` for a
/// successful assignment, which prints nothing.
pub fn process_input(input: &str, store: &mut VariableStore) -> Result<Option<i64>, CalcError> {
    tracing::debug!(target: trace_categories::INPUT, "processing {:?}", input);

    if !parens_balanced(input) {
        return Err(CalcError::InvalidExpression);
    }

    if input.contains('=') {
        assign(input, store)?;
        return Ok(None);
    }

    let postfix = to_postfix(tokenize(input)?)?;
    evaluate(&postfix, store).map(Some)
}

/// Count check only; ordering problems like `)(` are left to the converter
fn parens_balanced(input: &str) -> bool {
    let open = input.chars().filter(|&c| c == '(').count();
    let close = input.chars().filter(|&c| c == ')').count();
    open == close
}
