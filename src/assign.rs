//! `name = value` assignments
//!
//! The right-hand side is a single operand (a literal or an existing
//! variable), not a general expression: `x = 1 + 2` is rejected.

use crate::error::CalcError;
use crate::store::{is_valid_variable, VariableStore};
use crate::trace_categories;

/// Validate and execute an assignment line.
///
/// Every failure, including an unresolvable right-hand side, reports
/// `Invalid assignment`.
pub fn assign(input: &str, store: &mut VariableStore) -> Result<(), CalcError> {
    let mut parts = input.split('=');
    let (Some(name), Some(rhs), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(CalcError::InvalidAssignment);
    };

    let name = name.trim();
    if !is_valid_variable(name) {
        return Err(CalcError::InvalidAssignment);
    }

    let value = store
        .resolve(rhs)
        .map_err(|_| CalcError::InvalidAssignment)?;

    tracing::debug!(target: trace_categories::EVAL, "{} := {}", name, value);
    store.set(name, value);
    Ok(())
}
