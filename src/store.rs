//! Variable storage and operand resolution

use crate::error::CalcError;
use std::collections::HashMap;

/// Check whether a name is shaped like a variable: non-empty, letters and
/// whitespace only. Digits or punctuation anywhere disqualify it. "Letter"
/// means `char::is_alphabetic`, so letter-like numerals such as `Ⅻ` and
/// combining marks qualify too.
pub fn is_valid_variable(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_alphabetic() || c.is_whitespace())
}

/// Values assigned during a session, keyed by case-sensitive name.
///
/// Entries are created by the first assignment and overwritten by later
/// ones; nothing is ever removed.
#[derive(Debug, Clone, Default)]
pub struct VariableStore {
    values: HashMap<String, i64>,
}

impl VariableStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.values.get(name).copied()
    }

    /// Store a value, returning the one it replaced
    pub fn set(&mut self, name: impl Into<String>, value: i64) -> Option<i64> {
        self.values.insert(name.into(), value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Resolve an operand to its integer value.
    ///
    /// Variable-shaped text is looked up; everything else must parse as a
    /// decimal integer (an optional leading sign is accepted).
    pub fn resolve(&self, token: &str) -> Result<i64, CalcError> {
        let token = token.trim();
        if is_valid_variable(token) {
            return self.get(token).ok_or(CalcError::UnknownVariable);
        }
        token.parse::<i64>().map_err(|_| CalcError::InvalidIdentifier)
    }
}
