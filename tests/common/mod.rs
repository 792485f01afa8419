//! Common test utilities for smartcalc integration tests

pub use smartcalc::{process_input, CalcError, VariableStore};

/// Helper to evaluate one line with an empty store and render it the way
/// the read loop prints it
pub fn eval(input: &str) -> String {
    render(process_input(input, &mut VariableStore::new()))
}

/// Helper to run several lines against one store, collecting what each
/// printed (assignments print nothing and are left out)
#[allow(dead_code)]
pub fn session(lines: &[&str]) -> Vec<String> {
    let mut store = VariableStore::new();
    lines
        .iter()
        .filter_map(|line| match process_input(line, &mut store) {
            Ok(None) => None,
            other => Some(render(other)),
        })
        .collect()
}

fn render(result: Result<Option<i64>, CalcError>) -> String {
    match result {
        Ok(Some(value)) => value.to_string(),
        Ok(None) => String::new(),
        Err(e) => e.to_string(),
    }
}
