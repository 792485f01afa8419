use smartcalc::{process_input, CalcError, VariableStore};
use std::io::IsTerminal;

/// Execute a single line of input, printing the value of an expression
pub(crate) fn execute_line(
    store: &mut VariableStore,
    input: &str,
    print_output: bool,
) -> Result<Option<i64>, CalcError> {
    let outcome = process_input(input, store)?;

    if print_output {
        if let Some(value) = outcome {
            println!("{}", value);
        }
    }

    Ok(outcome)
}

/// Whether stdin is attached to an interactive terminal
pub(crate) fn stdin_is_terminal() -> bool {
    std::io::stdin().is_terminal()
}
