//! smartcalc - Smart Calculator
//!
//! Usage:
//!   smartcalc              Start the interactive calculator
//!   smartcalc -c "expr"    Evaluate a single line
//!   smartcalc script.txt   Evaluate each line of a file

mod cli;
mod rcfile;
mod repl;
mod terminal;
mod trace;

use smartcalc::VariableStore;
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let cli = cli::parse_args(&args);

    if cli.help {
        cli::print_help();
        return ExitCode::SUCCESS;
    }

    if cli.version {
        cli::print_version();
        return ExitCode::SUCCESS;
    }

    trace::init(cli.trace || trace::trace_requested_by_env());

    // One store for the whole process, seeded by the rc file
    let mut store = VariableStore::new();
    if !cli.norc {
        rcfile::load_rc(&mut store);
    }

    if let Some(cmd) = cli.command {
        return cli::execute_command(&mut store, &cmd);
    }

    if let Some(script) = cli.script {
        return cli::execute_script(&mut store, &script);
    }

    match repl::run_repl(&mut store) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("REPL error: {}", e);
            ExitCode::FAILURE
        }
    }
}
