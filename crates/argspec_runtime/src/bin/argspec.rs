//! argspec CLI entry point.

use argspec_runtime::{Command, HELP, RuntimeError, execute, logging, parse_cli_args, version};
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(output) => {
            print!("{output}");
            if !output.ends_with('\n') {
                println!();
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            if matches!(e, RuntimeError::Usage(_)) {
                eprintln!("Run 'argspec --help' for usage.");
            }
            ExitCode::from(e.exit_code())
        }
    }
}

fn run() -> Result<String, RuntimeError> {
    let invocation = match parse_cli_args(env::args().skip(1))? {
        Command::Help => return Ok(HELP.to_string()),
        Command::Version => return Ok(version()),
        Command::Run(invocation) => invocation,
    };

    logging::init(&invocation.config);
    tracing::debug!(spec = %invocation.spec, args = invocation.args.len(), "starting");

    execute(&invocation)
}
