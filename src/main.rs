use std::process::ExitCode;

use clap::Parser;
use genstrings::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    let args = match Arguments::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // --help and --version also end up here
            let _ = err.print();
            return if err.use_stderr() {
                ExitStatus::Usage.into()
            } else {
                ExitStatus::Success.into()
            };
        }
    };

    genstrings::cli::run_cli(args).into()
}
