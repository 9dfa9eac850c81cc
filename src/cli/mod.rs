//! Command-line interface layer.

pub mod args;
pub mod exit_status;
pub mod report;
pub mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;

/// Run extraction for the parsed arguments and print the outcome.
///
/// Fatal errors are printed to stderr with their cause chain.
pub fn run_cli(args: Arguments) -> ExitStatus {
    match run::run(&args) {
        Ok(outcome) => {
            report::print(&outcome, args.verbose);
            if outcome.report.error_count() > 0 {
                ExitStatus::EntryErrors
            } else {
                ExitStatus::Success
            }
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::from_error(&err)
        }
    }
}
