//! Process-level setup and error handling.
//!
//! Parses arguments, installs logging, and reports fatal errors.

use crate::core::cli::CliArgs;
use crate::logging;
use tracing_appender::non_blocking::WorkerGuard;

/// Handle application errors by printing the error chain and exiting with code 1
pub fn handle_error(error: anyhow::Error) -> ! {
    eprintln!();
    eprintln!("Error generating Braille font:");
    eprintln!("{error:#}");
    eprintln!();
    eprintln!("Try running with --help for usage information.");
    std::process::exit(1);
}

/// Parse command line arguments
pub fn get_cli_args() -> CliArgs {
    use clap::Parser;
    CliArgs::parse()
}

/// Install logging as requested on the command line.
///
/// Falls back to stderr logging when the log file cannot be opened. The
/// returned guard must outlive the run so file output gets flushed.
pub fn init_logging(cli_args: &CliArgs) -> Option<WorkerGuard> {
    if cli_args.log_file {
        match logging::init_with_log_file(cli_args.verbose) {
            Ok(guard) => return Some(guard),
            Err(e) => eprintln!("Failed to setup log file: {}", e),
        }
    }
    logging::init(cli_args.verbose);
    None
}
