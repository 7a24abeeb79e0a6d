//! stockroom CLI entry point
//!
//! Parses arguments and delegates to `cli::run`. On failure the error
//! envelope goes to stdout and the process exits non-zero.

use stockroom::cli;

fn main() {
    if let Err(e) = cli::run() {
        if cli::write_error(e.code_str(), e.message()).is_err() {
            eprintln!("{}", e);
        }
        std::process::exit(1);
    }
}
