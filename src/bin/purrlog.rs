//! Usage:
//!   purrlog [OPTIONS] <LEVEL> <MESSAGE>...
//!
//!   purrlog error "backup failed"
//!   purrlog -s com.example.backup -c io --backend terminal info copied 42 files

use clap::Parser;
use purrlog::cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("purrlog: {e}");
            ExitCode::FAILURE
        }
    }
}
