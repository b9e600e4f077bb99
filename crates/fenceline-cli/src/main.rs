//! fenceline binary entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use fenceline_cli::cli::Args;
use fenceline_core::errors::ErrorCode;

fn main() -> ExitCode {
    fenceline_core::tracing::init_tracing();

    let args = Args::parse();
    match fenceline_cli::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e.report_string());
            eprintln!("{}", e.report_string());
            ExitCode::FAILURE
        }
    }
}
