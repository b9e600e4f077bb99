//! fenceline-cli: the Fenceline command-line surface.
//!
//! Orchestrates a run: load config and workbook, prompt for missing
//! parameters, scan, persist the marked result, report.

pub mod cli;
pub mod io;
pub mod prompts;
pub mod report;

use std::path::Path;

use tracing::info;

use fenceline_analysis::scanner::{scan_sheet, scan_sheet_parallel};
use fenceline_core::config::FencelineConfig;
use fenceline_core::errors::{ConfigError, RunError};

use crate::prompts::Prompter;

/// Execute a full scan run for the parsed arguments.
pub fn run(args: &cli::Args) -> Result<(), RunError> {
    let root = args
        .file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let overrides = args.overrides()?;
    let mut config = FencelineConfig::load(root, Some(&overrides))?;

    let mut workbook = io::load_workbook(&args.file)?;

    if !args.no_interactive {
        let names = workbook.sheet_names();
        let stdin = std::io::stdin();
        let mut input = stdin.lock();
        let mut output = std::io::stdout();
        let mut prompter = Prompter::new(&mut input, &mut output);
        prompter.fill_missing(&mut config.scan, &names)?;
        config.scan.validate()?;
    }

    let sheet_number = config.scan.effective_sheet();
    let sheet_count = workbook.len();
    let sheet = workbook
        .sheet_mut(sheet_number - 1)
        .ok_or(ConfigError::SheetOutOfRange {
            given: sheet_number,
            count: sheet_count,
        })?;

    info!(
        sheet = %sheet.name,
        multiplier = config.scan.effective_multiplier(),
        "scanning"
    );

    let summary = if args.parallel {
        scan_sheet_parallel(sheet, &config.scan)?
    } else {
        scan_sheet(sheet, &config.scan, &report::ConsoleEvents)?
    };

    let out_path = config
        .output
        .output
        .clone()
        .unwrap_or_else(|| io::result_path(&args.file));
    io::save_sheet(sheet, &out_path, config.output.effective_marker())?;

    if config.output.effective_report() {
        let report_path = report::report_path(&out_path);
        report::write_report(sheet, &summary, &report_path)?;
        info!(path = %report_path.display(), "report written");
    }

    if args.json {
        if let Ok(text) = serde_json::to_string(&summary) {
            println!("{text}");
        }
    } else {
        println!("{summary}");
    }

    Ok(())
}
