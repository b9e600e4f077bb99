//! End-to-end tests of the fenceline binary.

use std::io::Write;
use std::process::{Command, Stdio};

fn fenceline() -> Command {
    Command::new(env!("CARGO_BIN_EXE_fenceline"))
}

fn write_table(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn flags_outliers_and_prints_the_summary() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_table(&dir, "quotes.csv", "10,12,11,13,100\n1,2,3\nx,y,z\n");

    let output = fenceline()
        .arg("--file")
        .arg(&input)
        .args(["--no-interactive", "--columns", "A:E", "--start-row", "1"])
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("rows processed: 2, outlier cells: 1"));

    let result = std::fs::read_to_string(dir.path().join("quotes_result.csv")).unwrap();
    assert!(result.contains("**100**"));
    assert!(result.contains("x,y,z"));
}

#[test]
fn interactive_prompts_collect_missing_parameters() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_table(&dir, "quotes.csv", "10,12,11,13,100\n");

    let mut child = fenceline()
        .arg("--file")
        .arg(&input)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // start column, end column, start row, multiplier (default).
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"A\nE\n1\n\n")
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("rows processed: 1, outlier cells: 1"));
}

#[test]
fn json_summary_and_report_are_written() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_table(&dir, "bids.csv", "10,12,11,13,100\n");

    let output = fenceline()
        .arg("--file")
        .arg(&input)
        .args(["--no-interactive", "--report", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8(output.stdout).unwrap();
    let summary: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(summary["rows_processed"], 1);
    assert_eq!(summary["cells_flagged"], 1);

    let report =
        std::fs::read_to_string(dir.path().join("bids_result_outliers.md")).unwrap();
    assert!(report.contains("| 1 | E | 100 |"));
    assert!(report.contains("rows processed: 1, outlier cells: 1"));
}

#[test]
fn explicit_output_path_is_honored() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_table(&dir, "quotes.csv", "10,12,11,13,100\n");
    let out = dir.path().join("custom.csv");

    let status = fenceline()
        .arg("--file")
        .arg(&input)
        .arg("--output")
        .arg(&out)
        .arg("--no-interactive")
        .status()
        .unwrap();

    assert!(status.success());
    assert!(out.exists());
    assert!(!dir.path().join("quotes_result.csv").exists());
}

#[test]
fn project_config_supplies_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_table(&dir, "quotes.csv", "10,12,11,13,100\n");
    std::fs::write(
        dir.path().join("fenceline.toml"),
        "[output]\nmarker = \"!!\"\n",
    )
    .unwrap();

    let status = fenceline()
        .arg("--file")
        .arg(&input)
        .arg("--no-interactive")
        .status()
        .unwrap();

    assert!(status.success());
    let result = std::fs::read_to_string(dir.path().join("quotes_result.csv")).unwrap();
    assert!(result.contains("!!100!!"));
}

#[test]
fn missing_input_fails_with_a_coded_error() {
    let dir = tempfile::tempdir().unwrap();

    let output = fenceline()
        .arg("--file")
        .arg(dir.path().join("nope.csv"))
        .arg("--no-interactive")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("[IO_ERROR]"));
}

#[test]
fn negative_multiplier_is_rejected_before_scanning() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_table(&dir, "quotes.csv", "10,12,11,13,100\n");

    let output = fenceline()
        .arg("--file")
        .arg(&input)
        .args(["--no-interactive", "--multiplier=-1.5"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("[CONFIG_ERROR]"));
    assert!(!dir.path().join("quotes_result.csv").exists());
}
