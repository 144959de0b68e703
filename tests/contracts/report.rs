//! HTML report contracts

use crate::common::*;

#[test]
fn contract_report_written_to_given_path() {
    let env = reference_env();
    let out = env.home.path().join("out.html");
    let arg = format!("--report={}", out.display());

    let result = env.compare(&[&arg]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("Report written to"));
    let html = std::fs::read_to_string(&out).expect("report exists");
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("b.txt"));
    assert!(!html.contains("http://") && !html.contains("https://"));
}

#[test]
fn contract_bare_report_flag_uses_default_file() {
    let env = reference_env();

    let result = env.compare(&["--report"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(env.home.path().join("diff_report.html").is_file());
}

#[test]
fn contract_report_into_missing_directory_fails() {
    let env = reference_env();
    let out = env.home.path().join("no/such/dir/out.html");
    let arg = format!("--report={}", out.display());

    let result = env.compare(&[&arg]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("failed to write report"));
}

#[test]
fn contract_report_conflicts_with_json() {
    let env = reference_env();

    let result = env.compare(&["--report", "--json"]);

    assert_eq!(result.exit_code, 1);
}
