//! Exit status contracts
//!
//! 0 for a completed comparison (differences or not), help and version;
//! 1 for usage errors and runtime failures.

use crate::common::*;

#[test]
fn contract_differences_still_exit_zero() {
    let env = reference_env();

    let result = env.compare(&[]);

    assert_eq!(result.exit_code, 0, "{}", result.combined_output());
}

#[test]
fn contract_identical_trees_exit_zero() {
    let env = TestEnv::builder().with_file("same.txt", "x").build();

    let result = env.compare(&[]);

    assert_eq!(result.exit_code, 0, "{}", result.combined_output());
}

#[test]
fn contract_missing_arguments_exit_one() {
    let env = TestEnv::builder().build();

    let result = env.run(&[]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("Usage"), "stderr: {}", result.stderr);
}

#[test]
fn contract_extra_argument_exit_one() {
    let env = TestEnv::builder().build();
    let (source, target) = (env.source_arg(), env.target_arg());

    let result = env.run(&[&source, &target, "third"]);

    assert_eq!(result.exit_code, 1);
}

#[test]
fn contract_help_exit_zero() {
    let env = TestEnv::builder().build();

    let result = env.run(&["--help"]);

    assert_eq!(result.exit_code, 0);
    assert!(result.stdout.contains("<SOURCE>"));
    assert!(result.stdout.contains("--report"));
}

#[test]
fn contract_version_exit_zero() {
    let env = TestEnv::builder().build();

    let result = env.run(&["--version"]);

    assert_eq!(result.exit_code, 0);
    assert!(result.stdout.starts_with("folder-diff "));
}

#[test]
fn contract_missing_directory_exit_one() {
    let env = TestEnv::builder().build();
    let missing = env.source_path("nope").to_string_lossy().to_string();
    let target = env.target_arg();

    let result = env.run(&[&missing, &target]);

    assert_eq!(result.exit_code, 1);
    assert!(
        result.stderr.contains("directory not found"),
        "stderr: {}",
        result.stderr
    );
    assert!(result.stdout.is_empty());
}

#[test]
fn contract_file_as_root_exit_one() {
    let env = TestEnv::builder().with_source_file("plain.txt", "x").build();
    let file = env.source_path("plain.txt").to_string_lossy().to_string();
    let target = env.target_arg();

    let result = env.run(&[&file, &target]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("not a directory"));
}

#[test]
fn contract_json_errors_are_json() {
    let env = TestEnv::builder().build();
    let missing = env.source_path("nope").to_string_lossy().to_string();
    let target = env.target_arg();

    let result = env.run(&[&missing, &target, "--json"]);

    assert_eq!(result.exit_code, 1);
    let value: serde_json::Value =
        serde_json::from_str(result.stderr.trim()).expect("stderr is one JSON object");
    assert_eq!(value["event"], "error");
    assert!(value["path"].as_str().is_some_and(|p| p.ends_with("nope")));
}

#[test]
fn contract_invalid_mode_exit_one() {
    let env = TestEnv::builder().build();

    let result = env.compare(&["--mode", "bytes"]);

    assert_eq!(result.exit_code, 1);
}
