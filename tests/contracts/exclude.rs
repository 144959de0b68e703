//! Exclude pattern contracts
//!
//! Patterns are matched against base names on both sides, and an excluded
//! directory takes its whole subtree with it.

use crate::common::*;

#[test]
fn contract_excluded_files_are_invisible() {
    let env = reference_builder()
        .with_source_file("scratch.tmp", "s")
        .with_target_file("other.tmp", "t")
        .build();

    let result = env.compare(&["--exclude", "*.tmp"]);

    assert!(result.success);
    assert!(!result.stdout.contains(".tmp"));
    assert!(result.stdout.contains(REFERENCE_SUMMARY));
}

#[test]
fn contract_excluded_directory_prunes_subtree() {
    let env = reference_builder()
        .with_source_file("node_modules/pkg/index.js", "a")
        .with_target_file("node_modules/pkg/index.js", "b")
        .build();

    let result = env.compare(&["--exclude", "node_modules"]);

    assert!(!result.stdout.contains("node_modules"));
    assert!(result.stdout.contains(REFERENCE_SUMMARY));
}

#[test]
fn contract_exclude_accepts_comma_list_and_repeats() {
    let env = reference_env();

    let result = env.compare(&["--exclude", "b.txt,d.txt", "--exclude", "dir"]);

    assert!(result.stdout.contains("No differences found"));
    assert!(result.stdout.contains("1 identical, 0 modified, 0 new, 0 deleted"));
}

#[test]
fn contract_hidden_files_are_compared() {
    let env = TestEnv::builder()
        .with_source_file(".env", "A=1")
        .with_target_file(".env", "A=2")
        .build();

    let result = env.compare(&[]);

    assert!(result.stdout.contains("~ .env"));
}
