//! Text listing contracts (stdout is not a terminal)

use crate::common::*;

#[test]
fn contract_lists_differences_in_tree_order() {
    let env = reference_env();

    let result = env.compare(&[]);
    assert!(result.success, "{}", result.combined_output());

    let lines: Vec<&str> = result.stdout.lines().collect();
    assert_eq!(
        lines[0],
        format!(
            "Comparing {} -> {} (mode: content)",
            env.source_arg(),
            env.target_arg()
        )
    );
    assert_eq!(
        &lines[1..],
        &["", "- dir/c.txt", "~ b.txt", "+ d.txt", "", REFERENCE_SUMMARY]
    );
}

#[test]
fn contract_identical_trees_report_no_differences() {
    let env = TestEnv::builder()
        .with_file("a.txt", "1")
        .with_file("sub/b.txt", "2")
        .build();

    let result = env.compare(&[]);

    assert!(result.stdout.contains("No differences found"));
    assert!(result
        .stdout
        .contains("3 identical, 0 modified, 0 new, 0 deleted (2 files, 1 directories)"));
}

#[test]
fn contract_name_only_mode_ignores_content() {
    let env = reference_env();

    let result = env.compare(&["--mode", "nameOnly"]);

    assert!(result.success);
    assert!(!result.stdout.contains("~ b.txt"));
    assert!(result.stdout.contains("(mode: nameOnly)"));
    assert!(result.stdout.contains("3 identical, 0 modified, 1 new, 1 deleted"));
}

#[test]
fn contract_missing_subtree_is_reported_at_every_level() {
    let env = TestEnv::builder()
        .with_file("keep.txt", "k")
        .with_source_file("old/deep/x.txt", "x")
        .build();

    let result = env.compare(&[]);

    assert!(result.stdout.contains("- old/\n"));
    assert!(result.stdout.contains("- old/deep/\n"));
    assert!(result.stdout.contains("- old/deep/x.txt\n"));
}

#[test]
fn contract_stdout_has_no_escape_codes_with_no_color() {
    let env = reference_env();

    let result = env.compare(&[]);

    assert!(!result.stdout.contains('\u{1b}'));
}
