//! Reusable directory layouts.

use super::env::{TestEnv, TestEnvBuilder};

/// One of each status:
///
/// ```text
/// source/              target/
///   a.txt  "same"        a.txt  "same"
///   b.txt  "old"         b.txt  "new"
///   dir/c.txt            dir/
///                        d.txt
/// ```
pub fn reference_builder() -> TestEnvBuilder {
    TestEnv::builder()
        .with_file("a.txt", "same")
        .with_source_file("b.txt", "old")
        .with_target_file("b.txt", "new")
        .with_source_file("dir/c.txt", "gone")
        .with_target_dir("dir")
        .with_target_file("d.txt", "added")
}

pub fn reference_env() -> TestEnv {
    reference_builder().build()
}

pub const REFERENCE_SUMMARY: &str =
    "2 identical, 1 modified, 1 new, 1 deleted (4 files, 1 directories)";
