//! Random two-sided layouts.
//!
//! Directory segments never end in `.txt` and file names always do, so a
//! generated path is never both a file and a directory.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use proptest::prelude::*;

use folder_diff::domain::entities::{Entry, EntryTree};
use folder_diff::domain::services::{merge, Classification, Classifier, MergeOptions, SyncTree};
use folder_diff::domain::value_objects::{CompareMode, ContentDigest};

/// Relative file path -> content digest id
pub type Files = BTreeMap<String, u8>;

fn file_path() -> impl Strategy<Value = String> {
    (
        proptest::collection::vec(prop_oneof!["d0", "d1", "D2"], 0..=2),
        prop_oneof!["a", "b", "B", "c"],
    )
        .prop_map(|(dirs, name)| {
            let mut parts = dirs;
            parts.push(format!("{}.txt", name));
            parts.join("/")
        })
}

pub fn files() -> impl Strategy<Value = Files> {
    proptest::collection::btree_map(file_path(), 0u8..3, 0..10)
}

pub fn entries(root: &str, files: &Files) -> Vec<Entry> {
    files
        .iter()
        .map(|(rel, digest)| {
            Entry::file(
                Path::new(root).join(rel),
                rel.as_str(),
                Some(ContentDigest::new(&digest.to_string())),
            )
        })
        .collect()
}

pub struct Built {
    pub source: EntryTree,
    pub target: EntryTree,
    pub classification: Classification,
    pub tree: SyncTree,
}

pub fn build(source: &Files, target: &Files, mode: CompareMode, expanded: bool) -> Built {
    let source = EntryTree::from_entries(Path::new("/s"), entries("/s", source));
    let target = EntryTree::from_entries(Path::new("/t"), entries("/t", target));
    let classification = Classifier::new(mode).classify(source.entries(), target.entries());
    let tree = merge(
        &source,
        &target,
        &classification,
        MergeOptions {
            start_expanded: expanded,
        },
    );
    Built {
        source,
        target,
        classification,
        tree,
    }
}

/// Every relative path implied by `files`, including parent directories.
pub fn all_paths(files: &Files) -> BTreeSet<String> {
    let mut out = BTreeSet::new();
    for rel in files.keys() {
        let mut prefix = String::new();
        for part in rel.split('/') {
            if !prefix.is_empty() {
                prefix.push('/');
            }
            prefix.push_str(part);
            out.insert(prefix.clone());
        }
    }
    out
}
