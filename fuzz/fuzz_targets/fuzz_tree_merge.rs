#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;

use folder_diff::domain::entities::{Entry, EntryTree};
use folder_diff::domain::services::{flatten, merge, Classifier, MergeOptions};
use folder_diff::domain::value_objects::{CompareMode, ContentDigest};

fn entries(root: &str, text: &str) -> Vec<Entry> {
    text.lines()
        .map(|line| match line.strip_suffix('/') {
            Some(dir) => Entry::dir(Path::new(root).join(dir), dir),
            None => Entry::file(
                Path::new(root).join(line),
                line,
                Some(ContentDigest::from_bytes(line.as_bytes())),
            ),
        })
        .collect()
}

fuzz_target!(|data: &[u8]| {
    // Arbitrary relative paths on both sides must merge and flatten without panicking
    if let Ok(text) = std::str::from_utf8(data) {
        let (left, right) = text.split_once('\0').unwrap_or((text, ""));
        let source = EntryTree::from_entries(Path::new("/s"), entries("/s", left));
        let target = EntryTree::from_entries(Path::new("/t"), entries("/t", right));
        let classification =
            Classifier::new(CompareMode::Content).classify(source.entries(), target.entries());
        let tree = merge(&source, &target, &classification, MergeOptions::default());
        let _ = flatten(&tree);
        let _ = tree.summary();
    }
});
