//! Property tests for classification.

use proptest::prelude::*;

use folder_diff::domain::value_objects::{CompareMode, Side, Status};

use crate::layout::{build, files};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Each file gets the status its presence and digest imply.
    #[test]
    fn property_file_status_matches_presence_and_digest(
        source in files(),
        target in files(),
    ) {
        let built = build(&source, &target, CompareMode::Content, true);

        for (rel, digest) in &source {
            let expected = match target.get(rel) {
                None => Status::Deleted,
                Some(other) if other == digest => Status::Identical,
                Some(_) => Status::Modified,
            };
            prop_assert_eq!(built.classification.status(Side::Source, rel), Some(expected));
        }
        for (rel, digest) in &target {
            let expected = match source.get(rel) {
                None => Status::New,
                Some(other) if other == digest => Status::Identical,
                Some(_) => Status::Modified,
            };
            prop_assert_eq!(built.classification.status(Side::Target, rel), Some(expected));
        }
    }

    /// PROPERTY: Name-only mode never reports a modification.
    #[test]
    fn property_name_only_never_modified(
        source in files(),
        target in files(),
    ) {
        let built = build(&source, &target, CompareMode::NameOnly, true);

        prop_assert_eq!(built.tree.summary().modified, 0);
    }

    /// PROPERTY: Comparing a tree with itself finds no differences.
    #[test]
    fn property_self_comparison_is_identical(
        side in files(),
    ) {
        let built = build(&side, &side, CompareMode::Content, true);

        prop_assert_eq!(built.tree.summary().differences(), 0);
    }

    /// PROPERTY: Swapping the sides swaps new and deleted counts.
    #[test]
    fn property_swap_mirrors_new_and_deleted(
        source in files(),
        target in files(),
    ) {
        let forward = build(&source, &target, CompareMode::Content, true).tree.summary();
        let backward = build(&target, &source, CompareMode::Content, true).tree.summary();

        prop_assert_eq!(forward.new, backward.deleted);
        prop_assert_eq!(forward.deleted, backward.new);
        prop_assert_eq!(forward.modified, backward.modified);
        prop_assert_eq!(forward.identical, backward.identical);
    }
}
