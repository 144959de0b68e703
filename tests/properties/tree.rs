//! Property tests for the merged tree and its flattening.

use std::cmp::Ordering;

use proptest::prelude::*;

use folder_diff::domain::services::{flatten, sibling_order, SyncTree};
use folder_diff::domain::value_objects::{CompareMode, Side, Status};

use crate::layout::{all_paths, build, files};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The merged tree holds exactly one node per path of either side.
    #[test]
    fn property_merge_covers_union_once(
        source in files(),
        target in files(),
    ) {
        let built = build(&source, &target, CompareMode::Content, true);
        let mut expected = all_paths(&source);
        expected.extend(all_paths(&target));

        prop_assert_eq!(built.tree.len() - 1, expected.len());
        for rel in &expected {
            prop_assert!(built.tree.find(rel).is_some(), "missing {}", rel);
        }
    }

    /// PROPERTY: Presence decides new/deleted; only present pairs can be identical or modified.
    #[test]
    fn property_status_follows_presence(
        source in files(),
        target in files(),
    ) {
        let built = build(&source, &target, CompareMode::Content, true);

        for id in built.tree.node_ids() {
            let node = built.tree.node(id);
            match (node.entry(Side::Source), node.entry(Side::Target)) {
                (None, Some(_)) => prop_assert_eq!(node.status, Status::New),
                (Some(_), None) => prop_assert_eq!(node.status, Status::Deleted),
                (Some(_), Some(_)) => prop_assert!(
                    matches!(node.status, Status::Identical | Status::Modified)
                ),
                (None, None) => prop_assert!(false, "node {} has no entry", node.rel_path),
            }
        }
    }

    /// PROPERTY: Siblings are ordered directories first, then by name.
    #[test]
    fn property_siblings_sorted(
        source in files(),
        target in files(),
    ) {
        let built = build(&source, &target, CompareMode::Content, true);
        let tree = &built.tree;

        for id in std::iter::once(SyncTree::ROOT).chain(tree.node_ids()) {
            for pair in tree.children(id).windows(2) {
                let (a, b) = (tree.node(pair[0]), tree.node(pair[1]));
                prop_assert_eq!(sibling_order(a, b), Ordering::Less);
            }
        }
    }

    /// PROPERTY: Merging is deterministic.
    #[test]
    fn property_merge_deterministic(
        source in files(),
        target in files(),
    ) {
        let first = build(&source, &target, CompareMode::Content, true);
        let second = build(&source, &target, CompareMode::Content, true);

        prop_assert_eq!(first.tree, second.tree);
        prop_assert_eq!(first.source.len(), second.source.len());
        prop_assert_eq!(first.target.len(), second.target.len());
    }

    /// PROPERTY: Fully expanded, flattening lists every node; fully collapsed, only the top level.
    #[test]
    fn property_flatten_respects_expansion(
        source in files(),
        target in files(),
    ) {
        let built = build(&source, &target, CompareMode::Content, true);
        let expanded = flatten(&built.tree);
        prop_assert_eq!(expanded.len(), built.tree.len() - 1);

        let mut collapsed_tree = built.tree.clone();
        collapsed_tree.set_all_expanded(false);
        let collapsed = flatten(&collapsed_tree);
        prop_assert_eq!(collapsed.len(), collapsed_tree.children(SyncTree::ROOT).len());
        prop_assert!(collapsed.iter().all(|v| v.depth == 0));
    }

    /// PROPERTY: Row depth equals the node's depth in the tree.
    #[test]
    fn property_flatten_depth_matches_tree_depth(
        source in files(),
        target in files(),
    ) {
        let built = build(&source, &target, CompareMode::Content, true);

        for visible in flatten(&built.tree) {
            prop_assert_eq!(visible.depth, built.tree.depth(visible.id));
        }
    }
}
