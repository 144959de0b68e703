//! View flattening service
//!
//! Turns the expand-aware `SyncTree` into the ordered list of rows a viewer
//! shows. The root is never emitted; a collapsed directory hides its whole
//! subtree.

use crate::domain::value_objects::Side;

use super::tree_merge::{NodeId, SyncTree};

/// A node that is currently visible, with its display depth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleNode {
    pub id: NodeId,
    /// 0 for children of the root
    pub depth: usize,
}

/// Pre-order list of every visible node.
pub fn flatten(tree: &SyncTree) -> Vec<VisibleNode> {
    let mut out = Vec::new();
    flatten_into(tree, SyncTree::ROOT, 0, None, &mut out);
    out
}

/// Like [`flatten`], but skips nodes (and their subtrees) absent on `side`.
pub fn flatten_side(tree: &SyncTree, side: Side) -> Vec<VisibleNode> {
    let mut out = Vec::new();
    flatten_into(tree, SyncTree::ROOT, 0, Some(side), &mut out);
    out
}

fn flatten_into(
    tree: &SyncTree,
    id: NodeId,
    depth: usize,
    side: Option<Side>,
    out: &mut Vec<VisibleNode>,
) {
    for child in tree.children(id) {
        let node = tree.node(*child);
        if let Some(side) = side {
            if node.entry(side).is_none() {
                continue;
            }
        }

        out.push(VisibleNode { id: *child, depth });
        if node.is_dir && node.expanded {
            flatten_into(tree, *child, depth + 1, side, out);
        }
    }
}
