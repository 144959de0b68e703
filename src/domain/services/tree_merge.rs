//! Tree merge service
//!
//! Unifies the independently walked source and target trees into a single
//! `SyncTree` keyed by relative path. Nodes live in an arena; parents are
//! referenced by index, never owned.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::entities::{parent_rel_path, Entry, EntryTree, ROOT_REL_PATH};
use crate::domain::value_objects::{Side, Status};

use super::classifier::Classification;

/// Index of a node inside a `SyncTree`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// One path of the unified tree, with whatever each side has there
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncNode {
    pub rel_path: String,
    pub name: String,
    pub is_dir: bool,
    pub source: Option<Entry>,
    pub target: Option<Entry>,
    pub status: Status,
    pub children: Vec<NodeId>,
    pub parent: Option<NodeId>,
    pub expanded: bool,
}

impl SyncNode {
    fn new(rel_path: &str, name: &str, is_dir: bool, expanded: bool) -> Self {
        Self {
            rel_path: rel_path.to_string(),
            name: name.to_string(),
            is_dir,
            source: None,
            target: None,
            status: Status::Identical,
            children: Vec::new(),
            parent: None,
            expanded,
        }
    }

    /// Entry on `side`, if that side has this path
    pub fn entry(&self, side: Side) -> Option<&Entry> {
        match side {
            Side::Source => self.source.as_ref(),
            Side::Target => self.target.as_ref(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Options for [`merge`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeOptions {
    /// Initial `expanded` flag of every directory node
    pub start_expanded: bool,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            start_expanded: true,
        }
    }
}

/// Counts of non-root nodes per status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub identical: usize,
    pub modified: usize,
    pub new: usize,
    pub deleted: usize,
    pub files: usize,
    pub directories: usize,
}

impl Summary {
    pub fn count(&self, status: Status) -> usize {
        match status {
            Status::Identical => self.identical,
            Status::Modified => self.modified,
            Status::New => self.new,
            Status::Deleted => self.deleted,
        }
    }

    pub fn differences(&self) -> usize {
        self.modified + self.new + self.deleted
    }

    pub fn total(&self) -> usize {
        self.files + self.directories
    }
}

/// The merged two-sided tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncTree {
    nodes: Vec<SyncNode>,
    index: HashMap<String, NodeId>,
}

impl SyncTree {
    /// The synthetic root is always the first node
    pub const ROOT: NodeId = NodeId(0);

    fn with_root(source_root: &Entry, target_root: &Entry) -> Self {
        let mut root = SyncNode::new(ROOT_REL_PATH, ROOT_REL_PATH, true, true);
        root.source = Some(source_root.clone());
        root.target = Some(target_root.clone());

        let mut index = HashMap::new();
        index.insert(ROOT_REL_PATH.to_string(), Self::ROOT);
        Self {
            nodes: vec![root],
            index,
        }
    }

    pub fn root(&self) -> &SyncNode {
        &self.nodes[0]
    }

    pub fn node(&self, id: NodeId) -> &SyncNode {
        &self.nodes[id.0]
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Look a node up by relative path
    pub fn find(&self, rel_path: &str) -> Option<NodeId> {
        self.index.get(rel_path).copied()
    }

    /// Number of nodes including the root
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Every non-root node id, in creation order
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (1..self.nodes.len()).map(NodeId)
    }

    /// Number of ancestors between `id` and the root (0 for the root's children)
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = self.parent(id);
        while let Some(parent) = current {
            if parent == Self::ROOT {
                break;
            }
            depth += 1;
            current = self.parent(parent);
        }
        depth
    }

    /// Total number of nodes below `id`, expanded or not
    pub fn descendant_count(&self, id: NodeId) -> usize {
        self.children(id)
            .iter()
            .map(|child| 1 + self.descendant_count(*child))
            .sum()
    }

    pub fn set_expanded(&mut self, id: NodeId, expanded: bool) {
        self.nodes[id.0].expanded = expanded;
    }

    /// Flip the `expanded` flag of a directory; returns false for files.
    pub fn toggle_expanded(&mut self, id: NodeId) -> bool {
        let node = &mut self.nodes[id.0];
        if !node.is_dir {
            return false;
        }
        node.expanded = !node.expanded;
        true
    }

    /// Expand or collapse every directory at once
    pub fn set_all_expanded(&mut self, expanded: bool) {
        for node in self.nodes.iter_mut().skip(1) {
            if node.is_dir {
                node.expanded = expanded;
            }
        }
    }

    pub fn summary(&self) -> Summary {
        let mut summary = Summary::default();
        for node in self.nodes.iter().skip(1) {
            match node.status {
                Status::Identical => summary.identical += 1,
                Status::Modified => summary.modified += 1,
                Status::New => summary.new += 1,
                Status::Deleted => summary.deleted += 1,
            }
            if node.is_dir {
                summary.directories += 1;
            } else {
                summary.files += 1;
            }
        }
        summary
    }

    fn attach(
        &mut self,
        entry: &Entry,
        side: Side,
        classification: &Classification,
        expanded: bool,
    ) {
        let id = match self.index.get(entry.rel_path()) {
            Some(id) => *id,
            None => {
                let id = NodeId(self.nodes.len());
                self.nodes.push(SyncNode::new(
                    entry.rel_path(),
                    entry.name(),
                    entry.is_dir(),
                    expanded,
                ));
                self.index.insert(entry.rel_path().to_string(), id);
                id
            }
        };

        let node = &mut self.nodes[id.0];
        match side {
            Side::Source => node.source = Some(entry.clone()),
            Side::Target => node.target = Some(entry.clone()),
        }
        node.is_dir = node.source.as_ref().is_some_and(Entry::is_dir)
            || node.target.as_ref().is_some_and(Entry::is_dir);
        node.status = merged_status(node, classification);
    }

    fn link(&mut self) {
        for i in 1..self.nodes.len() {
            let id = NodeId(i);
            let parent_path = parent_rel_path(&self.nodes[i].rel_path);
            let parent = self.index.get(parent_path).copied().unwrap_or(Self::ROOT);

            self.nodes[i].parent = Some(parent);
            let already_linked = self.nodes[parent.0]
                .children
                .iter()
                .any(|c| self.nodes[c.0].rel_path == self.nodes[i].rel_path);
            if !already_linked {
                self.nodes[parent.0].children.push(id);
            }
        }
    }

    fn sort_children(&mut self, id: NodeId) {
        let mut children = std::mem::take(&mut self.nodes[id.0].children);
        children.sort_by(|a, b| sibling_order(&self.nodes[a.0], &self.nodes[b.0]));
        for child in &children {
            self.sort_children(*child);
        }
        self.nodes[id.0].children = children;
    }
}

/// Directories before files, then case-insensitive by name, then exact name.
pub fn sibling_order(a: &SyncNode, b: &SyncNode) -> std::cmp::Ordering {
    b.is_dir
        .cmp(&a.is_dir)
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.name.cmp(&b.name))
}

fn merged_status(node: &SyncNode, classification: &Classification) -> Status {
    match (&node.source, &node.target) {
        (None, Some(_)) => Status::New,
        (Some(_), None) => Status::Deleted,
        (Some(_), Some(_)) => {
            let modified = [Side::Source, Side::Target]
                .iter()
                .any(|side| classification.status(*side, &node.rel_path) == Some(Status::Modified));
            if modified {
                Status::Modified
            } else {
                Status::Identical
            }
        }
        (None, None) => Status::Identical,
    }
}

/// Merge two rooted trees into one `SyncTree`.
///
/// Pass one walks the source tree then the target tree in pre-order, creating
/// one node per distinct relative path and filling its source/target slot.
/// Pass two links every node under its parent path (or the root when that
/// parent was never seen) and sorts siblings.
pub fn merge(
    source: &EntryTree,
    target: &EntryTree,
    classification: &Classification,
    options: MergeOptions,
) -> SyncTree {
    let mut tree = SyncTree::with_root(source.root(), target.root());

    for (side, entries) in [(Side::Source, source), (Side::Target, target)] {
        for id in entries.pre_order() {
            tree.attach(entries.entry(id), side, classification, options.start_expanded);
        }
    }

    tree.link();
    tree.sort_children(SyncTree::ROOT);
    tree
}
