//! EntryTree entity - one side's scan result arranged under its root
//!
//! Built from the scanner's flat list. Directories the list does not mention
//! but that are needed as parents are synthesized.

use std::collections::HashMap;
use std::path::Path;

use super::entry::{parent_rel_path, Entry, ROOT_REL_PATH};

/// Index of an entry inside an `EntryTree`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(usize);

impl EntryId {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct EntryNode {
    entry: Entry,
    children: Vec<EntryId>,
}

/// Rooted tree of entries stored in an arena
#[derive(Debug, Clone)]
pub struct EntryTree {
    nodes: Vec<EntryNode>,
}

impl EntryTree {
    /// Root is always at index 0
    pub const ROOT: EntryId = EntryId(0);

    /// Build a tree rooted at `root` from a flat list of entries.
    ///
    /// Entries are attached in relative-path order; children keep that order.
    pub fn from_entries(root: &Path, entries: impl IntoIterator<Item = Entry>) -> Self {
        let mut tree = Self {
            nodes: vec![EntryNode {
                entry: Entry::root(root),
                children: Vec::new(),
            }],
        };

        let mut sorted: Vec<Entry> = entries.into_iter().filter(|e| !e.is_root()).collect();
        sorted.sort_by(|a, b| a.rel_path().cmp(b.rel_path()));

        let mut dirs: HashMap<String, EntryId> = HashMap::new();
        dirs.insert(ROOT_REL_PATH.to_string(), Self::ROOT);

        for entry in sorted {
            let parent = tree.ensure_dir(&mut dirs, root, parent_rel_path(entry.rel_path()));
            let rel_path = entry.rel_path().to_string();
            let is_dir = entry.is_dir();
            let id = tree.push(parent, entry);
            if is_dir {
                dirs.insert(rel_path, id);
            }
        }

        tree
    }

    fn push(&mut self, parent: EntryId, entry: Entry) -> EntryId {
        let id = EntryId(self.nodes.len());
        self.nodes.push(EntryNode {
            entry,
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    fn ensure_dir(
        &mut self,
        dirs: &mut HashMap<String, EntryId>,
        root: &Path,
        rel_path: &str,
    ) -> EntryId {
        if let Some(id) = dirs.get(rel_path) {
            return *id;
        }

        let parent = self.ensure_dir(dirs, root, parent_rel_path(rel_path));
        let id = self.push(parent, Entry::dir(root.join(rel_path), rel_path));
        dirs.insert(rel_path.to_string(), id);
        id
    }

    pub fn root(&self) -> &Entry {
        &self.nodes[0].entry
    }

    pub fn entry(&self, id: EntryId) -> &Entry {
        &self.nodes[id.0].entry
    }

    pub fn children(&self, id: EntryId) -> &[EntryId] {
        &self.nodes[id.0].children
    }

    /// Number of entries including the root
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Non-root entries in pre-order (parent before children).
    pub fn pre_order(&self) -> Vec<EntryId> {
        let mut out = Vec::with_capacity(self.nodes.len().saturating_sub(1));
        let mut stack: Vec<EntryId> = self.children(Self::ROOT).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }

    /// Every entry except the root, in arena order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.nodes.iter().skip(1).map(|n| &n.entry)
    }
}
