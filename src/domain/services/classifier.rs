//! Entry classification service
//!
//! Assigns every scanned entry on both sides one of the four statuses. The
//! result is a lookup keyed by relative path; entries themselves are left
//! untouched.

use std::collections::HashMap;

use crate::domain::entities::Entry;
use crate::domain::value_objects::{CompareMode, Side, Status};

/// Per-side status lookup produced by [`Classifier::classify`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    mode: CompareMode,
    source: HashMap<String, Status>,
    target: HashMap<String, Status>,
}

impl Classification {
    pub fn mode(&self) -> CompareMode {
        self.mode
    }

    /// Status assigned to `rel_path` on `side`, if that side had such an entry.
    pub fn status(&self, side: Side, rel_path: &str) -> Option<Status> {
        match side {
            Side::Source => self.source.get(rel_path).copied(),
            Side::Target => self.target.get(rel_path).copied(),
        }
    }

    /// Number of classified paths on `side`
    pub fn len(&self, side: Side) -> usize {
        match side {
            Side::Source => self.source.len(),
            Side::Target => self.target.len(),
        }
    }

    /// Record `status` for a path on one side.
    pub fn insert(&mut self, side: Side, rel_path: impl Into<String>, status: Status) {
        match side {
            Side::Source => self.source.insert(rel_path.into(), status),
            Side::Target => self.target.insert(rel_path.into(), status),
        };
    }
}

/// Compares two flat entry collections
#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier {
    mode: CompareMode,
}

impl Classifier {
    pub fn new(mode: CompareMode) -> Self {
        Self { mode }
    }

    /// Classify every entry of both sides.
    ///
    /// Matched directory pairs are always `Identical`, whatever their
    /// descendants look like. Duplicate relative paths on one side resolve to
    /// the last one seen.
    pub fn classify<'a, S, T>(&self, source: S, target: T) -> Classification
    where
        S: IntoIterator<Item = &'a Entry>,
        T: IntoIterator<Item = &'a Entry>,
    {
        let source_map: HashMap<&str, &Entry> =
            source.into_iter().map(|e| (e.rel_path(), e)).collect();
        let mut target_map: HashMap<&str, &Entry> = HashMap::new();
        let mut result = Classification {
            mode: self.mode,
            ..Classification::default()
        };

        for file in target {
            target_map.insert(file.rel_path(), file);

            let Some(source_file) = source_map.get(file.rel_path()) else {
                result.insert(Side::Target, file.rel_path(), Status::New);
                continue;
            };

            let status = self.compare_pair(source_file, file);
            result.insert(Side::Source, file.rel_path(), status);
            result.insert(Side::Target, file.rel_path(), status);
        }

        for (rel_path, _) in source_map.iter() {
            if !target_map.contains_key(rel_path) {
                result.insert(Side::Source, *rel_path, Status::Deleted);
            }
        }

        result
    }

    fn compare_pair(&self, source: &Entry, target: &Entry) -> Status {
        if source.is_dir() && target.is_dir() {
            return Status::Identical;
        }

        match self.mode {
            CompareMode::Content if source.digest() != target.digest() => Status::Modified,
            CompareMode::Content | CompareMode::NameOnly => Status::Identical,
        }
    }
}
