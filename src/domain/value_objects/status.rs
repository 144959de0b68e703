//! Status value object - the outcome of comparing one path across both trees

use serde::{Deserialize, Serialize};

/// Comparison status of a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Present on both sides with equal content (or both directories)
    #[default]
    Identical,
    /// Present on both sides with different content
    Modified,
    /// Present only in the target
    New,
    /// Present only in the source
    Deleted,
}

impl Status {
    /// All statuses, in legend order
    pub const ALL: [Status; 4] = [
        Status::Identical,
        Status::Modified,
        Status::New,
        Status::Deleted,
    ];

    /// Returns true for anything other than `Identical`
    pub fn is_difference(&self) -> bool {
        !matches!(self, Status::Identical)
    }

    /// Lowercase name, also used as CSS class in the report
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Identical => "identical",
            Status::Modified => "modified",
            Status::New => "new",
            Status::Deleted => "deleted",
        }
    }

    /// Legend description
    pub fn description(&self) -> &'static str {
        match self {
            Status::Identical => "Identical",
            Status::Modified => "Modified",
            Status::New => "New (target only)",
            Status::Deleted => "Deleted (source only)",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
