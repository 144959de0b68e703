//! Domain Value Objects
//!
//! Immutable value types that represent comparison concepts.

mod compare_mode;
mod digest;
mod exclude_patterns;
mod side;
mod status;

pub use compare_mode::CompareMode;
pub use digest::ContentDigest;
pub use exclude_patterns::ExcludePatterns;
pub use side::Side;
pub use status::Status;
