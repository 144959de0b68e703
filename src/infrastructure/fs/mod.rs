//! File System Implementations
//!
//! Concrete implementations of the Scanner port.

mod scanner;

pub use scanner::LocalScanner;
