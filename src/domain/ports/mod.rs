//! Domain Ports (Interfaces)
//!
//! Traits the infrastructure layer implements.

pub mod scanner;

pub use scanner::Scanner;
