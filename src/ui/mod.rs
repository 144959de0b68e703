//! Terminal UI
//!
//! - `theme` - colors, icons and borders
//! - `terminal` / `context` - capability detection and the resolved output settings
//! - `primitives` - icons and colored text
//! - `views` - static text blocks such as the key reference
//! - `widgets` - the interactive two-panel viewer
//! - `error` - user-facing error rendering

pub mod context;
pub mod error;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;

pub use context::UiContext;
