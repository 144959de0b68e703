//! Two-panel synchronized tree viewer.

mod frame;
mod input;
mod render;

pub use frame::{Frame, Line, Span, Tone};
pub use input::{key_to_action, run_interactive};
pub use render::{project, scroll_offset, FrameContext};
