//! Terminal-independent frame model.
//!
//! A `Frame` is a grid of styled text lines produced by the pure projection
//! step; only the input loop turns it into terminal escape sequences.

use crossterm::style::{Attribute, ContentStyle, Stylize};

use crate::domain::value_objects::Status;
use crate::ui::primitives::icon::status_color;
use crate::ui::primitives::text::{display_width, truncate_to_width};
use crate::ui::theme;

/// Styling class of a span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Title,
    Border,
    Hint,
    /// Rows for a path absent on this side
    Dim,
    Status(Status),
    /// Row under the focused cursor
    Selected,
}

impl Tone {
    pub fn style(&self) -> ContentStyle {
        let style = ContentStyle::new();
        match self {
            Tone::Plain => style,
            Tone::Title => style.with(theme::colors::INFO).bold(),
            Tone::Border => style.with(theme::colors::DIM),
            Tone::Hint => style.with(theme::colors::WARNING),
            Tone::Dim => style.with(theme::colors::DIM),
            Tone::Status(status) => style.with(status_color(*status)),
            Tone::Selected => style.attribute(Attribute::Reverse),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub tone: Tone,
}

impl Span {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Plain)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    /// Cut or pad `spans` to exactly `width` cells.
    pub fn fitted(spans: Vec<Span>, width: usize, ellipsis: &str) -> Self {
        let mut out = Vec::with_capacity(spans.len() + 1);
        let mut remaining = width;
        for span in spans {
            if remaining == 0 {
                break;
            }
            let w = display_width(&span.text);
            if w <= remaining {
                remaining -= w;
                out.push(span);
            } else {
                let text = truncate_to_width(&span.text, remaining, ellipsis);
                remaining -= display_width(&text).min(remaining);
                out.push(Span::new(text, span.tone));
                break;
            }
        }
        if remaining > 0 {
            out.push(Span::plain(" ".repeat(remaining)));
        }
        Self { spans: out }
    }

    pub fn push(&mut self, span: Span) {
        self.spans.push(span);
    }

    pub fn extend(&mut self, other: Line) {
        self.spans.extend(other.spans);
    }

    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn width(&self) -> usize {
        self.spans.iter().map(|s| display_width(&s.text)).sum()
    }
}

/// One full screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: u16,
    pub height: u16,
    pub lines: Vec<Line>,
}

impl Frame {
    /// Plain text of every line, trailing padding removed
    pub fn text_lines(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|l| l.text().trim_end().to_string())
            .collect()
    }
}
