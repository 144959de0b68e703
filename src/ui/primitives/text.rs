use std::fmt;

use crossterm::style::{Color, Stylize};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::domain::value_objects::Status;
use crate::ui::primitives::icon::status_color;
use crate::ui::theme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredText {
    text: String,
    color: Option<Color>,
    bold: bool,
}

impl ColoredText {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
            bold: false,
        }
    }

    pub fn status(text: impl Into<String>, status: Status) -> Self {
        Self::plain(text).with_color(status_color(status))
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::plain(text).with_color(theme::colors::ERROR)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::plain(text).with_color(theme::colors::WARNING)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::plain(text).with_color(theme::colors::INFO)
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::plain(text).with_color(theme::colors::DIM)
    }

    fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn render(&self, supports_color: bool) -> String {
        if !supports_color {
            return self.text.clone();
        }

        let mut styled = self.text.as_str().stylize();
        if let Some(color) = self.color {
            styled = styled.with(color);
        }
        if self.bold {
            styled = styled.bold();
        }
        format!("{}", styled)
    }
}

impl fmt::Display for ColoredText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Display width in terminal cells
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Cut `text` to at most `max` cells, ending in `ellipsis` when shortened.
pub fn truncate_to_width(text: &str, max: usize, ellipsis: &str) -> String {
    if display_width(text) <= max {
        return text.to_string();
    }
    let ellipsis_width = display_width(ellipsis);
    if max < ellipsis_width {
        return " ".repeat(max);
    }

    let budget = max - ellipsis_width;
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str(ellipsis);
    out
}

/// Truncate, then right-pad with spaces to exactly `width` cells.
pub fn fit_to_width(text: &str, width: usize, ellipsis: &str) -> String {
    let mut out = truncate_to_width(text, width, ellipsis);
    let used = display_width(&out);
    if used < width {
        out.push_str(&" ".repeat(width - used));
    }
    out
}
