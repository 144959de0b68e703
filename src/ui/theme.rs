use crossterm::style::Color;

/// Design tokens for the folder-diff UI.
///
/// All icons, borders and colors must be sourced from this module.
pub mod colors {
    use super::Color;

    pub const IDENTICAL: Color = Color::Green;
    pub const MODIFIED: Color = Color::Red;
    pub const NEW: Color = Color::Blue;
    pub const DELETED: Color = Color::DarkGrey;

    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    /// Titles and key hints
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const IDENTICAL: &str = "✓";
    pub const MODIFIED: &str = "~";
    pub const NEW: &str = "+";
    pub const DELETED: &str = "-";

    pub const FOLDER_OPEN: &str = "📂";
    pub const FOLDER_CLOSED: &str = "📁";
    pub const FILE: &str = "📄";

    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const CURSOR: &str = ">";
    pub const ELLIPSIS: &str = "…";
}

pub mod icons_ascii {
    pub const IDENTICAL: &str = "=";
    pub const MODIFIED: &str = "~";
    pub const NEW: &str = "+";
    pub const DELETED: &str = "-";

    pub const FOLDER_OPEN: &str = "[v]";
    pub const FOLDER_CLOSED: &str = "[>]";
    pub const FILE: &str = "   ";

    pub const ERROR: &str = "[ERROR]";
    pub const WARNING: &str = "[WARN]";
    pub const CURSOR: &str = ">";
    pub const ELLIPSIS: &str = ".";
}

pub mod borders {
    pub const TOP_LEFT: &str = "╭";
    pub const TOP_RIGHT: &str = "╮";
    pub const BOTTOM_LEFT: &str = "╰";
    pub const BOTTOM_RIGHT: &str = "╯";
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";
}

pub mod borders_ascii {
    pub const TOP_LEFT: &str = "+";
    pub const TOP_RIGHT: &str = "+";
    pub const BOTTOM_LEFT: &str = "+";
    pub const BOTTOM_RIGHT: &str = "+";
    pub const HORIZONTAL: &str = "-";
    pub const VERTICAL: &str = "|";
}

/// Marker shown in place of a name on the side where a path is absent
pub const NOT_EXISTS: &str = "[Not exists]";
