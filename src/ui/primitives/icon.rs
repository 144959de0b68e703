use crossterm::style::{Color, Stylize};

use crate::domain::value_objects::Status;
use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Identical,
    Modified,
    New,
    Deleted,
    FolderOpen,
    FolderClosed,
    File,
    Error,
    Warning,
    Cursor,
}

impl Icon {
    /// Status marker icon
    pub fn for_status(status: Status) -> Self {
        match status {
            Status::Identical => Icon::Identical,
            Status::Modified => Icon::Modified,
            Status::New => Icon::New,
            Status::Deleted => Icon::Deleted,
        }
    }

    /// Kind icon for a tree row
    pub fn for_node(is_dir: bool, expanded: bool) -> Self {
        match (is_dir, expanded) {
            (true, true) => Icon::FolderOpen,
            (true, false) => Icon::FolderClosed,
            (false, _) => Icon::File,
        }
    }

    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Identical) => theme::icons::IDENTICAL,
            (true, Icon::Modified) => theme::icons::MODIFIED,
            (true, Icon::New) => theme::icons::NEW,
            (true, Icon::Deleted) => theme::icons::DELETED,
            (true, Icon::FolderOpen) => theme::icons::FOLDER_OPEN,
            (true, Icon::FolderClosed) => theme::icons::FOLDER_CLOSED,
            (true, Icon::File) => theme::icons::FILE,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Cursor) => theme::icons::CURSOR,
            (false, Icon::Identical) => theme::icons_ascii::IDENTICAL,
            (false, Icon::Modified) => theme::icons_ascii::MODIFIED,
            (false, Icon::New) => theme::icons_ascii::NEW,
            (false, Icon::Deleted) => theme::icons_ascii::DELETED,
            (false, Icon::FolderOpen) => theme::icons_ascii::FOLDER_OPEN,
            (false, Icon::FolderClosed) => theme::icons_ascii::FOLDER_CLOSED,
            (false, Icon::File) => theme::icons_ascii::FILE,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Cursor) => theme::icons_ascii::CURSOR,
        }
    }

    pub fn color(&self) -> Option<Color> {
        match self {
            Icon::Identical => Some(theme::colors::IDENTICAL),
            Icon::Modified => Some(theme::colors::MODIFIED),
            Icon::New => Some(theme::colors::NEW),
            Icon::Deleted => Some(theme::colors::DELETED),
            Icon::Error => Some(theme::colors::ERROR),
            Icon::Warning => Some(theme::colors::WARNING),
            Icon::Cursor => Some(theme::colors::INFO),
            Icon::FolderOpen | Icon::FolderClosed | Icon::File => None,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        match self.color() {
            Some(color) if supports_color => format!("{}", s.with(color)),
            _ => s.to_string(),
        }
    }
}

/// Color associated with a status
pub fn status_color(status: Status) -> Color {
    match status {
        Status::Identical => theme::colors::IDENTICAL,
        Status::Modified => theme::colors::MODIFIED,
        Status::New => theme::colors::NEW,
        Status::Deleted => theme::colors::DELETED,
    }
}
