use crate::application::Presentation;

/// One row of the key reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpEntry {
    pub keys: &'static str,
    pub action: &'static str,
}

const fn entry(keys: &'static str, action: &'static str) -> HelpEntry {
    HelpEntry { keys, action }
}

pub fn help_entries(presentation: Presentation, supports_unicode: bool) -> Vec<HelpEntry> {
    let (up, down, sides) = if supports_unicode {
        ("↑ / k", "↓ / j", "← / →")
    } else {
        ("Up / k", "Down / j", "Left / Right")
    };

    let mut entries = vec![
        entry(up, "Move selection up"),
        entry(down, "Move selection down"),
        entry("Space / Enter", "Expand or collapse folder"),
        entry("d", "Jump to next difference"),
    ];
    if presentation == Presentation::Independent {
        entries.push(entry("Tab", "Toggle panel focus"));
        entries.push(entry(sides, "Focus source / target panel"));
    }
    entries.push(entry("h / ?", "Show this help"));
    entries.push(entry("q / Esc / Ctrl-C", "Quit"));
    entries
}

/// Compact hint shown in the status line
pub fn key_hints(presentation: Presentation, supports_unicode: bool) -> String {
    let arrows = if supports_unicode { "↑↓" } else { "up/down" };
    let mut hints = format!("{} move  space toggle  d next diff", arrows);
    if presentation == Presentation::Independent {
        hints.push_str("  tab focus");
    }
    hints.push_str("  ? help  q quit");
    hints
}
