//! Terminal probing
//!
//! Decides what the viewer and plain output may use: color, the unicode icon
//! set, and the screen size (with a fixed fallback when the size query fails).

use is_terminal::IsTerminal;

/// Size used when the terminal cannot report one
pub const FALLBACK_SIZE: TerminalSize = TerminalSize {
    width: 80,
    height: 24,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    pub width: u16,
    pub height: u16,
}

impl TerminalSize {
    /// Current size of the controlling terminal, or [`FALLBACK_SIZE`].
    pub fn query() -> Self {
        Self::or_fallback(crossterm::terminal::size().ok())
    }

    /// A missing or degenerate (zero-sized) report falls back.
    pub fn or_fallback(reported: Option<(u16, u16)>) -> Self {
        match reported {
            Some((width, height)) if width > 0 && height > 0 => Self { width, height },
            _ => FALLBACK_SIZE,
        }
    }
}

/// What output on stdout may rely on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    /// Colored output is safe (interactive stdout, not CI, not opted out)
    pub color: bool,
    /// The locale can render the unicode icon set
    pub unicode: bool,
    pub size: TerminalSize,
}

pub fn detect_capabilities() -> TerminalCapabilities {
    Probe::read(
        |key| std::env::var(key).ok(),
        std::io::stdout().is_terminal(),
    )
    .capabilities(TerminalSize::query())
}

/// Raw facts gathered from the process before any decision is made
#[derive(Debug)]
struct Probe {
    stdout_is_tty: bool,
    dumb_term: bool,
    no_color: bool,
    in_ci: bool,
    /// First non-empty of `LC_ALL`, `LC_CTYPE`, `LANG`
    locale: Option<String>,
}

impl Probe {
    fn read(lookup: impl Fn(&str) -> Option<String>, stdout_is_tty: bool) -> Self {
        let set = |key: &str| lookup(key).filter(|v| !v.is_empty());

        Self {
            stdout_is_tty,
            dumb_term: set("TERM").is_some_and(|t| t.eq_ignore_ascii_case("dumb")),
            no_color: set("NO_COLOR").is_some(),
            in_ci: ["CI", "GITHUB_ACTIONS", "BUILDKITE", "JENKINS_HOME"]
                .into_iter()
                .any(|key| lookup(key).is_some()),
            locale: ["LC_ALL", "LC_CTYPE", "LANG"]
                .into_iter()
                .find_map(|key| set(key)),
        }
    }

    fn capabilities(&self, size: TerminalSize) -> TerminalCapabilities {
        TerminalCapabilities {
            color: self.stdout_is_tty && !self.dumb_term && !self.no_color && !self.in_ci,
            unicode: !self.dumb_term && utf8_locale(self.locale.as_deref()),
            size,
        }
    }
}

/// An unset locale is assumed to be UTF-8.
fn utf8_locale(locale: Option<&str>) -> bool {
    locale.map_or(true, |locale| {
        let locale = locale.to_ascii_lowercase();
        locale.contains("utf-8") || locale.contains("utf8")
    })
}
