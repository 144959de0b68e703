use crate::error::FolderDiffError;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Short remedy for errors the user can act on
fn hint(err: &FolderDiffError) -> Option<&'static str> {
    match err {
        FolderDiffError::DirectoryNotFound { .. } => Some("check that the path exists"),
        FolderDiffError::NotADirectory { .. } => Some("both arguments must be directories"),
        FolderDiffError::InvalidPattern { .. } => {
            Some("patterns are shell globs matched against base names, e.g. '*.tmp'")
        }
        FolderDiffError::InvalidConfig { .. } => {
            Some("fix the config file or pass another one with --config")
        }
        FolderDiffError::Scan { .. } | FolderDiffError::Report { .. } => {
            Some("check file permissions")
        }
        FolderDiffError::Io(_) => None,
    }
}

pub fn format_error_with(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(err.to_string()).bold().render(supports_color)
    );

    for cause in err.chain().skip(1) {
        out.push_str(&format!(
            "  {}\n",
            ColoredText::dim(format!("caused by: {}", cause)).render(supports_color)
        ));
    }

    if let Some(hint) = err.downcast_ref::<FolderDiffError>().and_then(hint) {
        out.push_str(&format!(
            "  {}\n",
            ColoredText::info(format!("hint: {}", hint)).render(supports_color)
        ));
    }

    out
}

pub fn format_error(err: &anyhow::Error) -> String {
    let caps = crate::ui::terminal::detect_capabilities();
    format_error_with(err, caps.color, caps.unicode)
}

/// Print `err` to stderr, as a JSON object when `json` is set.
pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "message": err.to_string(),
            "path": err
                .downcast_ref::<FolderDiffError>()
                .and_then(FolderDiffError::path)
                .map(|p| p.display().to_string()),
        });
        eprintln!("{}", output);
        return;
    }

    eprint!("{}", format_error(err));
}
