//! Static HTML report
//!
//! A single self-contained page: inline CSS and JS, no external assets.
//! Each side's scanned tree is rendered as nested lists with directories
//! first; clicking a directory collapses it.

use std::path::Path;

use chrono::Local;
use tracing::info;

use crate::application::Comparison;
use crate::domain::entities::{EntryId, EntryTree};
use crate::domain::value_objects::{Side, Status};
use crate::error::{FolderDiffError, FolderDiffResult};

/// Default output file name
pub const DEFAULT_REPORT_FILE: &str = "diff_report.html";

const STYLE: &str = r#"
body { font-family: Arial, sans-serif; margin: 20px; }
.meta { color: #555; }
.legend, .summary { margin: 20px 0; padding: 10px; background: #f5f5f5; border-radius: 4px; }
.legend span, .summary span { margin-right: 16px; }
.content { display: flex; gap: 20px; }
.side { flex: 1; min-width: 0; }
.tree ul { list-style: none; padding-left: 20px; }
.tree li { margin: 4px 0; }
.folder > .label { font-weight: bold; cursor: pointer; }
.collapsed > ul { display: none; }
.identical { color: green; }
.modified { color: red; }
.new { color: blue; }
.deleted { color: gray; }
"#;

const SCRIPT: &str = r#"
document.querySelectorAll('.folder > .label').forEach(function (label) {
  label.addEventListener('click', function () {
    label.parentElement.classList.toggle('collapsed');
  });
});
"#;

/// HTML report for one finished comparison
pub struct HtmlReport<'a> {
    comparison: &'a Comparison,
    generated_at: String,
}

impl<'a> HtmlReport<'a> {
    pub fn new(comparison: &'a Comparison) -> Self {
        Self {
            comparison,
            generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }

    /// Override the generation timestamp shown in the header
    pub fn with_generated_at(mut self, generated_at: impl Into<String>) -> Self {
        self.generated_at = generated_at.into();
        self
    }

    pub fn render(&self) -> String {
        let c = self.comparison;
        let summary = c.summary();
        let mut out = String::new();

        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        out.push_str("<title>Folder Comparison Report</title>\n");
        out.push_str(&format!("<style>{}</style>\n", STYLE));
        out.push_str("</head>\n<body>\n<h1>Folder Comparison Report</h1>\n");

        out.push_str(&format!(
            "<p class=\"meta\">Generated {} &middot; mode: {}</p>\n",
            escape(&self.generated_at),
            escape(c.mode.as_str())
        ));

        out.push_str("<div class=\"summary\">");
        for status in Status::ALL {
            out.push_str(&format!(
                "<span class=\"{}\">{}: {}</span>",
                status.as_str(),
                status.description(),
                summary.count(status)
            ));
        }
        out.push_str(&format!(
            "<span>Files: {}</span><span>Directories: {}</span></div>\n",
            summary.files, summary.directories
        ));

        out.push_str("<div class=\"legend\">");
        for status in Status::ALL {
            out.push_str(&format!(
                "<span class=\"{}\">{} {}</span>",
                status.as_str(),
                legend_mark(status),
                status.description()
            ));
        }
        out.push_str("</div>\n");

        out.push_str("<div class=\"content\">\n");
        self.render_side(&mut out, Side::Source, &c.source_root, &c.source_tree);
        self.render_side(&mut out, Side::Target, &c.target_root, &c.target_tree);
        out.push_str("</div>\n");

        out.push_str(&format!("<script>{}</script>\n", SCRIPT));
        out.push_str("</body>\n</html>\n");
        out
    }

    fn render_side(&self, out: &mut String, side: Side, root: &Path, tree: &EntryTree) {
        out.push_str(&format!(
            "<div class=\"side {}\">\n<h2>{}: {}</h2>\n<div class=\"tree\">\n",
            side,
            side.label(),
            escape(&root.display().to_string())
        ));
        self.render_children(out, side, tree, EntryTree::ROOT);
        out.push_str("</div>\n</div>\n");
    }

    fn render_children(&self, out: &mut String, side: Side, tree: &EntryTree, id: EntryId) {
        let mut children: Vec<EntryId> = tree.children(id).to_vec();
        if children.is_empty() {
            return;
        }
        children.sort_by(|a, b| {
            let (a, b) = (tree.entry(*a), tree.entry(*b));
            b.is_dir()
                .cmp(&a.is_dir())
                .then_with(|| a.name().to_lowercase().cmp(&b.name().to_lowercase()))
                .then_with(|| a.name().cmp(b.name()))
        });

        out.push_str("<ul>\n");
        for child in children {
            let entry = tree.entry(child);
            let status = self
                .comparison
                .classification
                .status(side, entry.rel_path())
                .unwrap_or_default();

            if entry.is_dir() {
                out.push_str(&format!(
                    "<li class=\"folder\"><span class=\"label {}\">{}/</span>\n",
                    status.as_str(),
                    escape(entry.name())
                ));
                self.render_children(out, side, tree, child);
                out.push_str("</li>\n");
            } else {
                let digest = entry.digest().map(|d| d.as_str()).unwrap_or_default();
                out.push_str(&format!(
                    "<li class=\"file\"><span class=\"{}\" title=\"{}\">{}</span></li>\n",
                    status.as_str(),
                    escape(digest),
                    escape(entry.name())
                ));
            }
        }
        out.push_str("</ul>\n");
    }

    /// Render and write to `path`, replacing any existing file.
    pub fn write_to(&self, path: &Path) -> FolderDiffResult<()> {
        std::fs::write(path, self.render()).map_err(|source| FolderDiffError::Report {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "report written");
        Ok(())
    }
}

/// Write the report for `comparison` to `path`.
pub fn write_report(comparison: &Comparison, path: &Path) -> FolderDiffResult<()> {
    HtmlReport::new(comparison).write_to(path)
}

fn legend_mark(status: Status) -> &'static str {
    match status {
        Status::Identical => "&#10003;",
        Status::Modified => "~",
        Status::New => "+",
        Status::Deleted => "-",
    }
}

/// Escape text for HTML body and double-quoted attribute context.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
