//! Output Rendering
//!
//! Non-interactive renderings of a finished comparison: a plain text listing
//! of differences and a JSON document of the whole merged tree.

use serde::Serialize;

use crate::application::Comparison;
use crate::domain::services::{flatten, NodeId, Summary, SyncTree};
use crate::domain::value_objects::{CompareMode, Side, Status};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Every non-root node in pre-order, ignoring the tree's expand flags.
pub fn fully_expanded_order(tree: &SyncTree) -> Vec<NodeId> {
    let mut expanded = tree.clone();
    expanded.set_all_expanded(true);
    flatten(&expanded).into_iter().map(|v| v.id).collect()
}

/// Text renderer for comparisons
pub struct TextRenderer {
    /// Whether to use colors
    pub color: bool,
    /// Whether to use unicode
    pub unicode: bool,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            color: false,
            unicode: true,
        }
    }
}

impl TextRenderer {
    pub fn render(&self, comparison: &Comparison) -> String {
        let tree = &comparison.tree;
        let mut out = String::new();

        out.push_str(&format!(
            "{} {} -> {} (mode: {})\n\n",
            ColoredText::info("Comparing").bold().render(self.color),
            comparison.source_root.display(),
            comparison.target_root.display(),
            comparison.mode
        ));

        let mut listed = 0;
        for id in fully_expanded_order(tree) {
            let node = tree.node(id);
            if !node.status.is_difference() {
                continue;
            }
            let suffix = if node.is_dir { "/" } else { "" };
            out.push_str(&format!(
                "{} {}\n",
                Icon::for_status(node.status).colored(self.color, self.unicode),
                ColoredText::status(format!("{}{}", node.rel_path, suffix), node.status)
                    .render(self.color)
            ));
            listed += 1;
        }

        if listed == 0 {
            out.push_str(&format!(
                "{} No differences found\n",
                Icon::Identical.colored(self.color, self.unicode)
            ));
        }

        out.push('\n');
        out.push_str(&summary_line(&comparison.summary()));
        out.push('\n');
        out
    }
}

/// One-line summary, e.g. `2 identical, 1 modified, 1 new, 1 deleted (4 files, 1 directories)`
pub fn summary_line(summary: &Summary) -> String {
    let counts: Vec<String> = Status::ALL
        .iter()
        .map(|s| format!("{} {}", summary.count(*s), s))
        .collect();
    format!(
        "{} ({} files, {} directories)",
        counts.join(", "),
        summary.files,
        summary.directories
    )
}

#[derive(Debug, Serialize)]
struct JsonNode<'a> {
    path: &'a str,
    name: &'a str,
    is_dir: bool,
    status: Status,
    source_digest: Option<&'a str>,
    target_digest: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    source: String,
    target: String,
    mode: CompareMode,
    summary: Summary,
    nodes: Vec<JsonNode<'a>>,
}

/// Render the merged tree as a pretty-printed JSON document.
pub fn render_json(comparison: &Comparison) -> serde_json::Result<String> {
    let tree = &comparison.tree;
    let digest = move |id: NodeId, side: Side| {
        tree.node(id)
            .entry(side)
            .and_then(|e| e.digest())
            .map(|d| d.as_str())
    };

    let nodes = fully_expanded_order(tree)
        .into_iter()
        .map(|id| {
            let node = tree.node(id);
            JsonNode {
                path: &node.rel_path,
                name: &node.name,
                is_dir: node.is_dir,
                status: node.status,
                source_digest: digest(id, Side::Source),
                target_digest: digest(id, Side::Target),
            }
        })
        .collect();

    let report = JsonReport {
        source: comparison.source_root.display().to_string(),
        target: comparison.target_root.display().to_string(),
        mode: comparison.mode,
        summary: comparison.summary(),
        nodes,
    };
    serde_json::to_string_pretty(&report)
}
