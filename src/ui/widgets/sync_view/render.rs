//! Pure projection of the viewer state onto a frame.

use crate::application::{Pane, Presentation, ViewState};
use crate::domain::services::Summary;
use crate::domain::value_objects::{Side, Status};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{display_width, truncate_to_width};
use crate::ui::theme;
use crate::ui::views::help::{help_entries, key_hints};

use super::frame::{Frame, Line, Span, Tone};

/// Smallest screen the layout is drawn on
pub const MIN_WIDTH: u16 = 20;
pub const MIN_HEIGHT: u16 = 5;

/// Static data shown around the trees
#[derive(Debug, Clone)]
pub struct FrameContext {
    pub source_label: String,
    pub target_label: String,
    pub summary: Summary,
    pub unicode: bool,
}

impl FrameContext {
    fn label(&self, side: Side) -> &str {
        match side {
            Side::Source => &self.source_label,
            Side::Target => &self.target_label,
        }
    }

    fn ellipsis(&self) -> &'static str {
        if self.unicode {
            theme::icons::ELLIPSIS
        } else {
            theme::icons_ascii::ELLIPSIS
        }
    }
}

struct BorderSet {
    top_left: &'static str,
    top_right: &'static str,
    bottom_left: &'static str,
    bottom_right: &'static str,
    horizontal: &'static str,
    vertical: &'static str,
}

impl BorderSet {
    fn new(unicode: bool) -> Self {
        if unicode {
            Self {
                top_left: theme::borders::TOP_LEFT,
                top_right: theme::borders::TOP_RIGHT,
                bottom_left: theme::borders::BOTTOM_LEFT,
                bottom_right: theme::borders::BOTTOM_RIGHT,
                horizontal: theme::borders::HORIZONTAL,
                vertical: theme::borders::VERTICAL,
            }
        } else {
            Self {
                top_left: theme::borders_ascii::TOP_LEFT,
                top_right: theme::borders_ascii::TOP_RIGHT,
                bottom_left: theme::borders_ascii::BOTTOM_LEFT,
                bottom_right: theme::borders_ascii::BOTTOM_RIGHT,
                horizontal: theme::borders_ascii::HORIZONTAL,
                vertical: theme::borders_ascii::VERTICAL,
            }
        }
    }
}

/// First visible row so that `cursor` stays inside a window of `rows`.
pub fn scroll_offset(cursor: usize, rows: usize) -> usize {
    if rows == 0 || cursor < rows {
        0
    } else {
        cursor + 1 - rows
    }
}

/// Render `state` for a `width` x `height` screen.
pub fn project(state: &ViewState, ctx: &FrameContext, width: u16, height: u16) -> Frame {
    let (w, h) = (width as usize, height as usize);

    if width < MIN_WIDTH || height < MIN_HEIGHT {
        let lines = (0..h)
            .map(|row| {
                let text = if row == 0 { "Terminal too small" } else { "" };
                Line::fitted(vec![Span::plain(text)], w, "")
            })
            .collect();
        return Frame {
            width,
            height,
            lines,
        };
    }

    let body_rows = h - 2;
    let mut lines = Vec::with_capacity(h);
    lines.push(title_line(state.presentation(), w));

    if state.help_visible() {
        lines.extend(help_box(state.presentation(), ctx, w, body_rows));
    } else {
        let left_w = w / 2;
        let right_w = w - left_w;
        let left = pane_box(state, ctx, Side::Source, left_w, body_rows);
        let right = pane_box(state, ctx, Side::Target, right_w, body_rows);
        for (mut l, r) in left.into_iter().zip(right) {
            l.extend(r);
            lines.push(l);
        }
    }

    lines.push(status_line(state, ctx, w));

    Frame {
        width,
        height,
        lines,
    }
}

fn title_line(presentation: Presentation, width: usize) -> Line {
    let title = match presentation {
        Presentation::Synchronized => "Folder Diff - Synchronized View",
        Presentation::Independent => "Folder Diff - Independent View",
    };
    let pad = width.saturating_sub(display_width(title)) / 2;
    Line::fitted(
        vec![Span::plain(" ".repeat(pad)), Span::new(title, Tone::Title)],
        width,
        "",
    )
}

fn is_focused(state: &ViewState, side: Side) -> bool {
    match state.presentation() {
        Presentation::Synchronized => true,
        Presentation::Independent => state.focus() == side,
    }
}

/// Top border with an embedded title, e.g. `+- Source: /a ---+`
fn top_border(title: &str, title_tone: Tone, width: usize, b: &BorderSet, ellipsis: &str) -> Line {
    let inner = width.saturating_sub(2);
    let title = truncate_to_width(title, inner.saturating_sub(1), ellipsis);
    let fill = inner.saturating_sub(1 + display_width(&title));
    Line::new(vec![
        Span::new(format!("{}{}", b.top_left, b.horizontal), Tone::Border),
        Span::new(title, title_tone),
        Span::new(
            format!("{}{}", b.horizontal.repeat(fill), b.top_right),
            Tone::Border,
        ),
    ])
}

fn bottom_border(width: usize, b: &BorderSet) -> Line {
    Line::new(vec![Span::new(
        format!(
            "{}{}{}",
            b.bottom_left,
            b.horizontal.repeat(width.saturating_sub(2)),
            b.bottom_right
        ),
        Tone::Border,
    )])
}

fn boxed_row(content: Span, width: usize, b: &BorderSet, ellipsis: &str) -> Line {
    let mut line = Line::new(vec![Span::new(b.vertical, Tone::Border)]);
    line.extend(Line::fitted(vec![content], width.saturating_sub(2), ellipsis));
    line.push(Span::new(b.vertical, Tone::Border));
    line
}

fn pane_box(state: &ViewState, ctx: &FrameContext, side: Side, width: usize, rows: usize) -> Vec<Line> {
    let b = BorderSet::new(ctx.unicode);
    let ellipsis = ctx.ellipsis();
    let pane = state.pane(side);
    let focused = is_focused(state, side);
    let inner_rows = rows.saturating_sub(2);

    let title = format!(" {}: {} ", side.label(), ctx.label(side));
    let title_tone = if focused { Tone::Title } else { Tone::Border };

    let mut lines = Vec::with_capacity(rows);
    lines.push(top_border(&title, title_tone, width, &b, ellipsis));

    let offset = scroll_offset(pane.cursor(), inner_rows);
    for index in offset..offset + inner_rows {
        let content = if index < pane.len() {
            row_span(pane, index, side, focused, ctx.unicode)
        } else {
            Span::plain("")
        };
        lines.push(boxed_row(content, width, &b, ellipsis));
    }

    lines.push(bottom_border(width, &b));
    lines
}

/// One tree row: cursor, indent, kind icon, name (or missing marker), status mark.
fn row_span(pane: &Pane, index: usize, side: Side, focused: bool, unicode: bool) -> Span {
    let visible = pane.visible()[index];
    let node = pane.tree().node(visible.id);
    let at_cursor = index == pane.cursor();

    let entry = node.entry(side);
    let label = if entry.is_some() {
        node.name.as_str()
    } else {
        theme::NOT_EXISTS
    };
    let text = format!(
        "{}{}{} {} {}",
        if at_cursor { "> " } else { "  " },
        "  ".repeat(visible.depth),
        Icon::for_node(node.is_dir, node.expanded).render(unicode),
        label,
        Icon::for_status(node.status).render(unicode),
    );

    let tone = if at_cursor && focused {
        Tone::Selected
    } else if entry.is_none() {
        Tone::Dim
    } else {
        Tone::Status(node.status)
    };
    Span::new(text, tone)
}

fn help_box(presentation: Presentation, ctx: &FrameContext, width: usize, rows: usize) -> Vec<Line> {
    let b = BorderSet::new(ctx.unicode);
    let ellipsis = ctx.ellipsis();

    let mut content = vec![
        Span::plain(""),
        Span::new("  Keyboard Shortcuts", Tone::Title),
        Span::plain(""),
    ];
    for entry in help_entries(presentation, ctx.unicode) {
        content.push(Span::plain(format!("    {:<18}{}", entry.keys, entry.action)));
    }
    content.push(Span::plain(""));
    content.push(Span::new("  Legend", Tone::Title));
    for status in Status::ALL {
        content.push(Span::new(
            format!(
                "    {}  {}",
                Icon::for_status(status).render(ctx.unicode),
                status.description()
            ),
            Tone::Status(status),
        ));
    }
    content.push(Span::plain(""));
    content.push(Span::new("  Press any key to close", Tone::Hint));

    let mut lines = Vec::with_capacity(rows);
    lines.push(top_border(" Help ", Tone::Title, width, &b, ellipsis));
    let mut content = content.into_iter();
    for _ in 0..rows.saturating_sub(2) {
        let span = content.next().unwrap_or_else(|| Span::plain(""));
        lines.push(boxed_row(span, width, &b, ellipsis));
    }
    lines.push(bottom_border(width, &b));
    lines
}

fn status_line(state: &ViewState, ctx: &FrameContext, width: usize) -> Line {
    let pane = state.focused_pane();
    let position = if pane.is_empty() {
        "0/0".to_string()
    } else {
        format!("{}/{}", pane.cursor() + 1, pane.len())
    };

    let mut spans = Vec::new();
    if state.presentation() == Presentation::Independent {
        spans.push(Span::new(format!(" [{}]", state.focus().label()), Tone::Title));
    }
    spans.push(Span::plain(format!(" {} ", position)));
    for status in Status::ALL {
        spans.push(Span::new(
            format!(
                " {} {}",
                Icon::for_status(status).render(ctx.unicode),
                ctx.summary.count(status)
            ),
            Tone::Status(status),
        ));
    }
    spans.push(Span::plain("  | "));
    spans.push(Span::new(
        key_hints(state.presentation(), ctx.unicode),
        Tone::Hint,
    ));

    Line::fitted(spans, width, ctx.ellipsis())
}
