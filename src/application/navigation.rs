//! Navigation state for the interactive viewer.
//!
//! `reduce` is a pure function from `(ViewState, Action)` to the next
//! `ViewState`; the terminal loop only translates keys into actions and
//! renders whatever state comes back.

use serde::{Deserialize, Serialize};

use crate::domain::services::{flatten, flatten_side, NodeId, SyncNode, SyncTree, VisibleNode};
use crate::domain::value_objects::Side;

/// Closed set of navigation actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveUp,
    MoveDown,
    ToggleExpand,
    JumpToDiff,
    SwitchFocus,
    FocusLeft,
    FocusRight,
    ToggleHelp,
    Quit,
}

/// How the two panels share the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presentation {
    /// One cursor over one sequence; both panels show the same row
    #[default]
    Synchronized,
    /// Each panel navigates its own side independently
    Independent,
}

impl Presentation {
    pub fn parse_loose(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "synchronized" | "sync" => Some(Presentation::Synchronized),
            "independent" => Some(Presentation::Independent),
            _ => None,
        }
    }
}

/// One cursor over one flattened view of a tree
#[derive(Debug, Clone)]
pub struct Pane {
    tree: SyncTree,
    side: Option<Side>,
    visible: Vec<VisibleNode>,
    cursor: usize,
}

impl Pane {
    /// Pane over every node of `tree`
    pub fn new(tree: SyncTree) -> Self {
        Self::build(tree, None)
    }

    /// Pane over only the nodes present on `side`
    pub fn for_side(tree: SyncTree, side: Side) -> Self {
        Self::build(tree, Some(side))
    }

    fn build(tree: SyncTree, side: Option<Side>) -> Self {
        let mut pane = Self {
            tree,
            side,
            visible: Vec::new(),
            cursor: 0,
        };
        pane.refresh();
        pane
    }

    fn refresh(&mut self) {
        self.visible = match self.side {
            None => flatten(&self.tree),
            Some(side) => flatten_side(&self.tree, side),
        };
        if self.visible.is_empty() {
            self.cursor = 0;
        } else if self.cursor >= self.visible.len() {
            self.cursor = self.visible.len() - 1;
        }
    }

    pub fn tree(&self) -> &SyncTree {
        &self.tree
    }

    /// Side this pane is restricted to, if any
    pub fn side(&self) -> Option<Side> {
        self.side
    }

    pub fn visible(&self) -> &[VisibleNode] {
        &self.visible
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Node under the cursor
    pub fn selected(&self) -> Option<NodeId> {
        self.visible.get(self.cursor).map(|v| v.id)
    }

    pub fn selected_node(&self) -> Option<&SyncNode> {
        self.selected().map(|id| self.tree.node(id))
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.visible.len() {
            self.cursor += 1;
        }
    }

    /// Flip the directory under the cursor. The cursor keeps its index.
    pub fn toggle_expand(&mut self) {
        let Some(id) = self.selected() else {
            return;
        };
        if self.tree.toggle_expanded(id) {
            self.refresh();
        }
    }

    /// Move to the next non-identical row after the cursor, wrapping once.
    pub fn jump_to_next_difference(&mut self) {
        let len = self.visible.len();
        if len == 0 {
            return;
        }
        let after = (self.cursor + 1..len).chain(0..=self.cursor);
        for index in after {
            if self.tree.node(self.visible[index].id).status.is_difference() {
                self.cursor = index;
                return;
            }
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::MoveUp => self.move_up(),
            Action::MoveDown => self.move_down(),
            Action::ToggleExpand => self.toggle_expand(),
            Action::JumpToDiff => self.jump_to_next_difference(),
            // Viewer-level actions; `reduce` handles these before a pane sees them.
            Action::SwitchFocus
            | Action::FocusLeft
            | Action::FocusRight
            | Action::ToggleHelp
            | Action::Quit => {}
        }
    }
}

#[derive(Debug, Clone)]
enum Layout {
    Synchronized(Pane),
    Independent { source: Pane, target: Pane },
}

/// Whole viewer state
#[derive(Debug, Clone)]
pub struct ViewState {
    layout: Layout,
    focus: Side,
    help_visible: bool,
    quit: bool,
}

impl ViewState {
    pub fn new(tree: SyncTree, presentation: Presentation) -> Self {
        let layout = match presentation {
            Presentation::Synchronized => Layout::Synchronized(Pane::new(tree)),
            Presentation::Independent => Layout::Independent {
                source: Pane::for_side(tree.clone(), Side::Source),
                target: Pane::for_side(tree, Side::Target),
            },
        };
        Self {
            layout,
            focus: Side::Source,
            help_visible: false,
            quit: false,
        }
    }

    pub fn presentation(&self) -> Presentation {
        match self.layout {
            Layout::Synchronized(_) => Presentation::Synchronized,
            Layout::Independent { .. } => Presentation::Independent,
        }
    }

    /// Pane backing the given panel. Both sides share one pane when synchronized.
    pub fn pane(&self, side: Side) -> &Pane {
        match (&self.layout, side) {
            (Layout::Synchronized(pane), _) => pane,
            (Layout::Independent { source, .. }, Side::Source) => source,
            (Layout::Independent { target, .. }, Side::Target) => target,
        }
    }

    pub fn focused_pane(&self) -> &Pane {
        self.pane(self.focus)
    }

    fn focused_pane_mut(&mut self) -> &mut Pane {
        match (&mut self.layout, self.focus) {
            (Layout::Synchronized(pane), _) => pane,
            (Layout::Independent { source, .. }, Side::Source) => source,
            (Layout::Independent { target, .. }, Side::Target) => target,
        }
    }

    pub fn focus(&self) -> Side {
        self.focus
    }

    pub fn help_visible(&self) -> bool {
        self.help_visible
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    fn set_focus(&mut self, side: Side) {
        if self.presentation() == Presentation::Independent {
            self.focus = side;
        }
    }
}

/// Apply one action and return the next state.
pub fn reduce(mut state: ViewState, action: Action) -> ViewState {
    if action == Action::Quit {
        state.quit = true;
        return state;
    }
    if state.help_visible {
        state.help_visible = false;
        return state;
    }

    match action {
        Action::ToggleHelp => state.help_visible = true,
        Action::SwitchFocus => state.set_focus(state.focus.other()),
        Action::FocusLeft => state.set_focus(Side::Source),
        Action::FocusRight => state.set_focus(Side::Target),
        other => state.focused_pane_mut().apply(other),
    }
    state
}
