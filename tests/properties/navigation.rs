//! Property tests for the navigation reducer.

use proptest::prelude::*;

use folder_diff::application::{reduce, Action, Presentation, ViewState};
use folder_diff::domain::value_objects::{CompareMode, Side};

use crate::layout::{build, files};

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::MoveUp),
        Just(Action::MoveDown),
        Just(Action::ToggleExpand),
        Just(Action::JumpToDiff),
        Just(Action::SwitchFocus),
        Just(Action::FocusLeft),
        Just(Action::FocusRight),
        Just(Action::ToggleHelp),
    ]
}

fn presentation() -> impl Strategy<Value = Presentation> {
    prop_oneof![Just(Presentation::Synchronized), Just(Presentation::Independent)]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The cursor always stays on a visible row.
    #[test]
    fn property_cursor_in_bounds(
        source in files(),
        target in files(),
        presentation in presentation(),
        actions in proptest::collection::vec(action(), 0..40),
    ) {
        let built = build(&source, &target, CompareMode::Content, true);
        let mut state = ViewState::new(built.tree, presentation);

        for action in actions {
            state = reduce(state, action);
            for side in [Side::Source, Side::Target] {
                let pane = state.pane(side);
                prop_assert!(pane.is_empty() || pane.cursor() < pane.len());
            }
        }
    }

    /// PROPERTY: After a jump the cursor sits on a difference whenever one is visible.
    #[test]
    fn property_jump_lands_on_difference(
        source in files(),
        target in files(),
        moves in 0usize..12,
    ) {
        let built = build(&source, &target, CompareMode::Content, true);
        let mut state = ViewState::new(built.tree, Presentation::Synchronized);
        for _ in 0..moves {
            state = reduce(state, Action::MoveDown);
        }
        let before = state.focused_pane().cursor();

        state = reduce(state, Action::JumpToDiff);
        let pane = state.focused_pane();
        let any_difference = pane
            .visible()
            .iter()
            .any(|v| pane.tree().node(v.id).status.is_difference());

        match pane.selected_node() {
            Some(node) if any_difference => prop_assert!(node.status.is_difference()),
            _ => prop_assert_eq!(pane.cursor(), before),
        }
    }

    /// PROPERTY: Jumping visits each visible difference once per cycle.
    #[test]
    fn property_jump_cycles_through_differences(
        source in files(),
        target in files(),
    ) {
        let built = build(&source, &target, CompareMode::Content, true);
        let mut state = ViewState::new(built.tree, Presentation::Synchronized);
        let differences = {
            let pane = state.focused_pane();
            pane.visible()
                .iter()
                .filter(|v| pane.tree().node(v.id).status.is_difference())
                .count()
        };
        prop_assume!(differences > 0);

        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..differences {
            state = reduce(state, Action::JumpToDiff);
            seen.insert(state.focused_pane().cursor());
        }
        prop_assert_eq!(seen.len(), differences);
    }

    /// PROPERTY: Toggling the same row twice restores the visible list.
    #[test]
    fn property_double_toggle_restores_rows(
        source in files(),
        target in files(),
        moves in 0usize..12,
    ) {
        let built = build(&source, &target, CompareMode::Content, true);
        let mut state = ViewState::new(built.tree, Presentation::Synchronized);
        for _ in 0..moves {
            state = reduce(state, Action::MoveDown);
        }
        let before = state.focused_pane().visible().to_vec();

        state = reduce(state, Action::ToggleExpand);
        state = reduce(state, Action::ToggleExpand);

        prop_assert_eq!(state.focused_pane().visible(), before.as_slice());
    }
}
