//! Pure state transitions: (Stage, Action) → Transition.
//!
//! Fully testable without a terminal. Unhandled actions return the current
//! stage unchanged (no-op).

use crate::types::IdKind;

use super::input::TextInput;
use super::state::{Action, Effect, Stage, Transition};

/// Pure state transition function.
///
/// Quit is checked first, on every stage, before any stage handler runs.
pub fn update(stage: Stage, action: &Action) -> Transition {
    if *action == Action::Quit {
        return Transition::Quit;
    }

    match stage {
        Stage::SelectType { cursor } => update_select_type(cursor, action),
        Stage::EnterCount { kind, field } => update_enter_count(kind, field, action),
        Stage::ShowResults { .. } => Transition::Stage(stage),
    }
}

// ============================================================================
// PER-STAGE HANDLERS
// ============================================================================

/// SelectType: cursor wraps around the choice list; Confirm picks a kind.
fn update_select_type(cursor: usize, action: &Action) -> Transition {
    let len = IdKind::ALL.len();

    match action {
        Action::MoveDown => Transition::Stage(Stage::SelectType {
            cursor: (cursor + 1) % len,
        }),
        Action::MoveUp => Transition::Stage(Stage::SelectType {
            cursor: (cursor + len - 1) % len,
        }),
        Action::Confirm => {
            let kind = IdKind::from_index(cursor);
            tracing::debug!(%kind, "type selected");
            Transition::Stage(Stage::enter_count(kind))
        }
        _ => Transition::Stage(Stage::SelectType { cursor }),
    }
}

/// EnterCount: Confirm asks for generation; editing keys go to the field.
///
/// A Quit reaching this handler is treated like Confirm. In practice the
/// global check in [`update`] consumes Quit first.
fn update_enter_count(kind: IdKind, mut field: TextInput, action: &Action) -> Transition {
    match action {
        Action::Confirm | Action::Quit => Transition::Effect(Effect::Generate {
            kind,
            count_input: field.value(),
        }),
        Action::Edit(key) => {
            field.handle_key(*key);
            Transition::Stage(Stage::EnterCount { kind, field })
        }
        // No list to move through here.
        Action::MoveUp | Action::MoveDown => Transition::Stage(Stage::EnterCount { kind, field }),
    }
}

// ============================================================================
// TESTS
// ============================================================================
