//! TUI state algebra: pure types, zero effects.
//!
//! Stage variants carry only their own transient state (cursor, input
//! field, generated batch). The session-wide flags live in [`App`].

use crossterm::event::KeyEvent;

use crate::error::CountError;
use crate::types::IdKind;

use super::input::TextInput;

/// Value the count field starts with.
pub const DEFAULT_COUNT: &str = "5";

/// Maximum number of characters the count field accepts.
pub const COUNT_CHAR_LIMIT: usize = 3;

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// The session: one per process, owned by the event loop.
#[derive(Debug)]
pub struct App {
    /// Current stage, carrying per-stage state.
    pub stage: Stage,

    /// Set when a quit key was pressed. The loop exits and the farewell
    /// is shown instead of any stage view.
    pub quitting: bool,

    /// Why the last count could not be used. Never rendered.
    pub last_error: Option<CountError>,
}

impl App {
    /// Fresh session on the type selection stage.
    pub fn new() -> Self {
        App {
            stage: Stage::select_type(),
            quitting: false,
            last_error: None,
        }
    }

    /// True once the loop should stop: after quitting, or on reaching results.
    pub fn is_done(&self) -> bool {
        self.quitting || self.stage.is_terminal()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// STAGES
// ============================================================================

/// The current stage of the session.
///
/// Stages only move forward: SelectType → EnterCount → ShowResults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    /// Choose which kind of identifier to generate.
    SelectType {
        /// Index into [`IdKind::ALL`], always in range.
        cursor: usize,
    },

    /// Type how many identifiers to generate.
    EnterCount { kind: IdKind, field: TextInput },

    /// Generated batch. Terminal: no input changes it.
    ShowResults { kind: IdKind, batch: Vec<String> },
}

impl Stage {
    pub fn select_type() -> Self {
        Stage::SelectType { cursor: 0 }
    }

    /// Count stage with the field pre-filled with [`DEFAULT_COUNT`].
    pub fn enter_count(kind: IdKind) -> Self {
        let mut field = TextInput::new(DEFAULT_COUNT, COUNT_CHAR_LIMIT);
        field.set_value(DEFAULT_COUNT);
        Stage::EnterCount { kind, field }
    }

    /// Position in the stage sequence, for monotonicity checks.
    #[cfg(test)]
    pub(crate) fn ordinal(&self) -> u8 {
        match self {
            Stage::SelectType { .. } => 0,
            Stage::EnterCount { .. } => 1,
            Stage::ShowResults { .. } => 2,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Stage::ShowResults { .. })
    }
}

/// Placeholder used while a stage is moved out of [`App`] for a transition.
impl Default for Stage {
    fn default() -> Self {
        Stage::select_type()
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    MoveUp,
    MoveDown,
    /// Enter.
    Confirm,
    /// Any of the quit keys: q, Esc, Ctrl+C.
    Quit,
    /// Any other key, passed through to the input field on the count stage.
    Edit(KeyEvent),
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
#[derive(Debug, PartialEq, Eq)]
pub enum Transition {
    /// Continue on this stage (same or next).
    Stage(Stage),
    /// End the session with the farewell.
    Quit,
    /// Execute a side effect. The effects layer performs it and moves
    /// the session on.
    Effect(Effect),
}

/// Side effect requested by a pure transition.
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    /// Parse `count_input` and generate that many identifiers of `kind`.
    Generate { kind: IdKind, count_input: String },
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_starts_on_select_type_at_first_choice() {
        let app = App::new();
        assert_eq!(app.stage, Stage::SelectType { cursor: 0 });
        assert!(!app.quitting);
        assert!(app.last_error.is_none());
        assert!(!app.is_done());
    }

    #[test]
    fn enter_count_is_prefilled_with_default() {
        match Stage::enter_count(IdKind::Name) {
            Stage::EnterCount { kind, field } => {
                assert_eq!(kind, IdKind::Name);
                assert_eq!(field.value(), DEFAULT_COUNT);
                assert_eq!(field.placeholder(), DEFAULT_COUNT);
            }
            other => panic!("Expected EnterCount, got {:?}", other),
        }
    }

    #[test]
    fn ordinals_follow_stage_order() {
        let stages = [
            Stage::select_type(),
            Stage::enter_count(IdKind::Uuid),
            Stage::ShowResults { kind: IdKind::Uuid, batch: vec![] },
        ];
        let ordinals: Vec<u8> = stages.iter().map(Stage::ordinal).collect();
        assert_eq!(ordinals, vec![0, 1, 2]);
    }

    #[test]
    fn only_results_is_terminal() {
        assert!(!Stage::select_type().is_terminal());
        assert!(!Stage::enter_count(IdKind::Uuid).is_terminal());
        assert!(Stage::ShowResults { kind: IdKind::Uuid, batch: vec![] }.is_terminal());
    }

    #[test]
    fn quitting_app_is_done() {
        let mut app = App::new();
        app.quitting = true;
        assert!(app.is_done());
    }
}
