//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui,
//! and runs the generators when the state machine asks for them.
//!
//! Single-threaded: the loop blocks on the next key event, processes it
//! to completion, then redraws.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::error::{parse_count, Result};
use crate::generate::generate;

use super::state::{Action, App, Effect, Stage, Transition};
use super::update::update;
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action for the given stage.
///
/// Returns None for key releases, which carry no input. On the count stage
/// only the quit keys and Enter keep their meaning; every other key is an
/// edit for the input field, including j/k and the arrows.
pub fn map_key(key: KeyEvent, stage: &Stage) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    let editing = matches!(stage, Stage::EnterCount { .. });
    let action = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Enter => Action::Confirm,
        _ if editing => Action::Edit(key),
        KeyCode::Up | KeyCode::Char('k') => Action::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => Action::MoveDown,
        _ => Action::Edit(key),
    };
    Some(action)
}

// ============================================================================
// SESSION DRIVER
// ============================================================================

/// Process one key event against the session.
///
/// This is everything the loop does between two renders, minus the
/// terminal I/O, so whole sessions can be driven from tests.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    let Some(action) = map_key(key, &app.stage) else {
        return;
    };
    apply(app, &action);
}

/// Apply a semantic action to the session.
///
/// Once quitting is set the session is over and actions are ignored.
pub fn apply(app: &mut App, action: &Action) {
    if app.quitting {
        return;
    }

    let stage = std::mem::take(&mut app.stage);
    match update(stage, action) {
        Transition::Stage(next) => app.stage = next,
        Transition::Quit => {
            tracing::info!("quit requested");
            app.quitting = true;
        }
        Transition::Effect(effect) => handle_effect(effect, app),
    }
}

/// Handle a side effect requested by a pure transition.
fn handle_effect(effect: Effect, app: &mut App) {
    match effect {
        Effect::Generate { kind, count_input } => {
            let batch = match parse_count(&count_input) {
                Ok(count) => generate(kind, count),
                Err(e) => {
                    tracing::error!(error = %e, "count is not a non-negative integer");
                    app.last_error = Some(e);
                    Vec::new()
                }
            };
            tracing::info!(%kind, generated = batch.len(), "session complete");
            app.stage = Stage::ShowResults { kind, batch };
        }
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Terminal type used by the session. Frames go to stderr so stdout
/// carries only the final output.
type Tui = Terminal<CrosstermBackend<io::Stderr>>;

/// Set up the terminal for TUI mode.
///
/// Raw mode is undone if anything after enabling it fails.
fn setup_terminal() -> io::Result<Tui> {
    enable_raw_mode()?;
    with_rollback(
        || {
            io::stderr().execute(EnterAlternateScreen)?;
            Terminal::new(CrosstermBackend::new(io::stderr()))
        },
        || {
            let _ = restore_terminal();
        },
    )
}

/// Run `setup`; if it fails, run `rollback` before returning the error.
fn with_rollback<T>(
    setup: impl FnOnce() -> io::Result<T>,
    rollback: impl FnOnce(),
) -> io::Result<T> {
    setup().inspect_err(|_| rollback())
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stderr().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run an interactive session until the user quits or results are ready.
///
/// Returns the final session; the caller prints its view once the terminal
/// is back to normal.
///
/// # Errors
///
/// Returns [`crate::error::Error::Terminal`] if the terminal cannot be set up,
/// drawn to, or read from. The terminal is restored either way.
pub fn run() -> Result<App> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut app = App::new();

    let outcome = event_loop(&mut terminal, &mut app);
    let restored = restore_terminal();

    outcome?;
    restored?;
    Ok(app)
}

fn event_loop(terminal: &mut Tui, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|frame| render(app, frame))?;

        if app.is_done() {
            return Ok(());
        }

        // Mouse, resize and focus events only trigger a redraw.
        if let Event::Key(key) = event::read()? {
            tracing::trace!(?key, "key event");
            handle_key(app, key);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
