//! End-to-end sessions driven through the public key handler, without a
//! terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use idgen::tui::run::handle_key;
use idgen::tui::state::{App, Stage};
use idgen::tui::view::view_text;

fn play(keys: &[KeyEvent]) -> App {
    let mut app = App::new();
    for &key in keys {
        handle_key(&mut app, key);
        if app.is_done() {
            break;
        }
    }
    app
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Lines of the final output, margin stripped, blank frame lines dropped.
fn output_lines(app: &App) -> Vec<String> {
    view_text(app)
        .lines()
        .filter(|l| !l.is_empty())
        .map(|l| l.trim_start().to_string())
        .collect()
}

fn is_uuid(s: &str) -> bool {
    let groups: Vec<&str> = s.split('-').collect();
    groups.iter().map(|g| g.len()).collect::<Vec<_>>() == [8, 4, 4, 4, 12]
        && groups.iter().all(|g| g.chars().all(|c| c.is_ascii_hexdigit()))
}

#[test]
fn enter_enter_prints_five_uuids() {
    let app = play(&[key(KeyCode::Enter), key(KeyCode::Enter)]);
    let lines = output_lines(&app);
    assert_eq!(lines.len(), 5);
    assert!(lines.iter().all(|l| is_uuid(l)), "{lines:?}");
}

#[test]
fn down_enter_enter_prints_five_names() {
    let app = play(&[key(KeyCode::Down), key(KeyCode::Enter), key(KeyCode::Enter)]);
    let lines = output_lines(&app);
    assert_eq!(lines.len(), 5);
    assert!(lines.iter().all(|l| !l.is_empty() && l.contains('-')), "{lines:?}");
}

#[test]
fn down_down_enter_enter_prints_five_tokens() {
    let app = play(&[
        key(KeyCode::Down),
        key(KeyCode::Down),
        key(KeyCode::Enter),
        key(KeyCode::Enter),
    ]);
    let lines = output_lines(&app);
    assert_eq!(lines.len(), 5);
    for token in &lines {
        assert_eq!(token.len(), 30);
        assert!(token.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }
}

#[test]
fn q_quits_with_farewell_and_no_generation() {
    let app = play(&[key(KeyCode::Char('q')), key(KeyCode::Enter), key(KeyCode::Enter)]);
    assert!(app.quitting);
    assert_eq!(app.stage, Stage::select_type());
    assert_eq!(view_text(&app), "\n  See you later!\n\n");
}

#[test]
fn every_quit_key_gives_the_same_farewell() {
    let quit_keys = [
        key(KeyCode::Char('q')),
        key(KeyCode::Esc),
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    ];
    for quit in quit_keys {
        let from_select = play(&[quit]);
        let from_count = play(&[key(KeyCode::Enter), quit]);
        assert_eq!(view_text(&from_select), view_text(&from_count));
        assert_eq!(view_text(&from_count), "\n  See you later!\n\n");
    }
}

#[test]
fn up_from_first_choice_selects_password() {
    let app = play(&[key(KeyCode::Up), key(KeyCode::Enter), key(KeyCode::Enter)]);
    let lines = output_lines(&app);
    assert_eq!(lines.len(), 5);
    assert!(lines.iter().all(|l| l.len() == 30));
}

#[test]
fn zero_count_prints_nothing() {
    let app = play(&[
        key(KeyCode::Enter),
        key(KeyCode::Backspace),
        key(KeyCode::Char('0')),
        key(KeyCode::Enter),
    ]);
    assert!(app.is_done());
    assert!(output_lines(&app).is_empty());
    assert!(app.last_error.is_none());
}
