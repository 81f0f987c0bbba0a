//! Pure rendering: map App state to text.
//!
//! Each stage has a dedicated view function returning styled lines. The
//! same lines feed both the ratatui frame (while the session runs) and the
//! plain-text output printed once the terminal is restored.

use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::types::IdKind;

use super::input::TextInput;
use super::state::{App, Stage};
use super::theme;

/// Left margin applied to every non-blank line.
pub const MARGIN: &str = "  ";

const SELECT_PROMPT: &str = "What kind of ID would you like to generate??";
const SELECT_HINT: &str = "(press q to quit)";
const COUNT_PROMPT: &str = "How many of these do you want??";
const COUNT_HINT: &str = "(esc to quit)";
const FAREWELL: &str = "See you later!";

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the current view to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    frame.render_widget(Paragraph::new(view(app)), frame.area());
}

/// The full view for the current state, framed by blank lines.
///
/// Quitting overrides every stage with the farewell.
pub fn view(app: &App) -> Vec<Line<'static>> {
    if app.quitting {
        return framed(vec![Line::from(FAREWELL)]);
    }

    let body = match &app.stage {
        Stage::SelectType { cursor } => select_type_view(*cursor),
        Stage::EnterCount { field, .. } => enter_count_view(field),
        Stage::ShowResults { batch, .. } => results_view(batch),
    };
    framed(body)
}

/// Plain text of [`view`], one newline-terminated line each.
pub fn view_text(app: &App) -> String {
    to_plain(&view(app))
}

fn to_plain(lines: &[Line<'_>]) -> String {
    let mut out = String::new();
    for line in lines {
        for span in &line.spans {
            out.push_str(&span.content);
        }
        out.push('\n');
    }
    out
}

/// Leading blank line, body indented by [`MARGIN`], trailing blank line.
fn framed(body: Vec<Line<'static>>) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(Line::from(""));
    lines.extend(body.into_iter().map(indent));
    lines.push(Line::from(""));
    lines
}

fn indent(line: Line<'static>) -> Line<'static> {
    if line.spans.iter().all(|s| s.content.is_empty()) {
        return line;
    }
    let mut spans = Vec::with_capacity(line.spans.len() + 1);
    spans.push(Span::raw(MARGIN));
    spans.extend(line.spans);
    Line::from(spans).style(line.style)
}

// ============================================================================
// STAGE: SELECT TYPE
// ============================================================================

fn select_type_view(cursor: usize) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(SELECT_PROMPT, theme::STYLE_PROMPT)),
        Line::from(""),
    ];

    for (i, kind) in IdKind::ALL.iter().enumerate() {
        let line = if i == cursor {
            Line::from(Span::styled(format!("(•) {}", kind.label()), theme::STYLE_SELECTED))
        } else {
            Line::from(format!("( ) {}", kind.label()))
        };
        lines.push(line);
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(SELECT_HINT, theme::STYLE_HELP)));
    lines
}

// ============================================================================
// STAGE: ENTER COUNT
// ============================================================================

fn enter_count_view(field: &TextInput) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(COUNT_PROMPT, theme::STYLE_PROMPT)),
        Line::from(""),
        field.view(),
        Line::from(""),
        Line::from(Span::styled(COUNT_HINT, theme::STYLE_HELP)),
    ]
}

// ============================================================================
// STAGE: RESULTS
// ============================================================================

fn results_view(batch: &[String]) -> Vec<Line<'static>> {
    batch.iter().map(|id| Line::from(id.clone())).collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn make_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(60, 12);
        Terminal::new(backend).unwrap()
    }

    fn app_on(stage: Stage) -> App {
        let mut app = App::new();
        app.stage = stage;
        app
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol().to_string())
            .collect()
    }

    #[test]
    fn select_type_view_text() {
        let app = App::new();
        assert_eq!(
            view_text(&app),
            "\n  What kind of ID would you like to generate??\n\n  (•) UUID\n  ( ) Name\n  ( ) Password\n\n  (press q to quit)\n\n"
        );
    }

    #[test]
    fn select_type_marks_only_cursor_choice() {
        let app = app_on(Stage::SelectType { cursor: 2 });
        let text = view_text(&app);
        assert!(text.contains("( ) UUID"));
        assert!(text.contains("( ) Name"));
        assert!(text.contains("(•) Password"));
        assert_eq!(text.matches('•').count(), 1);
    }

    #[test]
    fn enter_count_view_text() {
        let app = app_on(Stage::enter_count(IdKind::Uuid));
        assert_eq!(
            view_text(&app),
            "\n  How many of these do you want??\n\n  > 5 \n\n  (esc to quit)\n\n"
        );
    }

    #[test]
    fn results_view_is_one_id_per_line() {
        let app = app_on(Stage::ShowResults {
            kind: IdKind::Name,
            batch: vec!["misty-river".into(), "bold-ember".into()],
        });
        assert_eq!(view_text(&app), "\n  misty-river\n  bold-ember\n\n");
    }

    #[test]
    fn empty_results_have_no_body() {
        let app = app_on(Stage::ShowResults { kind: IdKind::Uuid, batch: vec![] });
        assert_eq!(view_text(&app), "\n\n");
    }

    #[test]
    fn farewell_is_identical_from_every_stage() {
        let stages = [
            Stage::select_type(),
            Stage::enter_count(IdKind::Password),
            Stage::ShowResults { kind: IdKind::Uuid, batch: vec!["x".into()] },
        ];
        for stage in stages {
            let mut app = app_on(stage);
            app.quitting = true;
            assert_eq!(view_text(&app), "\n  See you later!\n\n");
        }
    }

    #[test]
    fn selected_choice_is_styled() {
        let lines = view(&App::new());
        let selected = &lines[3];
        assert_eq!(selected.spans[1].style, theme::STYLE_SELECTED);
    }

    #[test]
    fn select_type_renders_to_terminal() {
        let mut terminal = make_terminal();
        terminal.draw(|frame| render(&App::new(), frame)).unwrap();
        let content = buffer_text(&terminal);
        assert!(content.contains("What kind of ID"));
        assert!(content.contains("(press q to quit)"));
    }

    #[test]
    fn enter_count_renders_to_terminal() {
        let mut terminal = make_terminal();
        let app = app_on(Stage::enter_count(IdKind::Name));
        terminal.draw(|frame| render(&app, frame)).unwrap();
        let content = buffer_text(&terminal);
        assert!(content.contains("How many of these"));
        assert!(content.contains("> 5"));
        assert!(content.contains("(esc to quit)"));
    }

    #[test]
    fn margin_is_two_columns() {
        let mut terminal = make_terminal();
        terminal.draw(|frame| render(&App::new(), frame)).unwrap();
        let buffer = terminal.backend().buffer();
        // Row 1 holds the prompt; row 0 is the leading blank line.
        assert_eq!(buffer[(0, 1)].symbol(), " ");
        assert_eq!(buffer[(1, 1)].symbol(), " ");
        assert_eq!(buffer[(2, 1)].symbol(), "W");
    }
}
