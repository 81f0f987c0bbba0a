//! Single-line text input with a character limit and placeholder.
//!
//! Purely textual: no validation of what is typed. Used by the count
//! stage; the value is parsed only when the session moves to results.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::text::{Line, Span};

use super::theme;

/// Prompt drawn before the field text.
pub const PROMPT: &str = "> ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
    value: Vec<char>,
    /// Cursor position in chars, `0..=value.len()`.
    cursor: usize,
    placeholder: String,
    char_limit: usize,
}

impl TextInput {
    /// Empty field accepting at most `char_limit` characters.
    pub fn new(placeholder: impl Into<String>, char_limit: usize) -> Self {
        TextInput {
            value: Vec::new(),
            cursor: 0,
            placeholder: placeholder.into(),
            char_limit,
        }
    }

    /// Replace the value, truncated to the limit, with the cursor at the end.
    pub fn set_value(&mut self, value: &str) {
        self.value = value.chars().take(self.char_limit).collect();
        self.cursor = self.value.len();
    }

    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    #[cfg(test)]
    fn cursor(&self) -> usize {
        self.cursor
    }

    #[cfg(test)]
    pub(crate) fn placeholder(&self) -> &str {
        &self.placeholder
    }

    // ------------------------------------------------------------------------
    // Editing
    // ------------------------------------------------------------------------

    /// Apply a key press. Keys with no editing meaning are ignored.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('a') if ctrl => self.cursor = 0,
            KeyCode::Char('e') if ctrl => self.cursor = self.value.len(),
            KeyCode::Char('u') if ctrl => self.delete_before_cursor(),
            KeyCode::Char('k') if ctrl => self.value.truncate(self.cursor),
            KeyCode::Char('w') if ctrl => self.delete_word_backward(),
            KeyCode::Char(_) if ctrl => {}
            KeyCode::Char(c) => self.insert(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.value.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.value.len(),
            _ => {}
        }
    }

    fn at_limit(&self) -> bool {
        self.value.len() >= self.char_limit
    }

    fn insert(&mut self, c: char) {
        if c.is_control() || self.at_limit() {
            return;
        }
        self.value.insert(self.cursor, c);
        self.cursor += 1;
    }

    fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.value.remove(self.cursor);
        }
    }

    fn delete(&mut self) {
        if self.cursor < self.value.len() {
            self.value.remove(self.cursor);
        }
    }

    fn delete_before_cursor(&mut self) {
        self.value.drain(..self.cursor);
        self.cursor = 0;
    }

    /// Delete back to the start of the previous word, skipping trailing spaces.
    fn delete_word_backward(&mut self) {
        let mut start = self.cursor;
        while start > 0 && self.value[start - 1].is_whitespace() {
            start -= 1;
        }
        while start > 0 && !self.value[start - 1].is_whitespace() {
            start -= 1;
        }
        self.value.drain(start..self.cursor);
        self.cursor = start;
    }

    // ------------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------------

    /// Prompt, text, and a reversed cell marking the cursor.
    ///
    /// An empty field shows the placeholder dimmed, cursor on its first char.
    pub fn view(&self) -> Line<'static> {
        let mut spans = vec![Span::raw(PROMPT)];

        if self.value.is_empty() {
            let mut chars = self.placeholder.chars();
            let first = chars.next().map_or_else(|| " ".to_string(), String::from);
            spans.push(Span::styled(first, theme::STYLE_CURSOR));
            let rest: String = chars.collect();
            if !rest.is_empty() {
                spans.push(Span::styled(rest, theme::STYLE_PLACEHOLDER));
            }
            return Line::from(spans);
        }

        let before: String = self.value[..self.cursor].iter().collect();
        if !before.is_empty() {
            spans.push(Span::raw(before));
        }
        match self.value.get(self.cursor) {
            Some(c) => {
                spans.push(Span::styled(c.to_string(), theme::STYLE_CURSOR));
                let after: String = self.value[self.cursor + 1..].iter().collect();
                if !after.is_empty() {
                    spans.push(Span::raw(after));
                }
            }
            None => spans.push(Span::styled(" ", theme::STYLE_CURSOR)),
        }
        Line::from(spans)
    }
}

// ============================================================================
// TESTS
// ============================================================================
