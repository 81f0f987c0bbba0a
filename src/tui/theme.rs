//! TUI style constants.
//!
//! Pure data, consumed by the rendering layer. Styling is decoration only:
//! every view reads the same with colors stripped.

use ratatui::style::{Color, Modifier, Style};

/// Question at the top of each stage.
pub const STYLE_PROMPT: Style = Style::new().add_modifier(Modifier::BOLD);

/// Highlighted choice in the type list.
pub const STYLE_SELECTED: Style = Style::new().fg(Color::Magenta);

/// Text cursor cell in the input field.
pub const STYLE_CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Placeholder text in an empty input field.
pub const STYLE_PLACEHOLDER: Style = Style::new().fg(Color::DarkGray);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);
