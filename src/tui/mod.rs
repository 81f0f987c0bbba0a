//! TUI module for the interactive session.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: pure data types (App, Stage, Action, Transition)
//! - `input`: the count field's line editor
//! - `update`: pure transitions
//! - `view`: pure rendering
//! - `run`: effects (terminal, event loop, generation)

pub mod input;
pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
