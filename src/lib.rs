//! idgen: generate UUIDs, random names, and secure tokens from the terminal.

pub mod config;
pub mod error;
pub mod generate;
pub mod logging;
pub mod tui;
pub mod types;
pub mod wordlist;
