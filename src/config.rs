//! Runtime configuration.
//!
//! The only knob is the diagnostic log. It is resolved once at startup from
//! the command line and the `DEBUG` environment toggle, then passed
//! explicitly into logging setup.

use std::ffi::OsStr;
use std::path::PathBuf;

/// Environment variable that enables the debug log when set and non-empty.
pub const DEBUG_ENV: &str = "DEBUG";

/// Default debug log location, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "debug.log";

/// Where diagnostic events go.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DebugLog {
    /// Discard all diagnostic events.
    #[default]
    Disabled,
    /// Append diagnostic events to this file.
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    pub debug: DebugLog,
}

impl Config {
    /// Resolve configuration from the `--debug` flag, the log file path, and
    /// the raw value of the `DEBUG` environment variable.
    pub fn resolve(debug_flag: bool, log_file: PathBuf, debug_env: Option<&OsStr>) -> Self {
        let env_enabled = debug_env.is_some_and(|v| !v.is_empty());
        let debug = if debug_flag || env_enabled {
            DebugLog::File(log_file)
        } else {
            DebugLog::Disabled
        };
        Config { debug }
    }
}
