//! Error types for idgen.

use std::num::ParseIntError;
use std::path::PathBuf;

/// Fatal errors: anything that stops the program before or during the
/// interactive session.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The debug log file could not be opened.
    #[error("cannot open log file {}: {source}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A terminal operation failed (raw mode, drawing, reading events).
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// The quantity typed into the count field is not a non-negative integer.
///
/// Recovered locally: the session ends with an empty batch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid count {input:?}: {source}")]
pub struct CountError {
    pub input: String,
    #[source]
    pub source: ParseIntError,
}

pub type Result<T> = std::result::Result<T, Error>;

/// Parse the count field value.
pub fn parse_count(input: &str) -> std::result::Result<usize, CountError> {
    input.parse::<usize>().map_err(|source| CountError {
        input: input.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_digits() {
        assert_eq!(parse_count("5"), Ok(5));
        assert_eq!(parse_count("0"), Ok(0));
        assert_eq!(parse_count("999"), Ok(999));
    }

    #[test]
    fn rejects_non_numeric_and_negative() {
        assert!(parse_count("").is_err());
        assert!(parse_count("abc").is_err());
        assert!(parse_count("-1").is_err());
        assert!(parse_count(" 5").is_err());
    }

    #[test]
    fn count_error_keeps_input() {
        let err = parse_count("x1").unwrap_err();
        assert_eq!(err.input, "x1");
        assert!(err.to_string().contains("\"x1\""));
    }

    #[test]
    fn log_file_error_mentions_path() {
        let err = Error::LogFile {
            path: PathBuf::from("/nope/debug.log"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("/nope/debug.log"));
    }
}
