//! Crate-level error types.

use std::fmt;

/// Errors produced by the sortviz crate.
///
/// Stepping a sort never fails; these cover caller-supplied data and the
/// options file layer.
#[derive(Debug)]
pub enum SortvizError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML/JSON options parsing or serialization failure.
    OptionsParse(String),
    /// An array that cannot be sorted or laid out (empty, inverted bounds).
    InvalidArray(String),
}

impl fmt::Display for SortvizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidArray(msg) => write!(f, "invalid array: {msg}"),
        }
    }
}

impl std::error::Error for SortvizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SortvizError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn display_names_the_failure() {
        let err = SortvizError::InvalidArray("empty".to_owned());
        assert_eq!(err.to_string(), "invalid array: empty");
    }

    #[test]
    fn io_errors_keep_their_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = SortvizError::from(io);
        assert!(err.source().is_some());
        assert!(SortvizError::OptionsParse("bad".to_owned())
            .source()
            .is_none());
    }
}
