//! Error types for xfdash.
//!
//! Per-file scan failures are typed so they can be logged with the offending
//! path, but the scanner never lets them escape a discovery pass. Lookup and
//! launch errors surface to the caller.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the xfdash library.
#[derive(Debug, Error)]
pub enum XfdashError {
    // File system errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    // Descriptor format errors
    #[error("parse error at {path:?} line {line}: {message}")]
    Parse {
        path: Option<PathBuf>,
        line: usize,
        message: String,
    },

    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    // Catalog lookup errors
    #[error("no settings entry with id: {id}")]
    EntryNotFound { id: String },

    // Launch errors
    #[error("launch failed for '{command}': {message}")]
    Launch { command: String, message: String },
}

/// Result type alias for xfdash operations.
pub type Result<T> = std::result::Result<T, XfdashError>;

impl From<std::io::Error> for XfdashError {
    fn from(err: std::io::Error) -> Self {
        XfdashError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl XfdashError {
    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        XfdashError::Io {
            message: err.to_string(),
            path: Some(path.into()),
            source: Some(err),
        }
    }

    /// Attach a file path to an error that was produced without one.
    ///
    /// Parse errors are raised against raw text; the caller that knows the
    /// source file uses this to complete the diagnostic.
    pub fn with_path(self, new_path: impl Into<PathBuf>) -> Self {
        match self {
            XfdashError::Parse { path: None, line, message } => XfdashError::Parse {
                path: Some(new_path.into()),
                line,
                message,
            },
            XfdashError::Io { message, path: None, source } => XfdashError::Io {
                message,
                path: Some(new_path.into()),
                source,
            },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = XfdashError::EntryNotFound {
            id: "xfce4-display-settings".into(),
        };
        assert_eq!(
            err.to_string(),
            "no settings entry with id: xfce4-display-settings"
        );
    }

    #[test]
    fn test_parse_error_display() {
        let err = XfdashError::Parse {
            path: None,
            line: 3,
            message: "expected key=value".into(),
        };
        assert!(err.to_string().contains("line 3"));
        assert!(err.to_string().contains("expected key=value"));
    }

    #[test]
    fn test_with_path_fills_parse_location() {
        let err = XfdashError::Parse {
            path: None,
            line: 1,
            message: "bad header".into(),
        }
        .with_path("/usr/share/applications/foo.desktop");

        match err {
            XfdashError::Parse { path: Some(p), .. } => {
                assert!(p.ends_with("foo.desktop"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
