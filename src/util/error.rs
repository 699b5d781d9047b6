// Text Monitor - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Every error keeps the path it concerns and the underlying io/toml source.

use std::fmt;
use std::io;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// File errors
// ---------------------------------------------------------------------------

/// Errors produced by the file display controller (`platform::fs`).
///
/// None of these are fatal: the caller turns each one into display text or a
/// log line at the point where it occurs.
#[derive(Debug)]
pub enum FileError {
    /// The path does not exist. Rendered as a placeholder, not an error.
    NotFound { path: PathBuf },

    /// Reading failed for any other reason (permissions, invalid UTF-8, ...).
    Read { path: PathBuf, source: io::Error },

    /// Appending to the file failed.
    Write { path: PathBuf, source: io::Error },

    /// Creating the file or its parent directories from the template failed.
    Create { path: PathBuf, source: io::Error },
}

impl FileError {
    /// Path the failed operation was acting on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NotFound { path }
            | Self::Read { path, .. }
            | Self::Write { path, .. }
            | Self::Create { path, .. } => path,
        }
    }

    /// True for the "file does not exist" case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => {
                write!(f, "File '{}' does not exist", path.display())
            }
            Self::Read { path, source } => {
                write!(f, "Cannot read '{}': {source}", path.display())
            }
            Self::Write { path, source } => {
                write!(f, "Cannot append to '{}': {source}", path.display())
            }
            Self::Create { path, source } => {
                write!(f, "Cannot create '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound { .. } => None,
            Self::Read { source, .. } => Some(source),
            Self::Write { source, .. } => Some(source),
            Self::Create { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_file_error_display_includes_path() {
        let err = FileError::Write {
            path: PathBuf::from("/data/text.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/data/text.txt"), "got: {msg}");
        assert!(msg.contains("denied"), "got: {msg}");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_not_found_has_no_source() {
        let err = FileError::NotFound {
            path: PathBuf::from("missing.txt"),
        };
        assert!(err.is_not_found());
        assert!(err.source().is_none());
        assert_eq!(err.path(), std::path::Path::new("missing.txt"));
    }
}
