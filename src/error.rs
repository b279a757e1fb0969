//! Crate-level error types.

use std::fmt;

/// Errors produced by the orrery crate.
#[derive(Debug)]
pub enum OrreryError {
    /// A system spec failed validation (non-positive radius, negative
    /// orbit distance, duplicate name, non-finite scalar).
    InvalidSpec(String),
    /// TOML options/spec parsing or serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// A renderer implementation reported a failure.
    Render(String),
    /// A tunable write referenced an unknown body or field.
    UnknownTunable(String),
}

impl fmt::Display for OrreryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSpec(msg) => {
                write!(f, "invalid system spec: {msg}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Render(msg) => write!(f, "render error: {msg}"),
            Self::UnknownTunable(msg) => {
                write!(f, "unknown tunable: {msg}")
            }
        }
    }
}

impl std::error::Error for OrreryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for OrreryError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
