//! Error types for the camdkit library.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// A single populated value that failed its parameter's validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationFailure {
    /// Field identifier within the record (e.g. `shutter_angle`).
    pub field: &'static str,
    /// Canonical wire name of the field (e.g. `shutterAngle`).
    pub canonical_name: &'static str,
    /// Frame index for sequence slots, `None` for single values.
    pub index: Option<usize>,
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(index) => write!(f, "{} ({}) at frame {}", self.field, self.canonical_name, index),
            None => write!(f, "{} ({})", self.field, self.canonical_name),
        }
    }
}

/// Main error type for camdkit operations.
#[derive(Error, Debug)]
pub enum Error {
    /// One or more populated values failed validation
    #[error("Validation failed: {}", join_failures(.failures))]
    Validation { failures: Vec<ValidationFailure> },

    /// JSON input is structurally malformed for a field
    #[error("Cannot decode {field}: {message}")]
    Decode { field: String, message: String },

    /// Value kind does not match the field's declared kind
    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// Field not found by identifier
    #[error("Field not found: {0}")]
    FieldNotFound(String),

    /// File does not exist or cannot be accessed
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a decode error not yet attributed to a field.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            field: String::new(),
            message: message.into(),
        }
    }

    /// Create a type mismatch error.
    pub fn mismatch(expected: impl fmt::Display, actual: impl fmt::Display) -> Self {
        Self::TypeMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Attribute an unattributed decode error to `field`.
    pub fn in_field(self, field: &str) -> Self {
        match self {
            Self::Decode { field: f, message } if f.is_empty() => Self::Decode {
                field: field.to_string(),
                message,
            },
            other => other,
        }
    }

    /// Validation failures carried by this error, empty for other kinds.
    pub fn failures(&self) -> &[ValidationFailure] {
        match self {
            Self::Validation { failures } => failures,
            _ => &[],
        }
    }
}

fn join_failures(failures: &[ValidationFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for camdkit operations.
pub type Result<T> = std::result::Result<T, Error>;
