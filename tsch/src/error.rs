//! Error types.
//!
//! Validation failures are data: [`ValidationError`] values are collected into
//! a [`ValidationResult`](crate::ValidationResult) and never raised on their
//! own. [`ValidationErrors`] wraps a failed result for callers that want to
//! propagate it with `?`, and [`SchemaError`] covers document export.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::path::Path;

/// Result type alias for document export.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Error raised while exporting a schema document.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The emitted document could not be serialized.
    #[error("Failed to serialize schema document: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A single violation found while validating a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    path: Path,
    message: String,
}

impl ValidationError {
    pub fn new(path: Path, message: impl Into<String>) -> Self {
        Self {
            path,
            message: message.into(),
        }
    }

    /// Segments leading to the offending value.
    pub fn path(&self) -> &[String] {
        self.path.segments()
    }

    /// Dot-joined path, or `root` for the validated value itself.
    pub fn path_string(&self) -> String {
        self.path.to_string()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Every violation of a failed validation, as a single error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Validation failed with {} error(s): {}", .0.len(), summary(.0))]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<ValidationError> {
        self.0
    }
}

fn summary(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
