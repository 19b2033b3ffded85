//! Validation results.
//!
//! Recursive validation pushes every violation into one caller-owned list, so
//! a single pass reports all problems across the tree. [`ValidationResult`]
//! wraps that list once the walk is done.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use tsch::prelude::*;
//!
//! let person = tsch::object()
//!     .property("name", tsch::string().min_length(4))
//!     .property("age", tsch::number().integer().optional());
//!
//! let result = person.validate(&json!({ "name": "Joe", "age": 4.5 }));
//! assert!(!result.is_valid());
//!
//! let lines: Vec<String> = result.errors().iter().map(|e| e.to_string()).collect();
//! assert_eq!(
//!     lines,
//!     vec![
//!         "name: Value has to be at least 4 characters long.",
//!         "age: Value has to be an integer.",
//!     ]
//! );
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{ValidationError, ValidationErrors};
use crate::path::Path;

/// Outcome of validating one value against one descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the value conforms
    pub valid: bool,
    /// Every violation found (empty if valid)
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// A result from the collected errors; valid iff the list is empty.
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        if errors.is_empty() {
            trace!("Validation passed");
        } else {
            let paths: Vec<_> = errors.iter().map(ValidationError::path_string).collect();
            debug!(
                error_count = errors.len(),
                paths = ?paths,
                "Validation failed"
            );
        }
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// `Ok(())` when valid, otherwise every error wrapped in
    /// [`ValidationErrors`].
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.valid {
            Ok(())
        } else {
            Err(ValidationErrors(self.errors))
        }
    }
}

/// Records one violation at `path`.
pub(crate) fn report(errors: &mut Vec<ValidationError>, path: &Path, message: impl Into<String>) {
    let error = ValidationError::new(path.clone(), message);
    trace!(path = %path, message = %error.message(), "Validation check failed");
    errors.push(error);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error(path: &[&str], message: &str) -> ValidationError {
        ValidationError::new(path.iter().copied().collect(), message)
    }

    #[test]
    fn test_from_errors_sets_valid_flag() {
        let result = ValidationResult::from_errors(Vec::new());
        assert!(result.is_valid());
        assert!(result.errors().is_empty());
        let result = ValidationResult::from_errors(vec![error(&["a"], "bad")]);
        assert!(!result.is_valid());
    }

    #[test]
    fn test_into_result() {
        assert!(ValidationResult::from_errors(Vec::new()).into_result().is_ok());
        let err = ValidationResult::from_errors(vec![error(&["x"], "bad")])
            .into_result()
            .unwrap_err();
        assert_eq!(err.errors()[0].to_string(), "x: bad");
    }

    #[test]
    fn test_report_appends() {
        let mut errors = Vec::new();
        report(&mut errors, &Path::root().join("name"), "missing");
        assert_eq!(errors, vec![error(&["name"], "missing")]);
    }

    #[test]
    fn test_serializes_path_as_segments() {
        let result = ValidationResult::from_errors(vec![error(&["pets", "0"], "bad")]);
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "valid": false,
                "errors": [{ "path": ["pets", "0"], "message": "bad" }]
            })
        );
    }
}
