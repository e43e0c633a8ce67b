// ramsinrs/src/error.rs

//! Error taxonomy for the reconciliation engine.
//!
//! Unresolvable variables and unknown fields are deliberately NOT here: they
//! are logged and dropped so an operator's environment may carry variables a
//! given model version does not know about. Everything in this module is
//! fatal for the run.

use ramsinrs_nml::NmlError;
use std::fmt;
use thiserror::Error;

/// A single field-level failure: a value that would not coerce, or a value
/// that coerced but violates a schema rule.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub group: String,
    pub field: String,
    pub value: String,
    pub reason: String,
}

impl FieldError {
    pub fn new(group: &str, field: &str, value: String, reason: String) -> Self {
        Self {
            group: group.to_string(),
            field: field.to_string(),
            value,
            reason,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{} = {}: {}",
            self.group, self.field, self.value, self.reason
        )
    }
}

/// The complete, ordered set of failures from one validation pass. All
/// violations are collected before this is returned, so one run surfaces
/// every problem at once.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "validation failed with {} error(s):", self.0.len())?;
        for error in &self.0 {
            writeln!(f, "  - {}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Fatal errors for one reconciliation run.
#[derive(Error, Debug)]
pub enum RamsinError {
    #[error(transparent)]
    Nml(#[from] NmlError),

    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("the basic document does not define {group}.{field}, and no advanced input path was given on the command line")]
    MissingAdvancedPath {
        group: &'static str,
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_display() {
        let err = FieldError::new(
            "model_file_info",
            "frqanl",
            "60.0".to_string(),
            "must be a multiple of model_grids.dtlong".to_string(),
        );
        assert_eq!(
            err.to_string(),
            "model_file_info.frqanl = 60.0: must be a multiple of model_grids.dtlong"
        );
    }

    #[test]
    fn test_validation_errors_display_lists_all() {
        let errors = ValidationErrors(vec![
            FieldError::new("post", "nvp", "-1".to_string(), "must be positive".to_string()),
            FieldError::new(
                "post",
                "iplevs",
                "1, 2, 4".to_string(),
                "elements must sum to 6".to_string(),
            ),
        ]);
        let text = errors.to_string();
        assert!(text.contains("2 error(s)"));
        assert!(text.contains("post.nvp"));
        assert!(text.contains("post.iplevs"));
    }
}
