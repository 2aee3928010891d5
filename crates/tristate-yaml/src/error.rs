//! Error types for YAML parsing.

use thiserror::Error;

/// Error type for manifest parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
    /// Missing required field
    #[error("Missing required field: {0}")]
    MissingField(String),
    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Error message
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::MissingField("name".to_string());
        assert_eq!(err.to_string(), "Missing required field: name");

        let err = ParseError::InvalidValue {
            field: "checkboxes[1].id".to_string(),
            message: "duplicate id 'terms'".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for 'checkboxes[1].id': duplicate id 'terms'"
        );

        let err = ParseError::Validation("no checkboxes".to_string());
        assert_eq!(err.to_string(), "Validation error: no checkboxes");
    }

    #[test]
    fn test_yaml_error_has_source() {
        let yaml_err = serde_yaml_ng::from_str::<u32>("[").expect_err("invalid yaml");
        let err = ParseError::from(yaml_err);
        assert!(err.to_string().starts_with("YAML error: "));
        assert!(err.source().is_some());
        assert!(ParseError::Validation(String::new()).source().is_none());
    }
}
