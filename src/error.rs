//! Error types for vManage template operations.
//!
//! This module defines [`TemplateError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `TemplateError` for domain failures callers are expected to match on
//!   (unknown names, malformed template documents, rejected requests)
//! - Transport failures are wrapped as-is and never retried
//! - Use `anyhow::Error` (via `TemplateError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for template operations.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// A feature template name has no matching id in the catalog.
    #[error("There is no existing feature template named {name}")]
    UnknownTemplate { name: String },

    /// The server referenced a feature template id missing from the catalog.
    #[error("No feature template with id {id}")]
    UnknownTemplateId { id: String },

    /// A device template is neither file- nor feature-shaped, or cannot be
    /// compared against the existing definition.
    #[error("Template {name} is of unknown type")]
    UnknownTemplateType { name: String },

    /// Two catalog entries share the same key.
    #[error("Duplicate template name: {name}")]
    DuplicateTemplate { name: String },

    /// Connection, TLS or timeout failure reported by the HTTP client.
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// The server answered with a failure status.
    #[error("Request failed with status {status}: {message}")]
    RequestFailed { status: u16, message: String },

    /// A response body did not have the expected shape.
    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },

    /// Login to vManage was rejected.
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error wrapper.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML (de)serialization error wrapper.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<reqwest::Error> for TemplateError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport {
            message: err.to_string(),
        }
    }
}

/// Result type alias for template operations.
pub type Result<T> = std::result::Result<T, TemplateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_template_displays_name() {
        let err = TemplateError::UnknownTemplate {
            name: "vpn-512".into(),
        };
        assert_eq!(
            err.to_string(),
            "There is no existing feature template named vpn-512"
        );
    }

    #[test]
    fn unknown_template_type_displays_name() {
        let err = TemplateError::UnknownTemplateType {
            name: "branch-edge".into(),
        };
        assert!(err.to_string().contains("branch-edge"));
        assert!(err.to_string().contains("unknown type"));
    }

    #[test]
    fn request_failed_displays_status_and_message() {
        let err = TemplateError::RequestFailed {
            status: 400,
            message: "Template name already exists".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("400"));
        assert!(msg.contains("already exists"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = TemplateError::ConfigParseError {
            path: PathBuf::from("/etc/vmanage.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/etc/vmanage.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: TemplateError = io_err.into();
        assert!(matches!(err, TemplateError::Io(_)));
    }

    #[test]
    fn json_error_converts() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: TemplateError = json_err.into();
        assert!(matches!(err, TemplateError::Json(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(TemplateError::DuplicateTemplate {
                name: "dup".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
