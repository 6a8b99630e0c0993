//! Error types for armdeploy
//!
//! Library code returns [`DeployError`]; the binary wraps it with `anyhow`.
//! A user abandoning a prompt is not an error and never shows up here.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for armdeploy operations
pub type DeployResult<T> = Result<T, DeployError>;

/// Main error type for armdeploy operations
#[derive(Error, Debug)]
pub enum DeployError {
    /// A required external provider is not available
    #[error("{name} is not found")]
    MissingCollaborator { name: String },

    /// Terminal interaction failed (not a cancellation)
    #[error("prompt failed: {0}")]
    Prompt(String),

    /// Template file could not be understood
    #[error("invalid template {file}: {message}")]
    InvalidTemplate { file: PathBuf, message: String },

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// Azure Resource Manager rejected a request
    #[error("ARM request failed ({status}): {code}: {message}")]
    Arm {
        status: u16,
        code: String,
        message: String,
    },

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DeployError {
    pub fn missing(name: impl Into<String>) -> Self {
        DeployError::MissingCollaborator { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_missing_collaborator() {
        let err = DeployError::missing("Azure account session");
        assert_eq!(err.to_string(), "Azure account session is not found");
    }

    #[test]
    fn test_error_display_arm() {
        let err = DeployError::Arm {
            status: 409,
            code: "ResourceGroupBeingDeleted".to_string(),
            message: "The resource group is being deleted.".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "ARM request failed (409): ResourceGroupBeingDeleted: The resource group is being deleted."
        );
    }

    #[test]
    fn test_error_display_invalid_template() {
        let err = DeployError::InvalidTemplate {
            file: PathBuf::from("azuredeploy.json"),
            message: "expected value at line 1 column 1".to_string(),
        };
        assert!(err.to_string().starts_with("invalid template azuredeploy.json"));
    }
}
