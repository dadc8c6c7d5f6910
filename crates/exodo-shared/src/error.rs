//! Error types for Exodo.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExodoError {
    #[error("Failed to read {resource}: {reason}")]
    Fetch { resource: &'static str, reason: String },

    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },

    #[error("Failed to persist operator {id}: {reason}")]
    Persist { id: String, reason: String },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ExodoError {
    pub fn fetch(resource: &'static str, reason: impl Into<String>) -> Self {
        ExodoError::Fetch {
            resource,
            reason: reason.into(),
        }
    }

    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        ExodoError::NotFound {
            resource,
            id: id.into(),
        }
    }

    pub fn persist(id: impl Into<String>, reason: impl Into<String>) -> Self {
        ExodoError::Persist {
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// Whether the error happened before anything was written.
    pub fn is_read_side(&self) -> bool {
        matches!(self, ExodoError::Fetch { .. } | ExodoError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, ExodoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_side_classification() {
        assert!(ExodoError::fetch("payments", "timeout").is_read_side());
        assert!(ExodoError::not_found("operator", "op-1").is_read_side());
        assert!(!ExodoError::persist("op-1", "conflict").is_read_side());
    }

    #[test]
    fn test_error_messages() {
        let err = ExodoError::fetch("vehicles", "connection reset");
        assert_eq!(err.to_string(), "Failed to read vehicles: connection reset");

        let err = ExodoError::not_found("operators", "op-9");
        assert_eq!(err.to_string(), "operators not found: op-9");

        let err = ExodoError::Config("progression.max_level must be > 0".into());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: progression.max_level must be > 0"
        );
    }
}
