//! Error types for path naming.

/// Naming errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NamespaceError {
    /// A required identifier was empty or malformed.
    #[error("invalid {field}: {reason}")]
    InvalidArgument { field: &'static str, reason: String },

    /// A path could not be mapped back to a property key.
    #[error("invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },
}

impl NamespaceError {
    pub(crate) fn empty(field: &'static str) -> Self {
        Self::InvalidArgument {
            field,
            reason: "must not be empty".to_string(),
        }
    }

    pub(crate) fn invalid_path(path: &str, reason: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for naming operations.
pub type NamespaceResult<T> = Result<T, NamespaceError>;
