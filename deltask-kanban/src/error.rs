//! Error types for the kanban workspace engine

use thiserror::Error;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, DeltaskError>;

/// Errors that can occur in engine operations
#[derive(Debug, Error)]
pub enum DeltaskError {
    /// Workspace not found
    #[error("workspace not found: {id}")]
    WorkspaceNotFound { id: String },

    /// Board not found
    #[error("board not found: {id}")]
    BoardNotFound { id: String },

    /// Column not found
    #[error("column not found: {id}")]
    ColumnNotFound { id: String },

    /// Card not found
    #[error("card not found: {id}")]
    CardNotFound { id: String },

    /// Caller resolved the entity but fails its access predicate
    #[error("forbidden: {action}")]
    Forbidden { action: String },

    /// Missing required field
    #[error("missing required field: {field}")]
    MissingField { field: String },

    /// Invalid field value
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// Reserved for future uniqueness constraints
    #[error("conflict on {resource}: {message}")]
    Conflict { resource: String, message: String },

    /// IO error from a durable store implementation
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Coarse classification a request layer can map onto status codes
/// (NotFound -> 404, Forbidden -> 403, Validation -> 400, Conflict -> 409).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Forbidden,
    Validation,
    Conflict,
    Internal,
}

impl DeltaskError {
    /// Create a forbidden error naming the refused action
    pub fn forbidden(action: impl Into<String>) -> Self {
        Self::Forbidden {
            action: action.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Classify the error. A broken containment link (any `*NotFound`) is
    /// deliberately distinct from `Forbidden`: they carry different
    /// remediation for the caller.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::WorkspaceNotFound { .. }
            | Self::BoardNotFound { .. }
            | Self::ColumnNotFound { .. }
            | Self::CardNotFound { .. } => ErrorKind::NotFound,
            Self::Forbidden { .. } => ErrorKind::Forbidden,
            Self::MissingField { .. } | Self::InvalidValue { .. } => ErrorKind::Validation,
            Self::Conflict { .. } => ErrorKind::Conflict,
            Self::Io(_) | Self::Json(_) => ErrorKind::Internal,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}
