//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid room id: {0:?}")]
    InvalidRoomId(String),

    #[error("Invalid metadata value for {key}: {reason}")]
    InvalidMetadataValue { key: String, reason: &'static str },

    #[error("Field name is reserved: {0}")]
    ReservedField(String),

    // =========================================================================
    // Collaborator Errors (wrapped)
    // =========================================================================
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

impl DomainError {
    /// Create an invalid metadata error for a key
    pub fn invalid_metadata(key: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidMetadataValue {
            key: key.into(),
            reason,
        }
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidRoomId(_) => "INVALID_ROOM_ID",
            Self::InvalidMetadataValue { .. } => "INVALID_METADATA_VALUE",
            Self::ReservedField(_) => "RESERVED_FIELD",
            Self::Directory(e) => e.code(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidRoomId(_)
                | Self::InvalidMetadataValue { .. }
                | Self::ReservedField(_)
        )
    }
}

/// Failures reported by the user directory and room member lookups
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Failed to fetch users: {status} {reason}")]
    Status { status: u16, reason: String },

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Lookup unavailable: {0}")]
    Unavailable(String),
}

impl DirectoryError {
    /// Create an error from a non-success HTTP status
    pub fn status(status: u16, reason: impl Into<String>) -> Self {
        Self::Status {
            status,
            reason: reason.into(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Transport(_) => "DIRECTORY_TRANSPORT_ERROR",
            Self::Status { .. } => "DIRECTORY_STATUS_ERROR",
            Self::Decode(_) => "DIRECTORY_DECODE_ERROR",
            Self::Unavailable(_) => "DIRECTORY_UNAVAILABLE",
        }
    }
}
