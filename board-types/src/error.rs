//! Error types for Postboard.

use thiserror::Error;

use crate::texts;

/// A failed remote read, classified at the client boundary.
///
/// Every transport or HTTP failure is converted into exactly one of these
/// variants before a caller sees it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    /// The endpoint answered with a non-success status.
    #[error("External API error: {status} - {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message from the payload, or a generic fallback
        message: String,
    },

    /// The request was sent but no response arrived.
    #[error("Network error: No response received from the external API.")]
    Network,

    /// Anything else: malformed payload, client-side failure.
    #[error("Unexpected error: {message}")]
    Unexpected {
        /// Description of the failure
        message: String,
    },
}

impl RemoteError {
    /// Build an [`RemoteError::Api`], falling back to a generic message when
    /// the payload carried none.
    pub fn api(status: u16, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| texts::UNKNOWN_API_ERROR.to_string());
        Self::Api { status, message }
    }

    /// Build an [`RemoteError::Unexpected`].
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// HTTP status for API errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Local input rejected before touching any store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Title or body is empty after trimming.
    #[error("Title and body are required.")]
    MissingFields,

    /// The collection already holds a post with id `u64::MAX`.
    #[error("No post id is available for a new post.")]
    IdsExhausted,
}

impl ValidationError {
    /// The message a consumer should display.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::MissingFields => texts::ERROR_MISSING_FIELDS,
            Self::IdsExhausted => texts::ERROR_IDS_EXHAUSTED,
        }
    }
}

/// Union of every failure the data layer can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PostsError {
    /// Remote read failed.
    #[error(transparent)]
    Remote(#[from] RemoteError),

    /// Local input was invalid.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
