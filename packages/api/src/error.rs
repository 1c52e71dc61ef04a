//! Error type shared by every notes backend call.

/// Failures of a [`crate::NotesApi`] operation.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No usable bearer token; the request was never sent.
    #[error("Not authenticated")]
    Unauthenticated,

    /// The backend answered with a non-success status.
    #[error("Request failed with status {status}")]
    RequestFailed { status: u16 },

    /// The request could not be sent or the connection broke.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success response whose body did not have the expected shape.
    #[error("Unexpected response: {0}")]
    MalformedResponse(String),
}

impl ApiError {
    /// Whether the session should be dropped and the user sent to sign-in.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            ApiError::Unauthenticated | ApiError::RequestFailed { status: 401 }
        )
    }

    /// HTTP status of a failed request, if the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::RequestFailed { status } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_classification() {
        assert!(ApiError::Unauthenticated.is_unauthorized());
        assert!(ApiError::RequestFailed { status: 401 }.is_unauthorized());
        assert!(!ApiError::RequestFailed { status: 403 }.is_unauthorized());
        assert!(!ApiError::MalformedResponse("x".into()).is_unauthorized());
    }

    #[test]
    fn test_status() {
        assert_eq!(ApiError::RequestFailed { status: 500 }.status(), Some(500));
        assert_eq!(ApiError::Unauthenticated.status(), None);
    }
}
