//! Mapping from directory errors to HTTP responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rubrica_core::Error;

/// Operation that produced an error
///
/// The same error kind can carry a different message depending on the
/// endpoint (a missing number on create vs. on replace).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Read,
    Replace,
    Delete,
    List,
}

/// A directory error bound to the endpoint that produced it
#[derive(Debug, thiserror::Error)]
#[error("{operation:?} failed: {source}")]
pub struct ApiError {
    operation: Operation,
    #[source]
    source: Error,
}

impl ApiError {
    pub fn new(operation: Operation, source: Error) -> Self {
        Self { operation, source }
    }

    pub fn create(source: Error) -> Self {
        Self::new(Operation::Create, source)
    }

    pub fn read(source: Error) -> Self {
        Self::new(Operation::Read, source)
    }

    pub fn replace(source: Error) -> Self {
        Self::new(Operation::Replace, source)
    }

    pub fn delete(source: Error) -> Self {
        Self::new(Operation::Delete, source)
    }

    pub fn list(source: Error) -> Self {
        Self::new(Operation::List, source)
    }

    /// Status code and plain-text body for this error
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match &self.source {
            Error::Validation { .. } => {
                let message = match self.operation {
                    Operation::Create => "Cognome e numero devono sempre essere indicati",
                    _ => "Il numero deve essere sempre indicato",
                };
                (StatusCode::BAD_REQUEST, message.to_string())
            }
            Error::Conflict(key) => (
                StatusCode::CONFLICT,
                format!("Numero di {key} già inserito"),
            ),
            Error::NotFound(key) => (
                StatusCode::NOT_FOUND,
                format!("{key} non presente in rubrica"),
            ),
            Error::Config(_) | Error::Other(_) => {
                tracing::error!(error = %self.source, operation = ?self.operation, "Directory failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.status_and_message().into_response()
    }
}

/// Result type for HTTP handlers
pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rubrica_core::ContactKey;

    #[test]
    fn test_validation_message_depends_on_operation() {
        let create = ApiError::create(Error::missing("number"));
        assert_eq!(
            create.status_and_message(),
            (
                StatusCode::BAD_REQUEST,
                "Cognome e numero devono sempre essere indicati".to_string()
            )
        );

        let replace = ApiError::replace(Error::missing("number"));
        assert_eq!(
            replace.status_and_message(),
            (
                StatusCode::BAD_REQUEST,
                "Il numero deve essere sempre indicato".to_string()
            )
        );
    }

    #[test]
    fn test_conflict_and_not_found() {
        let key = ContactKey::new("Rossi", "Mario");

        let (status, body) = ApiError::create(Error::conflict(key.clone())).status_and_message();
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body, "Numero di Rossi Mario già inserito");

        let (status, body) = ApiError::read(Error::not_found(key)).status_and_message();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "Rossi Mario non presente in rubrica");
    }

    #[test]
    fn test_unexpected_failure_is_internal() {
        let (status, _) = ApiError::list(Error::Other("lock lost".to_string())).status_and_message();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
