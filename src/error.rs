use crate::common::ErrorBody;
use crate::employee::{EmployeeId, RepositoryError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Request-scoped failures of the employee endpoints
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No employee '{id}' found")]
    NotFound { id: EmployeeId },

    /// The repository stored the record but returned it without an identity.
    #[error("Failed to create employee: no identity assigned")]
    CreationFailed,

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::CreationFailed | ApiError::Repository(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }
        ErrorBody::new(status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_mentions_id() {
        let error = ApiError::NotFound {
            id: EmployeeId::new(5),
        };
        assert_eq!(error.status(), StatusCode::NOT_FOUND);
        assert_eq!(error.to_string(), "No employee '5' found");
    }

    #[test]
    fn test_server_side_errors_map_to_500() {
        assert_eq!(
            ApiError::CreationFailed.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        let error = ApiError::from(RepositoryError::Storage("disk full".into()));
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.to_string(), "Storage error: disk full");
    }

    #[test]
    fn test_into_response_uses_status() {
        let response = ApiError::NotFound {
            id: EmployeeId::new(1),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
