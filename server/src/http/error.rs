//! Mapping from service failures to HTTP responses.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use neurotrack_api::{ErrorBody, NotFoundBody};

use crate::persistence::PersistenceError;
use crate::service::ServiceError;

#[derive(Debug)]
pub enum ApiError {
    NotFound { error_type: String, message: String },
    BadRequest { message: String },
    Internal { message: String, details: String },
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidArgument(message) => Self::BadRequest { message },
            ServiceError::Persistence(e @ PersistenceError::NotFound { entity, .. }) => {
                Self::NotFound {
                    error_type: format!("{entity}NotFound"),
                    message: e.to_string(),
                }
            }
            ServiceError::Persistence(e) => {
                tracing::error!(error = %e, "request failed");
                Self::Internal {
                    message: "Unexpected error.".to_string(),
                    details: e.to_string(),
                }
            }
        }
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        ServiceError::from(err).into()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(format!("Invalid payload: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::bad_request(format!("Invalid id: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request(format!("Invalid query string: {}", rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::NotFound {
                error_type,
                message,
            } => (
                status,
                Json(NotFoundBody {
                    status_code: status.as_u16(),
                    error_type,
                    message,
                }),
            )
                .into_response(),
            Self::BadRequest { message } => (
                status,
                Json(ErrorBody {
                    message,
                    details: None,
                }),
            )
                .into_response(),
            Self::Internal { message, details } => (
                status,
                Json(ErrorBody {
                    message,
                    details: Some(details),
                }),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_carries_entity_error_type() {
        let err = ApiError::from(PersistenceError::NotFound {
            entity: "Prediction",
            id: 8,
        });
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        match err {
            ApiError::NotFound {
                error_type,
                message,
            } => {
                assert_eq!(error_type, "PredictionNotFound");
                assert_eq!(message, "Prediction with id 8 not found.");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_invalid_argument_is_bad_request() {
        let err = ApiError::from(ServiceError::InvalidArgument("bad page".to_string()));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_storage_failure_is_internal_with_details() {
        let err = ApiError::from(PersistenceError::Migration("boom".to_string()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        match err {
            ApiError::Internal { details, .. } => assert_eq!(details, "Migration error: boom"),
            other => panic!("unexpected {other:?}"),
        }
    }
}
