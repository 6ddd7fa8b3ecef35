// src/presentation/http/error.rs
use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ApplicationError::Unauthorized(msg) => Self::new(StatusCode::UNAUTHORIZED, msg),
            ApplicationError::Forbidden(msg) => Self::new(StatusCode::FORBIDDEN, msg),
            ApplicationError::Infrastructure(msg) => Self::internal(msg),
            ApplicationError::Domain(domain_err) => Self::from_domain(domain_err),
        }
    }

    fn from_domain(err: DomainError) -> Self {
        match err {
            DomainError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            DomainError::Conflict(msg) => Self::new(StatusCode::CONFLICT, msg),
            // a zero page size is a deployment mistake, not a bad request
            err @ (DomainError::Persistence(_) | DomainError::InvalidPageSize(_)) => {
                Self::internal(err.to_string())
            }
            err @ (DomainError::Validation(_) | DomainError::InvalidInput(_)) => {
                Self::new(StatusCode::BAD_REQUEST, err.to_string())
            }
        }
    }

    fn internal(message: String) -> Self {
        tracing::error!(error = %message, "request failed");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self { status, message }
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            message: self.message,
        };
        (self.status, Json(payload)).into_response()
    }
}

/// Body of every non-2xx JSON response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: ApplicationError) -> StatusCode {
        HttpError::from_error(err).status()
    }

    #[test]
    fn application_errors_map_to_statuses() {
        assert_eq!(status_of(ApplicationError::validation("x")), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(ApplicationError::unauthorized("x")), StatusCode::UNAUTHORIZED);
        assert_eq!(status_of(ApplicationError::forbidden("x")), StatusCode::FORBIDDEN);
        assert_eq!(status_of(ApplicationError::not_found("x")), StatusCode::NOT_FOUND);
        assert_eq!(
            status_of(ApplicationError::infrastructure("x")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn domain_errors_map_by_variant() {
        let domain = |err: DomainError| status_of(ApplicationError::Domain(err));
        assert_eq!(domain(DomainError::Validation("x".into())), StatusCode::BAD_REQUEST);
        assert_eq!(domain(DomainError::InvalidInput("x".into())), StatusCode::BAD_REQUEST);
        assert_eq!(domain(DomainError::NotFound("x".into())), StatusCode::NOT_FOUND);
        assert_eq!(domain(DomainError::Conflict("x".into())), StatusCode::CONFLICT);
        assert_eq!(
            domain(DomainError::InvalidPageSize(0)),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            domain(DomainError::Persistence("x".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
