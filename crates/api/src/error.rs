//! API error types with HTTP response mapping.
//!
//! Every failure leaves the server as the same JSON body:
//! `{timestamp, status, error, message, path}`.

use axum::Json;
use axum::extract::Request;
use axum::http::header::WWW_AUTHENTICATE;
use axum::http::{Method, StatusCode, Uri};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use domain::DomainError;
use serde::{Deserialize, Serialize};
use store::StoreError;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found.
    NotFound(String),
    /// Bad request from the client.
    BadRequest(String),
    /// Known path, unsupported method.
    MethodNotAllowed(String),
    /// Domain logic error.
    Domain(DomainError),
    /// Internal server error.
    Internal(String),
}

/// Uniform error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    pub error: String,
    pub message: String,
    pub path: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Unknown").to_string(),
            message: message.into(),
            path: String::new(),
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = (status, Json(self.clone())).into_response();
        // Picked up by `fill_error_path`, which knows the request path.
        response.extensions_mut().insert(self);
        response
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::MethodNotAllowed(msg) => (StatusCode::METHOD_NOT_ALLOWED, msg),
            ApiError::Domain(err) => domain_error_to_response(err),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        ErrorResponse::new(status, message).into_response()
    }
}

fn domain_error_to_response(err: DomainError) -> (StatusCode, String) {
    match err {
        DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, err.to_string()),
        DomainError::InvalidArgument(msg) => (StatusCode::BAD_REQUEST, msg),
        DomainError::Store(StoreError::ConstraintViolation { message, .. }) => (
            StatusCode::BAD_REQUEST,
            format!("Data integrity violation: {message}"),
        ),
        DomainError::Store(err) => {
            tracing::error!(error = %err, "store failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An unexpected error occurred".to_string(),
            )
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::Domain(err)
    }
}

/// Rewrites error bodies produced by handlers so that `path` carries the
/// request path.
///
/// The bare 401 of the Basic-auth layer gets the same body; its
/// `WWW-Authenticate` challenge is kept.
pub async fn fill_error_path(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    let mut response = next.run(request).await;

    let body = match response.extensions_mut().remove::<ErrorResponse>() {
        Some(body) => body,
        None if response.status() == StatusCode::UNAUTHORIZED => ErrorResponse::new(
            StatusCode::UNAUTHORIZED,
            "Full authentication is required to access this resource",
        ),
        None => return response,
    };

    let challenge = response.headers().get(WWW_AUTHENTICATE).cloned();
    let status = response.status();
    let mut rewritten = (status, Json(ErrorResponse { path, ..body })).into_response();
    if let Some(challenge) = challenge {
        rewritten.headers_mut().insert(WWW_AUTHENTICATE, challenge);
    }
    rewritten
}

/// Fallback for unknown routes.
pub async fn fallback(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}

/// Fallback for known routes hit with an unsupported method.
pub async fn method_not_allowed(method: Method) -> ApiError {
    ApiError::MethodNotAllowed(format!("Request method '{method}' is not supported"))
}
