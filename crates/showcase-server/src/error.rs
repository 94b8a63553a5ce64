use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use showcase_core::error::CatalogError;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

// ---------------------------------------------------------------------------
// Internal sentinels for explicit client errors
// ---------------------------------------------------------------------------

/// Carries an explicit HTTP 404 with a caller-facing message through the
/// `anyhow::Error` chain.
#[derive(Debug)]
struct NotFoundError(String);

impl std::fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for NotFoundError {}

/// Carries an explicit HTTP 400 with a caller-facing message.
#[derive(Debug)]
struct BadRequestError(String);

impl std::fmt::Display for BadRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for BadRequestError {}

// ---------------------------------------------------------------------------
// AppError — unified error type for HTTP responses
// ---------------------------------------------------------------------------

/// Unified error type for HTTP responses.
///
/// Every error renders as `{"success": false, "error": "..."}`. Anything that
/// is not a caller mistake is logged and reported as a bare 500 so storage
/// paths and error chains never reach the client.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    /// Construct a 400 Bad Request error with the given message.
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self(BadRequestError(msg.into()).into())
    }

    /// Construct a 404 Not Found error with the given message.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self(NotFoundError(msg.into()).into())
    }
}

pub fn failure(status: StatusCode, message: &str) -> Response {
    let body = serde_json::json!({ "success": false, "error": message });
    (status, axum::Json(body)).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(n) = self.0.downcast_ref::<NotFoundError>() {
            return failure(StatusCode::NOT_FOUND, &n.0);
        }
        if let Some(b) = self.0.downcast_ref::<BadRequestError>() {
            return failure(StatusCode::BAD_REQUEST, &b.0);
        }

        if let Some(e) = self.0.downcast_ref::<CatalogError>() {
            let status = match e {
                CatalogError::NotFound { .. } => Some(StatusCode::NOT_FOUND),
                CatalogError::DuplicateName { .. } => Some(StatusCode::CONFLICT),
                CatalogError::Validation(_) => Some(StatusCode::BAD_REQUEST),
                CatalogError::PermissionDenied => Some(StatusCode::FORBIDDEN),
                CatalogError::StorageUnavailable { .. }
                | CatalogError::Io(_)
                | CatalogError::Yaml(_)
                | CatalogError::Json(_) => None,
            };
            if let Some(status) = status {
                return failure(status, &e.to_string());
            }
        }

        tracing::error!(error = %format!("{:#}", self.0), "request failed");
        failure(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
