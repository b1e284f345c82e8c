use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Custom error type for API endpoints
///
/// This error type provides consistent error handling across all endpoints,
/// mapping each failure to an HTTP status code plus a short plain-text
/// reason. Storage failures are logged in full but never leaked to the
/// client.
#[derive(Debug)]
pub enum ApiError {
    /// Path parameter did not parse as a non-negative integer id
    InvalidId(String),
    /// No item with the requested id
    ItemNotFound(i64),
    /// Request body was not a well-formed {name, price} object
    InvalidBody,
    /// Storage backend operation error
    Storage(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InvalidId(raw) => {
                tracing::debug!("rejected invalid id: {:?}", raw);
                (StatusCode::BAD_REQUEST, "Invalid ID")
            }
            ApiError::ItemNotFound(id) => {
                tracing::debug!("item not found: {}", id);
                (StatusCode::NOT_FOUND, "Item not found")
            }
            ApiError::InvalidBody => (StatusCode::BAD_REQUEST, "Invalid input"),
            ApiError::Storage(err) => {
                tracing::error!("storage error: {:#}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Storage error")
            }
        };

        (status, message).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Storage(err)
    }
}

impl From<axum::extract::rejection::JsonRejection> for ApiError {
    fn from(_: axum::extract::rejection::JsonRejection) -> Self {
        ApiError::InvalidBody
    }
}
