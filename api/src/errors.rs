use crate::{markup::ConvertError, store::StoreError};
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    ValidationError(String),
    Conversion(ConvertError),
    InternalError(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(msg) => ApiError::ValidationError(msg),
        }
    }
}

impl From<ConvertError> for ApiError {
    fn from(err: ConvertError) -> Self {
        ApiError::Conversion(err)
    }
}

impl From<tera::Error> for ApiError {
    fn from(err: tera::Error) -> Self {
        ApiError::InternalError(format!("Template rendering failed: {:?}", err))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::ValidationError(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::ValidationError(rejection.body_text())
    }
}

/// Convert our custom errors to HTTP responses
///
/// A failed markdown conversion fails the whole request with 502; there is no
/// fallback to the unconverted text. Details stay in the log.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not Found".to_string()),
            ApiError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Conversion(err) => {
                match &err {
                    ConvertError::Status { body, .. } => {
                        error!("Markdown conversion failed: {} ({})", err, body_excerpt(body))
                    }
                    _ => error!("Markdown conversion failed: {}", err),
                }
                (
                    StatusCode::BAD_GATEWAY,
                    "Markdown rendering failed".to_string(),
                )
            }
            ApiError::InternalError(msg) => {
                error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (
            status,
            Json(serde_json::json!({
              "error": message
            })),
        )
            .into_response()
    }
}

const LOGGED_BODY_CHARS: usize = 200;

fn body_excerpt(body: &str) -> String {
    let mut chars = body.chars();
    let excerpt: String = chars.by_ref().take(LOGGED_BODY_CHARS).collect();
    if chars.next().is_some() {
        format!("{excerpt}...")
    } else {
        excerpt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_bodies_are_cut_for_logging() {
        let long = "x".repeat(LOGGED_BODY_CHARS + 50);
        let excerpt = body_excerpt(&long);
        assert_eq!(excerpt.len(), LOGGED_BODY_CHARS + 3);
        assert!(excerpt.ends_with("..."));

        assert_eq!(body_excerpt("short"), "short");
    }
}
