//! API error types with JSON responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use booky_store::StoreError;
use serde::Serialize;

/// API error that can be returned from handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Bad request (400): malformed body or path parameter.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// No route matches the request path (404).
    #[error("no route for {0}")]
    RouteNotFound(String),

    /// The path exists but not for this method (405).
    #[error("method {method} not allowed for {path}")]
    MethodNotAllowed { method: String, path: String },

    /// Catalog error.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Get the HTTP status code for this error.
    ///
    /// Unknown keys are an ordinary lookup outcome for clients: they get
    /// `200 OK` with an `{"error": ...}` body.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::RouteNotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            Self::Store(e) => match e {
                StoreError::BookNotFound(_)
                | StoreError::AuthorNotFound(_)
                | StoreError::PublicationNotFound(_)
                | StoreError::NoMatches { .. } => StatusCode::OK,
                StoreError::Conflict { .. } => StatusCode::CONFLICT,
                StoreError::InvalidReference { .. } | StoreError::InvalidRecord(_) => {
                    StatusCode::BAD_REQUEST
                }
                StoreError::Io(_) | StoreError::Serialization(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
        }
    }

    /// Message safe to show to API consumers.
    ///
    /// Server-side failures are reported generically; the detail goes to
    /// the log instead.
    fn public_message(&self) -> String {
        if self.status_code().is_server_error() {
            "internal server error".to_string()
        } else {
            self.to_string()
        }
    }
}

/// JSON error response body: `{ "error": "<message>" }`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }

        let body = ErrorResponse {
            error: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use booky_core::{Isbn, PublicationId};

    #[test]
    fn test_not_found_is_ok_with_store_message() {
        let err = ApiError::from(StoreError::BookNotFound(Isbn::new("123")));
        assert_eq!(err.status_code(), StatusCode::OK);
        assert_eq!(err.public_message(), "No book found for the ISBN of 123");
    }

    #[tokio::test]
    async fn test_not_found_response_is_200_json() {
        let response = ApiError::from(StoreError::NoMatches {
            what: "book",
            field: "category",
            value: "poetry".to_string(),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "error": "No book found for the category of poetry" })
        );
    }

    #[test]
    fn test_status_codes() {
        let conflict = ApiError::from(StoreError::Conflict {
            kind: "book",
            key: "123".to_string(),
        });
        assert_eq!(conflict.status_code(), StatusCode::CONFLICT);

        let invalid = ApiError::from(StoreError::InvalidReference {
            kind: "publication",
            key: PublicationId(4).to_string(),
        });
        assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);

        let route = ApiError::RouteNotFound("/is/".to_string());
        assert_eq!(route.status_code(), StatusCode::NOT_FOUND);

        let method = ApiError::MethodNotAllowed {
            method: "DELETE".to_string(),
            path: "/author".to_string(),
        };
        assert_eq!(method.status_code(), StatusCode::METHOD_NOT_ALLOWED);

        let io = ApiError::from(StoreError::Io(std::io::Error::other("disk full")));
        assert_eq!(io.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_server_errors_hide_detail() {
        let err = ApiError::from(StoreError::Io(std::io::Error::other(
            "permission denied: /var/lib/booky/catalog.json",
        )));
        assert_eq!(err.public_message(), "internal server error");
    }

    #[test]
    fn test_error_body_shape() {
        let body = ErrorResponse {
            error: "No book found for the category of poetry".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "error": "No book found for the category of poetry" })
        );
    }
}
