// Central error-to-response translation
//
// Every handler returns Result<_, ApiError>; this is the single dispatch
// table from error kind to transport status. Internal detail is logged
// here and never reaches the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use eventbook_core::Error;

use crate::common::MessageResponse;

/// Wrapper so the domain error can implement axum's IntoResponse
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError(Error::Internal(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            Error::Validation(errors) => {
                tracing::warn!(?errors, "validation error");
                (StatusCode::BAD_REQUEST, Json(errors)).into_response()
            }
            Error::Authentication(message) => {
                tracing::warn!("authentication error: {message}");
                (
                    StatusCode::UNAUTHORIZED,
                    Json(MessageResponse::new(message)),
                )
                    .into_response()
            }
            Error::Authorization => {
                tracing::warn!("authorization error: insufficient role");
                (
                    StatusCode::FORBIDDEN,
                    Json(MessageResponse::new("Access denied")),
                )
                    .into_response()
            }
            Error::NotFound => StatusCode::NOT_FOUND.into_response(),
            Error::Internal(err) => {
                // Full chain server-side only
                tracing::error!("internal error: {err:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(MessageResponse::new("An unexpected error occurred")),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: Error) -> StatusCode {
        ApiError(err).into_response().status()
    }

    #[test]
    fn test_dispatch_table() {
        assert_eq!(
            status_of(Error::field("email", "Email is already in use")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_of(Error::bad_credentials()), StatusCode::UNAUTHORIZED);
        assert_eq!(status_of(Error::Authorization), StatusCode::FORBIDDEN);
        assert_eq!(status_of(Error::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            status_of(Error::Internal(anyhow::anyhow!("pool exhausted"))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_has_empty_body() {
        let response = ApiError(Error::NotFound).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        // No JSON body on 404
        assert!(response.headers().get("content-type").is_none());
    }
}
