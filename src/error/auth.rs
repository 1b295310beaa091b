use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No bearer token was supplied with the request.
    ///
    /// The `Authorization` header is absent or not in `Bearer <token>` form.
    /// Results in a 401 Unauthorized response.
    #[error("Missing bearer token in Authorization header")]
    MissingToken,

    /// The supplied bearer token does not resolve to a user.
    ///
    /// The token is unknown to the identity store, typically because it was
    /// revoked or never issued. Results in a 401 Unauthorized response.
    #[error("Bearer token does not resolve to a user")]
    InvalidToken,

    /// The authenticated user lacks a required capability for the operation.
    ///
    /// Results in a 403 Forbidden response. The context message is logged at
    /// debug level for diagnostics and never returned to the client.
    ///
    /// # Fields
    /// - User id of the denied caller
    /// - Context message describing the attempted operation
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly
/// error messages:
/// - `MissingToken` / `InvalidToken` → 401 Unauthorized with "Authentication required"
/// - `AccessDenied` → 403 Forbidden with a generic denial message
///
/// Denials are logged at debug level for diagnostics while keeping client-facing
/// messages generic to avoid information leakage.
///
/// # Returns
/// - 401 Unauthorized - For missing or unresolvable credentials
/// - 403 Forbidden - For authenticated callers lacking a required capability
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken | Self::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication required.".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(user_id, context) => {
                tracing::debug!("User {} denied access: {}", user_id, context);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "You do not have permission to perform this action.".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
