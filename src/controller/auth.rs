use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{error::AppError, middleware::auth::AuthGuard, state::AppState};

/// GET /api/me - Get the current caller's identity
///
/// Resolves the bearer token to the caller and returns their identity record,
/// including role and staff attributes. Registration and token issuance are
/// owned by the external identity service; this endpoint only reflects what
/// that service wrote.
///
/// # Authentication
/// Requires a valid bearer token (no permission required)
///
/// # Returns
/// - `200 OK`: UserDto for the caller
/// - `401 Unauthorized`: Missing or unresolvable bearer token
pub async fn get_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    Ok((StatusCode::OK, Json(caller.into_dto())))
}
