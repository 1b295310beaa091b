use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::notification::{
        BroadcastNotificationDto, BroadcastNotificationParams, BroadcastResultDto,
        CreateNotificationDto, CreateNotificationParams,
    },
    service::notification::NotificationService,
    state::AppState,
};

/// GET /api/notifications - List the caller's notifications
///
/// Returns only notifications targeted at the caller, newest-timestamp-first.
///
/// # Authentication
/// Requires a valid bearer token (no permission required)
///
/// # Returns
/// - `200 OK`: JSON array of NotificationDto
/// - `401 Unauthorized`: Missing or unresolvable bearer token
pub async fn list_notifications(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let notifications = NotificationService::new(&state.db)
        .list_for_user(caller.id)
        .await?;
    let notifications_dto: Vec<_> = notifications
        .into_iter()
        .map(|notification| notification.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(notifications_dto)))
}

/// PUT /api/notifications/{id} - Mark a notification as read
///
/// Idempotent: repeated calls succeed and leave the read flag set. Recipient
/// ownership is not rechecked here.
///
/// # Authentication
/// Requires a valid bearer token (no permission required)
///
/// # Path Parameters
/// - `id`: Notification id (i32)
///
/// # Returns
/// - `200 OK`: NotificationDto with is_read = true
/// - `401 Unauthorized`: Missing or unresolvable bearer token
/// - `404 Not Found`: No notification with that id
pub async fn mark_notification_read(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _caller = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let notification = NotificationService::new(&state.db)
        .mark_read(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Notification not found".to_string()))?;

    Ok((StatusCode::OK, Json(notification.into_dto())))
}

/// POST /api/notifications - Create a single notification (admin/staff only)
///
/// Creates one unread notification for the given target user.
///
/// # Authentication
/// Requires a valid bearer token with the staff flag or the admin role
///
/// # Returns
/// - `201 Created`: NotificationDto for the created notification
/// - `400 Bad Request`: Empty message or unresolvable target user id
/// - `401 Unauthorized`: Missing or unresolvable bearer token
/// - `403 Forbidden`: Caller is neither staff nor admin
pub async fn create_notification(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<CreateNotificationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _caller = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Staff])
        .await?;

    let notification = NotificationService::new(&state.db)
        .create(CreateNotificationParams {
            user_id: dto.user_id,
            message: dto.message,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(notification.into_dto())))
}

/// POST /api/notifications/broadcast - Broadcast a notification to customers (admin only)
///
/// Fans one message out to every customer (send_to_all) or to the customers
/// among the given user ids, in a single bulk insert. Returns the number of
/// notifications created.
///
/// # Authentication
/// Requires a valid bearer token with the admin role
///
/// # Returns
/// - `201 Created`: BroadcastResultDto with the created count
/// - `400 Bad Request`: Missing/empty message, or neither targeting mode supplied
/// - `401 Unauthorized`: Missing or unresolvable bearer token
/// - `403 Forbidden`: Caller is not an admin
pub async fn broadcast_notification(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<BroadcastNotificationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _caller = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let created = NotificationService::new(&state.db)
        .broadcast(BroadcastNotificationParams {
            message: dto.message,
            send_to_all: dto.send_to_all,
            user_ids: dto.user_ids,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(BroadcastResultDto { created })))
}
