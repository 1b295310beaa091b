use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::order::{
        CreateOrderDto, CreateOrderParams, OrderStatus, ServiceType, UpdateOrderDto,
        UpdateOrderParams, UpdateOrderStatusDto,
    },
    service::order::OrderService,
    state::AppState,
};

/// GET /api/orders - List orders visible to the caller
///
/// Returns all orders for admin callers and only the caller's own orders
/// otherwise, newest-created-first.
///
/// # Authentication
/// Requires a valid bearer token (no permission required)
///
/// # Returns
/// - `200 OK`: JSON array of OrderDto
/// - `401 Unauthorized`: Missing or unresolvable bearer token
pub async fn list_orders(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let orders = OrderService::new(&state.db).list_for_caller(&caller).await?;
    let orders_dto: Vec<_> = orders.into_iter().map(|order| order.into_dto()).collect();

    Ok((StatusCode::OK, Json(orders_dto)))
}

/// POST /api/orders - Create a new order owned by the caller
///
/// The order always belongs to the caller; a customer_id supplied in the body
/// is ignored. Status starts at pending and timestamps are stamped by the
/// system.
///
/// # Authentication
/// Requires a valid bearer token (no permission required)
///
/// # Returns
/// - `201 Created`: OrderDto for the created order
/// - `400 Bad Request`: Unknown service type, empty address, or negative price
/// - `401 Unauthorized`: Missing or unresolvable bearer token
pub async fn create_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<CreateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let service_type = ServiceType::parse(&dto.service_type).ok_or_else(|| {
        AppError::BadRequest(format!("Unknown service type '{}'.", dto.service_type))
    })?;

    let order = OrderService::new(&state.db)
        .create(
            &caller,
            CreateOrderParams {
                service_type,
                pickup_address: dto.pickup_address,
                delivery_address: dto.delivery_address,
                total_price: dto.total_price,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(order.into_dto())))
}

/// GET /api/orders/{id} - Retrieve a single order
///
/// # Authentication
/// Requires a valid bearer token (no permission required; detail access is not
/// scoped to the owning customer)
///
/// # Path Parameters
/// - `id`: Order id (i32)
///
/// # Returns
/// - `200 OK`: OrderDto
/// - `401 Unauthorized`: Missing or unresolvable bearer token
/// - `404 Not Found`: No order with that id
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _caller = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let order = OrderService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// PUT /api/orders/{id} - Partially update an order's non-status fields
///
/// Only provided fields change; updated_at is refreshed. Status is never
/// touched here and no notification is dispatched.
///
/// # Authentication
/// Requires a valid bearer token (no permission required)
///
/// # Path Parameters
/// - `id`: Order id (i32)
///
/// # Returns
/// - `200 OK`: OrderDto with the updated fields
/// - `400 Bad Request`: Unknown service type, empty address, or negative price
/// - `401 Unauthorized`: Missing or unresolvable bearer token
/// - `404 Not Found`: No order with that id
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
    Json(dto): Json<UpdateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let _caller = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let service_type = dto
        .service_type
        .map(|value| {
            ServiceType::parse(&value)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown service type '{}'.", value)))
        })
        .transpose()?;

    let order = OrderService::new(&state.db)
        .update(
            id,
            UpdateOrderParams {
                service_type,
                pickup_address: dto.pickup_address,
                delivery_address: dto.delivery_address,
                total_price: dto.total_price,
            },
        )
        .await?
        .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// DELETE /api/orders/{id} - Delete an order
///
/// # Authentication
/// Requires a valid bearer token (no permission required)
///
/// # Path Parameters
/// - `id`: Order id (i32)
///
/// # Returns
/// - `204 No Content`: Order deleted
/// - `401 Unauthorized`: Missing or unresolvable bearer token
/// - `404 Not Found`: No order with that id
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _caller = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let deleted = OrderService::new(&state.db).delete(id).await?;
    if !deleted {
        return Err(AppError::NotFound("Order not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/orders/{id}/status - Set an order's status (admin only)
///
/// Accepts only the new status value. On success the order service dispatches
/// one status-change notification to the order's customer. Transitions are not
/// validated; any status may follow any other.
///
/// # Authentication
/// Requires a valid bearer token with the admin role
///
/// # Path Parameters
/// - `id`: Order id (i32)
///
/// # Returns
/// - `200 OK`: OrderDto with the new status
/// - `400 Bad Request`: Unknown status value
/// - `401 Unauthorized`: Missing or unresolvable bearer token
/// - `403 Forbidden`: Caller is not an admin
/// - `404 Not Found`: No order with that id
pub async fn update_order_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
    Json(dto): Json<UpdateOrderStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _caller = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let status = OrderStatus::parse(&dto.status)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown order status '{}'.", dto.status)))?;

    let order = OrderService::new(&state.db)
        .update_status(id, status)
        .await?
        .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}
