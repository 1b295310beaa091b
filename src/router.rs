use axum::{
    routing::{get, post, put},
    Router,
};

use crate::{
    controller::{auth, notification, order},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/me", get(auth::get_me))
        .route("/api/orders", get(order::list_orders).post(order::create_order))
        .route(
            "/api/orders/{id}",
            get(order::get_order)
                .put(order::update_order)
                .delete(order::delete_order),
        )
        .route("/api/orders/{id}/status", put(order::update_order_status))
        .route(
            "/api/notifications",
            get(notification::list_notifications).post(notification::create_notification),
        )
        .route(
            "/api/notifications/{id}",
            put(notification::mark_notification_read),
        )
        .route(
            "/api/notifications/broadcast",
            post(notification::broadcast_notification),
        )
}
