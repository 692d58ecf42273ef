//! Handlers for the `/orders` resource.
//!
//! Order CRUD is a collaborator of the dispatch engine; it lives here
//! because every order mutation triggers the synchronous
//! ORDER_UPDATES notification hook. Hook failures are logged and never
//! fail the order mutation itself.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use reachout_core::error::CoreError;
use reachout_core::status::OrderStatus;
use reachout_core::types::DbId;
use reachout_db::models::order::{CreateOrder, Order, UpdateOrderStatus};
use reachout_db::repositories::{NotificationLogRepo, OrderRepo, ProductRepo, UserRepo};
use reachout_dispatch::executor::record_order_notification;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/orders
///
/// Creates the order, then fans out ORDER_UPDATES notifications across
/// the user's enabled channels.
pub async fn create_order(
    State(state): State<AppState>,
    Json(input): Json<CreateOrder>,
) -> AppResult<impl IntoResponse> {
    UserRepo::find_by_id(&state.pool, input.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: input.user_id,
        }))?;
    ProductRepo::find_by_id(&state.pool, input.product_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id: input.product_id,
        }))?;

    let order = OrderRepo::create(&state.pool, &input).await?;
    notify_order_update(&state, &order).await;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "data": order })),
    ))
}

/// PUT /api/v1/orders/{id}/status
///
/// Transitions the order, then fans out ORDER_UPDATES notifications.
pub async fn update_order_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateOrderStatus>,
) -> AppResult<Json<serde_json::Value>> {
    let status = OrderStatus::parse(&input.status).ok_or_else(|| {
        AppError::Core(CoreError::Validation(format!(
            "Unknown order status '{}'",
            input.status
        )))
    })?;

    let order = OrderRepo::update_status(&state.pool, id, status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Order",
            id,
        }))?;

    notify_order_update(&state, &order).await;

    Ok(Json(serde_json::json!({ "data": order })))
}

/// GET /api/v1/orders/{id}/notifications
///
/// Delivery history for a single order, newest first.
pub async fn order_notifications(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    OrderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Order",
            id,
        }))?;

    let logs = NotificationLogRepo::list_for_order(&state.pool, id).await?;
    Ok(Json(serde_json::json!({ "data": logs })))
}

/// Run the order hook without letting a logging failure propagate: the
/// order mutation has already committed and must stand.
async fn notify_order_update(state: &AppState, order: &Order) {
    if let Err(e) = record_order_notification(&state.pool, order.user_id, order.id).await {
        tracing::error!(
            order_id = order.id,
            user_id = order.user_id,
            error = %e,
            "Failed to record order notification logs"
        );
    }
}
