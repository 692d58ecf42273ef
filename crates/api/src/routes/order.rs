//! Route definitions for the `/orders` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::order;
use crate::state::AppState;

/// Routes mounted at `/orders`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/orders", post(order::create_order))
        .route("/orders/{id}/status", put(order::update_order_status))
        .route(
            "/orders/{id}/notifications",
            get(order::order_notifications),
        )
}
