//! Route definitions for the `/newsletters` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::newsletter;
use crate::state::AppState;

/// Routes mounted at `/newsletters`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/newsletters",
            get(newsletter::list_newsletters).post(newsletter::create_newsletter),
        )
        .route("/newsletters/{id}", put(newsletter::update_newsletter))
        .route(
            "/newsletters/{id}/publish",
            post(newsletter::publish_newsletter),
        )
        .route(
            "/newsletters/{id}/subscriptions",
            post(newsletter::subscribe),
        )
        .route(
            "/newsletters/{id}/subscriptions/{user_id}",
            put(newsletter::update_subscription),
        )
}
