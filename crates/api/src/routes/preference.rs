//! Route definitions for per-user notification preferences.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::preference;
use crate::state::AppState;

/// Routes mounted at `/users/{user_id}/preferences`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/users/{user_id}/preferences",
            get(preference::get_preferences),
        )
        .route(
            "/users/{user_id}/preferences/{notification_type}",
            put(preference::update_preference),
        )
}
