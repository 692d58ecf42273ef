//! Route definitions for the `/notification-logs` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::notification_log;
use crate::state::AppState;

/// Routes mounted at `/notification-logs`.
pub fn router() -> Router<AppState> {
    Router::new().route("/notification-logs", get(notification_log::list_logs))
}
