//! Handlers for the `/notification-logs` resource.

use axum::extract::{Query, State};
use axum::Json;
use reachout_core::status::LogStatus;
use reachout_core::error::CoreError;
use reachout_db::models::notification_log::LogQuery;
use reachout_db::repositories::NotificationLogRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/notification-logs
///
/// Filterable, newest-first view of the delivery audit trail.
pub async fn list_logs(
    State(state): State<AppState>,
    Query(params): Query<LogQuery>,
) -> AppResult<Json<serde_json::Value>> {
    if let Some(status) = &params.status {
        if LogStatus::parse(status).is_none() {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Unknown log status '{status}'"
            ))));
        }
    }

    let logs = NotificationLogRepo::list(&state.pool, &params).await?;
    Ok(Json(serde_json::json!({ "data": logs })))
}
