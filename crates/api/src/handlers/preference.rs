//! Handlers for per-user notification preferences.

use axum::extract::{Path, State};
use axum::Json;
use reachout_core::category::NotificationType;
use reachout_core::error::CoreError;
use reachout_core::preference::ChannelFlags;
use reachout_core::types::DbId;
use reachout_db::models::preference::UpsertPreference;
use reachout_db::repositories::NotificationPreferenceRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/users/{user_id}/preferences
///
/// Lists explicit preference rows only. Categories without a row are in
/// the default state: all channels enabled.
pub async fn get_preferences(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let prefs = NotificationPreferenceRepo::list_for_user(&state.pool, user_id).await?;
    Ok(Json(serde_json::json!({ "data": prefs })))
}

/// PUT /api/v1/users/{user_id}/preferences/{notification_type}
///
/// Upsert the tri-channel flags for a category. Omitted flags fall back
/// to the opt-in default (true).
pub async fn update_preference(
    State(state): State<AppState>,
    Path((user_id, notification_type)): Path<(DbId, String)>,
    Json(input): Json<UpsertPreference>,
) -> AppResult<Json<serde_json::Value>> {
    let category = NotificationType::parse(&notification_type)
        .filter(NotificationType::is_preference_category)
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation(format!(
                "Unknown preference category '{notification_type}'"
            )))
        })?;

    let flags = ChannelFlags {
        email: input.email.unwrap_or(true),
        sms: input.sms.unwrap_or(true),
        push: input.push.unwrap_or(true),
    };

    let pref =
        NotificationPreferenceRepo::upsert(&state.pool, user_id, category.as_str(), flags).await?;
    Ok(Json(serde_json::json!({ "data": pref })))
}
