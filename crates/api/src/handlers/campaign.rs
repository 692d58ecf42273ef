//! Handlers for the `/campaigns` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use reachout_core::error::CoreError;
use reachout_core::types::DbId;
use reachout_db::models::campaign::{CreateCampaign, SendCampaign, UpdateCampaign};
use reachout_db::repositories::CampaignRepo;
use reachout_dispatch::CampaignService;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/campaigns
///
/// Create a DRAFT campaign. The notification type must normalize to OFFERS.
pub async fn create_campaign(
    State(state): State<AppState>,
    Json(input): Json<CreateCampaign>,
) -> AppResult<impl IntoResponse> {
    let campaign = CampaignService::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "data": campaign })),
    ))
}

/// GET /api/v1/campaigns
pub async fn list_campaigns(
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let campaigns = CampaignRepo::list(&state.pool).await?;
    Ok(Json(serde_json::json!({ "data": campaigns })))
}

/// GET /api/v1/campaigns/{id}
pub async fn get_campaign(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let campaign = CampaignRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Campaign",
            id,
        }))?;
    Ok(Json(serde_json::json!({ "data": campaign })))
}

/// PUT /api/v1/campaigns/{id}
///
/// Only DRAFT campaigns accept edits; anything else is a 409.
pub async fn update_campaign(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCampaign>,
) -> AppResult<Json<serde_json::Value>> {
    let campaign = CampaignService::update(&state.pool, id, &input).await?;
    Ok(Json(serde_json::json!({ "data": campaign })))
}

/// GET /api/v1/campaigns/{id}/preview
///
/// Draft campaigns preview live eligibility; sent/scheduled campaigns
/// return the frozen recipient snapshot.
pub async fn preview_campaign(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let preview = CampaignService::preview(&state.pool, id).await?;
    Ok(Json(serde_json::json!({ "data": preview })))
}

/// POST /api/v1/campaigns/{id}/send
///
/// Accepts an optional `scheduled_at`; an empty body means "send now".
pub async fn send_campaign(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    input: Option<Json<SendCampaign>>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let input = input.map(|Json(i)| i).unwrap_or_default();
    let receipt = CampaignService::send(&state.pool, id, &input).await?;
    Ok((
        StatusCode::ACCEPTED,
        Json(serde_json::json!({ "data": receipt })),
    ))
}

/// GET /api/v1/campaigns/{id}/recipients
pub async fn get_campaign_recipients(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let recipients = CampaignService::recipients(&state.pool, id).await?;
    Ok(Json(serde_json::json!({ "data": recipients })))
}
