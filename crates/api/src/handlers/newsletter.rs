//! Handlers for the `/newsletters` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use reachout_core::types::DbId;
use reachout_db::models::newsletter::{
    CreateNewsletter, PublishNewsletter, UpdateNewsletter, UpsertSubscription,
};
use reachout_db::repositories::NewsletterRepo;
use reachout_dispatch::NewsletterService;

use crate::error::AppResult;
use crate::state::AppState;

/// Body for `PUT /newsletters/{id}/subscriptions/{user_id}`.
#[derive(Debug, Deserialize)]
pub struct SubscriptionFlags {
    pub email: Option<bool>,
    pub sms: Option<bool>,
    pub push: Option<bool>,
}

/// POST /api/v1/newsletters
pub async fn create_newsletter(
    State(state): State<AppState>,
    Json(input): Json<CreateNewsletter>,
) -> AppResult<impl IntoResponse> {
    let newsletter = NewsletterService::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "data": newsletter })),
    ))
}

/// GET /api/v1/newsletters
pub async fn list_newsletters(
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let newsletters = NewsletterRepo::list(&state.pool).await?;
    Ok(Json(serde_json::json!({ "data": newsletters })))
}

/// PUT /api/v1/newsletters/{id}
pub async fn update_newsletter(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateNewsletter>,
) -> AppResult<Json<serde_json::Value>> {
    let newsletter = NewsletterService::update(&state.pool, id, &input).await?;
    Ok(Json(serde_json::json!({ "data": newsletter })))
}

/// POST /api/v1/newsletters/{id}/publish
///
/// Inactive newsletters are rejected with 409. An empty body publishes
/// immediately.
pub async fn publish_newsletter(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    input: Option<Json<PublishNewsletter>>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let input = input.map(|Json(i)| i).unwrap_or_default();
    let receipt = NewsletterService::publish(&state.pool, id, &input).await?;
    Ok((
        StatusCode::ACCEPTED,
        Json(serde_json::json!({ "data": receipt })),
    ))
}

/// POST /api/v1/newsletters/{id}/subscriptions
///
/// Subscribe a user. New subscriptions default to email on, sms/push off;
/// explicit flags in the body override the defaults.
pub async fn subscribe(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpsertSubscription>,
) -> AppResult<impl IntoResponse> {
    let subscription = NewsletterService::upsert_subscription(&state.pool, id, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "data": subscription })),
    ))
}

/// PUT /api/v1/newsletters/{id}/subscriptions/{user_id}
pub async fn update_subscription(
    State(state): State<AppState>,
    Path((id, user_id)): Path<(DbId, DbId)>,
    Json(flags): Json<SubscriptionFlags>,
) -> AppResult<Json<serde_json::Value>> {
    let input = UpsertSubscription {
        user_id,
        email: flags.email,
        sms: flags.sms,
        push: flags.push,
    };
    let subscription = NewsletterService::upsert_subscription(&state.pool, id, &input).await?;
    Ok(Json(serde_json::json!({ "data": subscription })))
}
