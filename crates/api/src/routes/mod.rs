pub mod campaign;
pub mod health;
pub mod newsletter;
pub mod notification_log;
pub mod order;
pub mod preference;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /campaigns                           list, create
/// /campaigns/{id}                      get, update
/// /campaigns/{id}/preview              live or frozen recipient preview
/// /campaigns/{id}/send                 send now or schedule (POST)
/// /campaigns/{id}/recipients           frozen snapshot with user details
///
/// /newsletters                         list, create
/// /newsletters/{id}                    update
/// /newsletters/{id}/publish            publish now or schedule (POST)
/// /newsletters/{id}/subscriptions      subscribe a user (POST)
/// /newsletters/{id}/subscriptions/{user_id}  update channel flags (PUT)
///
/// /notification-logs                   filtered delivery audit trail
///
/// /users/{user_id}/preferences         explicit preference rows
/// /users/{user_id}/preferences/{type}  upsert tri-channel flags (PUT)
///
/// /orders                              create (POST)
/// /orders/{id}/status                  transition status (PUT)
/// /orders/{id}/notifications           per-order delivery history
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(campaign::router())
        .merge(newsletter::router())
        .merge(notification_log::router())
        .merge(order::router())
        .merge(preference::router())
}
