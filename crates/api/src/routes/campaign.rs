//! Route definitions for the `/campaigns` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::campaign;
use crate::state::AppState;

/// Routes mounted at `/campaigns`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/campaigns",
            get(campaign::list_campaigns).post(campaign::create_campaign),
        )
        .route(
            "/campaigns/{id}",
            get(campaign::get_campaign).put(campaign::update_campaign),
        )
        .route("/campaigns/{id}/preview", get(campaign::preview_campaign))
        .route("/campaigns/{id}/send", post(campaign::send_campaign))
        .route(
            "/campaigns/{id}/recipients",
            get(campaign::get_campaign_recipients),
        )
}
