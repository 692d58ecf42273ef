//! HTTP-level integration tests for campaign endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_empty, post_json, put_json};
use sqlx::PgPool;
use reachout_core::preference::ChannelFlags;
use reachout_db::models::user::CreateUser;
use reachout_db::repositories::{NotificationPreferenceRepo, UserRepo};

async fn seed_opted_in_user(pool: &PgPool, email: &str) -> i64 {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            name: "Recipient".to_string(),
            email: email.to_string(),
            phone: None,
            city: None,
        },
    )
    .await
    .unwrap();
    NotificationPreferenceRepo::upsert(
        pool,
        user.id,
        "OFFERS",
        ChannelFlags {
            email: true,
            sms: false,
            push: false,
        },
    )
    .await
    .unwrap();
    user.id
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_campaign_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/campaigns",
        serde_json::json!({"name": "Spring Sale", "city_filter": "Austin"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["campaign_name"], "Spring Sale");
    assert_eq!(json["data"]["notification_type"], "OFFERS");
    assert_eq!(json["data"]["status"], "DRAFT");
    assert!(json["data"]["id"].is_number());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_campaign_rejects_bad_type(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/campaigns",
        serde_json::json!({"name": "Bad Type", "notification_type": "NEWSLETTER"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_campaign_by_id(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/campaigns",
            serde_json::json!({"name": "Get Me"}),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/campaigns/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["campaign_name"], "Get Me");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_nonexistent_campaign_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/campaigns/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_send_campaign_returns_202_with_receipt(pool: PgPool) {
    seed_opted_in_user(&pool, "receipt@example.com").await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/campaigns",
            serde_json::json!({"name": "Send Me"}),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = post_empty(app, &format!("/api/v1/campaigns/{id}/send")).await;
    assert_eq!(response.status(), StatusCode::ACCEPTED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["recipient_count"], 1);
    assert!(json["data"]["scheduled_at"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_send_with_past_schedule_returns_400(pool: PgPool) {
    seed_opted_in_user(&pool, "past@example.com").await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/campaigns",
            serde_json::json!({"name": "Too Late"}),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let past = chrono::Utc::now() - chrono::Duration::hours(1);
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/v1/campaigns/{id}/send"),
        serde_json::json!({"scheduled_at": past.to_rfc3339()}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_after_schedule_returns_409(pool: PgPool) {
    seed_opted_in_user(&pool, "locked@example.com").await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/campaigns",
            serde_json::json!({"name": "Locked"}),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let future = chrono::Utc::now() + chrono::Duration::hours(2);
    let app = common::build_test_app(pool.clone());
    let send = post_json(
        app,
        &format!("/api/v1/campaigns/{id}/send"),
        serde_json::json!({"scheduled_at": future.to_rfc3339()}),
    )
    .await;
    assert_eq!(send.status(), StatusCode::ACCEPTED);

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/campaigns/{id}"),
        serde_json::json!({"name": "Renamed"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_preview_lists_live_eligibility_for_draft(pool: PgPool) {
    let user = seed_opted_in_user(&pool, "preview@example.com").await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/campaigns",
            serde_json::json!({"name": "Previewed"}),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/campaigns/{id}/preview")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "draft");
    assert_eq!(json["data"]["users"][0]["user_id"], user);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_recipients_empty_before_send(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/campaigns",
            serde_json::json!({"name": "No Snapshot"}),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/campaigns/{id}/recipients")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}
