//! HTTP-level integration tests for the notification log listing.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::PgPool;
use reachout_core::channel::Channel;
use reachout_db::models::notification_log::NewNotificationLog;
use reachout_db::models::user::CreateUser;
use reachout_db::repositories::{CampaignRepo, NotificationLogRepo, UserRepo};

async fn seed_logs(pool: &PgPool) -> (i64, i64) {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            name: "Audited".to_string(),
            email: "audited@example.com".to_string(),
            phone: None,
            city: None,
        },
    )
    .await
    .unwrap();
    let campaign = CampaignRepo::create(pool, "Audited Campaign", "OFFERS", None)
        .await
        .unwrap();

    NotificationLogRepo::insert_many(
        pool,
        &[
            NewNotificationLog::campaign(user.id, campaign.id, Channel::Email),
            NewNotificationLog::campaign(user.id, campaign.id, Channel::Sms),
        ],
    )
    .await
    .unwrap();

    (user.id, campaign.id)
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_logs_filters_by_campaign(pool: PgPool) {
    let (_, campaign) = seed_logs(&pool).await;

    let app = common::build_test_app(pool);
    let response = get(
        app,
        &format!("/api/v1/notification-logs?campaign_id={campaign}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let logs = json["data"].as_array().unwrap();
    assert_eq!(logs.len(), 2);
    assert!(logs.iter().all(|l| l["status"] == "SUCCESS"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_logs_filters_by_user_and_status(pool: PgPool) {
    let (user, _) = seed_logs(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = get(
        app,
        &format!("/api/v1/notification-logs?user_id={user}&status=SUCCESS"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    let app = common::build_test_app(pool);
    let response = get(
        app,
        &format!("/api/v1/notification-logs?user_id={user}&status=FAILED"),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_logs_rejects_unknown_status(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/notification-logs?status=PENDING").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_logs_respects_limit(pool: PgPool) {
    seed_logs(&pool).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/notification-logs?limit=1").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}
