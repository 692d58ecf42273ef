//! Integration tests for the append-only notification log.
//!
//! - Batch insertion
//! - Filtered listing with pagination
//! - Per-order history

use sqlx::PgPool;
use reachout_core::channel::Channel;
use reachout_db::models::notification_log::{LogQuery, NewNotificationLog};
use reachout_db::models::user::CreateUser;
use reachout_db::repositories::{CampaignRepo, NotificationLogRepo, UserRepo};

async fn seed_user(pool: &PgPool, email: &str) -> i64 {
    UserRepo::create(
        pool,
        &CreateUser {
            name: "Log User".to_string(),
            email: email.to_string(),
            phone: None,
            city: None,
        },
    )
    .await
    .unwrap()
    .id
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_insert_many_writes_one_row_per_entry(pool: PgPool) {
    let campaign = CampaignRepo::create(&pool, "Logged", "OFFERS", None)
        .await
        .unwrap();
    let user = seed_user(&pool, "logs@example.com").await;

    let logs = vec![
        NewNotificationLog::campaign(user, campaign.id, Channel::Email),
        NewNotificationLog::campaign(user, campaign.id, Channel::Sms),
        NewNotificationLog::campaign(user, campaign.id, Channel::Push),
    ];
    let written = NotificationLogRepo::insert_many(&pool, &logs).await.unwrap();
    assert_eq!(written, 3);

    let rows = NotificationLogRepo::list(
        &pool,
        &LogQuery {
            campaign_id: Some(campaign.id),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r.notification_type == "OFFERS"));
    assert!(rows.iter().all(|r| r.status == "SUCCESS"));
    assert!(rows.iter().all(|r| r.campaign_id == Some(campaign.id)));
    assert!(rows.iter().all(|r| r.newsletter_id.is_none()));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_insert_many_empty_is_noop(pool: PgPool) {
    let written = NotificationLogRepo::insert_many(&pool, &[]).await.unwrap();
    assert_eq!(written, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_filters_by_user(pool: PgPool) {
    let campaign = CampaignRepo::create(&pool, "Filtered", "OFFERS", None)
        .await
        .unwrap();
    let alice = seed_user(&pool, "alice-logs@example.com").await;
    let bob = seed_user(&pool, "bob-logs@example.com").await;

    NotificationLogRepo::insert_many(
        &pool,
        &[
            NewNotificationLog::campaign(alice, campaign.id, Channel::Email),
            NewNotificationLog::campaign(bob, campaign.id, Channel::Email),
            NewNotificationLog::campaign(bob, campaign.id, Channel::Sms),
        ],
    )
    .await
    .unwrap();

    let bob_rows = NotificationLogRepo::list(
        &pool,
        &LogQuery {
            user_id: Some(bob),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(bob_rows.len(), 2);
    assert!(bob_rows.iter().all(|r| r.user_id == bob));

    let combined = NotificationLogRepo::list(
        &pool,
        &LogQuery {
            campaign_id: Some(campaign.id),
            user_id: Some(alice),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(combined.len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_respects_limit_and_offset(pool: PgPool) {
    let campaign = CampaignRepo::create(&pool, "Paged", "OFFERS", None)
        .await
        .unwrap();
    let user = seed_user(&pool, "paged@example.com").await;

    let logs: Vec<NewNotificationLog> = (0..5)
        .map(|_| NewNotificationLog::campaign(user, campaign.id, Channel::Email))
        .collect();
    NotificationLogRepo::insert_many(&pool, &logs).await.unwrap();

    let page = NotificationLogRepo::list(
        &pool,
        &LogQuery {
            campaign_id: Some(campaign.id),
            limit: Some(2),
            offset: Some(1),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(page.len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_clamps_negative_limit_and_offset(pool: PgPool) {
    let campaign = CampaignRepo::create(&pool, "Clamped", "OFFERS", None)
        .await
        .unwrap();
    let user = seed_user(&pool, "clamped@example.com").await;

    let logs: Vec<NewNotificationLog> = (0..3)
        .map(|_| NewNotificationLog::campaign(user, campaign.id, Channel::Email))
        .collect();
    NotificationLogRepo::insert_many(&pool, &logs).await.unwrap();

    // Negative paging values must not bubble up as a database error.
    let page = NotificationLogRepo::list(
        &pool,
        &LogQuery {
            campaign_id: Some(campaign.id),
            limit: Some(-1),
            offset: Some(-5),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert!(page.is_empty());

    let page = NotificationLogRepo::list(
        &pool,
        &LogQuery {
            campaign_id: Some(campaign.id),
            offset: Some(-5),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(page.len(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_for_order_scopes_to_order(pool: PgPool) {
    use reachout_db::models::order::CreateOrder;
    use reachout_db::repositories::{OrderRepo, ProductRepo};

    let user = seed_user(&pool, "orders@example.com").await;
    let product = ProductRepo::create(&pool, "Widget", 1999).await.unwrap();
    let order = OrderRepo::create(
        &pool,
        &CreateOrder {
            order_number: "ORD-1001".to_string(),
            user_id: user,
            product_id: product.id,
        },
    )
    .await
    .unwrap();
    let other = OrderRepo::create(
        &pool,
        &CreateOrder {
            order_number: "ORD-1002".to_string(),
            user_id: user,
            product_id: product.id,
        },
    )
    .await
    .unwrap();

    NotificationLogRepo::insert_many(
        &pool,
        &[
            NewNotificationLog::order(user, order.id, Channel::Email),
            NewNotificationLog::order(user, order.id, Channel::Push),
            NewNotificationLog::order(user, other.id, Channel::Email),
        ],
    )
    .await
    .unwrap();

    let rows = NotificationLogRepo::list_for_order(&pool, order.id)
        .await
        .unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.order_id == Some(order.id)));
    assert!(rows.iter().all(|r| r.notification_type == "ORDER_UPDATES"));
}
