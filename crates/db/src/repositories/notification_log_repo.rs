//! Repository for the append-only `notification_logs` table.

use sqlx::PgPool;
use reachout_core::types::DbId;

use crate::models::notification_log::{LogQuery, NewNotificationLog, NotificationLog};

/// Column list for `notification_logs` queries.
const COLUMNS: &str = "id, user_id, notification_type, channel, status, \
    campaign_id, newsletter_id, order_id, sent_at";

/// Maximum page size for log listing.
const MAX_LIMIT: i64 = 200;

/// Default page size for log listing.
const DEFAULT_LIMIT: i64 = 50;

/// Provides append and query operations for notification logs.
///
/// Rows are immutable once written; there is no update or delete.
pub struct NotificationLogRepo;

impl NotificationLogRepo {
    /// Append a batch of log rows.
    ///
    /// Takes a `PgExecutor` so the dispatch executor can write logs inside
    /// the same transaction as the recipient snapshot and status flip.
    pub async fn insert_many<'e, E: sqlx::PgExecutor<'e>>(
        executor: E,
        rows: &[NewNotificationLog],
    ) -> Result<u64, sqlx::Error> {
        if rows.is_empty() {
            return Ok(0);
        }

        let user_ids: Vec<DbId> = rows.iter().map(|r| r.user_id).collect();
        let types: Vec<&str> = rows.iter().map(|r| r.notification_type.as_str()).collect();
        let channels: Vec<&str> = rows.iter().map(|r| r.channel.as_str()).collect();
        let statuses: Vec<&str> = rows.iter().map(|r| r.status.as_str()).collect();
        let campaign_ids: Vec<Option<DbId>> = rows.iter().map(|r| r.campaign_id).collect();
        let newsletter_ids: Vec<Option<DbId>> = rows.iter().map(|r| r.newsletter_id).collect();
        let order_ids: Vec<Option<DbId>> = rows.iter().map(|r| r.order_id).collect();

        let result = sqlx::query(
            "INSERT INTO notification_logs \
                (user_id, notification_type, channel, status, \
                 campaign_id, newsletter_id, order_id) \
             SELECT * FROM UNNEST( \
                $1::BIGINT[], $2::TEXT[], $3::TEXT[], $4::TEXT[], \
                $5::BIGINT[], $6::BIGINT[], $7::BIGINT[])",
        )
        .bind(&user_ids)
        .bind(&types)
        .bind(&channels)
        .bind(&statuses)
        .bind(&campaign_ids)
        .bind(&newsletter_ids)
        .bind(&order_ids)
        .execute(executor)
        .await?;
        Ok(result.rows_affected())
    }

    /// List log rows with optional filters, newest first.
    pub async fn list(
        pool: &PgPool,
        params: &LogQuery,
    ) -> Result<Vec<NotificationLog>, sqlx::Error> {
        // Postgres rejects negative LIMIT/OFFSET, so clamp both.
        let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(0, MAX_LIMIT);
        let offset = params.offset.unwrap_or(0).max(0);

        // Build the WHERE clause and track the next bind parameter index.
        let mut conditions: Vec<String> = Vec::new();
        let mut bind_idx: u32 = 1;

        if params.campaign_id.is_some() {
            conditions.push(format!("campaign_id = ${bind_idx}"));
            bind_idx += 1;
        }
        if params.user_id.is_some() {
            conditions.push(format!("user_id = ${bind_idx}"));
            bind_idx += 1;
        }
        if params.status.is_some() {
            conditions.push(format!("status = ${bind_idx}"));
            bind_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT {COLUMNS} FROM notification_logs \
             {where_clause} \
             ORDER BY sent_at DESC, id DESC \
             LIMIT ${bind_idx} OFFSET ${}",
            bind_idx + 1,
        );

        let mut q = sqlx::query_as::<_, NotificationLog>(&query);

        if let Some(cid) = params.campaign_id {
            q = q.bind(cid);
        }
        if let Some(uid) = params.user_id {
            q = q.bind(uid);
        }
        if let Some(status) = &params.status {
            q = q.bind(status.clone());
        }

        q = q.bind(limit).bind(offset);

        q.fetch_all(pool).await
    }

    /// List log rows for a single order, newest first.
    pub async fn list_for_order(
        pool: &PgPool,
        order_id: DbId,
    ) -> Result<Vec<NotificationLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notification_logs \
             WHERE order_id = $1 \
             ORDER BY sent_at DESC, id DESC"
        );
        sqlx::query_as::<_, NotificationLog>(&query)
            .bind(order_id)
            .fetch_all(pool)
            .await
    }
}
