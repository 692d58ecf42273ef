//! Repository for the `newsletters` table.

use sqlx::PgPool;
use reachout_core::types::DbId;

use crate::models::newsletter::Newsletter;

/// Column list for `newsletters` queries.
const COLUMNS: &str = "id, title, description, is_active, created_at, updated_at";

/// Provides CRUD operations for newsletters.
pub struct NewsletterRepo;

impl NewsletterRepo {
    /// Create a newsletter. The unique title constraint (`uq_newsletters_title`)
    /// surfaces duplicates as a conflict at the API layer.
    pub async fn create(
        pool: &PgPool,
        title: &str,
        description: Option<&str>,
    ) -> Result<Newsletter, sqlx::Error> {
        let query = format!(
            "INSERT INTO newsletters (title, description) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Newsletter>(&query)
            .bind(title)
            .bind(description)
            .fetch_one(pool)
            .await
    }

    /// Find a newsletter by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Newsletter>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM newsletters WHERE id = $1");
        sqlx::query_as::<_, Newsletter>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all newsletters, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Newsletter>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM newsletters ORDER BY created_at DESC");
        sqlx::query_as::<_, Newsletter>(&query).fetch_all(pool).await
    }

    /// Update title, description, and/or active flag.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        title: Option<&str>,
        description: Option<&str>,
        is_active: Option<bool>,
    ) -> Result<Option<Newsletter>, sqlx::Error> {
        let query = format!(
            "UPDATE newsletters \
             SET title = COALESCE($2, title), \
                 description = COALESCE($3, description), \
                 is_active = COALESCE($4, is_active), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Newsletter>(&query)
            .bind(id)
            .bind(title)
            .bind(description)
            .bind(is_active)
            .fetch_optional(pool)
            .await
    }
}
