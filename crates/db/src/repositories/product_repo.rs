//! Repository for the `products` table (order collaborator).

use sqlx::PgPool;
use reachout_core::types::DbId;

use crate::models::order::Product;

/// Column list for `products` queries.
const COLUMNS: &str = "id, name, price_cents, created_at";

/// Minimal product operations needed by orders and tests.
pub struct ProductRepo;

impl ProductRepo {
    /// Create a product.
    pub async fn create(pool: &PgPool, name: &str, price_cents: i64) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products (name, price_cents) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(name)
            .bind(price_cents)
            .fetch_one(pool)
            .await
    }

    /// Find a product by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
