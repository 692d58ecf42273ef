//! Product and order entity models.
//!
//! Order CRUD is a collaborator, not part of the dispatch engine; it is
//! modelled here because every order mutation fans out ORDER_UPDATES
//! notification logs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use reachout_core::types::{DbId, Timestamp};

/// A row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub price_cents: i64,
    pub created_at: Timestamp,
}

/// A row from the `orders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Order {
    pub id: DbId,
    pub order_number: String,
    pub user_id: DbId,
    pub product_id: DbId,
    /// One of CREATED, CONFIRMED, SHIPPED, DELIVERED, CANCELLED.
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for `POST /orders`.
#[derive(Debug, Deserialize)]
pub struct CreateOrder {
    pub order_number: String,
    pub user_id: DbId,
    pub product_id: DbId,
}

/// DTO for `PUT /orders/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateOrderStatus {
    pub status: String,
}
