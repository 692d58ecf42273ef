//! User entity model.
//!
//! User CRUD is owned by an external service; this model exists so the
//! recipient resolver and order hook can read identity, active status,
//! and contact fields.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use reachout_core::types::{DbId, Timestamp};

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a user (used by tests and seed tooling).
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub city: Option<String>,
}
