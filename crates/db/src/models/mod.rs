//! Entity models: `FromRow` structs mirroring table rows plus request DTOs.

pub mod campaign;
pub mod newsletter;
pub mod notification_log;
pub mod order;
pub mod preference;
pub mod user;
