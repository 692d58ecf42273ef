//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the dispatch services and `reachout_db`
//! repositories and map errors via [`AppError`](crate::error::AppError).

pub mod campaign;
pub mod newsletter;
pub mod notification_log;
pub mod order;
pub mod preference;
