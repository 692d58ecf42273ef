//! HTTP surface for the reachout dispatch engine.
//!
//! Handlers are thin: they parse input, delegate to the dispatch services
//! and repositories, and map errors to JSON responses via [`error::AppError`].
//! Authentication and role checks are owned by an upstream gateway; every
//! handler assumes an already-authorized caller.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
