//! Shared domain types for the reachout campaign-dispatch platform.
//!
//! This crate has zero internal deps so it can be used by the db,
//! queue, dispatch, api, and worker crates alike:
//!
//! - [`types`] — common type aliases (`DbId`, `Timestamp`).
//! - [`error`] — the [`CoreError`](error::CoreError) taxonomy.
//! - [`channel`] / [`category`] / [`status`] — delivery channels,
//!   notification categories, and entity status enums.
//! - [`preference`] — the effective-preference rule (default opt-in).
//! - [`scheduling`] — dispatch delay computation and validation.

pub mod category;
pub mod channel;
pub mod error;
pub mod preference;
pub mod scheduling;
pub mod status;
pub mod types;
