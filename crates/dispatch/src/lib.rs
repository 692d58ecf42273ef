//! The campaign/newsletter dispatch engine.
//!
//! - [`resolver`] — computes the current eligible-recipient set from
//!   mutable targeting criteria (pure reads).
//! - [`service`] — caller-facing state-machine operations: create,
//!   update, preview, send, publish.
//! - [`executor`] — the deferred job bodies that fan recipients out into
//!   per-channel notification log rows, plus the synchronous order hook.
//!
//! The send path snapshots recipients at send time; the executor later
//! re-resolves live eligibility and unions it into the snapshot. Both
//! computations exist on purpose (they reproduce the reference
//! behavior); see DESIGN.md.

pub mod error;
pub mod executor;
pub mod resolver;
pub mod service;

pub use error::DispatchError;
pub use executor::DispatchExecutor;
pub use service::{CampaignService, NewsletterService};
