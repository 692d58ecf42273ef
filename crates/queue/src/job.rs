//! Dispatch job payloads.

use serde::{Deserialize, Serialize};
use reachout_core::types::DbId;

/// A deferred unit of dispatch work, serialized into `queue_jobs.payload`.
///
/// One variant per job kind; the serde tag doubles as the queue's
/// `job_type` column so rows stay greppable in SQL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DispatchJob {
    /// Fan out a campaign to its eligible recipients.
    SendCampaign { campaign_id: DbId },
    /// Fan out a newsletter to its subscribers.
    PublishNewsletter { newsletter_id: DbId },
}

impl DispatchJob {
    /// The stable job type name stored in `queue_jobs.job_type`.
    pub fn job_type(&self) -> &'static str {
        match self {
            DispatchJob::SendCampaign { .. } => "sendCampaign",
            DispatchJob::PublishNewsletter { .. } => "publishNewsletter",
        }
    }
}
