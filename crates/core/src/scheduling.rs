//! Dispatch delay computation.
//!
//! Lives in `core` (zero internal deps) so both the API layer and the
//! dispatch services validate schedules identically.

use chrono::Duration;

use crate::error::CoreError;
use crate::types::Timestamp;

/// Compute the queue delay for an optional scheduled send time.
///
/// - `None` means "send now": delay zero.
/// - A future instant yields the positive distance from `now`.
/// - A past or present instant is a validation failure; callers must
///   reject it before mutating any state.
pub fn dispatch_delay(
    scheduled_at: Option<Timestamp>,
    now: Timestamp,
) -> Result<Duration, CoreError> {
    match scheduled_at {
        None => Ok(Duration::zero()),
        Some(at) => {
            let delay = at - now;
            if delay <= Duration::zero() {
                return Err(CoreError::Validation(
                    "scheduled_at must be in the future".to_string(),
                ));
            }
            Ok(delay)
        }
    }
}
