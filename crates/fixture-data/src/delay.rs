//! Async pause for tests that need to let time pass.

use std::time::Duration;

use tracing::trace;

/// Default pause used by callers that have no specific duration in mind.
pub const DEFAULT_WAIT: Duration = Duration::from_secs(1);

/// Suspends the current task for `duration`.
///
/// The pause uses the Tokio timer, so tests running on a paused runtime
/// advance instantly.
pub async fn wait(duration: Duration) {
    trace!(?duration, "waiting");
    tokio::time::sleep(duration).await;
}
