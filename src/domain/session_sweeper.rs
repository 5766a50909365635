//! Background expiry of idle sessions.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::repositories::SessionRepository;

/// Periodically drops sessions idle for longer than `max_idle`.
///
/// Runs until the task is aborted. The sweep interval is a quarter of
/// `max_idle`, clamped to between 1 second and 5 minutes.
pub async fn run_session_sweeper(sessions: Arc<dyn SessionRepository>, max_idle: Duration) {
    let period = sweep_period(max_idle);
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    // First tick completes immediately.
    ticker.tick().await;

    loop {
        ticker.tick().await;
        sweep_once(sessions.as_ref(), max_idle).await;
    }
}

/// Runs a single expiry pass and returns the number of sessions removed.
pub async fn sweep_once(sessions: &dyn SessionRepository, max_idle: Duration) -> usize {
    let removed = sessions.purge_idle(max_idle).await;
    if removed > 0 {
        tracing::debug!(removed, "Expired idle sessions");
    }
    removed
}

fn sweep_period(max_idle: Duration) -> Duration {
    (max_idle / 4).clamp(Duration::from_secs(1), Duration::from_secs(300))
}
