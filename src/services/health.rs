//! Liveness heartbeat.
//!
//! There is no inbound HTTP surface, so liveness is a periodic log line.
//! Operators watching the container logs can tell a quiet checker (no slots)
//! apart from a dead one.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::info;

/// How often the heartbeat line is logged.
pub const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(60);

/// Spawns the heartbeat task. The first line is logged immediately.
pub fn spawn_heartbeat(interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            info!("[health] slot checker still alive");
        }
    })
}
