use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::round_engine::RoundEngine;

/// Run `RoundEngine::sweep_idle` every `every` until `shutdown` is cancelled.
///
/// The first sweep happens one full period after spawning.
pub fn spawn_idle_sweeper(
    engine: Arc<RoundEngine>,
    every: Duration,
    shutdown: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + every, every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        info!(interval_ms = every.as_millis() as u64, "Idle sweeper started");

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => break,
                _ = ticker.tick() => {
                    let outcome = engine.sweep_idle();
                    debug!(?outcome, "Idle sweep");
                }
            }
        }

        info!("Idle sweeper stopped");
    })
}
