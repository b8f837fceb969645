//! star-match demo
//!
//! Runs one real-time session with an automatic player that solves each
//! target but takes its time clicking, and logs every frame.
//!
//! Usage: `star-match [seed] [think-ms]`

use std::time::Duration;

use tracing::{info, warn, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use star_match::combinatorics::subset_with_sum;
use star_match::session::{spawn, SessionConfig, SessionError};
use star_match::NumberStatus;

#[tokio::main]
async fn main() -> Result<(), SessionError> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);
    let think = Duration::from_millis(args.next().and_then(|s| s.parse().ok()).unwrap_or(400));

    let config = SessionConfig::default();
    info!(seed, think_ms = think.as_millis() as u64, time_budget = config.game.time_budget, "starting demo");

    let (mut handle, task) = spawn(config, seed);

    loop {
        let current = handle.frame();
        let frame = &current.frame;
        info!(
            target = ?frame.target,
            time_left = frame.time_left,
            outcome = %frame.outcome,
            "frame"
        );
        let Some(target) = frame.target else {
            break;
        };

        let pool: Vec<u32> = frame
            .numbers
            .iter()
            .filter(|(_, status)| *status != NumberStatus::Used)
            .map(|&(number, _)| number)
            .collect();
        let Some(pick) = subset_with_sum(&pool, target) else {
            warn!(target, ?pool, "no selection reaches the target");
            break;
        };

        for &number in &pick {
            tokio::time::sleep(think).await;
            handle.toggle(number).await?;
        }

        handle
            .wait_for(|s| {
                s.frame.outcome.is_over()
                    || pick
                        .iter()
                        .all(|&n| s.frame.status_of(n) == Some(NumberStatus::Used))
            })
            .await?;
    }

    let last = handle.frame();
    info!(outcome = %last.frame.outcome, time_left = last.frame.time_left, "demo finished");

    handle.shutdown().await?;
    if let Err(e) = task.await {
        warn!("session task failed: {}", e);
    }
    Ok(())
}
