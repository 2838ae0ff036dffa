//! Headless replay of a recorded game.
//!
//! A provider task stands in for the game service: it publishes the recorded
//! snapshots one per `pace` and logs the moves the client sends back.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use giobot_client::{
    ChannelSink, ClientConfig, RenderBackend, RunSummary, ScriptedEvent, ScriptedInput, Shutdown,
    SnapshotPublisher, TickLoop,
};
use giobot_ai::DecisionHook;
use giobot_core::{GameSnapshot, MoveCommand};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};
use tracing::{debug, info};

pub struct ReplayPlan {
    pub snapshots: Vec<GameSnapshot>,
    pub script: Vec<ScriptedEvent>,
    pub pace: Duration,
}

/// What came out of a replay.
#[derive(Debug, Clone, Copy)]
pub struct ReplayOutcome {
    pub summary: RunSummary,
    /// Moves that reached the provider.
    pub received: u64,
}

pub fn load_snapshots(path: &Path) -> Result<Vec<GameSnapshot>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshots from {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse snapshots from {}", path.display()))
}

pub fn load_script(path: &Path) -> Result<Vec<ScriptedEvent>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input script from {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse input script from {}", path.display()))
}

pub async fn replay<H, B>(
    config: &ClientConfig,
    plan: ReplayPlan,
    hook: H,
    backend: &mut B,
    shutdown: Shutdown,
) -> Result<ReplayOutcome>
where
    H: DecisionHook,
    B: RenderBackend + ?Sized,
{
    let (publisher, reader) = giobot_client::snapshot_slot();
    let (tx, rx) = unbounded_channel();

    let mut tick_loop = TickLoop::from_config(config, reader, shutdown.clone(), hook)
        .context("Invalid client configuration")?;

    let provider = tokio::spawn(provide(
        plan.snapshots,
        publisher,
        rx,
        shutdown.clone(),
        plan.pace,
    ));

    let mut input = ScriptedInput::new(plan.script);
    let mut sink = ChannelSink::new(tx);
    let summary = tick_loop.run(&mut input, backend, &mut sink).await;
    drop(sink);

    let received = provider.await.context("Snapshot provider panicked")?;
    Ok(ReplayOutcome { summary, received })
}

async fn provide(
    snapshots: Vec<GameSnapshot>,
    publisher: SnapshotPublisher,
    mut commands: UnboundedReceiver<MoveCommand>,
    shutdown: Shutdown,
    pace: Duration,
) -> u64 {
    let total = snapshots.len();
    let mut pending = snapshots.into_iter();
    let mut received = 0;
    let mut ticker = tokio::time::interval(pace);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if shutdown.is_signalled() {
                    break;
                }
                match pending.next() {
                    Some(snapshot) => {
                        debug!(turn = snapshot.turn, "publishing snapshot");
                        publisher.publish(snapshot);
                    }
                    None => {
                        info!(snapshots = total, "replay exhausted");
                        shutdown.signal();
                        break;
                    }
                }
            }
            Some(command) = commands.recv() => {
                info!(%command, "move received");
                received += 1;
            }
        }
    }

    // The tick loop drops its sink on exit; collect whatever it sent last.
    while let Some(command) = commands.recv().await {
        info!(%command, "move received");
        received += 1;
    }
    received
}
