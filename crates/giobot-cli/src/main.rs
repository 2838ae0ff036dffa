//! giobot CLI - headless spectator client.
//!
//! - `giobot replay` - drive the client from a recorded game
//! - `giobot config` - print the resolved configuration
//! - `giobot init` - write a default configuration file

mod frames;
mod replay;

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, EnvFilter};

use giobot_ai::{GeneralLocator, NoopHook};
use giobot_client::config::DEFAULT_CONFIG_YAML;
use giobot_client::{ClientConfig, RenderBackend, Shutdown};

use crate::frames::JsonlFrameWriter;
use crate::replay::{load_script, load_snapshots, ReplayOutcome, ReplayPlan};

#[derive(Parser)]
#[command(name = "giobot")]
#[command(about = "Spectator and automation client for grid strategy games", version)]
struct Cli {
    /// Configuration file (YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a recorded game through the client
    Replay {
        /// JSON array of snapshots
        snapshots: PathBuf,

        /// JSON array of `{ tick, event }` input events
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Write presented frames here as JSON lines
        #[arg(short, long)]
        frames: Option<PathBuf>,

        /// Decision hook consulted on every snapshot
        #[arg(long, value_enum, default_value_t = HookKind::Noop)]
        hook: HookKind,

        /// Override the configured tick interval
        #[arg(long)]
        interval_ms: Option<u64>,

        /// Delay between recorded snapshots
        #[arg(long, default_value_t = 500)]
        pace_ms: u64,
    },

    /// Print the resolved configuration
    Config,

    /// Write a default configuration file
    Init {
        /// Destination path
        #[arg(default_value = "giobot.yaml")]
        path: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum HookKind {
    Noop,
    General,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let logs = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr);
    if cli.json_logs {
        logs.json().init();
    } else {
        logs.init();
    }

    let mut config = ClientConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Replay {
            snapshots,
            input,
            frames,
            hook,
            interval_ms,
            pace_ms,
        } => {
            if let Some(ms) = interval_ms {
                config.tick_interval_ms = ms;
            }
            let plan = ReplayPlan {
                snapshots: load_snapshots(&snapshots)?,
                script: match input {
                    Some(path) => load_script(&path)?,
                    None => Vec::new(),
                },
                pace: Duration::from_millis(pace_ms),
            };
            run_replay(&config, plan, hook, frames.as_deref()).await
        }
        Commands::Config => {
            print!("{}", config.to_yaml()?);
            Ok(())
        }
        Commands::Init { path } => init_config(&path),
    }
}

async fn run_replay(
    config: &ClientConfig,
    plan: ReplayPlan,
    hook: HookKind,
    frames: Option<&Path>,
) -> Result<()> {
    tracing::info!(
        snapshots = plan.snapshots.len(),
        script = plan.script.len(),
        ?hook,
        "Starting replay"
    );

    let shutdown = Shutdown::new();
    let ctrl_c = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Interrupted");
            ctrl_c.signal();
        }
    });

    let mut backend: Box<dyn RenderBackend> = match frames {
        Some(path) => Box::new(JsonlFrameWriter::create(path)?),
        None => Box::new(JsonlFrameWriter::new(io::sink())),
    };

    let outcome = match hook {
        HookKind::Noop => replay::replay(config, plan, NoopHook, backend.as_mut(), shutdown).await?,
        HookKind::General => {
            replay::replay(config, plan, GeneralLocator, backend.as_mut(), shutdown).await?
        }
    };

    print_summary(&outcome, frames);
    Ok(())
}

fn print_summary(outcome: &ReplayOutcome, frames: Option<&Path>) {
    let summary = &outcome.summary;
    println!("Replay finished");
    println!("===============");
    println!();
    println!("Ticks:           {}", summary.ticks);
    println!("Frames:          {}", summary.frames);
    println!("Render failures: {}", summary.render_failures);
    println!("Moves submitted: {}", summary.submitted);
    println!("Moves rejected:  {}", summary.rejected);
    println!("Moves dropped:   {}", summary.dropped);
    println!("Moves received:  {}", outcome.received);
    if let Some(path) = frames {
        println!();
        println!("Frames written to {}", path.display());
    }
}

fn init_config(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("{} already exists", path.display());
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, DEFAULT_CONFIG_YAML)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Wrote default configuration to {}", path.display());
    println!();
    println!("Next steps:");
    println!("  1. Adjust keys and colors in {}", path.display());
    println!("  2. Run: giobot --config {} replay <snapshots.json>", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_replay_flags() {
        let cli = Cli::try_parse_from([
            "giobot",
            "--verbose",
            "replay",
            "game.json",
            "--frames",
            "out.jsonl",
            "--hook",
            "general",
            "--interval-ms",
            "50",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Replay {
                snapshots,
                frames,
                hook,
                interval_ms,
                pace_ms,
                ..
            } => {
                assert_eq!(snapshots, PathBuf::from("game.json"));
                assert_eq!(frames, Some(PathBuf::from("out.jsonl")));
                assert_eq!(hook, HookKind::General);
                assert_eq!(interval_ms, Some(50));
                assert_eq!(pace_ms, 500);
            }
            _ => panic!("expected replay"),
        }
    }

    #[test]
    fn init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conf/giobot.yaml");

        init_config(&path).unwrap();
        let written = ClientConfig::load(&path).unwrap();
        assert_eq!(written, ClientConfig::default());

        assert!(init_config(&path).is_err());
    }
}
