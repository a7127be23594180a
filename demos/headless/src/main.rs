//! headless — runs the colony engine without a window.
//!
//! Starts the engine, polls a snapshot every `poll_ms` the way a renderer
//! would, logs what a renderer would draw and optionally exports every
//! snapshot as CSV.  Stops after `duration_secs`.
//!
//! ```text
//! RUST_LOG=info cargo run -p headless -- demos/headless/colony.toml
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info};

use ants_core::SimParams;
use ants_engine::EngineBuilder;
use ants_output::{CsvWriter, SnapshotRecorder};

// ── Configuration ─────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Config {
    sim: SimParams,
    run: RunOptions,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct RunOptions {
    duration_secs: u64,
    poll_ms:       u64,
    /// Write `agent_snapshots.csv` and `pheromone_snapshots.csv` here.
    output_dir:    Option<PathBuf>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self { duration_secs: 10, poll_ms: 100, output_dir: None }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

// ── Main ──────────────────────────────────────────────────────────────────────

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();

    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = load_config(path.as_deref())?;
    info!(agents = config.sim.agents, seed = ?config.sim.seed, "starting colony");

    let mut recorder = match &config.run.output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
            Some(SnapshotRecorder::new(CsvWriter::new(dir)?))
        }
        None => None,
    };

    let engine = EngineBuilder::new(config.sim).spawn()?;

    let deadline = Instant::now() + Duration::from_secs(config.run.duration_secs);
    let mut poll = tokio::time::interval(Duration::from_millis(config.run.poll_ms.max(1)));
    poll.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut polls: u64 = 0;
    while Instant::now() < deadline {
        poll.tick().await;
        let world = match engine.snapshot().await {
            Ok(world) => world,
            Err(e) => {
                // The authority's own error says why it stopped.
                engine.shutdown().await?;
                return Err(e.into());
            }
        };
        polls += 1;

        let visible = world.visible_agents().count();
        let pheromones = world.effective_pheromones().count();
        if polls % 10 == 0 {
            info!(polls, visible, pheromones, "colony");
        } else {
            debug!(polls, visible, pheromones, "colony");
        }

        if let Some(recorder) = recorder.as_mut() {
            recorder.record(&world)?;
        }
    }

    engine.shutdown().await?;
    if let Some(recorder) = recorder {
        let samples = recorder.samples();
        recorder.finish()?;
        info!(samples, "snapshots written");
    }
    info!(polls, "done");
    Ok(())
}
