//! `ants-output` — snapshot export for the colony engine.
//!
//! | Backend | Files created                                        |
//! |---------|------------------------------------------------------|
//! | CSV     | `agent_snapshots.csv`, `pheromone_snapshots.csv`     |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SnapshotRecorder`], which turns each [`WorldState`][ants_engine::WorldState]
//! snapshot into one numbered sample.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ants_output::{CsvWriter, SnapshotRecorder};
//!
//! let mut recorder = SnapshotRecorder::new(CsvWriter::new(Path::new("./output"))?);
//! recorder.record(&engine.snapshot().await?)?;
//! recorder.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod recorder;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use recorder::SnapshotRecorder;
pub use row::{AgentSnapshotRow, PheromoneSnapshotRow};
pub use writer::OutputWriter;
