//! `SnapshotRecorder<W>` — feeds world snapshots to an `OutputWriter`.

use ants_engine::WorldState;

use crate::row::{AgentSnapshotRow, PheromoneSnapshotRow};
use crate::writer::OutputWriter;
use crate::OutputResult;

/// Numbers successive snapshots and writes each one through `W`.
pub struct SnapshotRecorder<W: OutputWriter> {
    writer: W,
    sample: u64,
}

impl<W: OutputWriter> SnapshotRecorder<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, sample: 0 }
    }

    /// Write every agent and pheromone of `world` as the next sample.
    pub fn record(&mut self, world: &WorldState) -> OutputResult<()> {
        self.writer.write_agents(&AgentSnapshotRow::from_world(self.sample, world))?;
        self.writer.write_pheromones(&PheromoneSnapshotRow::from_world(self.sample, world))?;
        self.sample += 1;
        Ok(())
    }

    /// Samples written so far.
    pub fn samples(&self) -> u64 {
        self.sample
    }

    /// Flush the writer and hand it back.
    pub fn finish(mut self) -> OutputResult<W> {
        self.writer.finish()?;
        Ok(self.writer)
    }
}
