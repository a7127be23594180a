//! The `OutputWriter` trait implemented by export backends.

use crate::{AgentSnapshotRow, OutputResult, PheromoneSnapshotRow};

pub trait OutputWriter {
    /// Write every agent row of one snapshot.
    fn write_agents(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()>;

    /// Write every pheromone row of one snapshot.
    fn write_pheromones(&mut self, rows: &[PheromoneSnapshotRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
