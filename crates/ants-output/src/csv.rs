//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `agent_snapshots.csv`
//! - `pheromone_snapshots.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, OutputResult, PheromoneSnapshotRow};

pub struct CsvWriter {
    agents:     Writer<File>,
    pheromones: Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Create the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut agents = Writer::from_path(dir.join("agent_snapshots.csv"))?;
        agents.write_record(["sample", "agent_id", "state", "x", "y", "orientation", "visited"])?;

        let mut pheromones = Writer::from_path(dir.join("pheromone_snapshots.csv"))?;
        pheromones.write_record(["sample", "pheromone_id", "strength", "x", "y"])?;

        Ok(Self { agents, pheromones, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_agents(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.agents.write_record(&[
                row.sample.to_string(),
                row.agent_id.to_string(),
                row.state.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.orientation.to_string(),
                row.visited.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_pheromones(&mut self, rows: &[PheromoneSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.pheromones.write_record(&[
                row.sample.to_string(),
                row.pheromone_id.to_string(),
                row.strength.to_string(),
                row.x.to_string(),
                row.y.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.agents.flush()?;
        self.pheromones.flush()?;
        Ok(())
    }
}
