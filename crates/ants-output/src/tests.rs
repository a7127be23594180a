//! Unit tests for ants-output.

#[cfg(test)]
mod csv_tests {
    use ants_colony::{Agent, AgentState, Pheromone, TrailState};
    use ants_core::{AgentId, AntRng, Distance, Orientation, PheromoneId, WorldPosition};
    use ants_engine::WorldState;
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::recorder::SnapshotRecorder;
    use crate::row::{AgentSnapshotRow, PheromoneSnapshotRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn world() -> WorldState {
        let mut world = WorldState::empty(AntRng::seeded(1));
        let trail = TrailState::new(Distance::new(10.0).unwrap());
        world.insert_agent(
            Agent::hatch(AgentId(2), WorldPosition::new(3.0, 4.0), Orientation::SOUTH),
            trail,
        );
        world.insert_agent(
            Agent::hatch(AgentId(1), WorldPosition::new(1.5, 2.5), Orientation::EAST)
                .with_state(AgentState::Returning)
                .visiting(PheromoneId(7)),
            trail,
        );
        let p = Pheromone::fresh(PheromoneId(7), WorldPosition::new(8.0, 9.0));
        world.pheromones.insert(p.id, p);
        world
    }

    fn records(dir: &TempDir, file: &str) -> Vec<Vec<String>> {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        rdr.records()
            .map(|r| r.unwrap().iter().map(str::to_owned).collect())
            .collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("agent_snapshots.csv").exists());
        assert!(dir.path().join("pheromone_snapshots.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["sample", "agent_id", "state", "x", "y", "orientation", "visited"]);

        let mut rdr = csv::Reader::from_path(dir.path().join("pheromone_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["sample", "pheromone_id", "strength", "x", "y"]);
    }

    #[test]
    fn rows_follow_id_order() {
        let rows = AgentSnapshotRow::from_world(3, &world());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].agent_id, 1);
        assert_eq!(rows[0].state, AgentState::Returning);
        assert_eq!(rows[0].visited, 1);
        assert_eq!(rows[1].agent_id, 2);
        assert_eq!(rows[1].orientation, 180.0);
        assert!(rows.iter().all(|r| r.sample == 3));

        let rows = PheromoneSnapshotRow::from_world(3, &world());
        assert_eq!(rows, [PheromoneSnapshotRow { sample: 3, pheromone_id: 7, strength: 1.0, x: 8.0, y: 9.0 }]);
    }

    #[test]
    fn recorder_numbers_samples() {
        let dir = tmp();
        let mut recorder = SnapshotRecorder::new(CsvWriter::new(dir.path()).unwrap());
        let world = world();
        recorder.record(&world).unwrap();
        recorder.record(&world).unwrap();
        assert_eq!(recorder.samples(), 2);
        recorder.finish().unwrap();

        let agents = records(&dir, "agent_snapshots.csv");
        assert_eq!(agents.len(), 4);
        assert_eq!(agents[0], ["0", "1", "returning", "1.5", "2.5", "90", "1"]);
        assert_eq!(agents[3][0], "1");
        assert_eq!(agents[3][2], "inside");

        let pheromones = records(&dir, "pheromone_snapshots.csv");
        assert_eq!(pheromones, [["0", "7", "1", "8", "9"], ["1", "7", "1", "8", "9"]]);
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn empty_world_writes_headers_only() {
        let dir = tmp();
        let mut recorder = SnapshotRecorder::new(CsvWriter::new(dir.path()).unwrap());
        recorder.record(&WorldState::empty(AntRng::seeded(0))).unwrap();
        recorder.finish().unwrap();
        assert!(records(&dir, "agent_snapshots.csv").is_empty());
        assert!(records(&dir, "pheromone_snapshots.csv").is_empty());
    }
}
