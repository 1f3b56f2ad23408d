//! Integration tests for lift-output.

#[cfg(test)]
mod trace_tests {
    use std::io::Cursor;

    use lift_arrivals::FileArrivals;
    use lift_core::{Floor, SimConfig};
    use lift_moving::ShortSighted;
    use lift_sim::Sim;
    use tempfile::TempDir;

    use crate::trace::RoundTraceWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn config() -> SimConfig {
        SimConfig {
            num_floors: 5,
            num_elevators: 1,
            elevator_capacity: 1,
            seed: 42,
            visualize: false,
        }
    }

    fn one_person_sim() -> Sim<FileArrivals, ShortSighted> {
        let arrivals = FileArrivals::from_reader(Floor(5), Cursor::new(b"0, 1, 3\n" as &[u8])).unwrap();
        Sim::new(config(), arrivals, ShortSighted).unwrap()
    }

    #[test]
    fn header_row_is_written_eagerly() {
        let dir = tmp();
        let path = dir.path().join("trace.csv");
        let mut w = RoundTraceWriter::from_path(&path).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["round", "arrived", "boarded", "disembarked", "waiting", "riding", "up", "down", "stay"]
        );
    }

    #[test]
    fn one_summary_row_per_round() {
        let dir = tmp();
        let path = dir.path().join("trace.csv");
        let mut trace = RoundTraceWriter::from_path(&path).unwrap();

        // One person, floor 1 → 3: boards in round 0, rides up, steps off in
        // round 2, after which the car stays put.
        one_person_sim().run(3, &mut trace).unwrap();
        assert!(trace.take_error().is_none(), "no write errors expected");
        trace.finish().unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<Vec<String>> = rdr
            .records()
            .map(|r| r.unwrap().iter().map(str::to_owned).collect())
            .collect();

        assert_eq!(rows.len(), 3, "expected one row per round");
        assert_eq!(rows[0], ["0", "1", "1", "0", "0", "1", "1", "0", "0"]);
        assert_eq!(rows[1], ["1", "0", "0", "0", "0", "1", "1", "0", "0"]);
        assert_eq!(rows[2], ["2", "0", "0", "1", "0", "0", "0", "0", "1"]);
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = RoundTraceWriter::from_path(&dir.path().join("trace.csv")).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn buffer_sink_works_too() {
        let mut trace = RoundTraceWriter::new(Vec::new()).unwrap();
        one_person_sim().run(3, &mut trace).unwrap();
        assert!(trace.take_error().is_none());
    }
}

#[cfg(test)]
mod console_tests {
    use std::io::Cursor;

    use lift_arrivals::FileArrivals;
    use lift_core::{Floor, SimConfig};
    use lift_moving::ShortSighted;
    use lift_sim::Sim;

    use crate::console::ConsoleVisualizer;

    fn config() -> SimConfig {
        SimConfig {
            num_floors: 5,
            num_elevators: 1,
            elevator_capacity: 1,
            seed: 42,
            visualize: false,
        }
    }

    #[test]
    fn renders_headers_events_and_the_building() {
        let config = config();
        let arrivals = FileArrivals::from_reader(Floor(5), Cursor::new(b"0, 1, 3\n" as &[u8])).unwrap();
        let mut sim = Sim::new(config.clone(), arrivals, ShortSighted).unwrap();

        let mut console = ConsoleVisualizer::new(&config, Vec::new());
        sim.run(3, &mut console).unwrap();
        assert!(console.take_error().is_none(), "no write errors expected");

        let text = String::from_utf8(console.into_inner()).unwrap();
        assert!(text.contains("R0"), "round banner missing:\n{text}");
        assert!(text.contains("board  F1 → F3"), "boarding line missing:\n{text}");
        assert!(text.contains("arrive F3 after 2 rounds"), "alighting line missing:\n{text}");
        assert!(text.contains("F5"), "top floor missing from diagram:\n{text}");
        assert!(text.contains("moves: up"), "movement footer missing:\n{text}");
    }
}
