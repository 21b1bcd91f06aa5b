#[cfg(test)]
mod telemetry_snapshot_tests {
    use std::time::Duration;

    use checklist_core::io::parse_document;
    use checklist_core::telemetry::{Stage, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};

    fn make_counters() -> TelemetryCounters {
        TelemetryCounters {
            categories: 1,
            groups: 2,
            checklists: 3,
            items: 10,
            bytes_document: 400,
            bytes_plaintext: 100,
            bytes_padding: 12,
            bytes_container: 128,
        }
    }

    fn make_timer() -> TelemetryTimer {
        let mut timer = TelemetryTimer::new();
        std::thread::sleep(Duration::from_millis(20)); // ensure elapsed > stage times
        timer.add_stage_time(Stage::Read, Duration::from_millis(5));
        timer.add_stage_time(Stage::Write, Duration::from_millis(10));
        timer.finish();
        timer
    }

    #[test]
    fn snapshot_copies_counters() {
        let snapshot = TelemetrySnapshot::from(&make_counters(), &make_timer());
        assert_eq!(snapshot.items, 10);
        assert_eq!(snapshot.bytes_container, 128);
        assert!(snapshot.elapsed >= Duration::from_millis(20));
    }

    #[test]
    fn total_stage_time_sums_stages() {
        let snapshot = TelemetrySnapshot::from(&make_counters(), &make_timer());
        assert_eq!(snapshot.total_stage_time(), Duration::from_millis(15));
        assert!(snapshot.has_all_stages(&[Stage::Read, Stage::Write]));
        assert!(!snapshot.has_all_stages(&[Stage::Encrypt]));
    }

    #[test]
    fn sanity_check_accepts_consistent_snapshot() {
        let snapshot = TelemetrySnapshot::from(&make_counters(), &make_timer());
        assert!(snapshot.sanity_check());
    }

    #[test]
    fn sanity_check_rejects_bad_container_math() {
        let mut counters = make_counters();
        counters.bytes_container = 200;
        assert!(!TelemetrySnapshot::from(&counters, &make_timer()).sanity_check());
    }

    #[test]
    fn sanity_check_rejects_zero_padding() {
        let mut counters = make_counters();
        counters.bytes_plaintext = 112;
        counters.bytes_padding = 0;
        assert!(!TelemetrySnapshot::from(&counters, &make_timer()).sanity_check());
    }

    #[test]
    fn sanity_check_rejects_stage_time_over_elapsed() {
        let mut timer = TelemetryTimer::new();
        timer.add_stage_time(Stage::Render, Duration::from_secs(60));
        timer.finish();
        assert!(!TelemetrySnapshot::from(&TelemetryCounters::default(), &timer).sanity_check());
    }

    #[test]
    fn add_container_derives_padding() {
        let mut counters = TelemetryCounters::default();
        counters.add_container(100, 128);
        assert_eq!(counters.bytes_padding, 12);
        assert_eq!(counters.bytes_plaintext, 100);
    }

    #[test]
    fn add_tree_counts_nodes() {
        let doc = parse_document(
            "categories:\n  - groups:\n      - checklists:\n          - items: [{text: a}, {text: b}]\n          - items: []\n",
        )
        .unwrap();

        let mut counters = TelemetryCounters::default();
        counters.add_tree(&doc);
        assert_eq!((counters.categories, counters.groups, counters.checklists, counters.items), (1, 1, 2, 2));
        assert_eq!(counters.nodes(), 6);
    }

    #[test]
    fn stage_get_accumulates_and_defaults_to_zero() {
        let timer = make_timer();
        assert_eq!(timer.stage_times.get(Stage::Read), Duration::from_millis(5));
        assert_eq!(timer.stage_times.get(Stage::Encrypt), Duration::ZERO);

        let mut again = make_timer();
        again.add_stage_time(Stage::Read, Duration::from_millis(3));
        assert_eq!(again.stage_times.get(Stage::Read), Duration::from_millis(8));
    }

    #[test]
    fn measure_records_stage_and_returns_value() {
        let mut timer = TelemetryTimer::new();
        let v = timer.measure(Stage::Map, || 41 + 1);
        assert_eq!(v, 42);
        assert!(timer.stage_times.has_all(&[Stage::Map]));
        assert_eq!(Stage::Map.to_string(), "map");
    }
}
