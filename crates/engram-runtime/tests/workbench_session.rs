//! Workbench session on the default 10×10 grid
//!
//! Draws three glyphs into the slots, learns them, then queries with
//! corrupted versions:
//! 1. A few flipped pixels are corrected by recall and identified by matching
//! 2. A pattern far from every slot reports no match
//! 3. Clearing resets the buffers but the memory keeps what it learned

use engram_runtime::prelude::*;

const TEE: &str = "
##########
##########
....##....
....##....
....##....
....##....
....##....
....##....
....##....
....##....
";

const ELL: &str = "
##........
##........
##........
##........
##........
##........
##........
##........
##########
##########
";

const OH: &str = "
..######..
.#......#.
#........#
#........#
#........#
#........#
#........#
#........#
.#......#.
..######..
";

fn loaded() -> Workbench {
    let mut bench = Workbench::default();
    bench.load_slot_text(0, TEE).unwrap();
    bench.load_slot_text(1, ELL).unwrap();
    bench.load_slot_text(2, OH).unwrap();
    bench
}

#[test]
fn every_slot_is_learned_and_recalled_exactly() {
    let mut bench = loaded();
    let reports = bench.learn_all().unwrap();
    assert!(reports.iter().all(|r| r.outcome.is_learned()));
    assert_eq!(bench.status().to_string(), "Pattern 3 learned");

    for slot in 0..3 {
        let pattern = bench.slot(slot).unwrap().clone();
        assert_eq!(bench.memory().recall(&pattern).unwrap(), pattern);
    }
}

#[test]
fn noisy_query_is_corrected_and_matched() {
    let mut bench = loaded();
    bench.learn_all().unwrap();

    bench.load_query_text(TEE).unwrap();
    for (row, col) in [(0, 0), (5, 5), (9, 9), (3, 2), (7, 7)] {
        bench.toggle_query_cell(row, col).unwrap();
    }

    let report = bench.query_and_match().unwrap();
    let tee = bench.slot(0).unwrap().clone();
    assert_eq!(report.recalled, tee);

    let matched = report.matched.as_ref().expect("tee should match within 10 bits");
    assert_eq!(matched.index, 0);
    assert_eq!(matched.distance, 5);
    assert_eq!(bench.result(), Some(&tee));
    assert_eq!(report.status(), Status::QueryDisplayed);
    assert_eq!(bench.status().to_string(), "Query result displayed");
}

#[test]
fn distant_query_reports_no_match() {
    let mut bench = loaded();
    bench.learn_all().unwrap();

    let grid = bench.grid();
    let checker: Vec<bool> = (0..grid.len()).map(|i| (i / 10 + i % 10) % 2 == 1).collect();
    bench.set_query(BinaryVector::from(checker)).unwrap();

    let report = bench.query_and_match().unwrap();
    assert!(report.matched.is_none());
    assert!(bench.result().is_none());
    assert_eq!(bench.status(), Status::NoMatch);

    assert!(bench.show_learned_pattern().unwrap().is_none());
    assert_eq!(bench.stats().queries_run, 1);
    assert_eq!(bench.stats().matches_found, 0);
}

#[test]
fn show_learned_pattern_skips_the_memory() {
    // nothing learned: recall would be useless, matching still works
    let mut bench = loaded();
    bench.load_query_text(ELL).unwrap();
    bench.toggle_query_cell(0, 5).unwrap();

    let matched = bench.show_learned_pattern().unwrap().unwrap();
    assert_eq!(matched.index, 1);
    assert_eq!(bench.status().to_string(), "Learned pattern 2 displayed");
    assert_eq!(bench.memory().patterns_learned(), 0);
}

#[test]
fn blank_slot_is_reported_and_skipped() {
    let mut bench = loaded();
    bench.clear_slot(1).unwrap();

    let reports = bench.learn_all().unwrap();
    assert_eq!(reports[1].status().to_string(), "Nothing to learn in Pattern 2");
    assert_eq!(bench.memory().patterns_learned(), 2);
    assert_eq!(bench.stats().slots_filled, 2);
}

#[test]
fn clear_resets_buffers_but_not_weights() {
    let mut bench = loaded();
    bench.learn_all().unwrap();
    let weights = bench.memory().weights().clone();

    bench.clear();
    assert_eq!(bench.status().to_string(), "Cleared");
    assert_eq!(bench.stats().slots_filled, 0);
    assert_eq!(bench.memory().weights(), &weights);

    let events = bench.drain_events();
    assert!(matches!(events.last(), Some(WorkbenchEvent::Cleared)));
}

#[test]
fn reports_and_stats_export_as_json() {
    let mut bench = loaded();
    bench.learn_all().unwrap();
    bench.load_query_text(OH).unwrap();
    let report = bench.query_and_match().unwrap();

    let json = serde_json::to_string(&report).unwrap();
    let back: QueryReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
    assert_eq!(back.matched.map(|m| m.index), Some(2));

    let stats = serde_json::to_value(bench.stats()).unwrap();
    assert_eq!(stats["vector_len"], 100);
    assert_eq!(stats["patterns_learned"], 3);
    assert_eq!(stats["queries_run"], 1);
    assert_eq!(stats["matches_found"], 1);
    assert_eq!(stats["tolerance"], 10);
}
