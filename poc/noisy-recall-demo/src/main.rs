//! Engram Proof of Concept — Recall Under Noise
//!
//! Three glyphs are drawn into the workbench slots and learned. Each glyph
//! is then corrupted with an increasing number of flipped pixels and run
//! through recall and matching, showing where reconstruction and
//! identification start to fail.

use engram_core::error::Result;
use engram_core::vector::BinaryVector;
use engram_runtime::workbench::{Workbench, WorkbenchEvent};

const GLYPHS: [(&str, &str); 3] = [
    (
        "Tee",
        "##########
         ##########
         ....##....
         ....##....
         ....##....
         ....##....
         ....##....
         ....##....
         ....##....
         ....##....",
    ),
    (
        "Ell",
        "##........
         ##........
         ##........
         ##........
         ##........
         ##........
         ##........
         ##........
         ##########
         ##########",
    ),
    (
        "Oh",
        "..######..
         .#......#.
         #........#
         #........#
         #........#
         #........#
         #........#
         #........#
         .#......#.
         ..######..",
    ),
];

const NOISE_LEVELS: [usize; 5] = [0, 5, 10, 20, 35];

/// Flip `count` distinct cells chosen by a fixed linear congruential sequence.
fn corrupt(pattern: &BinaryVector, count: usize, seed: u64) -> Result<BinaryVector> {
    let mut noisy = pattern.clone();
    let mut flipped = vec![false; pattern.len()];
    let mut state = seed;
    let mut done = 0;
    while done < count.min(pattern.len()) {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let cell = (state >> 33) as usize % pattern.len();
        if !flipped[cell] {
            flipped[cell] = true;
            noisy.toggle(cell)?;
            done += 1;
        }
    }
    Ok(noisy)
}

fn main() -> Result<()> {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║  ENGRAM — Associative Memory                         ║");
    println!("║  Recall and identification under pixel noise         ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    let mut bench = Workbench::default();
    let grid = bench.grid();

    // --- Draw and learn the glyphs ---
    println!("── Learning Glyphs ──────────────────────────────────");
    println!();

    for (slot, (name, text)) in GLYPHS.iter().enumerate() {
        bench.load_slot_text(slot, text)?;
        println!("  {} (slot {}):", name, slot + 1);
        for line in grid.render(bench.slot(slot)?, '#', '.')?.lines() {
            println!("    {}", line);
        }
        println!();
    }

    for report in bench.learn_all()? {
        println!("  Status: {}", report.status());
    }
    println!();

    // --- Query with corrupted glyphs ---
    println!("── Corrupted Queries (tolerance {} bits) ──────────────", bench.tolerance());
    println!();
    println!("  {:<6} {:>6} {:>10} {:>10}", "glyph", "flips", "recalled", "matched");

    for (slot, (name, _)) in GLYPHS.iter().enumerate() {
        let original = bench.slot(slot)?.clone();
        for (i, &flips) in NOISE_LEVELS.iter().enumerate() {
            let seed = (slot * NOISE_LEVELS.len() + i) as u64 + 1;
            bench.set_query(corrupt(&original, flips, seed)?)?;
            let report = bench.query_and_match()?;

            let recalled = if report.recalled == original { "exact" } else { "wrong" };
            let matched = match &report.matched {
                Some(m) if m.index == slot => format!("slot {}", m.index + 1),
                Some(m) => format!("slot {}!", m.index + 1),
                None => "none".to_string(),
            };
            println!("  {:<6} {:>6} {:>10} {:>10}", name, flips, recalled, matched);
        }
    }
    println!();

    // --- Summary ---
    let events = bench.drain_events();
    let corrected = events
        .iter()
        .filter(|e| matches!(e, WorkbenchEvent::Recalled { changed_bits } if *changed_bits > 0))
        .count();

    println!("── Summary ──────────────────────────────────────────");
    println!();
    println!("  Queries that recall changed: {}", corrected);
    match serde_json::to_string_pretty(&bench.stats()) {
        Ok(stats) => println!("  {}", stats),
        Err(e) => eprintln!("  Failed to serialize stats: {}", e),
    }

    Ok(())
}
