//! Learn the slots, recall the query and match it.

use anyhow::Result;
use colored::Colorize;
use engram::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::patterns::{load_query, render, workbench_with_slots};

#[derive(Serialize)]
struct RecallOutput<'a> {
    learned: &'a [SlotLearnReport],
    report: &'a QueryReport,
    status: String,
    stats: WorkbenchStats,
}

pub fn run(slots: &[PathBuf], query: &Path, json: bool) -> Result<()> {
    let config = Config::load()?;
    let mut bench = workbench_with_slots(&config, slots)?;

    let learned = bench.learn_all()?;
    load_query(&mut bench, query)?;
    let report = bench.query_and_match()?;

    if json {
        let output = RecallOutput {
            learned: &learned,
            report: &report,
            status: bench.status().to_string(),
            stats: bench.stats(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for r in &learned {
        let status = r.status().to_string();
        match r.outcome {
            LearnOutcome::Learned => println!("{} Status: {}", "✓".green(), status),
            LearnOutcome::EmptyPattern => println!("{} Status: {}", "•".yellow(), status.yellow()),
        }
    }
    println!();

    let grid = bench.grid();
    println!("{} Recalled pattern:", "→".blue());
    print!("{}", render(&config, grid, &report.recalled)?);
    println!();

    match &report.matched {
        Some(m) => {
            println!(
                "{} Matches slot {} {}",
                "→".blue(),
                (m.index + 1).to_string().cyan().bold(),
                format!("(distance {} ≤ {})", m.distance, bench.tolerance()).dimmed()
            );
            print!("{}", render(&config, grid, &m.pattern)?);
            println!();
            println!("{} Status: {}", "✓".green(), bench.status());
        }
        None => {
            println!("{} Status: {}", "•".yellow(), bench.status().to_string().yellow());
        }
    }

    Ok(())
}
