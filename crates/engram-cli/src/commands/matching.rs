//! Find the slot a query matches, without learning anything.

use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::patterns::{load_query, render, workbench_with_slots};

pub fn run(slots: &[PathBuf], query: &Path) -> Result<()> {
    let config = Config::load()?;
    let mut bench = workbench_with_slots(&config, slots)?;
    load_query(&mut bench, query)?;

    match bench.show_learned_pattern()? {
        Some(m) => {
            print!("{}", render(&config, bench.grid(), &m.pattern)?);
            println!();
            println!(
                "{} Status: {} {}",
                "✓".green(),
                bench.status(),
                format!("(distance {})", m.distance).dimmed()
            );
        }
        None => {
            println!(
                "{} Status: {} {}",
                "•".yellow(),
                bench.status().to_string().yellow(),
                format!("(tolerance {})", bench.tolerance()).dimmed()
            );
        }
    }

    Ok(())
}
