//! Learn the slots and summarize the resulting weights.

use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

use crate::config::Config;
use crate::patterns::workbench_with_slots;

pub fn run(slots: &[PathBuf], json: bool) -> Result<()> {
    let config = Config::load()?;
    let mut bench = workbench_with_slots(&config, slots)?;
    bench.learn_all()?;

    let weights = bench.memory().weights();

    if json {
        println!("{}", serde_json::to_string(weights)?);
        return Ok(());
    }

    let check = |ok: bool| if ok { "yes".green() } else { "NO".red().bold() };

    println!("{}", "Weight Matrix".bold());
    println!("{}", "═".repeat(30));
    println!("  Dimension:        {} × {}", weights.dim(), weights.dim());
    println!("  Patterns learned: {}", bench.memory().patterns_learned());
    println!("  Symmetric:        {}", check(weights.is_symmetric()));
    println!("  Zero diagonal:    {}", check(weights.has_zero_diagonal()));
    if let Some((lo, hi)) = weights.min_max() {
        println!("  Weight range:     {} .. {}", lo, hi);
    }

    Ok(())
}
