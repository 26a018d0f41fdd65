//! Loading pattern files into a workbench.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use engram::prelude::*;
use std::path::{Path, PathBuf};

use crate::config::Config;

/// Build a workbench from config, sized for `slots`, and load every slot file.
pub fn workbench_with_slots(config: &Config, slots: &[PathBuf]) -> Result<Workbench> {
    let configured = config.grid.slots;
    if slots.len() > configured {
        bail!(
            "{} slot files given but only {} slots configured (set {} in engram.toml)",
            slots.len(),
            configured,
            "[grid] slots".cyan()
        );
    }

    let mut bench = Workbench::new(config.workbench())?;
    for (index, path) in slots.iter().enumerate() {
        let text = read(path)?;
        bench
            .load_slot_text(index, &text)
            .with_context(|| format!("Invalid pattern in {}", path.display()))?;
    }
    Ok(bench)
}

/// Load the query file into the workbench.
pub fn load_query(bench: &mut Workbench, path: &Path) -> Result<()> {
    let text = read(path)?;
    bench
        .load_query_text(&text)
        .with_context(|| format!("Invalid pattern in {}", path.display()))
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read pattern: {}", path.display()))
}

/// Render a vector as an indented grid.
pub fn render(config: &Config, grid: Grid, vector: &BinaryVector) -> Result<String> {
    let text = grid.render(vector, config.render.on, config.render.off)?;
    Ok(text.lines().map(|line| format!("    {}\n", line)).collect())
}
