//! Engram Runtime Prelude — convenient imports for common usage.

pub use engram_core::prelude::*;

pub use crate::workbench::{
    QueryReport, SlotLearnReport, Status, Workbench, WorkbenchConfig, WorkbenchEvent,
    WorkbenchStats, DEFAULT_GRID_SIZE, DEFAULT_SLOT_COUNT,
};
