//! # Engram
//!
//! Hopfield-style associative memory for binary patterns.
//!
//! Engram learns a handful of on/off patterns by Hebbian correlation and,
//! given a noisy or partial query, recalls the stored pattern it most
//! resembles. A Hamming-tolerance matcher identifies which of the learned
//! patterns a query corresponds to.
//!
//! ## Quick Start
//!
//! ```rust
//! use engram::prelude::*;
//!
//! let grid = Grid::new(3);
//! let diagonal = grid.parse("#..\n.#.\n..#\n").unwrap();
//!
//! let mut memory = AssociativeMemory::new(grid.len());
//! memory.learn(&diagonal).unwrap();
//!
//! // one pixel off
//! let noisy = grid.parse("#..\n...\n..#\n").unwrap();
//! assert_eq!(memory.recall(&noisy).unwrap(), diagonal);
//!
//! let tolerance = 1;
//! assert_eq!(find_match(&noisy, &[diagonal], tolerance).unwrap(), Some(0));
//! ```
//!
//! ## Workbench
//!
//! The [`runtime`] crate wraps a memory with reference slots and a query
//! buffer, and reports each step as a [`Status`](prelude::Status):
//!
//! ```rust
//! use engram::prelude::*;
//!
//! let mut bench = Workbench::new(WorkbenchConfig {
//!     grid_size: 2,
//!     ..WorkbenchConfig::default()
//! }).unwrap();
//!
//! bench.load_slot_text(0, "#.\n.#").unwrap();
//! bench.learn_all().unwrap();
//!
//! bench.load_query_text("#.\n.#").unwrap();
//! let report = bench.query_and_match().unwrap();
//! assert_eq!(report.matched.map(|m| m.index), Some(0));
//! println!("Status: {}", bench.status());
//! ```
//!
//! ## Architecture
//!
//! - [`engram_core`] - Vectors, weight matrix, grid format, memory, matcher
//! - [`engram_runtime`] - Workbench: slots, query buffer, events, stats
//!
//! ### Hebbian Learning
//!
//! "Neurons that fire together wire together."
//!
//! - Each pattern is mapped to bipolar form (off = -1, on = +1)
//! - Its outer product is added to the weights; self-connections stay zero
//! - Blank patterns are skipped rather than learned
//! - Recall is one synchronous thresholding pass, not an iteration to a fixed point

pub use engram_core as core;
pub use engram_runtime as runtime;

/// Prelude module for convenient imports.
///
/// ```rust
/// use engram::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use engram_core::grid::Grid;
    pub use engram_core::matrix::WeightMatrix;
    pub use engram_core::vector::BinaryVector;

    // Memory and matching
    pub use engram_core::matcher::{
        find_match, MatchPolicy, MatchResult, PatternMatcher, DEFAULT_TOLERANCE_RATIO,
    };
    pub use engram_core::memory::{AssociativeMemory, LearnOutcome, RecallConfig, ZeroActivation};

    // Error types
    pub use engram_core::error::{EngramError, Result};

    // Runtime
    pub use engram_runtime::workbench::{
        QueryReport, SlotLearnReport, Status, Workbench, WorkbenchConfig, WorkbenchEvent,
        WorkbenchStats,
    };
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
