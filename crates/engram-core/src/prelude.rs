//! Engram Core Prelude — convenient imports for common usage.
//!
//! ```rust
//! use engram_core::prelude::*;
//! ```

pub use crate::vector::BinaryVector;
pub use crate::matrix::WeightMatrix;
pub use crate::grid::Grid;

pub use crate::memory::{AssociativeMemory, LearnOutcome, RecallConfig, ZeroActivation};
pub use crate::matcher::{
    find_match, MatchPolicy, MatchResult, PatternMatcher, DEFAULT_TOLERANCE_RATIO,
};

pub use crate::error::{EngramError, Result};
