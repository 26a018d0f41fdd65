//! # Engram Core
//!
//! Binary vectors, correlation weights, and the two operations built on them:
//!
//! - **Associative memory** — Hebbian outer-product learning into a
//!   symmetric, zero-diagonal weight matrix, and single-pass recall of a
//!   stored pattern from a noisy or partial query
//! - **Pattern matching** — first reference within a Hamming tolerance
//!
//! ## Quick Start
//!
//! ```rust
//! use engram_core::prelude::*;
//!
//! let mut memory = AssociativeMemory::new(4);
//! let pattern = BinaryVector::from_bits(&[1, 0, 1, 0]).unwrap();
//! memory.learn(&pattern).unwrap();
//!
//! assert_eq!(memory.recall(&pattern).unwrap(), pattern);
//! assert_eq!(find_match(&pattern, &[pattern.clone()], 0).unwrap(), Some(0));
//! ```

pub mod error;
pub mod vector;
pub mod matrix;
pub mod grid;
pub mod memory;
pub mod matcher;
pub mod prelude;
