//! Auto-associative memory — Hebbian correlation learning with one-shot recall.
//!
//! Every learned pattern is folded into a single symmetric weight matrix as
//! the outer product of its bipolar form. Units that are on together get a
//! positive coupling, units that disagree get a negative one. Recall pushes a
//! query through the weights once and thresholds the result; there is no
//! relaxation loop.

use crate::error::{ensure_len, Result};
use crate::matrix::WeightMatrix;
use crate::vector::BinaryVector;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// How a unit whose activation is exactly zero is resolved during recall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZeroActivation {
    /// Zero counts as non-negative and turns the unit on.
    #[default]
    On,
    /// Zero turns the unit off, as a sign function with `sign(0) = 0`
    /// followed by the bipolar-to-binary remap would. This is how the
    /// original pattern-recall tool resolved ties, so an untrained memory
    /// recalls every query as all off.
    Off,
}

/// Recall configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecallConfig {
    #[serde(default)]
    pub zero_activation: ZeroActivation,
}

/// What a call to [`AssociativeMemory::learn`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LearnOutcome {
    /// The pattern's outer product was accumulated into the weights.
    Learned,
    /// The pattern had no "on" bits; weights were left untouched.
    EmptyPattern,
}

impl LearnOutcome {
    pub fn is_learned(&self) -> bool {
        matches!(self, LearnOutcome::Learned)
    }
}

/// A Hopfield-style auto-associative memory over vectors of a fixed length.
#[derive(Debug, Clone)]
pub struct AssociativeMemory {
    size: usize,
    weights: WeightMatrix,
    config: RecallConfig,
    patterns_learned: usize,
}

impl AssociativeMemory {
    /// A fresh memory for vectors of length `size`, all weights zero.
    pub fn new(size: usize) -> Self {
        Self::with_config(size, RecallConfig::default())
    }

    pub fn with_config(size: usize, config: RecallConfig) -> Self {
        Self {
            size,
            weights: WeightMatrix::zeros(size),
            config,
            patterns_learned: 0,
        }
    }

    /// Vector length this memory accepts.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn weights(&self) -> &WeightMatrix {
        &self.weights
    }

    pub fn config(&self) -> RecallConfig {
        self.config
    }

    /// Number of patterns committed so far (repeats counted).
    pub fn patterns_learned(&self) -> usize {
        self.patterns_learned
    }

    /// Accumulate `pattern` into the weights.
    ///
    /// A blank pattern is skipped and reported as [`LearnOutcome::EmptyPattern`]:
    /// its bipolar form is all -1, whose outer product is far from zero, so it
    /// would otherwise bias every coupling positive.
    ///
    /// Learning the same pattern twice doubles its contribution.
    pub fn learn(&mut self, pattern: &BinaryVector) -> Result<LearnOutcome> {
        ensure_len(self.size, pattern.len())?;

        if pattern.is_blank() {
            warn!(size = self.size, "Nothing to learn: pattern has no active bits");
            return Ok(LearnOutcome::EmptyPattern);
        }

        self.weights.add_outer_product(&pattern.to_bipolar());
        self.patterns_learned += 1;
        debug!(
            active = pattern.count_ones(),
            total = self.patterns_learned,
            "Learned pattern"
        );
        Ok(LearnOutcome::Learned)
    }

    /// Raw activations `W · q` for the bipolar form `q` of `query`.
    pub fn activations(&self, query: &BinaryVector) -> Result<Vec<f64>> {
        ensure_len(self.size, query.len())?;
        Ok(self.weights.mul_vec(&query.to_bipolar()).to_vec())
    }

    /// One synchronous update of every unit from `query`.
    ///
    /// Positive activation turns a unit on, negative turns it off, and zero
    /// follows [`RecallConfig::zero_activation`].
    pub fn recall(&self, query: &BinaryVector) -> Result<BinaryVector> {
        let zero_on = self.config.zero_activation == ZeroActivation::On;
        let bits: Vec<bool> = self
            .activations(query)?
            .into_iter()
            .map(|a| if a == 0.0 { zero_on } else { a > 0.0 })
            .collect();

        let recalled = BinaryVector::from(bits);
        let changed = query.hamming_distance(&recalled)?;
        debug!(changed, "Recalled pattern");
        Ok(recalled)
    }
}
