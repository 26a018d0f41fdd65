//! Binary pattern vectors.
//!
//! A [`BinaryVector`] is the unit of exchange between Engram and whatever
//! authors patterns: a fixed-length, ordered sequence of on/off bits.
//! Position identity matters, so nothing here reorders bits.

use crate::error::{ensure_len, EngramError, Result};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered sequence of bits (0/1).
///
/// Serializes as a list of `0`/`1` integers; deserialization rejects any
/// other value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct BinaryVector {
    bits: Vec<bool>,
}

impl BinaryVector {
    /// Build a vector from raw 0/1 values.
    pub fn from_bits(bits: &[u8]) -> Result<Self> {
        let bits = bits
            .iter()
            .enumerate()
            .map(|(index, &value)| match value {
                0 => Ok(false),
                1 => Ok(true),
                _ => Err(EngramError::InvalidBit { index, value }),
            })
            .collect::<Result<Vec<bool>>>()?;
        Ok(Self { bits })
    }

    /// An all-off vector of length `len`.
    pub fn zeros(len: usize) -> Self {
        Self {
            bits: vec![false; len],
        }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Bit at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Number of "on" bits.
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// True when no bit is on. Blank patterns carry no signal to learn.
    pub fn is_blank(&self) -> bool {
        !self.bits.iter().any(|&b| b)
    }

    /// Bipolar form: off maps to -1.0, on to +1.0.
    pub fn to_bipolar(&self) -> Array1<f64> {
        self.bits
            .iter()
            .map(|&b| if b { 1.0 } else { -1.0 })
            .collect()
    }

    /// Raw 0/1 values.
    pub fn to_u8_vec(&self) -> Vec<u8> {
        self.bits.iter().map(|&b| u8::from(b)).collect()
    }

    /// Count of positions where `self` and `other` differ.
    pub fn hamming_distance(&self, other: &BinaryVector) -> Result<usize> {
        ensure_len(self.len(), other.len())?;
        Ok(self
            .bits
            .iter()
            .zip(&other.bits)
            .filter(|(a, b)| a != b)
            .count())
    }

    /// Flip the bit at `index`. Returns the new value.
    pub fn toggle(&mut self, index: usize) -> Result<bool> {
        let len = self.len();
        let bit = self
            .bits
            .get_mut(index)
            .ok_or(EngramError::IndexOutOfRange { index, len })?;
        *bit = !*bit;
        Ok(*bit)
    }

    /// Set the bit at `index`.
    pub fn set(&mut self, index: usize, on: bool) -> Result<()> {
        let len = self.len();
        let bit = self
            .bits
            .get_mut(index)
            .ok_or(EngramError::IndexOutOfRange { index, len })?;
        *bit = on;
        Ok(())
    }
}

impl From<Vec<bool>> for BinaryVector {
    fn from(bits: Vec<bool>) -> Self {
        Self { bits }
    }
}

impl TryFrom<Vec<u8>> for BinaryVector {
    type Error = EngramError;

    fn try_from(bits: Vec<u8>) -> Result<Self> {
        Self::from_bits(&bits)
    }
}

impl TryFrom<&[u8]> for BinaryVector {
    type Error = EngramError;

    fn try_from(bits: &[u8]) -> Result<Self> {
        Self::from_bits(bits)
    }
}

impl From<BinaryVector> for Vec<u8> {
    fn from(v: BinaryVector) -> Self {
        v.to_u8_vec()
    }
}

impl fmt::Display for BinaryVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.bits {
            f.write_str(if b { "1" } else { "0" })?;
        }
        Ok(())
    }
}
