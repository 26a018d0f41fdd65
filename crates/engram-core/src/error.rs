//! Error types for Engram operations.
//!
//! Precondition violations surface here. An empty pattern and a query with
//! no matching reference are expected outcomes and are *not* errors.

use thiserror::Error;

/// Result type for Engram operations.
pub type Result<T> = std::result::Result<T, EngramError>;

/// Errors that can occur during Engram operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngramError {
    /// A vector's length does not match the dimension it is used against.
    #[error("Shape mismatch: expected length {expected}, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// A bit position past the end of a vector.
    #[error("Index {index} out of range for vector of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A grid cell outside a `size × size` grid.
    #[error("Cell ({row}, {col}) out of range for {size}×{size} grid")]
    CellOutOfRange { row: usize, col: usize, size: usize },

    /// A raw bit sequence contained something other than 0 or 1.
    #[error("Invalid bit at index {index}: {value} (must be 0 or 1)")]
    InvalidBit { index: usize, value: u8 },

    /// A text pattern could not be parsed into a grid.
    #[error("Pattern format error on line {line}: {reason}")]
    PatternFormat { line: usize, reason: String },

    /// A reference slot index is outside the slot set.
    #[error("Slot {index} out of range (have {count} slots)")]
    SlotOutOfRange { index: usize, count: usize },

    /// A configuration value is unusable.
    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },
}

// Convenience constructors
impl EngramError {
    pub fn shape_mismatch(expected: usize, actual: usize) -> Self {
        EngramError::ShapeMismatch { expected, actual }
    }

    pub fn pattern_format(line: usize, reason: impl Into<String>) -> Self {
        EngramError::PatternFormat {
            line,
            reason: reason.into(),
        }
    }

    pub fn invalid_config(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        EngramError::InvalidConfig {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// Fail with [`EngramError::ShapeMismatch`] unless `actual == expected`.
pub(crate) fn ensure_len(expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(EngramError::shape_mismatch(expected, actual))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_mismatch_message_names_both_lengths() {
        let err = EngramError::shape_mismatch(4, 2);
        assert_eq!(err.to_string(), "Shape mismatch: expected length 4, got 2");
    }

    #[test]
    fn ensure_len_accepts_equal_lengths() {
        assert!(ensure_len(3, 3).is_ok());
        assert_eq!(ensure_len(3, 5), Err(EngramError::shape_mismatch(3, 5)));
    }
}
