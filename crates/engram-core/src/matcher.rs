//! Pattern matching by Hamming tolerance.
//!
//! The matcher answers "which learned pattern is this query?" by scanning the
//! reference set in order and stopping at the first reference within the
//! tolerance. It is deliberately not a best-of-all search: when two
//! references are both close enough, the earlier slot wins.

use crate::error::{ensure_len, EngramError, Result};
use crate::vector::BinaryVector;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default share of the vector length allowed to differ.
pub const DEFAULT_TOLERANCE_RATIO: f64 = 0.1;

/// How many differing bits still count as a match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchPolicy {
    /// Fraction of the vector length, in `[0, 1]`.
    #[serde(default = "default_tolerance_ratio")]
    pub tolerance_ratio: f64,
}

fn default_tolerance_ratio() -> f64 {
    DEFAULT_TOLERANCE_RATIO
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            tolerance_ratio: DEFAULT_TOLERANCE_RATIO,
        }
    }
}

impl MatchPolicy {
    pub fn new(tolerance_ratio: f64) -> Result<Self> {
        let policy = Self { tolerance_ratio };
        policy.validate()?;
        Ok(policy)
    }

    pub fn validate(&self) -> Result<()> {
        if (0.0..=1.0).contains(&self.tolerance_ratio) {
            Ok(())
        } else {
            Err(EngramError::invalid_config(
                "tolerance_ratio",
                self.tolerance_ratio.to_string(),
                "must be between 0.0 and 1.0",
            ))
        }
    }

    /// Absolute tolerance for vectors of length `len`, rounded down.
    pub fn tolerance_for(&self, len: usize) -> usize {
        (self.tolerance_ratio * len as f64).floor() as usize
    }
}

/// A successful match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Position of the matching reference in the scanned set.
    pub index: usize,
    /// Hamming distance between query and reference.
    pub distance: usize,
    /// The matching reference itself.
    pub pattern: BinaryVector,
}

/// Index of the first reference within `tolerance` bits of `query`.
///
/// Every reference must have the query's length; this is checked for the
/// whole set before scanning, so a malformed set fails even when an earlier
/// reference would have matched. `Ok(None)` means no reference qualified.
pub fn find_match(
    query: &BinaryVector,
    references: &[BinaryVector],
    tolerance: usize,
) -> Result<Option<usize>> {
    Ok(scan(query, references, tolerance)?.map(|(index, _)| index))
}

fn scan(
    query: &BinaryVector,
    references: &[BinaryVector],
    tolerance: usize,
) -> Result<Option<(usize, usize)>> {
    for reference in references {
        ensure_len(query.len(), reference.len())?;
    }

    for (index, reference) in references.iter().enumerate() {
        let distance = query.hamming_distance(reference)?;
        if distance <= tolerance {
            debug!(index, distance, tolerance, "Matched reference");
            return Ok(Some((index, distance)));
        }
    }

    debug!(references = references.len(), tolerance, "No reference within tolerance");
    Ok(None)
}

/// Matcher bound to a [`MatchPolicy`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PatternMatcher {
    policy: MatchPolicy,
}

impl PatternMatcher {
    pub fn new(policy: MatchPolicy) -> Result<Self> {
        policy.validate()?;
        Ok(Self { policy })
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Tolerance this matcher applies to `query`.
    pub fn tolerance_for(&self, query: &BinaryVector) -> usize {
        self.policy.tolerance_for(query.len())
    }

    /// First reference within the policy's tolerance, with its distance.
    pub fn find(
        &self,
        query: &BinaryVector,
        references: &[BinaryVector],
    ) -> Result<Option<MatchResult>> {
        let tolerance = self.tolerance_for(query);
        Ok(scan(query, references, tolerance)?.map(|(index, distance)| MatchResult {
            index,
            distance,
            pattern: references[index].clone(),
        }))
    }
}

impl From<MatchPolicy> for PatternMatcher {
    /// Wraps `policy` as is; use [`PatternMatcher::new`] to validate it.
    fn from(policy: MatchPolicy) -> Self {
        Self { policy }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bv(bits: &[u8]) -> BinaryVector {
        BinaryVector::from_bits(bits).unwrap()
    }

    #[test]
    fn exact_match_at_zero_tolerance() {
        let refs = [bv(&[1, 1, 0, 0]), bv(&[0, 0, 1, 1])];
        assert_eq!(find_match(&bv(&[1, 1, 0, 0]), &refs, 0).unwrap(), Some(0));
    }

    #[test]
    fn distance_equal_to_tolerance_matches() {
        let refs = [bv(&[1, 1, 0, 0])];
        assert_eq!(find_match(&bv(&[1, 1, 1, 0]), &refs, 1).unwrap(), Some(0));
    }

    #[test]
    fn distance_above_tolerance_is_no_match() {
        let refs = [bv(&[1, 1, 0, 0])];
        assert_eq!(find_match(&bv(&[1, 1, 1, 1]), &refs, 0).unwrap(), None);
    }

    #[test]
    fn first_reference_in_tolerance_wins() {
        // second reference is the exact match but the first is close enough
        let refs = [bv(&[1, 1, 1, 0]), bv(&[1, 1, 0, 0])];
        assert_eq!(find_match(&bv(&[1, 1, 0, 0]), &refs, 1).unwrap(), Some(0));
    }

    #[test]
    fn mismatched_reference_fails_even_after_a_match() {
        let refs = [bv(&[1, 1, 0, 0]), bv(&[1, 1])];
        let err = find_match(&bv(&[1, 1, 0, 0]), &refs, 0).unwrap_err();
        assert_eq!(err, EngramError::shape_mismatch(4, 2));
    }

    #[test]
    fn empty_reference_set_never_matches() {
        assert_eq!(find_match(&bv(&[1, 0]), &[], 2).unwrap(), None);
    }

    #[test]
    fn default_tolerance_is_ten_percent_rounded_down() {
        let policy = MatchPolicy::default();
        assert_eq!(policy.tolerance_for(100), 10);
        assert_eq!(policy.tolerance_for(25), 2);
        assert_eq!(policy.tolerance_for(9), 0);
    }

    #[test]
    fn policy_rejects_out_of_range_ratio() {
        assert!(MatchPolicy::new(1.5).is_err());
        assert!(MatchPolicy::new(-0.1).is_err());
        assert!(MatchPolicy::new(0.0).is_ok());
    }

    #[test]
    fn matcher_reports_distance_and_pattern() {
        let matcher = PatternMatcher::new(MatchPolicy::new(0.25).unwrap()).unwrap();
        let refs = [bv(&[0, 0, 1, 1]), bv(&[1, 1, 0, 0])];
        let result = matcher.find(&bv(&[1, 0, 0, 0]), &refs).unwrap().unwrap();
        assert_eq!(result.index, 1);
        assert_eq!(result.distance, 1);
        assert_eq!(result.pattern, refs[1]);
    }
}
