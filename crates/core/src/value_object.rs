//! Value objects: equality by value, not identity.

use serde::Serialize;

use crate::error::DomainError;

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// A 0..=100 score as reported by the analysis model.
///
/// Used for the artifact/manipulation/realism/truth sub-scores and for per-person
/// confidence. Construction is checked, so a `Score` can always be rendered as
/// a progress fraction without clamping.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Score(u8);

impl ValueObject for Score {}

impl Score {
    pub const MAX: u8 = 100;

    /// Build a score, rejecting anything outside 0..=100.
    pub fn new(field: &'static str, value: i64) -> Result<Self, DomainError> {
        if (0..=Self::MAX as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(DomainError::OutOfRange { field, value })
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Normalized to a unit fraction (`value / 100`).
    pub fn fraction(&self) -> f64 {
        f64::from(self.0) / f64::from(Self::MAX)
    }
}

impl core::fmt::Display for Score {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        assert_eq!(Score::new("truth_score", 0).unwrap().value(), 0);
        assert_eq!(Score::new("truth_score", 100).unwrap().value(), 100);
    }

    #[test]
    fn out_of_range_is_rejected() {
        let err = Score::new("realism_score", 101).unwrap_err();
        assert_eq!(
            err,
            DomainError::OutOfRange {
                field: "realism_score",
                value: 101
            }
        );
        assert!(Score::new("realism_score", -1).is_err());
    }

    #[test]
    fn fraction_is_value_over_hundred() {
        assert_eq!(Score::new("s", 25).unwrap().fraction(), 0.25);
        assert_eq!(Score::new("s", 100).unwrap().fraction(), 1.0);
    }
}
