//! Target ratio value object (0.0 to 1.0 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::InvalidInputError;

/// The share of the national population a claim targets, between 0 and 1.
///
/// A ratio of 1.0 means the whole population; 0.5 means half of it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetRatio(f64);

impl TargetRatio {
    /// No one targeted.
    pub const ZERO: Self = Self(0.0);

    /// The full population.
    pub const FULL: Self = Self(1.0);

    /// Creates a new TargetRatio, clamping to the valid range.
    ///
    /// NaN clamps to zero.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Creates a TargetRatio, returning an error if out of range.
    pub fn try_new(value: f64) -> Result<Self, InvalidInputError> {
        if !value.is_finite() {
            return Err(InvalidInputError::not_finite("target_ratio", value));
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(InvalidInputError::out_of_range(
                "target_ratio",
                0.0,
                1.0,
                value,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the ratio as an f64 fraction.
    pub fn as_f64(&self) -> f64 {
        self.0
    }
}

impl Default for TargetRatio {
    fn default() -> Self {
        Self::FULL
    }
}

impl fmt::Display for TargetRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_new_accepts_valid_values() {
        assert_eq!(TargetRatio::new(0.0).as_f64(), 0.0);
        assert_eq!(TargetRatio::new(0.5).as_f64(), 0.5);
        assert_eq!(TargetRatio::new(1.0).as_f64(), 1.0);
    }

    #[test]
    fn ratio_new_clamps_out_of_range() {
        assert_eq!(TargetRatio::new(1.5).as_f64(), 1.0);
        assert_eq!(TargetRatio::new(-0.3).as_f64(), 0.0);
    }

    #[test]
    fn ratio_new_maps_nan_to_zero() {
        assert_eq!(TargetRatio::new(f64::NAN).as_f64(), 0.0);
    }

    #[test]
    fn ratio_try_new_accepts_boundaries() {
        assert!(TargetRatio::try_new(0.0).is_ok());
        assert!(TargetRatio::try_new(1.0).is_ok());
    }

    #[test]
    fn ratio_try_new_rejects_out_of_range() {
        let result = TargetRatio::try_new(1.01);
        match result {
            Err(InvalidInputError::OutOfRange {
                field,
                min,
                max,
                actual,
            }) => {
                assert_eq!(field, "target_ratio");
                assert_eq!(min, 0.0);
                assert_eq!(max, 1.0);
                assert_eq!(actual, 1.01);
            }
            _ => panic!("Expected OutOfRange error"),
        }
    }

    #[test]
    fn ratio_try_new_rejects_nan() {
        assert!(matches!(
            TargetRatio::try_new(f64::NAN),
            Err(InvalidInputError::NotFinite { .. })
        ));
    }

    #[test]
    fn ratio_default_is_full_population() {
        assert_eq!(TargetRatio::default(), TargetRatio::FULL);
    }

    #[test]
    fn ratio_displays_as_percentage() {
        assert_eq!(format!("{}", TargetRatio::new(0.25)), "25.0%");
        assert_eq!(format!("{}", TargetRatio::FULL), "100.0%");
    }

    #[test]
    fn ratio_serializes_transparently() {
        let ratio = TargetRatio::new(0.75);
        let json = serde_json::to_string(&ratio).unwrap();
        assert_eq!(json, "0.75");
    }

    #[test]
    fn ratio_deserializes_from_number() {
        let ratio: TargetRatio = serde_json::from_str("0.4").unwrap();
        assert_eq!(ratio.as_f64(), 0.4);
    }
}
