//! Distortion verdict definitions.

use serde::{Deserialize, Serialize};

/// Above this index a row is reported as an anomalous distortion.
pub const ANOMALOUS_THRESHOLD: f64 = 50.0;

/// Above this index (and at or below the anomalous threshold) a row is
/// high-cost.
pub const HIGH_COST_THRESHOLD: f64 = 10.0;

/// Below this index a row is high-efficiency.
pub const HIGH_EFFICIENCY_THRESHOLD: f64 = 1.0;

/// Classification band for a distortion index.
///
/// The bands are not disjoint by construction, so precedence is part of the
/// contract: ANOMALOUS_DISTORTION, then HIGH_COST, then HIGH_EFFICIENCY,
/// then APPROPRIATE. A negative index would fall to `HighEfficiency`; it is
/// a symptom of invalid upstream input and is rejected at ingestion, not
/// treated as a fifth tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DistortionVerdict {
    /// Spending wildly disproportionate to measurable reach.
    AnomalousDistortion,

    /// Spending well above the cost of the reach achieved.
    HighCost,

    /// Broad reach for below-baseline spending.
    HighEfficiency,

    /// Spending in proportion to reach.
    Appropriate,
}

impl DistortionVerdict {
    /// Classifies a distortion index.
    ///
    /// Evaluated as an if/else chain, first match wins; the precedence order
    /// must not be reordered.
    pub fn from_index(index: f64) -> Self {
        if index > ANOMALOUS_THRESHOLD {
            DistortionVerdict::AnomalousDistortion
        } else if index > HIGH_COST_THRESHOLD {
            DistortionVerdict::HighCost
        } else if index < HIGH_EFFICIENCY_THRESHOLD {
            DistortionVerdict::HighEfficiency
        } else {
            DistortionVerdict::Appropriate
        }
    }

    /// Returns the stable uppercase key for this verdict.
    pub fn key(&self) -> &'static str {
        match self {
            DistortionVerdict::AnomalousDistortion => "ANOMALOUS_DISTORTION",
            DistortionVerdict::HighCost => "HIGH_COST",
            DistortionVerdict::HighEfficiency => "HIGH_EFFICIENCY",
            DistortionVerdict::Appropriate => "APPROPRIATE",
        }
    }

    /// Returns the display label for this verdict.
    pub fn label(&self) -> &'static str {
        match self {
            DistortionVerdict::AnomalousDistortion => "Anomalous distortion",
            DistortionVerdict::HighCost => "High cost",
            DistortionVerdict::HighEfficiency => "High efficiency",
            DistortionVerdict::Appropriate => "Appropriate",
        }
    }
}

impl std::fmt::Display for DistortionVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
