//! Reference scale constants for standard block comparisons.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{require_positive, InvalidInputError};

/// National population used by the reference scale (2023 estimate).
pub const DEFAULT_NATIONAL_POPULATION: f64 = 124_000_000.0;

/// Number of basic municipalities in the reference scale.
pub const DEFAULT_MUNICIPALITY_COUNT: u32 = 1_718;

/// Reference municipal population for budget normalization.
///
/// The national average: `124,000,000 / 1,718`.
pub const DEFAULT_STANDARD_BLOCK_POPULATION: f64 = 72_177.0;

/// Reference per-block budget baseline, in currency units.
pub const DEFAULT_STANDARD_BUDGET_UNIT: f64 = 100_000_000.0;

/// Immutable reference constants defining the comparison scale.
///
/// All fields are strictly positive; construct with [`ScaleParameters::try_new`]
/// or use [`Default`] for the national reference scale. These are
/// configuration defaults, overridable per call, not constants of the
/// algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleParameters {
    national_population: f64,
    municipality_count: u32,
    standard_block_population: f64,
    standard_budget_unit: f64,
}

impl ScaleParameters {
    /// Creates validated scale parameters.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInputError` if any field is non-finite, zero, or
    /// negative.
    pub fn try_new(
        national_population: f64,
        municipality_count: u32,
        standard_block_population: f64,
        standard_budget_unit: f64,
    ) -> Result<Self, InvalidInputError> {
        require_positive("national_population", national_population)?;
        if municipality_count == 0 {
            return Err(InvalidInputError::not_positive("municipality_count", 0.0));
        }
        require_positive("standard_block_population", standard_block_population)?;
        require_positive("standard_budget_unit", standard_budget_unit)?;

        Ok(Self {
            national_population,
            municipality_count,
            standard_block_population,
            standard_budget_unit,
        })
    }

    /// The total population of the comparison scale.
    pub fn national_population(&self) -> f64 {
        self.national_population
    }

    /// The number of administrative units in the scale.
    pub fn municipality_count(&self) -> u32 {
        self.municipality_count
    }

    /// The reference block population used for coverage normalization.
    pub fn standard_block_population(&self) -> f64 {
        self.standard_block_population
    }

    /// The reference per-block budget baseline.
    pub fn standard_budget_unit(&self) -> f64 {
        self.standard_budget_unit
    }
}

impl Default for ScaleParameters {
    fn default() -> Self {
        Self {
            national_population: DEFAULT_NATIONAL_POPULATION,
            municipality_count: DEFAULT_MUNICIPALITY_COUNT,
            standard_block_population: DEFAULT_STANDARD_BLOCK_POPULATION,
            standard_budget_unit: DEFAULT_STANDARD_BUDGET_UNIT,
        }
    }
}
