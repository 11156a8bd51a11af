//! Reference scale configuration section.

use serde::Deserialize;

use crate::domain::scale::{
    ScaleParameters, DEFAULT_MUNICIPALITY_COUNT, DEFAULT_NATIONAL_POPULATION,
    DEFAULT_STANDARD_BLOCK_POPULATION, DEFAULT_STANDARD_BUDGET_UNIT,
};

use super::error::ValidationError;

/// Reference scale configuration
///
/// Every field defaults to the national reference scale, so the section can
/// be omitted entirely. Override via `SBCM__SCALE__*` environment variables,
/// e.g. `SBCM__SCALE__MUNICIPALITY_COUNT=1741`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScaleConfig {
    /// Total population of the comparison frame
    #[serde(default = "default_national_population")]
    pub national_population: f64,

    /// Number of basic administrative units
    #[serde(default = "default_municipality_count")]
    pub municipality_count: u32,

    /// Reference municipal population for budget normalization
    #[serde(default = "default_standard_block_population")]
    pub standard_block_population: f64,

    /// Reference per-block budget baseline
    #[serde(default = "default_standard_budget_unit")]
    pub standard_budget_unit: f64,
}

fn default_national_population() -> f64 {
    DEFAULT_NATIONAL_POPULATION
}

fn default_municipality_count() -> u32 {
    DEFAULT_MUNICIPALITY_COUNT
}

fn default_standard_block_population() -> f64 {
    DEFAULT_STANDARD_BLOCK_POPULATION
}

fn default_standard_budget_unit() -> f64 {
    DEFAULT_STANDARD_BUDGET_UNIT
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            national_population: default_national_population(),
            municipality_count: default_municipality_count(),
            standard_block_population: default_standard_block_population(),
            standard_budget_unit: default_standard_budget_unit(),
        }
    }
}

impl ScaleConfig {
    /// Validate the scale configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.national_population.is_finite() && self.national_population > 0.0) {
            return Err(ValidationError::NonPositiveScaleField("national_population"));
        }
        if self.municipality_count == 0 {
            return Err(ValidationError::ZeroMunicipalityCount);
        }
        if !(self.standard_block_population.is_finite() && self.standard_block_population > 0.0) {
            return Err(ValidationError::NonPositiveScaleField(
                "standard_block_population",
            ));
        }
        if !(self.standard_budget_unit.is_finite() && self.standard_budget_unit > 0.0) {
            return Err(ValidationError::NonPositiveScaleField("standard_budget_unit"));
        }
        Ok(())
    }

    /// Convert into validated domain scale parameters
    pub fn to_parameters(&self) -> Result<ScaleParameters, ValidationError> {
        self.validate()?;
        ScaleParameters::try_new(
            self.national_population,
            self.municipality_count,
            self.standard_block_population,
            self.standard_budget_unit,
        )
        .map_err(|_| ValidationError::NonPositiveScaleField("scale"))
    }
}
