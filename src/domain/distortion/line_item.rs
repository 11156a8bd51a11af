//! Budget line item and per-row analysis result records.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{require_non_negative, InvalidInputError};

use super::DistortionVerdict;

/// One row of a settled-budget table.
///
/// Rows are independent; duplicates and zero values are legal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetLineItem {
    pub project_name: String,
    pub settled_budget: f64,
    pub estimated_beneficiaries: f64,
}

impl BudgetLineItem {
    /// Creates a validated line item.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInputError` if either numeric field is NaN, infinite,
    /// or negative. Zero is legal for both.
    pub fn try_new(
        project_name: impl Into<String>,
        settled_budget: f64,
        estimated_beneficiaries: f64,
    ) -> Result<Self, InvalidInputError> {
        require_non_negative("settled_budget", settled_budget)?;
        require_non_negative("estimated_beneficiaries", estimated_beneficiaries)?;

        Ok(Self {
            project_name: project_name.into(),
            settled_budget,
            estimated_beneficiaries,
        })
    }
}

/// Per-row distortion analysis result.
///
/// Owned by the caller after one analysis call; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistortionResult {
    pub project_name: String,
    pub settled_budget: f64,
    /// Beneficiaries expressed in standard-block equivalents.
    pub coverage_impact: f64,
    /// Budget expressed as a multiple of the local standard budget.
    pub budget_impact: f64,
    /// Ratio of budget impact to coverage impact; `9999.0` when reach is
    /// negligible.
    pub distortion_index: f64,
    pub distortion_verdict: DistortionVerdict,
}
