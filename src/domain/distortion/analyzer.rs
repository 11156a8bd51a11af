//! Distortion Analyzer - composite budget/coverage distortion over a table.

use tracing::debug;

use crate::domain::foundation::{require_positive, InvalidInputError};
use crate::domain::scale::ScaleParameters;

use super::{BudgetLineItem, DistortionResult, DistortionVerdict};

/// Coverage impacts at or below this are treated as zero reach.
///
/// A near-zero guard rather than a strict equality check, to absorb floating
/// noise from upstream unit conversions.
pub const COVERAGE_EPSILON: f64 = 0.0001;

/// Sentinel distortion index for rows whose budget bought negligible reach.
///
/// Deliberately large rather than infinite: it sorts such rows to the top
/// while keeping the index finite and serializable.
pub const NEGLIGIBLE_REACH_SENTINEL: f64 = 9999.0;

/// Analyzer for budget distortion across a table of line items.
pub struct DistortionAnalyzer;

impl DistortionAnalyzer {
    /// Analyzes a table of line items against a locally-scaled budget
    /// baseline.
    ///
    /// The local standard budget is derived once per call from the
    /// municipality's population; each row is then scored independently and
    /// the results are returned sorted descending by distortion index, worst
    /// offenders first. The ordering is part of the contract.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInputError` if `municipality_population` is not a
    /// finite positive number.
    pub fn analyze(
        rows: &[BudgetLineItem],
        municipality_population: f64,
        scale: &ScaleParameters,
    ) -> Result<Vec<DistortionResult>, InvalidInputError> {
        require_positive("municipality_population", municipality_population)?;

        let scale_factor = municipality_population / scale.standard_block_population();
        let local_standard_budget = scale.standard_budget_unit() * scale_factor;

        debug!(
            rows = rows.len(),
            local_standard_budget, "Analyzing budget table"
        );

        let mut results: Vec<DistortionResult> = rows
            .iter()
            .map(|item| Self::analyze_row(item, local_standard_budget, scale))
            .collect();

        results.sort_by(|a, b| b.distortion_index.total_cmp(&a.distortion_index));

        Ok(results)
    }

    /// Scores one row against the shared local baseline.
    fn analyze_row(
        item: &BudgetLineItem,
        local_standard_budget: f64,
        scale: &ScaleParameters,
    ) -> DistortionResult {
        let budget_impact = item.settled_budget / local_standard_budget;
        let coverage_impact = item.estimated_beneficiaries / scale.standard_block_population();

        let distortion_index = if coverage_impact <= COVERAGE_EPSILON {
            NEGLIGIBLE_REACH_SENTINEL
        } else {
            budget_impact / coverage_impact
        };

        DistortionResult {
            project_name: item.project_name.clone(),
            settled_budget: item.settled_budget,
            coverage_impact,
            budget_impact,
            distortion_index,
            distortion_verdict: DistortionVerdict::from_index(distortion_index),
        }
    }
}
