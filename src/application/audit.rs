//! BlockAudit - validated entry point for single-value impact audits.
//!
//! The pure formulas in `domain::block` assume in-range input; this service
//! performs the boundary validation and returns the full
//! `(standard_block, impact, verdict)` tuple for one headline number.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::block::{BlockCalculator, VerdictTier};
use crate::domain::foundation::{require_non_negative, InvalidInputError, TargetRatio};
use crate::domain::scale::ScaleParameters;

/// Outcome of a single-value audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockAuditOutcome {
    /// Average target-population size per administrative unit.
    pub standard_block: f64,
    /// The audited value in standard-block equivalents.
    pub impact: f64,
    /// Narrative tier for the impact index.
    pub verdict: VerdictTier,
}

/// Service for auditing a single headline number against a reference scale.
pub struct BlockAudit;

impl BlockAudit {
    /// Audits one value against an explicit population and municipality
    /// count.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInputError` before any computation if `value` or
    /// `population` is non-finite or negative, `target_ratio` is outside
    /// `[0, 1]`, or `municipality_count` is zero.
    pub fn evaluate(
        value: f64,
        target_ratio: f64,
        population: f64,
        municipality_count: u32,
    ) -> Result<BlockAuditOutcome, InvalidInputError> {
        require_non_negative("value", value)?;
        let ratio = TargetRatio::try_new(target_ratio)?;
        require_non_negative("population", population)?;
        if municipality_count == 0 {
            return Err(InvalidInputError::not_positive("municipality_count", 0.0));
        }

        let standard_block =
            BlockCalculator::compute_standard_block(population, ratio.as_f64(), municipality_count);
        let impact = BlockCalculator::compute_impact(value, standard_block);
        let verdict = BlockCalculator::classify(impact);

        debug!(value, standard_block, impact, verdict = %verdict, "Audited single value");

        Ok(BlockAuditOutcome {
            standard_block,
            impact,
            verdict,
        })
    }

    /// Audits one value against a configured reference scale.
    pub fn evaluate_with_scale(
        value: f64,
        target_ratio: f64,
        scale: &ScaleParameters,
    ) -> Result<BlockAuditOutcome, InvalidInputError> {
        Self::evaluate(
            value,
            target_ratio,
            scale.national_population(),
            scale.municipality_count(),
        )
    }
}
