//! Standard Block Auditor - quantitative audit of public-spending claims
//!
//! This crate implements the Standard Block Comparison Method (SBCM):
//! headline numbers (budgets, beneficiary counts) are normalized against the
//! average capacity of one administrative unit (the "standard block") and
//! classified into narrative tiers, so that disparate claims become
//! comparable on a common scale.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;

pub use application::{BlockAudit, BlockAuditOutcome};
pub use domain::block::{classify, compute_impact, compute_standard_block, VerdictTier};
pub use domain::distortion::{
    BudgetLineItem, DistortionAnalyzer, DistortionResult, DistortionVerdict,
};
pub use domain::foundation::{InvalidInputError, MalformedRowError, TargetRatio};
pub use domain::scale::ScaleParameters;

/// Analyzes a table of budget line items against a municipality's scale.
///
/// Convenience wrapper over [`DistortionAnalyzer::analyze`]; results come
/// back sorted descending by distortion index.
pub fn analyze_distortion(
    rows: &[BudgetLineItem],
    municipality_population: f64,
    scale: &ScaleParameters,
) -> Result<Vec<DistortionResult>, InvalidInputError> {
    DistortionAnalyzer::analyze(rows, municipality_population, scale)
}
