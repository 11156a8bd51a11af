//! Distortion Analyzer - batch budget-vs-reach analysis.

mod analyzer;
mod line_item;
mod verdict;

pub use analyzer::{DistortionAnalyzer, COVERAGE_EPSILON, NEGLIGIBLE_REACH_SENTINEL};
pub use line_item::{BudgetLineItem, DistortionResult};
pub use verdict::{
    DistortionVerdict, ANOMALOUS_THRESHOLD, HIGH_COST_THRESHOLD, HIGH_EFFICIENCY_THRESHOLD,
};
