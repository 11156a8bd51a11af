//! Standard Block Calculator and impact-index classification.

mod calculator;
mod verdict;

pub use calculator::{classify, compute_impact, compute_standard_block, BlockCalculator};
pub use verdict::{
    VerdictTier, CONVENIENCE_THRESHOLD, INFRASTRUCTURE_THRESHOLD, LOCALIZED_THRESHOLD,
    PENETRATION_THRESHOLD, SOCIAL_OS_THRESHOLD,
};
