//! Standard Block Calculator - normalization of headline numbers.
//!
//! A "standard block" is the average target-population size carried by one
//! administrative unit; the impact index expresses a reported value as a
//! multiple of that capacity.

use super::VerdictTier;

/// Pure calculation functions for the Standard Block Comparison Method.
pub struct BlockCalculator;

impl BlockCalculator {
    /// Computes the standard block: average target population per
    /// administrative unit.
    ///
    /// Callers must validate `population >= 0`, `target_ratio` in `[0, 1]`
    /// and `municipality_count > 0` at the boundary; the formula itself does
    /// not guard and a zero count produces an infinite result.
    pub fn compute_standard_block(
        population: f64,
        target_ratio: f64,
        municipality_count: u32,
    ) -> f64 {
        (population * target_ratio) / f64::from(municipality_count)
    }

    /// Computes the impact index: how many standard-block equivalents a
    /// value covers.
    ///
    /// # Edge Cases
    /// - `standard_block == 0`: Returns `0.0` exactly. With no capacity
    ///   baseline the index is defined as zero rather than infinite; this is
    ///   a degenerate-case policy, not an error.
    pub fn compute_impact(value: f64, standard_block: f64) -> f64 {
        if standard_block == 0.0 {
            return 0.0;
        }
        value / standard_block
    }

    /// Classifies an impact index into its verdict tier.
    pub fn classify(impact: f64) -> VerdictTier {
        VerdictTier::from_impact(impact)
    }
}

/// Computes the standard block. Free-function form of
/// [`BlockCalculator::compute_standard_block`].
pub fn compute_standard_block(population: f64, target_ratio: f64, municipality_count: u32) -> f64 {
    BlockCalculator::compute_standard_block(population, target_ratio, municipality_count)
}

/// Computes the impact index. Free-function form of
/// [`BlockCalculator::compute_impact`].
pub fn compute_impact(value: f64, standard_block: f64) -> f64 {
    BlockCalculator::compute_impact(value, standard_block)
}

/// Classifies an impact index. Free-function form of
/// [`BlockCalculator::classify`].
pub fn classify(impact: f64) -> VerdictTier {
    BlockCalculator::classify(impact)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_block_matches_formula() {
        let block = BlockCalculator::compute_standard_block(1_000_000.0, 0.5, 100);
        assert_eq!(block, 5_000.0);
    }

    #[test]
    fn standard_block_reference_scale() {
        let block = BlockCalculator::compute_standard_block(124_000_000.0, 1.0, 1_718);
        assert!((block - 72_177.0).abs() < 0.5);
    }

    #[test]
    fn standard_block_zero_population_is_zero() {
        assert_eq!(BlockCalculator::compute_standard_block(0.0, 1.0, 1_718), 0.0);
    }

    #[test]
    fn standard_block_zero_ratio_is_zero() {
        assert_eq!(
            BlockCalculator::compute_standard_block(124_000_000.0, 0.0, 1_718),
            0.0
        );
    }

    #[test]
    fn impact_divides_by_block() {
        assert_eq!(BlockCalculator::compute_impact(10_000.0, 5_000.0), 2.0);
    }

    #[test]
    fn impact_with_zero_block_is_zero() {
        assert_eq!(BlockCalculator::compute_impact(3_000.0, 0.0), 0.0);
        assert_eq!(BlockCalculator::compute_impact(0.0, 0.0), 0.0);
        assert_eq!(BlockCalculator::compute_impact(1e12, 0.0), 0.0);
    }

    #[test]
    fn reference_scenario_small_value_is_error_tier() {
        let block = BlockCalculator::compute_standard_block(124_000_000.0, 1.0, 1_718);
        let impact = BlockCalculator::compute_impact(3_000.0, block);
        assert!((impact - 0.0416).abs() < 0.001);
        assert_eq!(BlockCalculator::classify(impact), VerdictTier::Error);
    }

    #[test]
    fn reference_scenario_million_users_is_localized() {
        let block = BlockCalculator::compute_standard_block(124_000_000.0, 1.0, 1_718);
        let impact = BlockCalculator::compute_impact(1_000_000.0, block);
        assert!((impact - 13.86).abs() < 0.01);
        assert_eq!(BlockCalculator::classify(impact), VerdictTier::Localized);
    }

    #[test]
    fn free_functions_delegate() {
        let block = compute_standard_block(124_000_000.0, 1.0, 1_718);
        let impact = compute_impact(1_000_000.0, block);
        assert_eq!(classify(impact), VerdictTier::Localized);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn standard_block_equals_formula(
                population in 0.0..1e10f64,
                ratio in 0.0..=1.0f64,
                count in 1u32..100_000,
            ) {
                let block = BlockCalculator::compute_standard_block(population, ratio, count);
                prop_assert_eq!(block, population * ratio / f64::from(count));
            }

            #[test]
            fn standard_block_monotonic_in_population(
                population in 0.0..1e10f64,
                ratio in 0.01..=1.0f64,
                count in 1u32..100_000,
            ) {
                let smaller = BlockCalculator::compute_standard_block(population, ratio, count);
                let larger = BlockCalculator::compute_standard_block(population + 1_000.0, ratio, count);
                prop_assert!(larger >= smaller);
            }

            #[test]
            fn standard_block_decreasing_in_count(
                population in 1.0..1e10f64,
                ratio in 0.01..=1.0f64,
                count in 1u32..100_000,
            ) {
                let fewer = BlockCalculator::compute_standard_block(population, ratio, count);
                let more = BlockCalculator::compute_standard_block(population, ratio, count + 1);
                prop_assert!(more <= fewer);
            }

            #[test]
            fn impact_with_zero_block_is_always_zero(value in 0.0..1e12f64) {
                prop_assert_eq!(BlockCalculator::compute_impact(value, 0.0), 0.0);
            }

            #[test]
            fn classify_is_total_for_non_negative_input(impact in 0.0..1e9f64) {
                // Every non-negative index lands in exactly one band.
                let tier = BlockCalculator::classify(impact);
                prop_assert!(impact >= tier.lower_bound());
            }
        }
    }
}
