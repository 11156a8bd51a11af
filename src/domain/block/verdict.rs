//! Verdict tier definitions for the impact index.
//!
//! Represents the social-penetration stage an impact index falls into.

use serde::{Deserialize, Serialize};

/// Lower bound of the LOCALIZED band.
pub const LOCALIZED_THRESHOLD: f64 = 1.0;

/// Lower bound of the INFRASTRUCTURE band (post-office-equivalent density).
pub const INFRASTRUCTURE_THRESHOLD: f64 = 14.0;

/// Lower bound of the CONVENIENCE band (convenience-store-equivalent density).
pub const CONVENIENCE_THRESHOLD: f64 = 32.0;

/// Lower bound of the PENETRATION band (1% population penetration).
pub const PENETRATION_THRESHOLD: f64 = 700.0;

/// Lower bound of the SOCIAL_OS band (10% population penetration).
pub const SOCIAL_OS_THRESHOLD: f64 = 7000.0;

/// Narrative classification band for an impact index.
///
/// Six ordered, mutually exclusive bands, closed on the lower edge: an
/// impact of exactly 14.0 is `Infrastructure`, not `Localized`. Computed on
/// demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerdictTier {
    /// Below one administrative unit of coverage; functionally null.
    Error,

    /// Experimental, below the physical-infrastructure reference point.
    Localized,

    /// Matches post-office density; a physical baseline, thin for digital.
    Infrastructure,

    /// Exceeds convenience-store density, below 1% population penetration.
    Convenience,

    /// Past 1% penetration; early adopters reached, self-sustaining growth.
    Penetration,

    /// Past 10% penetration; essential infrastructure territory.
    SocialOs,
}

impl VerdictTier {
    /// Classifies an impact index into its tier.
    ///
    /// Bands are evaluated in ascending order, first match wins; each band
    /// is closed on its lower edge.
    pub fn from_impact(impact: f64) -> Self {
        if impact < LOCALIZED_THRESHOLD {
            VerdictTier::Error
        } else if impact < INFRASTRUCTURE_THRESHOLD {
            VerdictTier::Localized
        } else if impact < CONVENIENCE_THRESHOLD {
            VerdictTier::Infrastructure
        } else if impact < PENETRATION_THRESHOLD {
            VerdictTier::Convenience
        } else if impact < SOCIAL_OS_THRESHOLD {
            VerdictTier::Penetration
        } else {
            VerdictTier::SocialOs
        }
    }

    /// Returns the stable uppercase key for this tier.
    pub fn key(&self) -> &'static str {
        match self {
            VerdictTier::Error => "ERROR",
            VerdictTier::Localized => "LOCALIZED",
            VerdictTier::Infrastructure => "INFRASTRUCTURE",
            VerdictTier::Convenience => "CONVENIENCE",
            VerdictTier::Penetration => "PENETRATION",
            VerdictTier::SocialOs => "SOCIAL_OS",
        }
    }

    /// Returns the narrative verdict text for this tier.
    pub fn narrative(&self) -> &'static str {
        match self {
            VerdictTier::Error => {
                "No single administrative unit is covered; functionally null as social infrastructure."
            }
            VerdictTier::Localized => {
                "Experimental stage in a few areas; has not reached basic-infrastructure density (post office, I=14)."
            }
            VerdictTier::Infrastructure => {
                "Matches post-office density (I=14); sufficient as a physical footprint, thin as a digital one."
            }
            VerdictTier::Convenience => {
                "Exceeds convenience-store density (I=32); embedded in daily life but short of 1% population awareness."
            }
            VerdictTier::Penetration => {
                "Past 1% of the population; early adopters reached and self-sustaining growth is underway."
            }
            VerdictTier::SocialOs => {
                "Past 10% of the population; as indispensable as water or electricity."
            }
        }
    }

    /// Returns the inclusive lower bound of this tier's band.
    pub fn lower_bound(&self) -> f64 {
        match self {
            VerdictTier::Error => 0.0,
            VerdictTier::Localized => LOCALIZED_THRESHOLD,
            VerdictTier::Infrastructure => INFRASTRUCTURE_THRESHOLD,
            VerdictTier::Convenience => CONVENIENCE_THRESHOLD,
            VerdictTier::Penetration => PENETRATION_THRESHOLD,
            VerdictTier::SocialOs => SOCIAL_OS_THRESHOLD,
        }
    }
}

impl std::fmt::Display for VerdictTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_are_closed_on_the_lower_edge() {
        assert_eq!(VerdictTier::from_impact(1.0), VerdictTier::Localized);
        assert_eq!(VerdictTier::from_impact(14.0), VerdictTier::Infrastructure);
        assert_eq!(VerdictTier::from_impact(32.0), VerdictTier::Convenience);
        assert_eq!(VerdictTier::from_impact(700.0), VerdictTier::Penetration);
        assert_eq!(VerdictTier::from_impact(7000.0), VerdictTier::SocialOs);
    }

    #[test]
    fn bands_are_open_on_the_upper_edge() {
        assert_eq!(VerdictTier::from_impact(0.9999), VerdictTier::Error);
        assert_eq!(VerdictTier::from_impact(13.9999), VerdictTier::Localized);
        assert_eq!(VerdictTier::from_impact(31.9999), VerdictTier::Infrastructure);
        assert_eq!(VerdictTier::from_impact(699.9999), VerdictTier::Convenience);
        assert_eq!(VerdictTier::from_impact(6999.999), VerdictTier::Penetration);
    }

    #[test]
    fn zero_impact_is_error_tier() {
        assert_eq!(VerdictTier::from_impact(0.0), VerdictTier::Error);
    }

    #[test]
    fn large_impact_is_social_os() {
        assert_eq!(VerdictTier::from_impact(1_000_000.0), VerdictTier::SocialOs);
    }

    #[test]
    fn keys_are_stable() {
        assert_eq!(VerdictTier::Error.key(), "ERROR");
        assert_eq!(VerdictTier::Localized.key(), "LOCALIZED");
        assert_eq!(VerdictTier::Infrastructure.key(), "INFRASTRUCTURE");
        assert_eq!(VerdictTier::Convenience.key(), "CONVENIENCE");
        assert_eq!(VerdictTier::Penetration.key(), "PENETRATION");
        assert_eq!(VerdictTier::SocialOs.key(), "SOCIAL_OS");
    }

    #[test]
    fn tiers_order_ascending() {
        assert!(VerdictTier::Error < VerdictTier::Localized);
        assert!(VerdictTier::Localized < VerdictTier::Infrastructure);
        assert!(VerdictTier::Penetration < VerdictTier::SocialOs);
    }

    #[test]
    fn lower_bounds_match_band_table() {
        assert_eq!(VerdictTier::Error.lower_bound(), 0.0);
        assert_eq!(VerdictTier::Infrastructure.lower_bound(), 14.0);
        assert_eq!(VerdictTier::SocialOs.lower_bound(), 7000.0);
    }

    #[test]
    fn tier_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&VerdictTier::SocialOs).unwrap();
        assert_eq!(json, "\"SOCIAL_OS\"");
    }

    #[test]
    fn tier_deserializes_from_key() {
        let tier: VerdictTier = serde_json::from_str("\"CONVENIENCE\"").unwrap();
        assert_eq!(tier, VerdictTier::Convenience);
    }

    #[test]
    fn every_tier_has_a_narrative() {
        for tier in [
            VerdictTier::Error,
            VerdictTier::Localized,
            VerdictTier::Infrastructure,
            VerdictTier::Convenience,
            VerdictTier::Penetration,
            VerdictTier::SocialOs,
        ] {
            assert!(!tier.narrative().is_empty());
        }
    }
}
