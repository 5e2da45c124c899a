//! Degenerate-lightness rule: near black and near white, chroma and hue stop
//! being visible.
//!
//! The rule only reports the condition. Dropping chroma and hue for display
//! is done by [`crate::OkLch::for_display`], which returns a new color.

use serde::{Deserialize, Serialize};

/// Below this lightness a color reads as black regardless of chroma.
pub const LOW_LIGHTNESS_THRESHOLD: f64 = 0.15;
/// Above this lightness a color reads as white regardless of chroma.
pub const HIGH_LIGHTNESS_THRESHOLD: f64 = 0.99;

/// Lightness band outside which a color is treated as achromatic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AchromaticPolicy {
    pub low_lightness_threshold: f64,
    pub high_lightness_threshold: f64,
}

impl Default for AchromaticPolicy {
    fn default() -> Self {
        Self {
            low_lightness_threshold: LOW_LIGHTNESS_THRESHOLD,
            high_lightness_threshold: HIGH_LIGHTNESS_THRESHOLD,
        }
    }
}

/// True when `l` is strictly below the low threshold or strictly above the high one.
pub fn is_achromatic_by_lightness(l: f64, policy: &AchromaticPolicy) -> bool {
    l < policy.low_lightness_threshold || l > policy.high_lightness_threshold
}

/// [`is_achromatic_by_lightness`] with the default thresholds.
pub fn is_achromatic(l: f64) -> bool {
    is_achromatic_by_lightness(l, &AchromaticPolicy::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_is_achromatic() {
        assert!(is_achromatic(0.0));
    }

    #[test]
    fn white_is_achromatic() {
        assert!(is_achromatic(1.0));
    }

    #[test]
    fn mid_lightness_is_chromatic() {
        for l in [0.15, 0.3, 0.5, 0.7, 0.99] {
            assert!(!is_achromatic(l), "l = {l}");
        }
    }

    #[test]
    fn just_below_low_threshold_is_achromatic() {
        assert!(is_achromatic(0.149));
    }

    #[test]
    fn thresholds_are_configurable() {
        let policy = AchromaticPolicy {
            low_lightness_threshold: 0.05,
            high_lightness_threshold: 1.0,
        };
        assert!(!is_achromatic_by_lightness(0.1, &policy));
        assert!(!is_achromatic_by_lightness(1.0, &policy));
        assert!(is_achromatic_by_lightness(0.01, &policy));
    }

    #[test]
    fn partial_json_keeps_default_for_missing_threshold() {
        let policy: AchromaticPolicy =
            serde_json::from_str(r#"{"low_lightness_threshold": 0.1}"#).unwrap();
        assert_eq!(policy.low_lightness_threshold, 0.1);
        assert_eq!(policy.high_lightness_threshold, HIGH_LIGHTNESS_THRESHOLD);
    }
}
