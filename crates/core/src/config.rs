//! Explorer configuration: every policy constant in one JSON-loadable struct.
//!
//! A config file only needs the keys it overrides:
//!
//! ```json
//! {
//!   "gamut": "display-p3",
//!   "achromatic": { "low_lightness_threshold": 0.1 },
//!   "clamp": { "chroma_tolerance": 0.00001 },
//!   "random_lightness": [0.3, 0.9]
//! }
//! ```

use crate::achromatic::AchromaticPolicy;
use crate::error::ExplorerError;
use crate::gamut::{ClampSettings, Gamut};
use crate::params::{param_f64, param_range, param_string, param_u64};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default lightness range for the startup random color.
pub const DEFAULT_RANDOM_LIGHTNESS: (f64, f64) = (0.25, 1.0);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplorerConfig {
    pub gamut: Gamut,
    pub achromatic: AchromaticPolicy,
    pub clamp: ClampSettings,
    pub random_lightness: (f64, f64),
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            gamut: Gamut::default(),
            achromatic: AchromaticPolicy::default(),
            clamp: ClampSettings::default(),
            random_lightness: DEFAULT_RANDOM_LIGHTNESS,
        }
    }
}

impl ExplorerConfig {
    /// Builds a config from a partial JSON object and validates it.
    ///
    /// Missing or mistyped keys keep their defaults. An unrecognized gamut
    /// name is an error rather than a silent fallback.
    pub fn from_json(params: &Value) -> Result<Self, ExplorerError> {
        let defaults = Self::default();
        let gamut_name = param_string(params, "gamut", defaults.gamut.name());
        let gamut = Gamut::from_name(&gamut_name)
            .ok_or_else(|| ExplorerError::InvalidConfig(format!("unknown gamut '{gamut_name}'")))?;

        let empty = Value::Null;
        let achromatic = params.get("achromatic").unwrap_or(&empty);
        let clamp = params.get("clamp").unwrap_or(&empty);

        let max_iterations = param_u64(
            clamp,
            "max_iterations",
            u64::from(defaults.clamp.max_iterations),
        );
        let config = Self {
            gamut,
            achromatic: AchromaticPolicy {
                low_lightness_threshold: param_f64(
                    achromatic,
                    "low_lightness_threshold",
                    defaults.achromatic.low_lightness_threshold,
                ),
                high_lightness_threshold: param_f64(
                    achromatic,
                    "high_lightness_threshold",
                    defaults.achromatic.high_lightness_threshold,
                ),
            },
            clamp: ClampSettings {
                chroma_tolerance: param_f64(
                    clamp,
                    "chroma_tolerance",
                    defaults.clamp.chroma_tolerance,
                ),
                max_iterations: u32::try_from(max_iterations).map_err(|_| {
                    ExplorerError::InvalidConfig(format!(
                        "max_iterations {max_iterations} is too large"
                    ))
                })?,
                gamut_epsilon: param_f64(clamp, "gamut_epsilon", defaults.clamp.gamut_epsilon),
            },
            random_lightness: param_range(params, "random_lightness", defaults.random_lightness),
        };
        config.validate()?;
        Ok(config)
    }

    /// Parses JSON text, then behaves like [`ExplorerConfig::from_json`].
    pub fn from_json_str(text: &str) -> Result<Self, ExplorerError> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| ExplorerError::InvalidConfig(format!("malformed JSON: {e}")))?;
        if !value.is_object() {
            return Err(ExplorerError::InvalidConfig(
                "config must be a JSON object".to_string(),
            ));
        }
        Self::from_json(&value)
    }

    /// Checks the invariants the rest of the crate relies on.
    pub fn validate(&self) -> Result<(), ExplorerError> {
        let AchromaticPolicy {
            low_lightness_threshold: low,
            high_lightness_threshold: high,
        } = self.achromatic;
        if !(0.0..=1.0).contains(&low) || !(0.0..=1.0).contains(&high) {
            return Err(ExplorerError::InvalidConfig(format!(
                "lightness thresholds must lie in [0, 1], got {low} and {high}"
            )));
        }
        if low > high {
            return Err(ExplorerError::InvalidConfig(format!(
                "low lightness threshold {low} exceeds high threshold {high}"
            )));
        }
        if self.clamp.chroma_tolerance.is_nan() || self.clamp.chroma_tolerance <= 0.0 {
            return Err(ExplorerError::InvalidConfig(
                "chroma_tolerance must be positive".to_string(),
            ));
        }
        if self.clamp.gamut_epsilon.is_nan() || self.clamp.gamut_epsilon < 0.0 {
            return Err(ExplorerError::InvalidConfig(
                "gamut_epsilon must be non-negative".to_string(),
            ));
        }
        if self.clamp.max_iterations == 0 {
            return Err(ExplorerError::InvalidConfig(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        check_lightness_range(self.random_lightness)
    }
}

/// A usable random lightness range: `min <= max`, both within [0, 1].
pub fn check_lightness_range((min, max): (f64, f64)) -> Result<(), ExplorerError> {
    if (0.0..=1.0).contains(&min) && (0.0..=1.0).contains(&max) && min <= max {
        Ok(())
    } else {
        Err(ExplorerError::InvalidRange { min, max })
    }
}
