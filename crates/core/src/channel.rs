//! OKLCH channels and single-shot validation of raw channel text.
//!
//! Validation is pure and per channel: the caller decides when to run it
//! (field blur, Enter) and where to attach the resulting error.

use crate::error::{ExplorerError, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Upper bound of the lightness channel.
pub const MAX_LIGHTNESS: f64 = 1.0;
/// Upper bound of the chroma channel accepted from user input.
pub const MAX_CHROMA: f64 = 0.4;

/// One of the three OKLCH channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Lightness, [0, 1].
    L,
    /// Chroma, [0, 0.4].
    C,
    /// Hue in degrees, unbounded until normalized.
    H,
}

impl Channel {
    /// All channels in display order.
    pub const ALL: [Channel; 3] = [Channel::L, Channel::C, Channel::H];

    /// The single-letter channel name used by the UI.
    pub fn name(self) -> &'static str {
        match self {
            Channel::L => "l",
            Channel::C => "c",
            Channel::H => "h",
        }
    }

    /// Closed interval accepted for this channel, or `None` for hue.
    pub fn bounds(self) -> Option<(f64, f64)> {
        match self {
            Channel::L => Some((0.0, MAX_LIGHTNESS)),
            Channel::C => Some((0.0, MAX_CHROMA)),
            Channel::H => None,
        }
    }

    /// Index into a `[_; 3]` ordered like [`Channel::ALL`].
    pub fn index(self) -> usize {
        match self {
            Channel::L => 0,
            Channel::C => 1,
            Channel::H => 2,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Channel {
    type Err = ExplorerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "l" => Ok(Channel::L),
            "c" => Ok(Channel::C),
            "h" => Ok(Channel::H),
            _ => Err(ExplorerError::UnknownChannel(s.to_string())),
        }
    }
}

/// Parses `raw` and enforces the channel's domain.
///
/// Surrounding whitespace is ignored. Empty, unparseable, NaN, and infinite
/// input is rejected as not a number. Hue is returned unchanged (no wrapping)
/// so the raw field can round-trip.
pub fn validate_channel(channel: Channel, raw: &str) -> Result<f64, ValidationError> {
    let value = raw
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ValidationError::not_a_number(channel, raw))?;
    check_bounds(channel, value)
}

/// Enforces the channel's domain on an already numeric value.
pub fn check_bounds(channel: Channel, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::not_a_number(channel, &value.to_string()));
    }
    match channel.bounds() {
        Some((min, max)) if !(min..=max).contains(&value) => {
            Err(ValidationError::out_of_range(channel, value, min, max))
        }
        _ => Ok(value),
    }
}

/// Like [`validate_channel`], with the channel given by name.
pub fn validate_channel_named(name: &str, raw: &str) -> Result<f64, ExplorerError> {
    let channel: Channel = name.parse()?;
    Ok(validate_channel(channel, raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationErrorKind;

    #[test]
    fn lightness_accepts_half() {
        assert_eq!(validate_channel(Channel::L, "0.5"), Ok(0.5));
    }

    #[test]
    fn lightness_rejects_non_numeric_input() {
        let err = validate_channel(Channel::L, "abc").unwrap_err();
        assert_eq!(err.channel, Channel::L);
        assert!(matches!(err.kind, ValidationErrorKind::NotANumber { .. }));
    }

    #[test]
    fn chroma_rejects_value_above_bound() {
        let err = validate_channel(Channel::C, "0.5").unwrap_err();
        assert_eq!(err.channel, Channel::C);
        assert_eq!(err.message(), "c must be between 0 and 0.4");
    }

    #[test]
    fn bounds_are_closed_intervals() {
        assert_eq!(validate_channel(Channel::L, "0"), Ok(0.0));
        assert_eq!(validate_channel(Channel::L, "1"), Ok(1.0));
        assert_eq!(validate_channel(Channel::C, "0.4"), Ok(0.4));
        assert!(validate_channel(Channel::L, "-0.001").is_err());
        assert!(validate_channel(Channel::C, "-0.1").is_err());
    }

    #[test]
    fn hue_is_unbounded_and_not_wrapped() {
        assert_eq!(validate_channel(Channel::H, "370"), Ok(370.0));
        assert_eq!(validate_channel(Channel::H, "-10"), Ok(-10.0));
        assert_eq!(validate_channel(Channel::H, "1e6"), Ok(1e6));
    }

    #[test]
    fn hue_can_still_fail_to_parse() {
        let err = validate_channel(Channel::H, "ten").unwrap_err();
        assert_eq!(err.message(), "not a number");
    }

    #[test]
    fn whitespace_is_trimmed() {
        assert_eq!(validate_channel(Channel::L, "  0.25\n"), Ok(0.25));
    }

    #[test]
    fn empty_and_non_finite_input_is_not_a_number() {
        for raw in ["", "   ", "NaN", "inf", "-infinity"] {
            let err = validate_channel(Channel::H, raw).unwrap_err();
            assert!(
                matches!(err.kind, ValidationErrorKind::NotANumber { .. }),
                "{raw:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn not_a_number_keeps_raw_text() {
        let err = validate_channel(Channel::C, "0.1x").unwrap_err();
        assert_eq!(
            err.kind,
            ValidationErrorKind::NotANumber {
                raw: "0.1x".to_string()
            }
        );
    }

    #[test]
    fn channel_parses_from_name_case_insensitively() {
        assert_eq!("l".parse::<Channel>().unwrap(), Channel::L);
        assert_eq!("C".parse::<Channel>().unwrap(), Channel::C);
        assert_eq!(" h ".parse::<Channel>().unwrap(), Channel::H);
        assert!("x".parse::<Channel>().is_err());
    }

    #[test]
    fn validate_channel_named_reports_unknown_channel() {
        let err = validate_channel_named("a", "0.5").unwrap_err();
        assert!(matches!(err, ExplorerError::UnknownChannel(ref n) if n == "a"));
    }

    #[test]
    fn validate_channel_named_wraps_validation_errors() {
        let err = validate_channel_named("l", "2").unwrap_err();
        assert!(matches!(err, ExplorerError::Validation(_)));
        assert_eq!(validate_channel_named("c", "0.1").unwrap(), 0.1);
    }

    #[test]
    fn check_bounds_rejects_nan() {
        assert!(check_bounds(Channel::H, f64::NAN).is_err());
    }

    #[test]
    fn channel_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Channel::H).unwrap(), "\"h\"");
    }

    #[test]
    fn index_matches_all_order() {
        for (i, ch) in Channel::ALL.iter().enumerate() {
            assert_eq!(ch.index(), i);
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn in_range_lightness_round_trips(l in 0.0_f64..=1.0) {
                let parsed = validate_channel(Channel::L, &l.to_string());
                prop_assert_eq!(parsed, Ok(l));
            }

            #[test]
            fn any_finite_hue_is_accepted(h in -1e9_f64..1e9) {
                let parsed = validate_channel(Channel::H, &h.to_string());
                prop_assert_eq!(parsed, Ok(h));
            }

            #[test]
            fn chroma_above_bound_is_rejected(c in 0.400_001_f64..10.0) {
                let err = validate_channel(Channel::C, &c.to_string()).unwrap_err();
                prop_assert_eq!(err.channel, Channel::C);
            }
        }
    }
}
