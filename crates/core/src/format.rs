//! Display projections of an `OkLch` color: 8-bit RGB, hex, and CSS strings.
//!
//! Raw formatting shows the color as entered, even when it is out of gamut
//! (RGB channels are clipped by quantization). Clamped formatting maps the
//! color into the configured gamut first. [`ColorReport`] bundles both for
//! side-by-side display.

use crate::color::{oklch_to_srgb, OkLch, Rgb8};
use crate::config::ExplorerConfig;
use crate::gamut::map_to_gamut;
use crate::hue::normalize_hue;
use serde::{Deserialize, Serialize};

/// Output notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Oklch,
    Rgb,
    Hex,
}

/// Whether to gamut-map before formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Raw,
    Clamped,
}

/// OKLCh → linear sRGB → gamma sRGB → 8 bits.
pub fn to_rgb(color: OkLch) -> Rgb8 {
    Rgb8::from_srgb(oklch_to_srgb(color))
}

/// `#rrggbb`, lowercase.
pub fn to_hex(color: OkLch) -> String {
    to_rgb(color).to_hex()
}

/// `rgb(r, g, b)` with 8-bit channels.
pub fn to_css_rgb(color: OkLch) -> String {
    let Rgb8 { r, g, b } = to_rgb(color);
    format!("rgb({r}, {g}, {b})")
}

/// `oklch(L C H)` with hue wrapped into [0, 360).
///
/// L and C keep 4 decimals, H keeps 2; trailing zeros are dropped.
pub fn to_css_oklch(color: OkLch) -> String {
    format!(
        "oklch({} {} {})",
        trim_decimals(color.l, 4),
        trim_decimals(color.c, 4),
        // Rounding can carry 359.996 up to 360.
        normalize_hue(trim_decimals(normalize_hue(color.h), 2))
    )
}

fn trim_decimals(v: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    let rounded = (v * scale).round() / scale;
    // Avoid printing "-0".
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Formats `color` in `format`, clamping first for [`Variant::Clamped`].
pub fn format_color(
    color: OkLch,
    format: Format,
    variant: Variant,
    config: &ExplorerConfig,
) -> String {
    let color = match variant {
        Variant::Raw => color,
        Variant::Clamped => map_to_gamut(color, config.gamut, &config.clamp).clamped,
    };
    match format {
        Format::Oklch => to_css_oklch(color),
        Format::Rgb => to_css_rgb(color),
        Format::Hex => to_hex(color),
    }
}

/// All three notations of one color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Formatted {
    pub oklch: String,
    pub rgb: String,
    pub hex: String,
    pub channels: Rgb8,
}

impl Formatted {
    pub fn new(color: OkLch) -> Self {
        let channels = to_rgb(color);
        Self {
            oklch: to_css_oklch(color),
            rgb: to_css_rgb(color),
            hex: channels.to_hex(),
            channels,
        }
    }
}

/// Everything the color card shows for one color, recomputed per edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorReport {
    pub color: OkLch,
    pub in_gamut: bool,
    pub achromatic: bool,
    pub raw: Formatted,
    pub clamped_color: OkLch,
    pub clamped: Formatted,
    pub display: OkLch,
}

impl ColorReport {
    pub fn new(color: OkLch, config: &ExplorerConfig) -> Self {
        let gamut = map_to_gamut(color, config.gamut, &config.clamp);
        Self {
            color,
            in_gamut: gamut.in_gamut,
            achromatic: color.is_achromatic(&config.achromatic),
            raw: Formatted::new(color),
            clamped_color: gamut.clamped,
            clamped: Formatted::new(gamut.clamped),
            display: color.for_display(&config.achromatic),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{srgb_to_oklch, Srgb};
    use crate::gamut::{clamp_to_gamut, is_in_gamut};

    #[test]
    fn white_formats_as_ffffff() {
        let white = OkLch::new(1.0, 0.0, 0.0);
        assert_eq!(to_rgb(white), Rgb8 { r: 255, g: 255, b: 255 });
        assert_eq!(to_hex(white), "#ffffff");
        assert_eq!(to_css_rgb(white), "rgb(255, 255, 255)");
    }

    #[test]
    fn black_formats_as_000000() {
        assert_eq!(to_hex(OkLch::new(0.0, 0.0, 0.0)), "#000000");
    }

    #[test]
    fn srgb_red_round_trips_to_ff0000() {
        let red = srgb_to_oklch(Srgb { r: 1.0, g: 0.0, b: 0.0 });
        assert_eq!(to_hex(red), "#ff0000");
    }

    #[test]
    fn css_oklch_wraps_hue_and_trims_zeros() {
        assert_eq!(to_css_oklch(OkLch::new(0.7, 0.3, 370.0)), "oklch(0.7 0.3 10)");
        assert_eq!(to_css_oklch(OkLch::new(0.5, 0.1, -10.0)), "oklch(0.5 0.1 350)");
    }

    #[test]
    fn css_oklch_rounds_long_decimals() {
        let color = OkLch::new(0.123456, 0.098765, 123.4567);
        assert_eq!(to_css_oklch(color), "oklch(0.1235 0.0988 123.46)");
    }

    #[test]
    fn css_oklch_hue_rounding_up_wraps_to_zero() {
        assert_eq!(to_css_oklch(OkLch::new(0.5, 0.1, 359.996)), "oklch(0.5 0.1 0)");
        assert_eq!(to_css_oklch(OkLch::new(0.5, 0.1, -0.001)), "oklch(0.5 0.1 0)");
        assert_eq!(to_css_oklch(OkLch::new(0.5, 0.1, 359.994)), "oklch(0.5 0.1 359.99)");
    }

    #[test]
    fn css_oklch_never_prints_negative_zero() {
        assert_eq!(to_css_oklch(OkLch::new(-0.00001, 0.0, 0.0)), "oklch(0 0 0)");
    }

    #[test]
    fn raw_out_of_gamut_rgb_is_clipped_not_wrapped() {
        let rgb = to_rgb(OkLch::new(0.7, 0.3, 10.0));
        // Red exceeds 1 and green goes negative; both clip.
        assert_eq!((rgb.r, rgb.g), (255, 0));
    }

    #[test]
    fn clamped_variant_differs_from_raw_for_out_of_gamut_color() {
        let config = ExplorerConfig::default();
        let color = OkLch::new(0.7, 0.3, 370.0);
        let raw = format_color(color, Format::Oklch, Variant::Raw, &config);
        let clamped = format_color(color, Format::Oklch, Variant::Clamped, &config);
        assert_eq!(raw, "oklch(0.7 0.3 10)");
        assert_ne!(raw, clamped);
        assert!(clamped.starts_with("oklch(0.7 "), "got {clamped}");
        assert!(clamped.ends_with(" 10)"), "got {clamped}");
    }

    #[test]
    fn clamped_variant_equals_raw_in_gamut() {
        let config = ExplorerConfig::default();
        let color = OkLch::new(0.6, 0.05, 90.0);
        for format in [Format::Oklch, Format::Rgb, Format::Hex] {
            assert_eq!(
                format_color(color, format, Variant::Raw, &config),
                format_color(color, format, Variant::Clamped, &config)
            );
        }
    }

    #[test]
    fn report_for_out_of_gamut_scenario() {
        let report = ColorReport::new(OkLch::new(0.7, 0.3, 370.0), &ExplorerConfig::default());
        assert!(!report.in_gamut);
        assert!(!report.achromatic);
        assert_eq!(report.raw.oklch, "oklch(0.7 0.3 10)");
        assert_eq!(report.clamped_color.l, 0.7);
        assert!(is_in_gamut(report.clamped_color));
        assert_eq!(report.clamped.hex, to_hex(report.clamped_color));
        assert!((report.display.h - 10.0).abs() < 1e-9);
    }

    #[test]
    fn report_flags_near_black_as_achromatic() {
        let report = ColorReport::new(OkLch::new(0.0, 0.2, 0.0), &ExplorerConfig::default());
        assert!(report.achromatic);
        assert_eq!(report.display, OkLch::new(0.0, 0.0, 0.0));
        assert_eq!(report.color.c, 0.2);
    }

    #[test]
    fn report_serializes_to_json() {
        let report = ColorReport::new(OkLch::new(0.6, 0.05, 200.0), &ExplorerConfig::default());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["in_gamut"], true);
        assert_eq!(json["raw"]["hex"], report.raw.hex.as_str());
        assert_eq!(json["color"]["h"], 200.0);
    }

    mod proptests {
        use super::*;
        use crate::color::{linear_to_oklab, oklch_to_oklab, srgb_to_linear};
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn hex_is_seven_lowercase_chars(
                l in 0.0_f64..=1.0,
                c in 0.0_f64..=0.4,
                h in -360.0_f64..720.0,
            ) {
                let hex = to_hex(OkLch::new(l, c, h));
                prop_assert_eq!(hex.len(), 7);
                prop_assert!(hex.starts_with('#'));
                prop_assert!(
                    hex[1..].chars().all(|ch| ch.is_ascii_digit() || ('a'..='f').contains(&ch)),
                    "bad hex {}", hex
                );
            }

            #[test]
            fn in_gamut_rgb_reconstructs_oklch(
                l in 0.2_f64..=0.9,
                c in 0.02_f64..=0.4,
                h in 0.0_f64..360.0,
            ) {
                let color = clamp_to_gamut(OkLch::new(l, c, h));
                let back = linear_to_oklab(srgb_to_linear(to_rgb(color).to_srgb()));
                let expected = oklch_to_oklab(color);
                // 8-bit quantization bounds the error.
                prop_assert!((back.l - expected.l).abs() < 4e-3, "l: {} vs {}", back.l, expected.l);
                prop_assert!((back.a - expected.a).abs() < 4e-3, "a: {} vs {}", back.a, expected.a);
                prop_assert!((back.b - expected.b).abs() < 4e-3, "b: {} vs {}", back.b, expected.b);
            }
        }
    }
}
