//! Color types and the OKLCh ↔ sRGB conversion chain.
//!
//! Four float color types (`Srgb`, `LinearRgb`, `OkLab`, `OkLch`) plus the
//! 8-bit `Rgb8` used for display. Conversions are pure functions; nothing
//! here clips or clamps except the final 8-bit quantization, so gamut
//! membership can be read off the intermediate linear values.
//!
//! `OkLch` is the explorer's color model: an immutable value whose channel
//! updates and display adjustments always return a new color.

use crate::achromatic::{is_achromatic_by_lightness, AchromaticPolicy};
use crate::channel::Channel;
use crate::hue::normalize_hue;
use serde::{Deserialize, Serialize};

/// Gamma-encoded sRGB with nominal components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Linear-light sRGB (gamma-decoded). Out-of-gamut colors have components
/// below 0 or above 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// OKLab perceptual color space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OkLab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// OKLCh color: lightness, chroma, hue in degrees.
///
/// Hue is kept exactly as entered (e.g. `370`) until [`OkLch::normalized`]
/// or a formatter reads it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OkLch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

/// 8-bit sRGB, one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl OkLch {
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Reads one channel.
    pub fn channel(&self, channel: Channel) -> f64 {
        match channel {
            Channel::L => self.l,
            Channel::C => self.c,
            Channel::H => self.h,
        }
    }

    /// Returns a copy with one channel replaced.
    pub fn with_channel(self, channel: Channel, value: f64) -> Self {
        match channel {
            Channel::L => Self { l: value, ..self },
            Channel::C => Self { c: value, ..self },
            Channel::H => Self { h: value, ..self },
        }
    }

    /// Returns a copy with the hue wrapped into [0, 360).
    pub fn normalized(self) -> Self {
        Self {
            h: normalize_hue(self.h),
            ..self
        }
    }

    /// True when lightness falls outside the policy's expressive band.
    pub fn is_achromatic(&self, policy: &AchromaticPolicy) -> bool {
        is_achromatic_by_lightness(self.l, policy)
    }

    /// The color as it should be shown: normalized, with chroma and hue
    /// dropped to 0 when the lightness makes them imperceptible.
    pub fn for_display(self, policy: &AchromaticPolicy) -> Self {
        if self.is_achromatic(policy) {
            Self {
                l: self.l,
                c: 0.0,
                h: 0.0,
            }
        } else {
            self.normalized()
        }
    }
}

impl Rgb8 {
    /// Quantizes sRGB to 8 bits: clip to [0, 1], scale, round half away from zero.
    pub fn from_srgb(c: Srgb) -> Self {
        Self {
            r: quantize(c.r),
            g: quantize(c.g),
            b: quantize(c.b),
        }
    }

    pub fn to_srgb(self) -> Srgb {
        Srgb {
            r: self.r as f64 / 255.0,
            g: self.g as f64 / 255.0,
            b: self.b as f64 / 255.0,
        }
    }

    /// `#rrggbb`, lowercase.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

fn quantize(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    // f64::round rounds half away from zero.
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Applies inverse sRGB gamma to convert a single sRGB component to linear.
fn srgb_component_to_linear(c: f64) -> f64 {
    if c.abs() <= 0.04045 {
        c / 12.92
    } else {
        c.signum() * ((c.abs() + 0.055) / 1.055).powf(2.4)
    }
}

/// Applies sRGB gamma to a single linear component.
///
/// Mirrored around zero so negative (out-of-gamut) components stay negative
/// instead of becoming NaN.
fn linear_component_to_srgb(c: f64) -> f64 {
    if c.abs() <= 0.0031308 {
        c * 12.92
    } else {
        c.signum() * (1.055 * c.abs().powf(1.0 / 2.4) - 0.055)
    }
}

pub fn srgb_to_linear(c: Srgb) -> LinearRgb {
    LinearRgb {
        r: srgb_component_to_linear(c.r),
        g: srgb_component_to_linear(c.g),
        b: srgb_component_to_linear(c.b),
    }
}

pub fn linear_to_srgb(c: LinearRgb) -> Srgb {
    Srgb {
        r: linear_component_to_srgb(c.r),
        g: linear_component_to_srgb(c.g),
        b: linear_component_to_srgb(c.b),
    }
}

/// Linear sRGB to OKLab (Ottosson's M1 matrix, cube root, M2 matrix).
pub fn linear_to_oklab(c: LinearRgb) -> OkLab {
    let l_ = 0.4122214708 * c.r + 0.5363325363 * c.g + 0.0514459929 * c.b;
    let m_ = 0.2119034982 * c.r + 0.6806995451 * c.g + 0.1073969566 * c.b;
    let s_ = 0.0883024619 * c.r + 0.2817188376 * c.g + 0.6299787005 * c.b;

    let l_c = l_.cbrt();
    let m_c = m_.cbrt();
    let s_c = s_.cbrt();

    OkLab {
        l: 0.2104542553 * l_c + 0.7936177850 * m_c - 0.0040720468 * s_c,
        a: 1.9779984951 * l_c - 2.4285922050 * m_c + 0.4505937099 * s_c,
        b: 0.0259040371 * l_c + 0.7827717662 * m_c - 0.8086757660 * s_c,
    }
}

/// OKLab to linear sRGB via the inverse matrices. No clipping.
pub fn oklab_to_linear(c: OkLab) -> LinearRgb {
    let l_ = c.l + 0.3963377774 * c.a + 0.2158037573 * c.b;
    let m_ = c.l - 0.1055613458 * c.a - 0.0638541728 * c.b;
    let s_ = c.l - 0.0894841775 * c.a - 1.2914855480 * c.b;

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    LinearRgb {
        r: 4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s,
        g: -1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s,
        b: -0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s,
    }
}

/// OKLab to OKLCh. Hue is 0 below chroma 1e-10 where `atan2` is meaningless.
pub fn oklab_to_oklch(c: OkLab) -> OkLch {
    let ch = (c.a * c.a + c.b * c.b).sqrt();
    let h = if ch < 1e-10 {
        0.0
    } else {
        normalize_hue(c.b.atan2(c.a).to_degrees())
    };
    OkLch { l: c.l, c: ch, h }
}

pub fn oklch_to_oklab(c: OkLch) -> OkLab {
    let h_rad = c.h.to_radians();
    OkLab {
        l: c.l,
        a: c.c * h_rad.cos(),
        b: c.c * h_rad.sin(),
    }
}

/// OKLCh to linear sRGB, unclipped. Used by the gamut test.
pub fn oklch_to_linear(c: OkLch) -> LinearRgb {
    oklab_to_linear(oklch_to_oklab(c))
}

/// OKLCh to gamma-encoded sRGB, unclipped.
pub fn oklch_to_srgb(c: OkLch) -> Srgb {
    linear_to_srgb(oklch_to_linear(c))
}

/// sRGB to OKLCh via linear sRGB and OKLab.
pub fn srgb_to_oklch(c: Srgb) -> OkLch {
    oklab_to_oklch(linear_to_oklab(srgb_to_linear(c)))
}
