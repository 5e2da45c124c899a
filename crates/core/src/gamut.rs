//! Gamut membership and chroma-reduction gamut mapping.
//!
//! A color is in gamut when its linear RGB components in the target space
//! all lie in [0, 1] (within a small epsilon). Mapping holds lightness and
//! hue fixed and bisects chroma down to the largest in-gamut value.
//!
//! Reference: <https://drafts.csswg.org/css-color-4/#binsearch>, minus the
//! deltaE early exit; only chroma moves here.

use crate::color::{oklch_to_linear, LinearRgb, OkLch};
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

/// Tolerance for the `[0, 1]` channel test.
pub const DEFAULT_GAMUT_EPSILON: f64 = 1e-7;
/// Bisection stops once the chroma bracket is narrower than this.
pub const DEFAULT_CHROMA_TOLERANCE: f64 = 1e-4;
/// Hard cap on bisection steps.
pub const DEFAULT_MAX_ITERATIONS: u32 = 30;

/// Target RGB gamut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gamut {
    #[default]
    Srgb,
    DisplayP3,
}

impl Gamut {
    pub fn name(self) -> &'static str {
        match self {
            Gamut::Srgb => "srgb",
            Gamut::DisplayP3 => "display-p3",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "srgb" => Some(Gamut::Srgb),
            "display-p3" | "p3" => Some(Gamut::DisplayP3),
            _ => None,
        }
    }

    /// Re-expresses linear sRGB in this gamut's linear primaries.
    fn from_linear_srgb(self, c: LinearRgb) -> [f64; 3] {
        let v = [c.r, c.g, c.b];
        match self {
            Gamut::Srgb => v,
            Gamut::DisplayP3 => {
                multiply(&XYZ_TO_LINEAR_DISPLAY_P3, &multiply(&LINEAR_SRGB_TO_XYZ, &v))
            }
        }
    }
}

const LINEAR_SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.41239079926595934, 0.357584339383878, 0.1804807884018343],
    [0.21263900587151027, 0.715168678767756, 0.07219231536073371],
    [0.01933081871559182, 0.11919477979462598, 0.9505321522496607],
];

const XYZ_TO_LINEAR_DISPLAY_P3: [[f64; 3]; 3] = [
    [2.493496911941425, -0.9313836179191239, -0.40271078445071684],
    [-0.8294889695615747, 1.7626640603183463, 0.023624685841943577],
    [0.03584583024378447, -0.07617238926804182, 0.9568845240076872],
];

fn multiply(m: &[[f64; 3]; 3], v: &[f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// Tuning for [`clamp_to_gamut_with`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClampSettings {
    pub chroma_tolerance: f64,
    pub max_iterations: u32,
    pub gamut_epsilon: f64,
}

impl Default for ClampSettings {
    fn default() -> Self {
        Self {
            chroma_tolerance: DEFAULT_CHROMA_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            gamut_epsilon: DEFAULT_GAMUT_EPSILON,
        }
    }
}

/// Outcome of gamut mapping. `clamped` equals the input when `in_gamut`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GamutResult {
    pub in_gamut: bool,
    pub clamped: OkLch,
}

/// True when `color` lies inside sRGB.
pub fn is_in_gamut(color: OkLch) -> bool {
    is_in_gamut_for(color, Gamut::Srgb, DEFAULT_GAMUT_EPSILON)
}

/// True when every linear channel of `color` in `gamut` lies in
/// `[-epsilon, 1 + epsilon]`. NaN channels are out of gamut.
pub fn is_in_gamut_for(color: OkLch, gamut: Gamut, epsilon: f64) -> bool {
    gamut
        .from_linear_srgb(oklch_to_linear(color))
        .iter()
        .all(|&v| v >= -epsilon && v <= 1.0 + epsilon)
}

/// Maps `color` into sRGB with default settings.
pub fn clamp_to_gamut(color: OkLch) -> OkLch {
    clamp_to_gamut_with(color, Gamut::Srgb, &ClampSettings::default())
}

/// Largest-chroma color at the same lightness and hue that lies in `gamut`.
///
/// In-gamut input is returned unchanged. If even chroma 0 is out of gamut
/// (lightness outside [0, 1]), the chroma-0 color is returned.
pub fn clamp_to_gamut_with(color: OkLch, gamut: Gamut, settings: &ClampSettings) -> OkLch {
    let eps = settings.gamut_epsilon;
    if is_in_gamut_for(color, gamut, eps) {
        return color;
    }

    let gray = OkLch { c: 0.0, ..color };
    if !is_in_gamut_for(gray, gamut, eps) {
        warn!(
            "l={} is outside {} even at chroma 0, falling back to gray",
            color.l,
            gamut.name()
        );
        return gray;
    }

    // Invariant: `lo` is in gamut, `hi` is not.
    let mut lo = 0.0;
    let mut hi = color.c.max(0.0);
    let mut iterations = 0;
    while hi - lo > settings.chroma_tolerance && iterations < settings.max_iterations {
        let mid = 0.5 * (lo + hi);
        if is_in_gamut_for(OkLch { c: mid, ..color }, gamut, eps) {
            lo = mid;
        } else {
            hi = mid;
        }
        iterations += 1;
    }
    trace!("chroma bisection finished after {iterations} steps");
    debug!(
        "clamped oklch({} {} {}) to chroma {lo} in {}",
        color.l,
        color.c,
        color.h,
        gamut.name()
    );

    OkLch { c: lo, ..color }
}

/// Membership test and clamped representative in one call.
pub fn map_to_gamut(color: OkLch, gamut: Gamut, settings: &ClampSettings) -> GamutResult {
    if is_in_gamut_for(color, gamut, settings.gamut_epsilon) {
        GamutResult {
            in_gamut: true,
            clamped: color,
        }
    } else {
        GamutResult {
            in_gamut: false,
            clamped: clamp_to_gamut_with(color, gamut, settings),
        }
    }
}
