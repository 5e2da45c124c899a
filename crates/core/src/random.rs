//! Seeded random colors.
//!
//! The random source is always passed in explicitly, so the startup color is
//! reproducible under a fixed seed.

use crate::channel::MAX_CHROMA;
use crate::color::OkLch;
use crate::config::check_lightness_range;
use crate::error::ExplorerError;
use crate::gamut::clamp_to_gamut;
use crate::hue::FULL_TURN;
use serde::{Deserialize, Serialize};

/// Anything that yields uniform floats in [0, 1).
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;

    /// Uniform in [min, max); returns `min` when the range is empty.
    fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }
}

/// Xorshift64 PRNG (shifts 13, 7, 17). Same seed, same sequence, on every platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    /// Substituted for seed 0, the all-zeros fixed point.
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }
}

impl RandomSource for Xorshift64 {
    /// Upper 53 bits over 2^53.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// A random color with lightness in `lightness`, clamped into sRGB.
///
/// Chroma is drawn from [0, 0.4) and hue from [0, 360) before clamping, so
/// high-chroma draws land on the gamut boundary.
pub fn random_color(
    lightness: (f64, f64),
    rng: &mut impl RandomSource,
) -> Result<OkLch, ExplorerError> {
    check_lightness_range(lightness)?;
    let (min, max) = lightness;
    let l = rng.next_range(min, max);
    let c = rng.next_range(0.0, MAX_CHROMA);
    let h = rng.next_range(0.0, FULL_TURN);
    Ok(clamp_to_gamut(OkLch::new(l, c, h)))
}
