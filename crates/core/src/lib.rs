#![deny(unsafe_code)]
//! Core of the OKLCH explorer.
//!
//! Takes raw channel text through validation, hue normalization, OKLCh ↔
//! sRGB conversion, gamut mapping and formatting. Every operation is a pure
//! function of its inputs; the only stateful type is [`ColorEditor`], which
//! a UI owns to track per-field text and errors.

pub mod achromatic;
pub mod channel;
pub mod color;
pub mod config;
pub mod editor;
pub mod error;
pub mod format;
pub mod gamut;
pub mod hue;
pub mod params;
pub mod random;

pub use achromatic::{is_achromatic, is_achromatic_by_lightness, AchromaticPolicy};
pub use channel::{validate_channel, validate_channel_named, Channel};
pub use color::{LinearRgb, OkLab, OkLch, Rgb8, Srgb};
pub use config::ExplorerConfig;
pub use editor::ColorEditor;
pub use error::{ExplorerError, ValidationError, ValidationErrorKind};
pub use format::{
    format_color, to_css_oklch, to_css_rgb, to_hex, to_rgb, ColorReport, Format, Variant,
};
pub use gamut::{
    clamp_to_gamut, clamp_to_gamut_with, is_in_gamut, is_in_gamut_for, map_to_gamut,
    ClampSettings, Gamut, GamutResult,
};
pub use hue::normalize_hue;
pub use random::{random_color, RandomSource, Xorshift64};
