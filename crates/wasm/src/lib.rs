//! WASM bindings for the OKLCH explorer.
//!
//! Structured values cross the boundary as JSON strings. Operations that can
//! fail return `{"ok": ...}` or `{"error": ...}` instead of throwing; see
//! [`api`] for the envelope.

mod api;

use oklch_explorer_core::{is_achromatic, is_in_gamut, normalize_hue, OkLch};
use wasm_bindgen::prelude::*;

/// Runs once on module load: readable panics and core logs in the console.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Info);
}

/// Validate raw text for channel `l`, `c` or `h`.
#[wasm_bindgen(js_name = validateChannel)]
pub fn validate_channel(channel: &str, raw: &str) -> String {
    api::validate(channel, raw)
}

#[wasm_bindgen(js_name = normalizeHue)]
pub fn normalize_hue_js(h: f64) -> f64 {
    normalize_hue(h)
}

#[wasm_bindgen(js_name = isAchromatic)]
pub fn is_achromatic_js(l: f64) -> bool {
    is_achromatic(l)
}

#[wasm_bindgen(js_name = isInGamut)]
pub fn is_in_gamut_js(l: f64, c: f64, h: f64) -> bool {
    is_in_gamut(OkLch::new(l, c, h))
}

/// `{in_gamut, clamped: {l, c, h}}` in the envelope. Pass `""` for the default config.
#[wasm_bindgen(js_name = clampToGamut)]
pub fn clamp_to_gamut(l: f64, c: f64, h: f64, config_json: &str) -> String {
    api::clamp(l, c, h, config_json)
}

/// `{r, g, b}` with 8-bit channels.
#[wasm_bindgen(js_name = toRgb)]
pub fn to_rgb(l: f64, c: f64, h: f64) -> String {
    api::rgb_json(l, c, h)
}

#[wasm_bindgen(js_name = toHex)]
pub fn to_hex(l: f64, c: f64, h: f64) -> String {
    api::hex(l, c, h)
}

#[wasm_bindgen(js_name = toCssOklch)]
pub fn to_css_oklch(l: f64, c: f64, h: f64) -> String {
    api::css_oklch(l, c, h)
}

/// Full color card in the envelope.
#[wasm_bindgen]
pub fn inspect(l: f64, c: f64, h: f64, config_json: &str) -> String {
    api::inspect(l, c, h, config_json)
}

/// Seeded random in-gamut color as `{l, c, h}` in the envelope. The seed is
/// a plain JS number.
#[wasm_bindgen(js_name = randomColor)]
pub fn random_color(seed: f64, config_json: &str) -> String {
    api::random(seed, config_json)
}
