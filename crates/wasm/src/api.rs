//! Plain-Rust bodies of the JS exports.
//!
//! Fallible operations answer with a JSON envelope, never a thrown value:
//! `{"ok": <result>}` on success, `{"error": {...}}` on failure. A rejected
//! channel value carries `{channel, message}`; any other failure `{message}`.
//! Nothing here touches `JsValue`, so it all runs under native `cargo test`.

use oklch_explorer_core::{
    map_to_gamut, random_color, to_css_oklch, to_hex, to_rgb, validate_channel, Channel,
    ColorReport, ExplorerConfig, ExplorerError, OkLch, ValidationError, Xorshift64,
};
use serde::Serialize;
use serde_json::{json, Value};

fn validation_error(err: &ValidationError) -> Value {
    json!({ "channel": err.channel.name(), "message": err.message() })
}

fn explorer_error(err: &ExplorerError) -> Value {
    match err {
        ExplorerError::Validation(v) => validation_error(v),
        other => json!({ "message": other.to_string() }),
    }
}

/// Wraps an outcome in the `ok`/`error` envelope.
fn envelope<T: Serialize>(outcome: Result<T, Value>) -> String {
    let body = match outcome.map(serde_json::to_value) {
        Ok(Ok(value)) => json!({ "ok": value }),
        Ok(Err(e)) => json!({ "error": { "message": e.to_string() } }),
        Err(error) => json!({ "error": error }),
    };
    body.to_string()
}

/// Config from JSON; an empty string means defaults.
fn config(json: &str) -> Result<ExplorerConfig, Value> {
    if json.trim().is_empty() {
        return Ok(ExplorerConfig::default());
    }
    ExplorerConfig::from_json_str(json).map_err(|e| explorer_error(&e))
}

pub fn validate(name: &str, raw: &str) -> String {
    envelope(
        name.parse::<Channel>()
            .map_err(|e| explorer_error(&e))
            .and_then(|ch| validate_channel(ch, raw).map_err(|e| validation_error(&e))),
    )
}

pub fn clamp(l: f64, c: f64, h: f64, config_json: &str) -> String {
    envelope(
        config(config_json)
            .map(|config| map_to_gamut(OkLch::new(l, c, h), config.gamut, &config.clamp)),
    )
}

pub fn rgb_json(l: f64, c: f64, h: f64) -> String {
    serde_json::to_string(&to_rgb(OkLch::new(l, c, h))).unwrap_or_default()
}

pub fn hex(l: f64, c: f64, h: f64) -> String {
    to_hex(OkLch::new(l, c, h))
}

pub fn css_oklch(l: f64, c: f64, h: f64) -> String {
    to_css_oklch(OkLch::new(l, c, h))
}

pub fn inspect(l: f64, c: f64, h: f64, config_json: &str) -> String {
    envelope(config(config_json).map(|config| ColorReport::new(OkLch::new(l, c, h), &config)))
}

/// JS numbers arrive as `f64`; negative and NaN seeds become 0, fractions truncate.
pub fn seed_from_number(seed: f64) -> u64 {
    seed as u64
}

pub fn random(seed: f64, config_json: &str) -> String {
    envelope(config(config_json).and_then(|config| {
        let mut rng = Xorshift64::new(seed_from_number(seed));
        random_color(config.random_lightness, &mut rng).map_err(|e| explorer_error(&e))
    }))
}
