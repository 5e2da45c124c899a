//! Typed lookups into a JSON object, falling back to a default.
//!
//! Missing keys, `null`, and values of the wrong JSON type all yield the
//! default; a wrong type is logged at warn level since it is almost always a
//! typo in a config file.

use log::warn;
use serde_json::Value;

fn lookup<'a>(params: &'a Value, name: &str) -> Option<&'a Value> {
    params.get(name).filter(|v| !v.is_null())
}

fn mismatch<T>(name: &str, expected: &str, got: &Value, default: T) -> T {
    warn!("config key '{name}': expected {expected}, got {got}; using default");
    default
}

/// Reads `params[name]` as `f64`. Integers are accepted.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    match lookup(params, name) {
        None => default,
        Some(v) => v
            .as_f64()
            .unwrap_or_else(|| mismatch(name, "number", v, default)),
    }
}

/// Reads `params[name]` as a non-negative integer.
pub fn param_u64(params: &Value, name: &str, default: u64) -> u64 {
    match lookup(params, name) {
        None => default,
        Some(v) => v
            .as_u64()
            .unwrap_or_else(|| mismatch(name, "non-negative integer", v, default)),
    }
}

/// Reads `params[name]` as a string.
pub fn param_string(params: &Value, name: &str, default: &str) -> String {
    match lookup(params, name) {
        None => default.to_owned(),
        Some(v) => v
            .as_str()
            .map(String::from)
            .unwrap_or_else(|| mismatch(name, "string", v, default.to_owned())),
    }
}

/// Reads `params[name]` as a two-element `[min, max]` number array.
pub fn param_range(params: &Value, name: &str, default: (f64, f64)) -> (f64, f64) {
    match lookup(params, name) {
        None => default,
        Some(v) => match v.as_array().map(Vec::as_slice) {
            Some([min, max]) => match (min.as_f64(), max.as_f64()) {
                (Some(min), Some(max)) => (min, max),
                _ => mismatch(name, "[number, number]", v, default),
            },
            _ => mismatch(name, "[number, number]", v, default),
        },
    }
}
