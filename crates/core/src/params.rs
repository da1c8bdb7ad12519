//! Lenient typed lookups in a `serde_json::Value` parameter object.
//!
//! Preset overrides arrive as free-form JSON. Each helper takes the object, a
//! key, and a default, and returns the default when the key is missing or
//! holds the wrong type. These never fail; range checks happen later in
//! [`OctaveParams::validate`](crate::fractal::OctaveParams::validate) and the
//! generator.

use serde_json::Value;

/// Extracts an `f64` from `params[name]`, returning `default` if missing or wrong type.
///
/// Accepts both JSON floats and integers.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Extracts a `usize` from `params[name]`, returning `default` if missing or wrong type.
///
/// Only non-negative JSON integers are accepted.
pub fn param_usize(params: &Value, name: &str, default: usize) -> usize {
    params
        .get(name)
        .and_then(Value::as_u64)
        .and_then(|v| usize::try_from(v).ok())
        .unwrap_or(default)
}
