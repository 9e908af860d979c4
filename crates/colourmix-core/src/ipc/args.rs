//! Strict extraction of typed arguments from a JSON payload.

use colourmix_common::{ColourError, DEFAULT_PERCENTAGE, WHITE};
use serde_json::Value;

/// Named field of an object payload, treating `null` as absent.
fn field<'a>(payload: &'a Value, name: &str) -> Option<&'a Value> {
    payload.get(name).filter(|v| !v.is_null())
}

/// The primary colour: `payload.colour` for objects, the payload itself otherwise.
pub(super) fn colour_arg(payload: &Value) -> Result<&str, ColourError> {
    let value = if payload.is_object() {
        field(payload, "colour")
    } else {
        Some(payload)
    };
    match value {
        Some(value) => as_colour_str(value),
        None => Err(ColourError::InvalidFormat("missing colour".into())),
    }
}

/// `payload.with`, defaulting to white.
pub(super) fn second_colour_arg(payload: &Value) -> Result<&str, ColourError> {
    field(payload, "with").map_or(Ok(WHITE), as_colour_str)
}

/// `payload.percentage`, defaulting to the midpoint. Must be a JSON number.
pub(super) fn percentage_arg(payload: &Value) -> Result<f64, ColourError> {
    match field(payload, "percentage") {
        None => Ok(DEFAULT_PERCENTAGE),
        Some(value) => value
            .as_f64()
            .ok_or_else(|| ColourError::InvalidPercentage(format!("expected a number, got {value}"))),
    }
}

/// A named channel value for `asHex`. Must be a JSON number.
pub(super) fn channel_arg(payload: &Value, name: &'static str) -> Result<f64, ColourError> {
    field(payload, name)
        .and_then(Value::as_f64)
        .ok_or_else(|| ColourError::InvalidFormat(format!("{name} must be a number")))
}

fn as_colour_str(value: &Value) -> Result<&str, ColourError> {
    value
        .as_str()
        .ok_or_else(|| ColourError::InvalidFormat(format!("expected a colour string, got {value}")))
}
