//! JSON request boundary for dynamically-typed callers.
//!
//! A caller posts one [`ColourRequest`] per line, e.g.
//! `{"kind":"blend","payload":{"colour":"#00ADD8","percentage":0.5}}`, and
//! gets back one [`ColourResponse`]. Argument types are checked exactly:
//! colours must be JSON strings and percentages JSON numbers. Nothing is
//! coerced.

mod args;


use colourmix_common::{Channels, ColourError, BLACK, WHITE};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::blend::blend;
use crate::convert::{as_hex, as_rgb_array};
use crate::validate::{is_valid_hex, is_valid_rgb};

use args::{channel_arg, colour_arg, percentage_arg, second_colour_arg};

/// A typed request from a JSON caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColourRequest {
    /// Operation name: `isValidHex`, `isValidRgb`, `asRgbArray`, `asHex`,
    /// `blend`, `lighten` or `darken`.
    pub kind: String,
    /// Arguments. Either an object of named fields or, for single-colour
    /// operations, the colour itself.
    #[serde(default)]
    pub payload: Value,
}

/// Successful result of a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColourValue {
    Flag(bool),
    Hex(String),
    Channels(Channels),
}

/// Reply to a [`ColourRequest`]: `{"ok":true,"value":..}` or `{"ok":false,"error":".."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColourResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<ColourValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ColourRequest {
    /// Parse a request from a raw JSON string.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// Create a request.
    pub fn new(kind: impl Into<String>, payload: Value) -> Self {
        Self {
            kind: kind.into(),
            payload,
        }
    }

    /// Run the request.
    pub fn dispatch(&self) -> ColourResponse {
        let payload = &self.payload;
        let result = match self.kind.as_str() {
            "isValidHex" => Ok(ColourValue::Flag(
                colour_arg(payload).is_ok_and(is_valid_hex),
            )),
            "isValidRgb" => Ok(ColourValue::Flag(
                colour_arg(payload).is_ok_and(is_valid_rgb),
            )),
            "asRgbArray" => colour_arg(payload)
                .and_then(as_rgb_array)
                .map(ColourValue::Channels),
            "asHex" => hex_from_payload(payload).map(ColourValue::Hex),
            "blend" => blend_from_payload(payload, None).map(ColourValue::Hex),
            "lighten" => blend_from_payload(payload, Some(WHITE)).map(ColourValue::Hex),
            "darken" => blend_from_payload(payload, Some(BLACK)).map(ColourValue::Hex),
            other => {
                debug!(kind = other, "unknown request kind");
                return ColourResponse::failure(format!("unknown request kind: {other}"));
            }
        };

        match result {
            Ok(value) => ColourResponse::success(value),
            Err(e) => ColourResponse::failure(e),
        }
    }
}

impl ColourResponse {
    pub fn success(value: ColourValue) -> Self {
        Self {
            ok: true,
            value: Some(value),
            error: None,
        }
    }

    pub fn failure(error: impl std::fmt::Display) -> Self {
        Self {
            ok: false,
            value: None,
            error: Some(error.to_string()),
        }
    }

    /// Serialize to a single JSON line.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            format!("{{\"ok\":false,\"error\":\"failed to serialize response: {e}\"}}")
        })
    }
}

/// Parse, dispatch and serialize one request line.
///
/// Malformed JSON produces an error response rather than failing.
pub fn handle_line(raw: &str) -> String {
    match ColourRequest::from_json(raw) {
        Some(request) => request.dispatch().to_json(),
        None => {
            ColourResponse::failure("malformed request: expected {\"kind\", \"payload\"}").to_json()
        }
    }
}

fn hex_from_payload(payload: &Value) -> Result<String, ColourError> {
    as_hex(
        channel_arg(payload, "red")?,
        channel_arg(payload, "green")?,
        channel_arg(payload, "blue")?,
    )
}

/// `endpoint` fixes the second colour for `lighten`/`darken`.
fn blend_from_payload(payload: &Value, endpoint: Option<&str>) -> Result<String, ColourError> {
    let first = colour_arg(payload)?;
    let second = match endpoint {
        Some(fixed) => fixed,
        None => second_colour_arg(payload)?,
    };
    let percentage = percentage_arg(payload)?;
    blend(first, percentage, second)
}
