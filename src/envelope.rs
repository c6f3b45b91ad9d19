//! Response envelope decoding.
//!
//! The API has been observed wrapping the record array under different keys
//! depending on endpoint and server version: a bare array, `{"data": [...]}`,
//! or `{"<endpoint name>": [...]}`. [`Envelope::decode`] classifies a parsed
//! body into an explicit variant instead of duck-typing it away, and
//! [`Envelope::into_records`] flattens back to the record sequence.

use serde_json::Value;

/// Envelope keys probed on object bodies, in priority order.
///
/// `data` comes first because it is the most common generic wrapper; the
/// endpoint-named keys are version-specific fallbacks. The order is a pinned
/// contract, not alphabetical.
pub const ENVELOPE_KEYS: [&str; 5] = ["data", "incomes", "stocks", "orders", "sales"];

/// Cap on how much of an unrecognized body makes it into the warning log.
const WARN_PREVIEW_CHARS: usize = 256;

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

/// Classified shape of a successful response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    /// The body was itself the record array.
    Bare(Vec<Value>),
    /// The record array sat under one of [`ENVELOPE_KEYS`].
    Keyed(&'static str, Vec<Value>),
    /// No known shape matched; the original body is kept for diagnostics.
    Unrecognized(Value),
}

impl Envelope {
    /// Classify a parsed response body.
    ///
    /// Object bodies are probed with [`ENVELOPE_KEYS`] in order; a key that
    /// is present but not an array falls through to the next candidate.
    pub fn decode(body: Value) -> Envelope {
        match body {
            Value::Array(records) => Envelope::Bare(records),
            Value::Object(mut map) => {
                for key in ENVELOPE_KEYS {
                    if matches!(map.get(key), Some(Value::Array(_))) {
                        if let Some(Value::Array(records)) = map.remove(key) {
                            return Envelope::Keyed(key, records);
                        }
                    }
                }
                Envelope::Unrecognized(Value::Object(map))
            }
            other => Envelope::Unrecognized(other),
        }
    }

    /// The envelope key the records were found under, if any.
    pub fn key(&self) -> Option<&'static str> {
        match self {
            Envelope::Keyed(key, _) => Some(key),
            _ => None,
        }
    }

    /// Flatten to the record sequence.
    ///
    /// An unrecognized shape yields an empty sequence with a logged warning.
    /// Callers see the same thing they would for a legitimately empty result;
    /// the server answered, it just answered something we cannot read.
    pub fn into_records(self) -> Vec<Value> {
        match self {
            Envelope::Bare(records) | Envelope::Keyed(_, records) => records,
            Envelope::Unrecognized(body) => {
                let rendered = body.to_string();
                let mut preview: String = rendered.chars().take(WARN_PREVIEW_CHARS).collect();
                if preview.len() < rendered.len() {
                    preview.push_str("...");
                }
                log::warn!("unrecognized response envelope: {preview}");
                Vec::new()
            }
        }
    }
}
