//! Response envelope decoding.
//!
//! The API wraps each vehicle as `{"fields": {...}}` inside a top-level
//! `records` array. Decoding is best-effort per element: wrappers without a
//! usable `fields` object are dropped, and missing or mistyped fields fall
//! back to empty text or zero. Only an unparsable body or a missing
//! `records` array fails the whole decode.

use serde_json::{Map, Value};
use tracing::debug;

use super::error::DecodeError;
use super::fetch::RawBody;
use super::record::VehicleRecord;

/// Decode a raw response body into records, preserving API order
pub fn decode_response(body: &RawBody) -> Result<Vec<VehicleRecord>, DecodeError> {
    let document: Value =
        serde_json::from_slice(body.as_bytes()).map_err(DecodeError::MalformedPayload)?;
    decode_envelope(&document)
}

/// Decode a response held as text
pub fn decode_response_str(body: &str) -> Result<Vec<VehicleRecord>, DecodeError> {
    let document: Value = serde_json::from_str(body).map_err(DecodeError::MalformedPayload)?;
    decode_envelope(&document)
}

/// Decode an already parsed envelope
pub fn decode_envelope(document: &Value) -> Result<Vec<VehicleRecord>, DecodeError> {
    let records = match document.get("records") {
        Some(Value::Array(records)) => records,
        Some(_) => {
            return Err(DecodeError::UnexpectedShape(
                "'records' is not an array".to_string(),
            ))
        }
        None => {
            return Err(DecodeError::UnexpectedShape(
                "missing 'records' key".to_string(),
            ))
        }
    };

    let vehicles: Vec<VehicleRecord> = records
        .iter()
        .enumerate()
        .filter_map(|(index, wrapper)| match wrapper.get("fields") {
            Some(Value::Object(fields)) => Some(record_from_fields(fields)),
            _ => {
                debug!(index, "skipping record without a 'fields' object");
                None
            }
        })
        .collect();

    debug!(
        received = records.len(),
        decoded = vehicles.len(),
        "decoded response envelope"
    );
    Ok(vehicles)
}

fn record_from_fields(fields: &Map<String, Value>) -> VehicleRecord {
    VehicleRecord {
        make: coerce_text(fields.get("make")),
        model: coerce_text(fields.get("model")),
        year: coerce_text(fields.get("year")),
        cylinder_count: fields.get("cylinders").map_or(0, coerce_cylinders),
    }
}

/// Text value of a field, or an empty string when absent or not a string
pub fn coerce_text(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_default()
}

/// Integer cylinder count from any JSON number, truncated toward zero.
///
/// Non-numeric values yield 0. Floats beyond the `i64` range saturate.
pub fn coerce_cylinders(value: &Value) -> i64 {
    let Value::Number(number) = value else {
        return 0;
    };

    if let Some(i) = number.as_i64() {
        i
    } else if let Some(u) = number.as_u64() {
        i64::try_from(u).unwrap_or(i64::MAX)
    } else {
        number.as_f64().map_or(0, |f| f.trunc() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_cylinders_truncates_floats() {
        assert_eq!(coerce_cylinders(&json!(4.0)), 4);
        assert_eq!(coerce_cylinders(&json!(5.9)), 5);
        assert_eq!(coerce_cylinders(&json!(-2.7)), -2);
    }

    #[test]
    fn test_coerce_cylinders_accepts_integers() {
        assert_eq!(coerce_cylinders(&json!(8)), 8);
        assert_eq!(coerce_cylinders(&json!(u64::MAX)), i64::MAX);
    }

    #[test]
    fn test_coerce_cylinders_non_numeric_is_zero() {
        assert_eq!(coerce_cylinders(&json!("6")), 0);
        assert_eq!(coerce_cylinders(&json!(null)), 0);
        assert_eq!(coerce_cylinders(&json!([4])), 0);
    }

    #[test]
    fn test_coerce_text_defaults_to_empty() {
        assert_eq!(coerce_text(None), "");
        assert_eq!(coerce_text(Some(&json!(2020))), "");
        assert_eq!(coerce_text(Some(&json!("2020"))), "2020");
    }
}
