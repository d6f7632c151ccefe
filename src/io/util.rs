use super::{Format, error::Error};
use crate::model::types::Timestamp;
use serde_json::Value;
use std::str::FromStr;

/// The only `pha` marker that flags a NEO as potentially hazardous.
pub const HAZARD_MARKER: &str = "Y";

/// Placeholder written to CSV output for an unknown diameter.
pub const MISSING_DIAMETER: &str = "nan";

pub fn normalize_name(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

pub fn parse_diameter(raw: &str, line: usize) -> Result<Option<f64>, Error> {
    if raw.is_empty() {
        return Ok(None);
    }
    raw.trim()
        .parse::<f64>()
        .map(Some)
        .map_err(|_| Error::parse(Format::Csv, line, format!("invalid diameter value '{raw}'")))
}

#[inline]
pub fn is_hazardous(raw: &str) -> bool {
    raw == HAZARD_MARKER
}

pub fn record_str<'a>(
    fields: &'a [Value],
    position: usize,
    index: usize,
    label: &str,
) -> Result<&'a str, Error> {
    match fields.get(position) {
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(other) => Err(Error::invalid_record(
            Format::Json,
            index,
            format!("{label} at position {position} must be a string, found {other}"),
        )),
        None => Err(Error::invalid_record(
            Format::Json,
            index,
            format!("missing {label} at position {position}"),
        )),
    }
}

/// Reads a numeric field that may arrive as text or as a JSON number.
/// Null and empty text read as `0.0`.
pub fn record_f64_or_zero(
    fields: &[Value],
    position: usize,
    index: usize,
    label: &str,
) -> Result<f64, Error> {
    match fields.get(position) {
        None | Some(Value::Null) => Ok(0.0),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().map_err(|_| {
            Error::invalid_record(Format::Json, index, format!("invalid {label} value '{s}'"))
        }),
        Some(Value::Number(n)) => n.as_f64().ok_or_else(|| {
            Error::invalid_record(Format::Json, index, format!("invalid {label} value {n}"))
        }),
        Some(other) => Err(Error::invalid_record(
            Format::Json,
            index,
            format!("{label} at position {position} must be numeric, found {other}"),
        )),
    }
}

pub fn record_timestamp(
    fields: &[Value],
    position: usize,
    index: usize,
) -> Result<Timestamp, Error> {
    let raw = record_str(fields, position, index, "timestamp")?;
    Timestamp::from_str(raw).map_err(|e| Error::invalid_record(Format::Json, index, e.to_string()))
}
