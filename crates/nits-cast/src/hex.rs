//! Two-character hexadecimal byte encoding
//!
//! What a value means depends on its shape:
//! - string: a hex pair, validated and uppercased
//! - float: a fraction in [0, 1] scaled onto 0..=255
//! - integer: same scaling as float, so anything non-zero saturates to `FF`

use crate::error::{CastError, CastResult};
use crate::value::Value;
use once_cell::sync::Lazy;
use regex::Regex;

static HEXADECIMAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9a-fA-F]{2}$").expect("hex pattern is valid"));

/// Encoding of the absent value
pub const ZERO_BYTE: &str = "00";

/// Convert to a two-character uppercase hex string (`"00"`..`"FF"`)
pub fn hex_byte(x: Option<&Value>) -> CastResult<Option<Value>> {
    let encoded = match x {
        None => ZERO_BYTE.to_string(),
        Some(value @ Value::Str(s)) => validate(value, s)?,
        Some(value @ Value::Float(f)) => encode_fraction(value, *f)?,
        Some(value @ Value::Int(i)) => encode_fraction(value, *i as f64)?,
    };
    Ok(Some(Value::Str(encoded)))
}

fn validate(value: &Value, s: &str) -> CastResult<String> {
    if s.chars().count() != 2 {
        return Err(CastError::format(value, "hex_byte", "expected exactly two characters"));
    }
    if !HEXADECIMAL.is_match(s) {
        return Err(CastError::format(value, "hex_byte", "expected hexadecimal digits"));
    }
    Ok(s.to_ascii_uppercase())
}

fn encode_fraction(value: &Value, x: f64) -> CastResult<String> {
    if x.is_nan() {
        return Err(CastError::format(value, "hex_byte", "NaN has no byte value"));
    }
    let fraction = if x.abs() >= 1.0 { 1.0 } else { x.abs().rem_euclid(1.0) };
    // fraction is in [0, 1], so the product always fits a byte
    let byte = (fraction * 255.0).trunc() as u8;
    Ok(format!("{:02X}", byte))
}
