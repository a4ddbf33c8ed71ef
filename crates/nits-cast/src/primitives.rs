//! Conversion primitives
//!
//! Implements: identity, numeric, integer, abs_numeric, abs_integer, string,
//! sign, degree, signed_degree, signed_degree_90, fraction, hex_byte
//!
//! Every primitive has the same shape, `Option<&Value> -> CastResult<Option<Value>>`,
//! so any of them can be handed to the cast factory. `None` input selects the
//! primitive's zero-argument result.

use crate::error::{CastError, CastResult};
use crate::hex;
use crate::value::Value;
use std::fmt;
use std::str::FromStr;

/// The built-in conversions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Identity,
    Numeric,
    Integer,
    AbsNumeric,
    AbsInteger,
    String,
    Sign,
    Degree,
    SignedDegree,
    SignedDegree90,
    Fraction,
    HexByte,
}

impl Primitive {
    /// All primitives, in registration order
    pub const ALL: [Primitive; 12] = [
        Self::Identity,
        Self::Numeric,
        Self::Integer,
        Self::AbsNumeric,
        Self::AbsInteger,
        Self::String,
        Self::Sign,
        Self::Degree,
        Self::SignedDegree,
        Self::SignedDegree90,
        Self::Fraction,
        Self::HexByte,
    ];

    /// Canonical snake_case name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Numeric => "numeric",
            Self::Integer => "integer",
            Self::AbsNumeric => "abs_numeric",
            Self::AbsInteger => "abs_integer",
            Self::String => "string",
            Self::Sign => "sign",
            Self::Degree => "degree",
            Self::SignedDegree => "signed_degree",
            Self::SignedDegree90 => "signed_degree_90",
            Self::Fraction => "fraction",
            Self::HexByte => "hex_byte",
        }
    }

    /// Apply the primitive
    pub fn convert(&self, x: Option<&Value>) -> CastResult<Option<Value>> {
        match self {
            Self::Identity => identity(x),
            Self::Numeric => numeric(x),
            Self::Integer => integer(x),
            Self::AbsNumeric => abs_numeric(x),
            Self::AbsInteger => abs_integer(x),
            Self::String => string(x),
            Self::Sign => sign(x),
            Self::Degree => degree(x),
            Self::SignedDegree => signed_degree(x),
            Self::SignedDegree90 => signed_degree_90(x),
            Self::Fraction => fraction(x),
            Self::HexByte => hex::hex_byte(x),
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Primitive {
    type Err = String;

    /// Accepts snake_case, kebab-case and camelCase spellings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Self::ALL
            .iter()
            .find(|p| p.name().replace('_', "") == normalized)
            .copied()
            .ok_or_else(|| format!("Unknown conversion: {}", s))
    }
}

// ============================================================================
// Numeric helpers
// ============================================================================

/// Interpret a value as a float the way `float(x)` would: strings are parsed
/// (surrounding whitespace ignored), numbers are taken as-is.
pub(crate) fn to_float(value: &Value, target: &str) -> CastResult<f64> {
    match value {
        Value::Int(i) => Ok(*i as f64),
        Value::Float(f) => Ok(*f),
        Value::Str(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| CastError::format(value, target, e.to_string())),
    }
}

/// Like `to_float`, but absent input falls back to `zero`
fn float_or(x: Option<&Value>, zero: f64, target: &str) -> CastResult<f64> {
    x.map_or(Ok(zero), |v| to_float(v, target))
}

fn numeric_value(x: Option<&Value>) -> CastResult<f64> {
    match x {
        None => Ok(0.0),
        Some(v) if v.is_empty_str() => Ok(0.0),
        Some(v) => to_float(v, "numeric"),
    }
}

fn integer_value(x: Option<&Value>) -> CastResult<i64> {
    // Strings holding fractions ("2.12") go through the float path first
    if let Some(Value::Int(i)) = x {
        return Ok(*i);
    }
    let f = numeric_value(x)?;
    truncate(f).ok_or_else(|| {
        CastError::format(&Value::Float(f), "integer", "value has no integer representation")
    })
}

/// Truncate toward zero, refusing values outside the i64 range
fn truncate(f: f64) -> Option<i64> {
    let t = f.trunc();
    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    if t.is_finite() && t >= i64::MIN as f64 && t < i64::MAX as f64 {
        Some(t as i64)
    } else {
        None
    }
}

fn sign_of(f: f64) -> i64 {
    if f == 0.0 {
        0
    } else if f < 0.0 {
        -1
    } else {
        1
    }
}

/// Values already in [0, 360) pass through untouched so reapplying is exact
fn degree_of(f: f64) -> f64 {
    let y = if (0.0..360.0).contains(&f) { f } else { f.rem_euclid(360.0) };
    // rem_euclid rounds tiny negatives up to 360; `+ 0.0` clears a negative zero
    if y >= 360.0 { 0.0 } else { y + 0.0 }
}

fn signed_degree_of(f: f64) -> f64 {
    if f > -180.0 && f <= 180.0 {
        return f + 0.0;
    }
    let y = degree_of(f);
    if y > 180.0 { y - 360.0 } else { y }
}

// ============================================================================
// Primitives
// ============================================================================

/// Return the input unchanged; absent stays absent
pub fn identity(x: Option<&Value>) -> CastResult<Option<Value>> {
    Ok(x.cloned())
}

/// Parse as float; absent or empty string is 0.0
pub fn numeric(x: Option<&Value>) -> CastResult<Option<Value>> {
    numeric_value(x).map(|f| Some(Value::Float(f)))
}

/// `numeric` truncated toward zero
pub fn integer(x: Option<&Value>) -> CastResult<Option<Value>> {
    integer_value(x).map(|i| Some(Value::Int(i)))
}

pub fn abs_numeric(x: Option<&Value>) -> CastResult<Option<Value>> {
    numeric_value(x).map(|f| Some(Value::Float(f.abs())))
}

pub fn abs_integer(x: Option<&Value>) -> CastResult<Option<Value>> {
    let i = integer_value(x)?;
    i.checked_abs().map(|i| Some(Value::Int(i))).ok_or_else(|| {
        CastError::format(&Value::Int(i), "abs_integer", "absolute value overflows")
    })
}

/// Display form of the value; absent is the empty string
pub fn string(x: Option<&Value>) -> CastResult<Option<Value>> {
    Ok(Some(Value::Str(x.map(Value::to_string).unwrap_or_default())))
}

/// -1, 0 or 1
pub fn sign(x: Option<&Value>) -> CastResult<Option<Value>> {
    float_or(x, 0.0, "sign").map(|f| Some(Value::Int(sign_of(f))))
}

/// Value modulo 360, in [0, 360)
pub fn degree(x: Option<&Value>) -> CastResult<Option<Value>> {
    float_or(x, 0.0, "degree").map(|f| Some(Value::Float(degree_of(f))))
}

/// Degree folded into (-180, 180]
pub fn signed_degree(x: Option<&Value>) -> CastResult<Option<Value>> {
    float_or(x, 0.0, "signed_degree").map(|f| Some(Value::Float(signed_degree_of(f))))
}

/// Signed degree with values past +/-90 reflected back toward zero
pub fn signed_degree_90(x: Option<&Value>) -> CastResult<Option<Value>> {
    let y = signed_degree_of(float_or(x, 0.0, "signed_degree_90")?);
    let folded = if y.abs() > 90.0 {
        sign_of(y) as f64 * (180.0 - y.abs())
    } else {
        y
    };
    Ok(Some(Value::Float(folded)))
}

/// Number between zero and one.
///
/// Whole numbers map to 1 when positive and 0 otherwise; everything else
/// keeps its fractional part under floor modulo, so `-1.1` becomes `0.9`.
pub fn fraction(x: Option<&Value>) -> CastResult<Option<Value>> {
    let f = float_or(x, 0.0, "fraction")?;
    let result = if f - f.floor() == 0.0 {
        if f > 0.0 { 1.0 } else { 0.0 }
    } else {
        f.rem_euclid(1.0)
    };
    Ok(Some(Value::Float(result)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_names_round_trip() {
        for p in Primitive::ALL {
            assert_eq!(p.name().parse::<Primitive>().unwrap(), p);
        }
    }

    #[test]
    fn test_primitive_aliases() {
        assert_eq!("signedDegree90".parse::<Primitive>().unwrap(), Primitive::SignedDegree90);
        assert_eq!("hex-byte".parse::<Primitive>().unwrap(), Primitive::HexByte);
        assert_eq!("AbsInteger".parse::<Primitive>().unwrap(), Primitive::AbsInteger);
        assert!("hex_string_2".parse::<Primitive>().is_err());
    }

    #[test]
    fn test_truncate_bounds() {
        assert_eq!(truncate(-2.9), Some(-2));
        assert_eq!(truncate(f64::NAN), None);
        assert_eq!(truncate(f64::INFINITY), None);
        assert_eq!(truncate(1e19), None);
    }

    #[test]
    fn test_to_float_trims_whitespace() {
        assert_eq!(to_float(&Value::string(" 2.5 "), "numeric").unwrap(), 2.5);
        assert!(to_float(&Value::string(""), "degree").is_err());
    }
}
