//! Cast errors

use crate::value::Value;
use thiserror::Error;

/// Result type for cast operations
pub type CastResult<T> = Result<T, CastError>;

/// Errors that can occur while building or calling a cast
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CastError {
    /// The input cannot be interpreted in the conversion's source domain
    #[error("Cannot convert {value:?} to {target}: {reason}")]
    Format {
        value: String,
        target: String,
        reason: String,
    },

    /// The conversion is not a fixed point on its own output
    #[error(
        "Conversion '{conversion}' is not idempotent: probe {probe} gave {first}, reapplied gave {second}"
    )]
    NotIdempotent {
        conversion: String,
        probe: String,
        first: String,
        second: String,
    },
}

impl CastError {
    /// Create a format error for a present, malformed value
    pub fn format(value: &Value, target: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Format {
            value: value.to_string(),
            target: target.into(),
            reason: reason.into(),
        }
    }

    /// Create an idempotence violation error
    pub fn not_idempotent(
        conversion: impl Into<String>,
        probe: Option<&Value>,
        first: Option<&Value>,
        second: Option<&Value>,
    ) -> Self {
        Self::NotIdempotent {
            conversion: conversion.into(),
            probe: describe(probe),
            first: describe(first),
            second: describe(second),
        }
    }

    /// Check if this is a runtime format error
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format { .. })
    }

    /// Check if this is a construction-time defect
    pub fn is_construction(&self) -> bool {
        matches!(self, Self::NotIdempotent { .. })
    }
}

fn describe(value: Option<&Value>) -> String {
    match value {
        Some(Value::Str(s)) => format!("'{}'", s),
        Some(v) => v.to_string(),
        None => "<absent>".to_string(),
    }
}
