//! The cast factory
//!
//! A `CastSpec` pairs a conversion with an optional construction default and
//! proves, once, that the conversion is a fixed point on its own output.
//! `CastFunction`s derived from it add an optional call-time default and
//! resolve which value to convert:
//!
//! 1. the argument, when present
//! 2. the call-time default
//! 3. the construction default
//! 4. nothing, i.e. the conversion's own zero-argument result

use crate::conversion::Conversion;
use crate::error::{CastError, CastResult};
use crate::value::Value;
use log::{debug, trace};

/// An idempotence-checked conversion with an optional construction default
#[derive(Debug, Clone)]
pub struct CastSpec {
    conversion: Conversion,
    default: Option<Value>,
    probe: Value,
}

impl CastSpec {
    /// Build a spec with no construction default and the integer 0 as probe
    pub fn new(conversion: impl Into<Conversion>) -> CastResult<Self> {
        Self::builder(conversion).build()
    }

    /// Start building a spec
    pub fn builder(conversion: impl Into<Conversion>) -> CastSpecBuilder {
        CastSpecBuilder::new(conversion.into())
    }

    /// The wrapped conversion
    pub fn conversion(&self) -> &Conversion {
        &self.conversion
    }

    /// The construction default, if any
    pub fn construction_default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// The value the identity law was checked against
    pub fn identity_probe(&self) -> &Value {
        &self.probe
    }

    /// Derive a cast function with an optional call-time default
    pub fn derive(&self, call_default: Option<Value>) -> CastFunction {
        CastFunction {
            spec: self.clone(),
            call_default,
        }
    }

    /// Derive a cast function with no call-time default
    pub fn function(&self) -> CastFunction {
        self.derive(None)
    }

    /// Check that `conversion(conversion(x)) == conversion(x)` for a reachable input
    pub fn verify_fixed_point(&self, input: Option<&Value>) -> CastResult<()> {
        check_fixed_point(&self.conversion, input)
    }
}

/// Builder for `CastSpec`
#[derive(Debug, Clone)]
pub struct CastSpecBuilder {
    conversion: Conversion,
    default: Option<Value>,
    probe: Value,
}

impl CastSpecBuilder {
    fn new(conversion: Conversion) -> Self {
        Self {
            conversion,
            default: None,
            probe: Value::Int(0),
        }
    }

    /// Set the construction default
    pub fn default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Set the value used to check the identity law
    pub fn probe(mut self, probe: impl Into<Value>) -> Self {
        self.probe = probe.into();
        self
    }

    /// Verify the identity law and build the spec.
    ///
    /// Both the probe and the zero-argument resolution (the construction
    /// default, or no input at all) must be fixed points of the conversion.
    pub fn build(self) -> CastResult<CastSpec> {
        check_fixed_point(&self.conversion, Some(&self.probe))?;
        check_fixed_point(&self.conversion, self.default.as_ref())?;
        debug!(
            "cast '{}' constructed (default: {:?}, probe: {})",
            self.conversion.name(),
            self.default,
            self.probe
        );
        Ok(CastSpec {
            conversion: self.conversion,
            default: self.default,
            probe: self.probe,
        })
    }
}

fn check_fixed_point(conversion: &Conversion, input: Option<&Value>) -> CastResult<()> {
    let first = conversion.apply(input)?;
    let second = conversion.apply(first.as_ref())?;
    if first == second {
        Ok(())
    } else {
        Err(CastError::not_idempotent(
            conversion.name(),
            input,
            first.as_ref(),
            second.as_ref(),
        ))
    }
}

/// A defaulting cast, callable with zero or one argument
#[derive(Debug, Clone)]
pub struct CastFunction {
    spec: CastSpec,
    call_default: Option<Value>,
}

impl CastFunction {
    /// The spec this function was derived from
    pub fn spec(&self) -> &CastSpec {
        &self.spec
    }

    /// The call-time default, if any
    pub fn call_default(&self) -> Option<&Value> {
        self.call_default.as_ref()
    }

    /// Cast `x`, falling back to the call-time default, then the construction
    /// default, then the conversion's zero-argument result.
    ///
    /// Defaulting only covers absence: a present but malformed value is an error.
    pub fn call(&self, x: Option<&Value>) -> CastResult<Option<Value>> {
        let input = x
            .or(self.call_default.as_ref())
            .or(self.spec.default.as_ref());
        trace!("cast '{}' resolving {:?} -> {:?}", self.spec.conversion.name(), x, input);
        self.spec.conversion.apply(input)
    }

    /// Cast a present value
    pub fn call_with(&self, x: impl Into<Value>) -> CastResult<Option<Value>> {
        self.call(Some(&x.into()))
    }

    /// Cast a raw string, or each piece of it when split on `separator`.
    ///
    /// An absent raw string resolves through the normal defaulting order and
    /// yields a single element.
    pub fn call_split(&self, raw: Option<&str>, separator: Option<&str>) -> CastResult<Vec<Option<Value>>> {
        match (raw, separator) {
            (None, _) => Ok(vec![self.call(None)?]),
            (Some(s), None) => Ok(vec![self.call_with(s)?]),
            (Some(s), Some(sep)) => s.split(sep).map(|piece| self.call_with(piece)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Primitive;

    #[test]
    fn test_spec_accessors() {
        let spec = CastSpec::builder(Primitive::Degree).default(90).probe(400).build().unwrap();
        assert_eq!(spec.conversion().name(), "degree");
        assert_eq!(spec.construction_default(), Some(&Value::Int(90)));
        assert_eq!(spec.identity_probe(), &Value::Int(400));
    }

    #[test]
    fn test_derived_function_keeps_call_default() {
        let spec = CastSpec::new(Primitive::Integer).unwrap();
        let f = spec.derive(Some(Value::string("7")));
        assert_eq!(f.call_default(), Some(&Value::string("7")));
        assert_eq!(f.spec().conversion().name(), "integer");
    }
}
