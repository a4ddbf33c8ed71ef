//! Named conversion functions and the nullable combinator

use crate::error::CastResult;
use crate::primitives::Primitive;
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

/// Type alias for conversion implementations
pub type ConversionFn = Arc<dyn Fn(Option<&Value>) -> CastResult<Option<Value>> + Send + Sync>;

/// A pure, named conversion from an optional raw value to an optional result
#[derive(Clone)]
pub struct Conversion {
    name: String,
    func: ConversionFn,
}

impl Conversion {
    /// Wrap a function as a conversion
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(Option<&Value>) -> CastResult<Option<Value>> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    /// Conversion name, used in logs and errors
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Apply the conversion
    pub fn apply(&self, x: Option<&Value>) -> CastResult<Option<Value>> {
        (self.func)(x)
    }
}

impl fmt::Debug for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Conversion").field("name", &self.name).finish_non_exhaustive()
    }
}

impl From<Primitive> for Conversion {
    fn from(primitive: Primitive) -> Self {
        Self::new(primitive.name(), move |x| primitive.convert(x))
    }
}

/// Allow a conversion to return the absent value.
///
/// Absent input and the empty string both short-circuit to `None` without
/// calling the wrapped conversion; every other input is delegated.
pub fn nullable(conversion: Conversion) -> Conversion {
    let name = format!("nullable({})", conversion.name());
    Conversion::new(name, move |x| match x {
        None => Ok(None),
        Some(v) if v.is_empty_str() => Ok(None),
        Some(_) => conversion.apply(x),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nullable_name() {
        let conv = nullable(Primitive::Numeric.into());
        assert_eq!(conv.name(), "nullable(numeric)");
    }

    #[test]
    fn test_nullable_never_calls_inner_on_absent() {
        let conv = nullable(Conversion::new("explode", |_| panic!("inner conversion called")));
        assert_eq!(conv.apply(None).unwrap(), None);
        assert_eq!(conv.apply(Some(&Value::string(""))).unwrap(), None);
    }
}
