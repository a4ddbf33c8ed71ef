//! Idempotent value casts
//!
//! This crate turns a conversion function into a *cast*: a callable that
//! - converts a raw value (string, integer or float) into a target type
//! - falls back to a default when no value is given
//! - is guaranteed to be the identity when reapplied to its own output
//!
//! # Example
//!
//! ```
//! use nits_cast::{CastSpec, Primitive, Value};
//!
//! let spec = CastSpec::builder(Primitive::Integer).default("42").build().unwrap();
//! let cast = spec.function();
//!
//! assert_eq!(cast.call(None).unwrap(), Some(Value::Int(42)));
//! assert_eq!(cast.call_with("2.12").unwrap(), Some(Value::Int(2)));
//! ```

pub mod cast;
pub mod conversion;
pub mod error;
pub mod hex;
pub mod primitives;
pub mod registry;
pub mod value;

pub use cast::{CastFunction, CastSpec, CastSpecBuilder};
pub use conversion::{Conversion, ConversionFn, nullable};
pub use error::{CastError, CastResult};
pub use primitives::Primitive;
pub use registry::CastRegistry;
pub use value::Value;
