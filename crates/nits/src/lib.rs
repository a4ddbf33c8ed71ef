//! nits - small, dependable value casts
//!
//! This crate bundles:
//! - The cast factory and conversion primitives (`nits-cast`)
//! - A command-line front-end for casting and checking values
//!
//! # Example
//!
//! ```
//! use nits::{CastRegistry, Value};
//!
//! let registry = CastRegistry::standard().unwrap();
//! let hex = registry.get("hex_byte").unwrap().function();
//! assert_eq!(hex.call_with(1.0).unwrap(), Some(Value::string("FF")));
//! ```

// Re-export the core crate
pub use nits_cast as cast;

// Convenience re-exports
pub use nits_cast::{
    CastError, CastFunction, CastRegistry, CastResult, CastSpec, Conversion, Primitive, Value,
    nullable,
};

// CLI module (only available with cli feature)
#[cfg(feature = "cli")]
pub mod cli;
