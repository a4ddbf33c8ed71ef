//! Registry of named cast specs
//!
//! Maps conversion names to ready-built, idempotence-checked `CastSpec`s.

use crate::cast::CastSpec;
use crate::conversion::{Conversion, nullable};
use crate::error::CastResult;
use crate::primitives::Primitive;
use indexmap::IndexMap;

/// Nullable presets registered by `CastRegistry::standard`
pub const NULLABLE_PRESETS: [(&str, Primitive); 3] = [
    ("nullable_numeric", Primitive::Numeric),
    ("nullable_integer", Primitive::Integer),
    ("nullable_string", Primitive::String),
];

/// Registry of cast specs, in registration order
#[derive(Debug, Clone, Default)]
pub struct CastRegistry {
    casts: IndexMap<String, CastSpec>,
}

impl CastRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every primitive and the nullable presets
    pub fn standard() -> CastResult<Self> {
        let mut registry = Self::new();
        for primitive in Primitive::ALL {
            registry.register(primitive.name(), CastSpec::new(primitive)?);
        }
        for (name, primitive) in NULLABLE_PRESETS {
            let spec = CastSpec::new(nullable(Conversion::from(primitive)))?;
            registry.register(name, spec);
        }
        Ok(registry)
    }

    /// Register a cast, replacing any existing cast of the same name
    pub fn register(&mut self, name: impl Into<String>, spec: CastSpec) -> Option<CastSpec> {
        self.casts.insert(name.into(), spec)
    }

    /// Look up a cast by name
    pub fn get(&self, name: &str) -> Option<&CastSpec> {
        self.casts.get(name)
    }

    /// Registered names, in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.casts.keys().map(String::as_str)
    }

    /// Iterate over `(name, spec)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CastSpec)> {
        self.casts.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    pub fn len(&self) -> usize {
        self.casts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.casts.is_empty()
    }
}
