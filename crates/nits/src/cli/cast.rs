//! Cast command implementation

use super::output::{self, OutputFormat};
use anyhow::{Context, Result};
use log::debug;
use nits_cast::{CastFunction, CastRegistry, CastSpec, Value, nullable};

/// How a raw command-line argument is turned into a `Value`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ValueKind {
    /// Keep the argument as a string
    #[default]
    Str,
    /// Parse the argument as a 64-bit integer
    Int,
    /// Parse the argument as a float
    Float,
}

/// Configuration for cast command
pub struct CastConfig {
    pub conversion: String,
    pub value: Option<String>,
    pub kind: ValueKind,
    pub default: Option<String>,
    pub nullable: bool,
    pub split: Option<String>,
    pub format: OutputFormat,
}

/// Parse a raw argument according to its declared kind
pub fn parse_raw(raw: &str, kind: ValueKind) -> Result<Value> {
    match kind {
        ValueKind::Str => Ok(Value::string(raw)),
        ValueKind::Int => raw
            .trim()
            .parse::<i64>()
            .map(Value::Int)
            .with_context(|| format!("'{}' is not an integer", raw)),
        ValueKind::Float => raw
            .trim()
            .parse::<f64>()
            .map(Value::Float)
            .with_context(|| format!("'{}' is not a float", raw)),
    }
}

/// Look up a registered cast, optionally wrapped to allow absent results
pub fn resolve_spec(registry: &CastRegistry, name: &str, allow_absent: bool) -> Result<CastSpec> {
    let spec = registry.get(name).with_context(|| {
        let known: Vec<&str> = registry.names().collect();
        format!("Unknown conversion '{}' (known: {})", name, known.join(", "))
    })?;
    if !allow_absent {
        return Ok(spec.clone());
    }
    CastSpec::new(nullable(spec.conversion().clone()))
        .with_context(|| format!("Cannot build nullable '{}'", name))
}

/// Build the cast function described by the command-line options
pub fn build_function(
    registry: &CastRegistry,
    name: &str,
    allow_absent: bool,
    default: Option<&str>,
    kind: ValueKind,
) -> Result<CastFunction> {
    let spec = resolve_spec(registry, name, allow_absent)?;
    let default = default.map(|raw| parse_raw(raw, kind)).transpose()?;
    debug!("deriving '{}' with call-time default {:?}", spec.conversion().name(), default);
    Ok(spec.derive(default))
}

/// Cast a raw argument, or each piece of it when a separator is given.
///
/// String arguments go straight through the cast's own splitting; typed
/// arguments are parsed piece by piece first.
pub fn cast_raw(
    function: &CastFunction,
    raw: Option<&str>,
    kind: ValueKind,
    separator: Option<&str>,
) -> Result<Vec<Option<Value>>> {
    if kind == ValueKind::Str {
        return Ok(function.call_split(raw, separator)?);
    }
    let Some(raw) = raw else {
        return Ok(vec![function.call(None)?]);
    };
    let pieces: Vec<&str> = match separator {
        Some(sep) => raw.split(sep).collect(),
        None => vec![raw],
    };
    pieces
        .into_iter()
        .map(|piece| -> Result<Option<Value>> {
            let value = parse_raw(piece, kind)?;
            Ok(function.call(Some(&value))?)
        })
        .collect()
}

/// Cast a value and print the result
pub fn cast(config: CastConfig) -> Result<()> {
    let registry = CastRegistry::standard()?;
    let function = build_function(
        &registry,
        &config.conversion,
        config.nullable,
        config.default.as_deref(),
        config.kind,
    )?;

    let results = cast_raw(&function, config.value.as_deref(), config.kind, config.split.as_deref())
        .with_context(|| format!("Cannot cast with '{}'", config.conversion))?;
    let rendered = match (&config.split, results.as_slice()) {
        (None, [single]) => output::render_value(single.as_ref(), config.format)?,
        _ => output::render_values(&results, config.format)?,
    };

    println!("{}", rendered);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn registry() -> CastRegistry {
        CastRegistry::standard().unwrap()
    }

    #[test]
    fn test_parse_raw_kinds() {
        assert_eq!(parse_raw("11", ValueKind::Str).unwrap(), Value::string("11"));
        assert_eq!(parse_raw(" 11 ", ValueKind::Int).unwrap(), Value::Int(11));
        assert_eq!(parse_raw("0.1", ValueKind::Float).unwrap(), Value::Float(0.1));
        assert!(parse_raw("0.1", ValueKind::Int).is_err());
    }

    #[test]
    fn test_resolve_unknown_conversion() {
        let err = resolve_spec(&registry(), "hex_string", false).unwrap_err();
        assert!(err.to_string().contains("Unknown conversion 'hex_string'"));
    }

    #[test]
    fn test_resolve_nullable() {
        let spec = resolve_spec(&registry(), "integer", true).unwrap();
        assert_eq!(spec.conversion().name(), "nullable(integer)");
        assert_eq!(spec.function().call(None).unwrap(), None);
    }

    #[test]
    fn test_build_function_with_default() {
        let f = build_function(&registry(), "signed_degree_90", false, Some("181"), ValueKind::Int).unwrap();
        assert_eq!(f.call(None).unwrap(), Some(Value::Float(-1.0)));
        assert_eq!(f.call_with("91").unwrap(), Some(Value::Float(89.0)));
    }

    #[test]
    fn test_cast_raw_split() {
        let f = build_function(&registry(), "hex_byte", false, None, ValueKind::Str).unwrap();
        assert_eq!(
            cast_raw(&f, Some("0a,ff"), ValueKind::Str, Some(",")).unwrap(),
            vec![Some(Value::string("0A")), Some(Value::string("FF"))]
        );
        assert_eq!(
            cast_raw(&f, Some("0.5;1"), ValueKind::Float, Some(";")).unwrap(),
            vec![Some(Value::string("7F")), Some(Value::string("FF"))]
        );
        assert_eq!(cast_raw(&f, None, ValueKind::Int, Some(",")).unwrap(), vec![Some(Value::string("00"))]);
    }

    #[test]
    fn test_cast_raw_surfaces_format_errors() {
        let f = build_function(&registry(), "numeric", false, Some("1"), ValueKind::Str).unwrap();
        assert!(cast_raw(&f, Some("abc"), ValueKind::Str, None).is_err());
        assert_eq!(cast_raw(&f, None, ValueKind::Str, None).unwrap(), vec![Some(Value::Float(1.0))]);
    }

    #[test]
    fn test_build_function_rejects_bad_default_kind() {
        assert!(build_function(&registry(), "integer", false, Some("x"), ValueKind::Float).is_err());
    }
}
