//! Check command implementation
//!
//! Verifies `c(c(v)) == c(v)` for user-supplied values.

use super::cast::{ValueKind, parse_raw, resolve_spec};
use super::output;
use anyhow::Result;
use colored::Colorize;
use nits_cast::{CastRegistry, CastSpec, Value};

/// Configuration for check command
pub struct CheckConfig {
    pub conversion: String,
    pub values: Vec<String>,
    pub kind: ValueKind,
    pub nullable: bool,
}

/// Outcome of checking one value
#[derive(Debug, Clone, PartialEq)]
pub enum CheckOutcome {
    /// The cast result is a fixed point
    Pass(Option<Value>),
    /// Reapplying the cast changed the result
    Fail { first: Option<Value>, second: Option<Value> },
    /// The value is outside the conversion's domain
    Malformed(String),
}

/// Check a single value against the identity law
pub fn check_value(spec: &CastSpec, value: Option<&Value>) -> CheckOutcome {
    let function = spec.function();
    let first = match function.call(value) {
        Ok(first) => first,
        Err(e) => return CheckOutcome::Malformed(e.to_string()),
    };
    match function.call(first.as_ref()) {
        Ok(second) if second == first => CheckOutcome::Pass(first),
        Ok(second) => CheckOutcome::Fail { first, second },
        Err(e) => CheckOutcome::Malformed(e.to_string()),
    }
}

fn show(value: Option<&Value>) -> String {
    value.map_or_else(|| "<absent>".to_string(), Value::to_string)
}

/// Check every value and print one line per value.
///
/// Fails when any value breaks the identity law or cannot be cast at all.
pub fn check(config: CheckConfig) -> Result<()> {
    let registry = CastRegistry::standard()?;
    let spec = resolve_spec(&registry, &config.conversion, config.nullable)?;

    let inputs = if config.values.is_empty() {
        vec![None]
    } else {
        config
            .values
            .iter()
            .map(|raw| parse_raw(raw, config.kind).map(Some))
            .collect::<Result<Vec<_>>>()?
    };

    let mut failures = 0;
    let mut malformed = 0;
    for input in &inputs {
        let label = show(input.as_ref());
        match check_value(&spec, input.as_ref()) {
            CheckOutcome::Pass(result) => {
                println!("{} {} -> {}", "PASS".green().bold(), label, show(result.as_ref()));
            }
            CheckOutcome::Fail { first, second } => {
                failures += 1;
                println!(
                    "{} {} -> {} -> {}",
                    "FAIL".red().bold(),
                    label,
                    show(first.as_ref()),
                    show(second.as_ref())
                );
            }
            CheckOutcome::Malformed(message) => {
                malformed += 1;
                eprintln!("{}", output::format_warning(&format!("{}: {}", label, message)));
            }
        }
    }

    if failures > 0 {
        anyhow::bail!(
            "{} of {} values broke the identity law for '{}'",
            failures,
            inputs.len(),
            config.conversion
        );
    }
    if malformed > 0 {
        anyhow::bail!(
            "{} of {} values could not be cast with '{}'",
            malformed,
            inputs.len(),
            config.conversion
        );
    }
    Ok(())
}
