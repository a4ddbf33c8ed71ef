//! List command implementation

use super::output::OutputFormat;
use anyhow::Result;
use nits_cast::CastRegistry;

/// Print the registered cast names
pub fn list(format: OutputFormat) -> Result<()> {
    let registry = CastRegistry::standard()?;
    let names: Vec<&str> = registry.names().collect();
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&names)?),
        OutputFormat::Text => {
            for (name, spec) in registry.iter() {
                println!("{:<20} {}", name, spec.conversion().name());
            }
        }
    }
    Ok(())
}
