//! Output formatting utilities

use anyhow::Result;
use colored::Colorize;
use nits_cast::Value;
use std::io::IsTerminal;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text, // default
        }
    }
}

/// Set up color output based on user preference
pub fn setup_colors(mode: &str) {
    match mode.to_lowercase().as_str() {
        "always" => colored::control::set_override(true),
        "never" => colored::control::set_override(false),
        _ => colored::control::set_override(std::io::stdout().is_terminal()),
    }
}

/// Format an error for display
pub fn format_error(error: &anyhow::Error) -> String {
    format!("{} {:#}", "Error:".red().bold(), error)
}

/// Format a warning for display
pub fn format_warning(warning: &str) -> String {
    format!("{} {}", "Warning:".yellow().bold(), warning)
}

/// Render a single cast result
pub fn render_value(value: Option<&Value>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(&value)?),
        OutputFormat::Text => Ok(match value {
            Some(v) => v.to_string(),
            None => "<absent>".dimmed().to_string(),
        }),
    }
}

/// Render the results of a split cast, one per line in text mode
pub fn render_values(values: &[Option<Value>], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(values)?),
        OutputFormat::Text => {
            let lines = values
                .iter()
                .map(|v| render_value(v.as_ref(), format))
                .collect::<Result<Vec<_>>>()?;
            Ok(lines.join("\n"))
        }
    }
}
