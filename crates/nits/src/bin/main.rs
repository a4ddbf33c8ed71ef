//! nits command-line interface

use clap::{Parser, Subcommand};
use nits::cli::cast::{self, ValueKind};
use nits::cli::{check, list, logging, output};

/// Cast values with idempotent, defaulting conversions
#[derive(Parser)]
#[command(name = "nits")]
#[command(author, version, about = "Idempotent value casts", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(short = 'f', long, default_value = "text", global = true)]
    format: String,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    color: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cast a value (omit it to see the default)
    Cast {
        /// Conversion name, e.g. integer, hex_byte, signed_degree_90
        conversion: String,

        /// Raw value
        #[arg(allow_negative_numbers = true)]
        value: Option<String>,

        /// How to read the raw value
        #[arg(short, long, value_enum, default_value_t = ValueKind::Str)]
        kind: ValueKind,

        /// Call-time default used when no value is given
        #[arg(short, long)]
        default: Option<String>,

        /// Map absent and empty input to an absent result
        #[arg(short, long)]
        nullable: bool,

        /// Split the value on this separator and cast each piece
        #[arg(short, long)]
        split: Option<String>,
    },

    /// Check that casting is the identity on its own results (fails on malformed values)
    Check {
        /// Conversion name
        conversion: String,

        /// Raw values to check (none checks the default)
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,

        /// How to read the raw values
        #[arg(short, long, value_enum, default_value_t = ValueKind::Str)]
        kind: ValueKind,

        /// Map absent and empty input to an absent result
        #[arg(short, long)]
        nullable: bool,
    },

    /// List the registered conversions
    List,
}

fn main() {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    output::setup_colors(&cli.color);
    logging::init(cli.verbose);

    let format = output::OutputFormat::from_str(&cli.format);

    let result = match cli.command {
        Commands::Cast {
            conversion,
            value,
            kind,
            default,
            nullable,
            split,
        } => {
            let config = cast::CastConfig {
                conversion,
                value,
                kind,
                default,
                nullable,
                split,
                format,
            };
            cast::cast(config)
        }

        Commands::Check {
            conversion,
            values,
            kind,
            nullable,
        } => {
            let config = check::CheckConfig {
                conversion,
                values,
                kind,
                nullable,
            };
            check::check(config)
        }

        Commands::List => list::list(format),
    };

    if let Err(e) = result {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cast_command() {
        let cli = Cli::try_parse_from([
            "nits", "cast", "integer", "2.12", "--default", "5", "--split", ",",
        ])
        .unwrap();
        match cli.command {
            Commands::Cast { conversion, value, default, split, nullable, kind } => {
                assert_eq!(conversion, "integer");
                assert_eq!(value.as_deref(), Some("2.12"));
                assert_eq!(default.as_deref(), Some("5"));
                assert_eq!(split.as_deref(), Some(","));
                assert!(!nullable);
                assert_eq!(kind, ValueKind::Str);
            }
            _ => panic!("Expected cast command"),
        }
    }

    #[test]
    fn test_parse_check_command_with_kind() {
        let cli = Cli::try_parse_from(["nits", "-f", "json", "check", "degree", "-k", "int", "1", "361"])
            .unwrap();
        assert_eq!(cli.format, "json");
        match cli.command {
            Commands::Check { values, kind, .. } => {
                assert_eq!(values, vec!["1", "361"]);
                assert_eq!(kind, ValueKind::Int);
            }
            _ => panic!("Expected check command"),
        }
    }

    #[test]
    fn test_parse_negative_value() {
        let cli = Cli::try_parse_from(["nits", "cast", "signed_degree_90", "-181", "-k", "int"]).unwrap();
        match cli.command {
            Commands::Cast { value, .. } => assert_eq!(value.as_deref(), Some("-181")),
            _ => panic!("Expected cast command"),
        }
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
