//! # x12-cli
//!
//! Command-line interface for the X12 834 enrollment encoder.
//!
//! Looks up codes in the shipped code sets, renders single segments and
//! encodes enrollment files (YAML or JSON, optionally with a CSV roster)
//! into complete 834 interchanges.

mod commands;
mod config;

use anyhow::Result;
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use config::CliConfig;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "x12")]
#[command(about = "X12 834 benefit enrollment encoder")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve free-form input to a code
    Lookup {
        /// Code set name (e.g. "Acknowledgment Requested")
        set: String,

        /// Code, name, description or alias to resolve
        input: String,

        /// Print the entry as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the codes and aliases of a code set
    Codes {
        /// Code set name
        set: String,

        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all code sets
    Sets {
        /// Print the names as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render one segment from raw element values
    Segment {
        /// Segment identifier (e.g. N1)
        id: String,

        /// Element values; pass "" for an absent element
        elements: Vec<String>,
    },

    /// Encode an enrollment file as an 834 interchange
    Encode {
        /// Enrollment file (.yaml, .yml or .json)
        input: PathBuf,

        /// CSV roster with additional members
        #[arg(short, long)]
        roster: Option<PathBuf>,

        /// Output file path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Document timestamp, e.g. 2024-01-15T12:00:00 (default: now)
        #[arg(long)]
        timestamp: Option<NaiveDateTime>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    x12_codes::init();
    let config = CliConfig::load(cli.config.as_deref()).await?;

    match cli.command {
        Commands::Lookup { set, input, json } => {
            println!("{}", commands::lookup(&set, &input, json)?);
        }
        Commands::Codes { set, json } => {
            print!("{}", with_newline(commands::codes(&set, json)?));
        }
        Commands::Sets { json } => {
            print!("{}", with_newline(commands::sets(json)?));
        }
        Commands::Segment { id, elements } => {
            print!(
                "{}",
                with_newline(commands::segment(&id, &elements, config.delimiters())?)
            );
        }
        Commands::Encode {
            input,
            roster,
            output,
            timestamp,
        } => {
            info!("Encoding {}", input.display());
            let document =
                commands::encode(&input, roster.as_deref(), timestamp, config.delimiters())
                    .await?;
            match output {
                Some(path) => {
                    tokio::fs::write(&path, &document).await?;
                    info!("Wrote {}", path.display());
                }
                None => print!("{}", with_newline(document)),
            }
        }
    }

    Ok(())
}

fn with_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
