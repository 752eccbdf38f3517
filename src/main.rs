//! R-Droid 2026 - variant paths
//!
//! Command-line entry point: prints resolved project options and the
//! names and output locations of every declared build variant.

use std::path::PathBuf;
use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use r_droid_variants::commands::{parse_property, OptionsCommand, PathsCommand};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "R-Droid 2026";

#[derive(Parser)]
#[command(name = "rdroid-variants", version, about = "Resolve project options and variant output paths")]
struct Cli {
    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print names and output locations of each variant
    Paths {
        /// Project directory or configuration file
        #[arg(default_value = ".")]
        project: PathBuf,
        /// Project property override, name=value
        #[arg(short = 'P', value_name = "NAME=VALUE")]
        property: Vec<String>,
        /// Only this variant (full name, e.g. freeDebug or freeHdpiRelease)
        #[arg(long)]
        variant: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Print resolved project options and their diagnostics
    Options {
        #[arg(default_value = ".")]
        project: PathBuf,
        #[arg(short = 'P', value_name = "NAME=VALUE")]
        property: Vec<String>,
        #[arg(long)]
        json: bool,
    },
}

/// Main entry point
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG takes precedence over --verbose
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str()));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    debug!("{} v{} starting...", APP_NAME, VERSION);

    let output = match cli.command {
        Command::Paths { project, property, variant, json } => {
            let properties = property
                .iter()
                .map(|p| parse_property(p))
                .collect::<Result<Vec<_>>>()?;
            PathsCommand {
                project_path: project,
                properties,
                variant,
                json,
            }
            .execute()
            .await?
        }
        Command::Options { project, property, json } => {
            let properties = property
                .iter()
                .map(|p| parse_property(p))
                .collect::<Result<Vec<_>>>()?;
            OptionsCommand {
                project_path: project,
                properties,
                json,
            }
            .execute()
            .await?
        }
    };

    print!("{}", output);
    Ok(())
}
