//! MSTM model command-line interface.
//!
//! Inspect sphere models described in TOML:
//! ```sh
//! mstm-cli summary model.toml
//! mstm-cli validate model.toml
//! ```

mod config;
mod model;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mstm-cli")]
#[command(about = "MSTM Model: sphere and sphere-group inspection")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a model and print a per-group summary.
    Summary {
        /// Path to the model description.
        model: PathBuf,
    },
    /// Build a model and check every sphere for implausible values.
    Validate {
        /// Path to the model description.
        model: PathBuf,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Summary { model: path } => {
            let built = load(&path)?;
            println!("Model: {}", path.display());
            model::print_summary(&built);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Validate { model: path } => {
            let built = load(&path)?;
            let issues = model::validate_model(&built);
            if issues.is_empty() {
                println!("Model is valid: {}", path.display());
                return Ok(ExitCode::SUCCESS);
            }
            for (index, issue) in &issues {
                println!("  sphere {}: {}", index, issue);
            }
            log::warn!("{} implausible sphere(s) in {}", issues.len(), path.display());
            Ok(ExitCode::FAILURE)
        }
    }
}

fn load(path: &std::path::Path) -> anyhow::Result<model::Model> {
    let config = config::load_config(path)
        .with_context(|| format!("Failed to load model description {}", path.display()))?;
    model::build_model(&config)
}
