//! # DocForge Main Entry Point
//!
//! File: cli/src/main.rs
//! Repository: https://github.com/docforge-dev/docforge
//!
//! ## Overview
//!
//! This file serves as the main entry point for the DocForge CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the appropriate command handler
//!
//! ## Architecture
//!
//! The application follows a modular command structure:
//! - Each command (`generate`, `validate`, `templates`) is a variant in the
//!   `Commands` enum, mapped to a handler function in its own module
//! - All errors are propagated to this level for consistent handling
//!
//! ## Examples
//!
//! Basic DocForge usage:
//!
//! ```bash
//! # Render documents for the configured tier
//! docforge generate
//!
//! # Run a command with increased verbosity
//! docforge -vv generate --config my-config.yaml
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Route to the command handler
//! 4. Format and display any errors that occur; exit nonzero on failure
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

// Declare the top-level modules of the CLI crate.
mod commands; // Handles specific command logic (generate, validate, templates)
mod common; // Contains shared utilities (fs helpers)
mod core; // Core infrastructure (errors, config, selection, templating)

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "docforge",
    about = "DocForge: tiered project documentation generator",
    long_about = "Render PRDs, technical designs, sprint plans and other project\n\
                  documents from a single YAML configuration and a template set.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    #[command(alias = "g")]
    Generate(commands::generate::GenerateArgs),
    #[command(alias = "t")]
    Templates(commands::templates::TemplatesArgs),
    Validate(commands::validate::ValidateArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Generate(args) => commands::generate::handle_generate(args),
        Commands::Templates(args) => commands::templates::handle_templates(args),
        Commands::Validate(args) => commands::validate::handle_validate(args),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
