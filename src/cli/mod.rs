//! CLI adapter for docx-index
//!
//! Provides the command-line interface over `core/`. Running the binary
//! with no subcommand performs a build.
//!
//! ```text
//! +------------------+      +------------------+
//! |      cli/        | ---> |     core/        |
//! | (clap adapter)   |      |  (domain logic)  |
//! +------------------+      +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

use crate::core::config::Config;

/// docx-index - extract .docx text into a static data file
///
/// Scans a directory for Word documents and writes their paragraph
/// text as `const DOCX_DOCS = [...];` for the preview app.
#[derive(Parser, Debug)]
#[command(name = "docx-index")]
#[command(version)]
#[command(about = "Extract .docx text into a static data file", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format for the report
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Build options (used when no subcommand is given)
    #[command(flatten)]
    pub build: commands::BuildArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output for scripting
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Human
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  docx-index completions bash > ~/.local/share/bash-completion/completions/docx-index
    ///   zsh:   docx-index completions zsh > ~/.zfunc/_docx-index
    ///   fish:  docx-index completions fish > ~/.config/fish/completions/docx-index.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        // Doesn't need configuration
        Some(Commands::Completions(args)) => commands::completions::execute(args),
        Some(Commands::ShowConfig(args)) => {
            let config = load_config()?;
            commands::config::execute(args, &config, cli.format)
        }
        None => {
            let config = load_config()?;
            commands::build::execute(cli.build, &config, cli.format)
        }
    }
}

fn load_config() -> Result<Config, Box<dyn std::error::Error>> {
    let config = Config::load().map_err(|e| -> Box<dyn std::error::Error> {
        if e.is_config_error() {
            format!("{e} (check DOCX_INDEX_CONFIG, ./docx-index.toml and DOCX_INDEX_* variables)")
                .into()
        } else {
            e.into()
        }
    })?;
    config.log_config();
    Ok(config)
}
