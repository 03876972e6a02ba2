//! Build command - extract every .docx in a directory into the data file

use crate::cli::output::{colors, format_bytes, format_duration, print_warning};
use crate::cli::OutputFormat;
use crate::core::config::{BuildConfig, Config};
use crate::core::export;
use crate::core::extractor::BuildPipeline;
use crate::core::types::{EmitFormat, SkipKind, SkippedFile};
use chrono::{DateTime, Utc};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Arguments for the build command
///
/// Every flag overrides the matching configuration value.
#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Directory containing the .docx files [default: database]
    #[arg(long, short = 'd')]
    pub input_dir: Option<PathBuf>,

    /// Data file to write [default: database/docx-data.js]
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Data file shape
    #[arg(long, value_enum)]
    pub emit: Option<EmitArg>,

    /// Skip documents with malformed XML instead of aborting
    #[arg(long)]
    pub skip_malformed: bool,

    /// Suppress progress output
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// `--emit` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum EmitArg {
    /// `const DOCX_DOCS = [...];` for direct script inclusion
    Script,
    /// Plain JSON array
    Json,
}

impl From<EmitArg> for EmitFormat {
    fn from(arg: EmitArg) -> Self {
        match arg {
            EmitArg::Script => EmitFormat::Script,
            EmitArg::Json => EmitFormat::Json,
        }
    }
}

/// Build result response
#[derive(Debug, Serialize)]
pub struct BuildResponse {
    pub input_dir: String,
    pub output: String,
    pub emit: EmitFormat,
    pub documents_written: usize,
    pub files_scanned: usize,
    pub skipped: Vec<SkippedFile>,
    pub duration_secs: f64,
    pub generated_at: DateTime<Utc>,
}

/// Apply command-line overrides on top of the loaded configuration
pub fn resolve_settings(args: &BuildArgs, config: &Config) -> BuildConfig {
    let mut settings = config.build.clone();

    if let Some(dir) = &args.input_dir {
        settings.input_dir = dir.clone();
    }
    if let Some(output) = &args.output {
        settings.output_path = output.clone();
    }
    if let Some(emit) = args.emit {
        settings.emit = emit.into();
    }
    if args.skip_malformed {
        settings.skip_malformed_xml = true;
    }

    settings
}

/// Run a build and describe what was written
///
/// Progress goes to stderr when `progress` is set.
pub fn build(
    args: &BuildArgs,
    config: &Config,
    progress: bool,
) -> Result<BuildResponse, Box<dyn std::error::Error>> {
    let settings = resolve_settings(args, config);

    if !settings.input_dir.is_dir() {
        return Err(format!(
            "Input directory '{}' does not exist or is not a directory.",
            settings.input_dir.display()
        )
        .into());
    }

    if progress {
        eprintln!(
            "Scanning {} for .docx files...",
            colors::file_path(&settings.input_dir.display().to_string())
        );
    }

    let pipeline = BuildPipeline::from_config(&settings);
    let report = pipeline.collect_documents(&settings.input_dir)?;

    export::write_output(
        &settings.output_path,
        &report.documents,
        settings.emit,
        &settings.variable_name,
    )?;

    Ok(BuildResponse {
        input_dir: settings.input_dir.display().to_string(),
        output: settings.output_path.display().to_string(),
        emit: settings.emit,
        documents_written: report.documents.len(),
        files_scanned: report.files_scanned,
        skipped: report.skipped,
        duration_secs: report.duration_ms as f64 / 1000.0,
        generated_at: Utc::now(),
    })
}

/// The one-line result reported after a build
pub fn summary(response: &BuildResponse) -> String {
    format!(
        "Wrote {} docs to {}",
        response.documents_written, response.output
    )
}

/// Execute the build command
pub fn execute(
    args: BuildArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let progress = !args.quiet && format == OutputFormat::Human;
    let response = build(&args, config, progress)?;

    match format {
        OutputFormat::Human => {
            for skipped in &response.skipped {
                if skipped.kind == SkipKind::MalformedXml {
                    print_warning(&format!(
                        "skipped {} ({})",
                        skipped.file, skipped.reason
                    ));
                }
            }

            println!("{}", colors::success(&summary(&response)));

            if !args.quiet {
                let size = std::fs::metadata(&response.output)
                    .map(|m| m.len())
                    .unwrap_or(0);
                println!(
                    "{}",
                    colors::dim(&format!(
                        "{} files scanned, {} written in {}",
                        response.files_scanned,
                        format_bytes(size),
                        format_duration(response.duration_secs)
                    ))
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
