//! Configuration management for docx-index.
//!
//! Handles loading configuration from TOML files and environment
//! variables, with defaults that reproduce a plain no-argument run.

use crate::core::error::{IndexError, Result};
use crate::core::export::DEFAULT_VARIABLE_NAME;
use crate::core::extractor::pipeline::DEFAULT_ID_PREFIX;
use crate::core::types::EmitFormat;
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Project-local config file name
pub const LOCAL_CONFIG_FILE: &str = "docx-index.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub build: BuildConfig,
}

/// Build configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BuildConfig {
    /// Directory scanned for .docx files
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,

    /// Data file to (over)write
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Script statement or plain JSON
    #[serde(default)]
    pub emit: EmitFormat,

    /// Identifier assigned in script output
    #[serde(default = "default_variable_name")]
    pub variable_name: String,

    /// Prefix for record ids
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,

    /// Skip documents with malformed XML instead of aborting
    #[serde(default)]
    pub skip_malformed_xml: bool,
}

// Default value functions
fn default_input_dir() -> PathBuf {
    PathBuf::from("database")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("database").join("docx-data.js")
}

fn default_variable_name() -> String {
    DEFAULT_VARIABLE_NAME.to_string()
}

fn default_id_prefix() -> String {
    DEFAULT_ID_PREFIX.to_string()
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            output_path: default_output_path(),
            emit: EmitFormat::default(),
            variable_name: default_variable_name(),
            id_prefix: default_id_prefix(),
            skip_malformed_xml: false,
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| IndexError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        xdg.log_paths();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. DOCX_INDEX_CONFIG env var
    /// 2. ./docx-index.toml
    /// 3. XDG config file (~/.config/docx-index/config.toml)
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("DOCX_INDEX_CONFIG") {
            Self::from_file(config_path)?
        } else if Path::new(LOCAL_CONFIG_FILE).exists() {
            Self::from_file(LOCAL_CONFIG_FILE)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else {
                Self::default()
            }
        };

        config.merge_env()?;
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) -> Result<()> {
        if let Ok(dir) = env::var("DOCX_INDEX_INPUT_DIR") {
            self.build.input_dir = PathBuf::from(dir);
        }
        if let Ok(path) = env::var("DOCX_INDEX_OUTPUT") {
            self.build.output_path = PathBuf::from(path);
        }
        if let Ok(emit) = env::var("DOCX_INDEX_EMIT") {
            self.build.emit = parse_emit(&emit)?;
        }
        if let Ok(skip) = env::var("DOCX_INDEX_SKIP_MALFORMED") {
            self.build.skip_malformed_xml = parse_flag(&skip);
        }
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !is_identifier(&self.build.variable_name) {
            return Err(IndexError::ConfigError(format!(
                "Variable name '{}' is not a valid script identifier",
                self.build.variable_name
            )));
        }

        if self.build.id_prefix.is_empty() {
            return Err(IndexError::ConfigError(
                "Id prefix must be non-empty".to_string(),
            ));
        }

        if self.build.output_path.as_os_str().is_empty() {
            return Err(IndexError::ConfigError(
                "Output path must be non-empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Input dir: {:?}", self.build.input_dir);
        tracing::info!("  Output path: {:?}", self.build.output_path);
        tracing::info!("  Emit: {}", self.build.emit);
        tracing::info!("  Variable name: {}", self.build.variable_name);
        tracing::info!("  Id prefix: {}", self.build.id_prefix);
        tracing::info!("  Skip malformed XML: {}", self.build.skip_malformed_xml);
    }
}

fn parse_emit(value: &str) -> Result<EmitFormat> {
    match value.trim().to_lowercase().as_str() {
        "script" => Ok(EmitFormat::Script),
        "json" => Ok(EmitFormat::Json),
        other => Err(IndexError::ConfigError(format!(
            "Unknown emit format '{other}' (expected 'script' or 'json')"
        ))),
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
