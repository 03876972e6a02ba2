//! Config command - show the effective configuration

use crate::cli::output::print_header;
use crate::cli::OutputFormat;
use crate::core::config::{BuildConfig, Config, LOCAL_CONFIG_FILE};
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;

/// Arguments for the config command
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Also list the config file locations that are searched
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_paths: Option<Vec<String>>,
    pub build: BuildConfig,
}

/// Collect the effective configuration for display
pub fn config_response(args: &ConfigArgs, config: &Config) -> ConfigResponse {
    let search_paths = args.all.then(|| {
        vec![
            "$DOCX_INDEX_CONFIG".to_string(),
            LOCAL_CONFIG_FILE.to_string(),
            XdgDirs::new().config_file().display().to_string(),
        ]
    });

    ConfigResponse {
        search_paths,
        build: config.build.clone(),
    }
}

/// Execute the config command
pub fn execute(
    args: ConfigArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = config_response(&args, config);

    match format {
        OutputFormat::Human => {
            print_header("Configuration:");
            if let Some(paths) = &response.search_paths {
                println!("  search_paths:");
                for path in paths {
                    println!("    - {path}");
                }
            }
            println!("  build:");
            println!("    input_dir: {}", response.build.input_dir.display());
            println!("    output_path: {}", response.build.output_path.display());
            println!("    emit: {}", response.build.emit);
            println!("    variable_name: {}", response.build.variable_name);
            println!("    id_prefix: {}", response.build.id_prefix);
            println!(
                "    skip_malformed_xml: {}",
                response.build.skip_malformed_xml
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
