//! Tests for the show-config command
//!
//! - Search paths only listed with --all
//! - Response reflects the loaded build settings
//! - Both report formats succeed

use docx_index::cli::commands::config::{config_response, execute, ConfigArgs};
use docx_index::cli::OutputFormat;
use docx_index::core::config::{Config, LOCAL_CONFIG_FILE};
use serial_test::serial;

#[test]
fn test_search_paths_hidden_by_default() {
    let response = config_response(&ConfigArgs::default(), &Config::default());

    assert!(response.search_paths.is_none());

    let json = serde_json::to_value(&response).unwrap();
    assert!(json.get("search_paths").is_none());
    assert_eq!(json["build"]["variable_name"], "DOCX_DOCS");
}

#[test]
#[serial]
fn test_search_paths_listed_with_all() {
    std::env::set_var("DOCX_INDEX_CONFIG_DIR", "/tmp/docx-index-show-config");

    let response = config_response(&ConfigArgs { all: true }, &Config::default());

    std::env::remove_var("DOCX_INDEX_CONFIG_DIR");

    let paths = response.search_paths.unwrap();
    assert_eq!(
        paths,
        vec![
            "$DOCX_INDEX_CONFIG".to_string(),
            LOCAL_CONFIG_FILE.to_string(),
            "/tmp/docx-index-show-config/config.toml".to_string(),
        ]
    );
}

#[test]
fn test_response_reflects_build_settings() {
    let mut config = Config::default();
    config.build.id_prefix = "kb/".to_string();
    config.build.skip_malformed_xml = true;

    let response = config_response(&ConfigArgs::default(), &config);

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["build"]["id_prefix"], "kb/");
    assert_eq!(json["build"]["skip_malformed_xml"], true);
    assert_eq!(json["build"]["emit"], "script");
}

#[test]
fn test_show_config_both_formats() {
    for format in [OutputFormat::Human, OutputFormat::Json] {
        let args = ConfigArgs { all: true };
        assert!(execute(args, &Config::default(), format).is_ok());
    }
}
