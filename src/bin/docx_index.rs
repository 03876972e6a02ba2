//! docx-index - build the static .docx text data file
//!
//! Scans a directory of Word documents and writes their text as a data
//! file for the preview app. With no arguments it reads `database/` and
//! writes `database/docx-data.js`.
//!
//! # Examples
//!
//! ```bash
//! # Default build
//! docx-index
//!
//! # Custom paths, plain JSON output
//! docx-index --input-dir docs --output public/docs.json --emit json
//!
//! # Keep going past documents with broken XML
//! docx-index --skip-malformed
//!
//! # Show configuration
//! docx-index show-config
//! ```

use clap::Parser;
use docx_index::cli::output::print_error;
use docx_index::cli::{run, Cli};
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so stdout stays clean for reports.
/// `RUST_LOG` sets the filter; `DOCX_INDEX_LOG_FORMAT=json` switches format.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("docx_index=warn"));

    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_ansi(false);

    let json = std::env::var("DOCX_INDEX_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        builder.json().init();
    } else {
        builder.compact().init();
    }
}

fn main() {
    init_logging();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
