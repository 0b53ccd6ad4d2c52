use std::path::Path;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use eibi_cli::cli::Cli;
use eibi_cli::codes::{CodeBooks, CodeTable};
use eibi_cli::eibi::{EibiClient, EibiConfig, ScheduleCache};
use eibi_cli::report::render_report;
use eibi_cli::schedule::{StationRecord, filter_lines};

/// Code files expected in the codes directory.
const LANGUAGE_CODES_FILE: &str = "eibi_language_codes.txt";
const COUNTRY_CODES_FILE: &str = "eibi_country_codes.txt";
const TARGET_AREA_CODES_FILE: &str = "eibi_target_area_codes.txt";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let codes = CodeBooks {
        languages: load_codes(&cli.codes_dir.join(LANGUAGE_CODES_FILE)),
        countries: load_codes(&cli.codes_dir.join(COUNTRY_CODES_FILE)),
        target_areas: load_codes(&cli.codes_dir.join(TARGET_AREA_CODES_FILE)),
    };

    let client = match EibiClient::new(EibiConfig::new()) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("Failed to create EiBi client: {err}");
            std::process::exit(1);
        }
    };

    let cache = ScheduleCache::new(&cli.schedule_file);
    let today = chrono::Utc::now().date_naive();
    let lines = match cache.ensure_fresh(&client, today).await {
        Ok(lines) => lines,
        Err(err) => {
            eprintln!("Failed to obtain the EiBi schedule: {err}");
            std::process::exit(1);
        }
    };

    let patterns = cli.query().patterns(&codes);
    let records: Vec<StationRecord> = filter_lines(&lines, &patterns)
        .into_iter()
        .map(StationRecord::parse)
        .collect();

    print!("{}", render_report(&records, &codes));
}

/// Load one code table; a missing file leaves it empty with a warning.
fn load_codes(path: &Path) -> CodeTable {
    let mut table = CodeTable::new();
    match table.load_file(path) {
        Ok(report) => {
            if !report.skipped.is_empty() {
                warn!(
                    path = %path.display(),
                    skipped = report.skipped.len(),
                    "code file had malformed lines"
                );
            }
        }
        Err(err) => warn!("{err}; lookups against it will show N/A"),
    }
    table
}
