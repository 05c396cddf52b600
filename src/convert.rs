//! Standalone converter: turns a previously collected JSON dataset into the
//! XLSX table without touching the network. Exits non-zero when the dataset
//! is missing, unparsable, or empty.

use std::fs;
use std::path::Path;
use std::process;

use log::{error, info};

use houzz_harvester_lib::{config, exporter, logger, BusinessRecord};

fn main() {
    logger::init();

    let input = Path::new(config::OUTPUT_JSON);
    if !input.exists() {
        error!("{} not found", config::OUTPUT_JSON);
        process::exit(1);
    }

    let content = match fs::read_to_string(input) {
        Ok(content) => content,
        Err(e) => {
            error!("Failed to read {}: {}", config::OUTPUT_JSON, e);
            process::exit(1);
        }
    };

    let records: Vec<BusinessRecord> = match serde_json::from_str(&content) {
        Ok(records) => records,
        Err(e) => {
            error!("{} is not a valid business array: {}", config::OUTPUT_JSON, e);
            process::exit(1);
        }
    };

    if records.is_empty() {
        error!("{} is empty, nothing to convert", config::OUTPUT_JSON);
        process::exit(1);
    }

    if let Err(e) = exporter::export_table(&records, config::OUTPUT_XLSX) {
        error!("Failed to write {}: {}", config::OUTPUT_XLSX, e);
        process::exit(1);
    }

    info!(
        "Excel created: {} ({} businesses)",
        config::OUTPUT_XLSX,
        records.len()
    );
}
