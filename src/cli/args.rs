//! Command-line argument definitions using clap

use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::time::Duration;

use crate::pipeline::{
    validate_cylinders, validate_result_limit, validate_year, FilterCriteria, QueryConfig,
    SortField, DEFAULT_BASE_URL, DEFAULT_DATASET,
};
use crate::report::{OutputPaths, DEFAULT_CSV_FILE, DEFAULT_JSON_FILE};

/// Carfinder - Search vehicle models and export the matches to JSON and CSV
#[derive(Parser, Debug)]
#[command(name = "carfinder")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Car maker to filter on (e.g. "Honda").
    /// Used as the prompt's starting value in interactive mode.
    #[arg(long)]
    pub make: Option<String>,

    /// Model to filter on (e.g. "Civic")
    #[arg(long)]
    pub model: Option<String>,

    /// Model year to filter on (1980-2025)
    #[arg(long, value_parser = parse_year)]
    pub year: Option<u32>,

    /// Cylinder count to filter on (3, 4, 5, 6, 8, 10, 12 or 16)
    #[arg(long, value_parser = parse_cylinders)]
    pub cylinders: Option<u32>,

    /// Maximum number of results (0-50, 0 requests the default of 10)
    #[arg(short = 'n', long, value_parser = parse_limit)]
    pub limit: Option<u32>,

    /// Field to sort results by
    #[arg(long, value_enum)]
    pub sort: Option<SortField>,

    /// Skip interactive prompts and search with the flag values only
    #[arg(long, default_value = "false")]
    pub no_prompt: bool,

    /// Directory the export files are written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// File name of the JSON export
    #[arg(long, default_value = DEFAULT_JSON_FILE)]
    pub json_file: String,

    /// File name of the CSV export
    #[arg(long, default_value = DEFAULT_CSV_FILE)]
    pub csv_file: String,

    /// Print results without writing export files
    #[arg(long, default_value = "false")]
    pub no_export: bool,

    /// Search endpoint of the records API
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Dataset identifier
    #[arg(long, default_value = DEFAULT_DATASET)]
    pub dataset: String,

    /// Percent-encode make and model values in the request URL
    #[arg(long, default_value = "false")]
    pub escape: bool,

    /// Request timeout in seconds (transport default when omitted)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Filters given on the command line
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            make: self.make.clone().unwrap_or_default(),
            model: self.model.clone().unwrap_or_default(),
            sort_field: self.sort,
            year: self.year.unwrap_or(0),
            cylinders: self.cylinders.unwrap_or(0),
            result_limit: self.limit.unwrap_or(0),
        }
    }

    /// Endpoint configuration with the built-in limits
    pub fn query_config(&self) -> QueryConfig {
        QueryConfig {
            base_url: self.base_url.clone(),
            dataset: self.dataset.clone(),
            escape_values: self.escape,
            ..Default::default()
        }
    }

    /// Export destinations, or `None` when exports are disabled
    pub fn output_paths(&self) -> Option<OutputPaths> {
        if self.no_export {
            return None;
        }
        Some(OutputPaths {
            json: self.output_dir.join(&self.json_file),
            csv: self.output_dir.join(&self.csv_file),
        })
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}

/// Validator for --year
fn parse_year(s: &str) -> Result<u32, String> {
    let value = parse_number(s)?;
    validate_year(value, &QueryConfig::default()).map_err(|e| e.to_string())?;
    Ok(value)
}

/// Validator for --cylinders
fn parse_cylinders(s: &str) -> Result<u32, String> {
    let value = parse_number(s)?;
    validate_cylinders(value, &QueryConfig::default()).map_err(|e| e.to_string())?;
    Ok(value)
}

/// Validator for --limit
fn parse_limit(s: &str) -> Result<u32, String> {
    let value = parse_number(s)?;
    validate_result_limit(value, &QueryConfig::default()).map_err(|e| e.to_string())?;
    Ok(value)
}

fn parse_number(s: &str) -> Result<u32, String> {
    s.trim()
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))
}
