//! Query string construction for the vehicle dataset API

use std::fmt;
use std::ops::RangeInclusive;

use url::form_urlencoded;

use super::criteria::FilterCriteria;
use super::error::CriteriaError;

/// Search endpoint of the public OpenDataSoft records API
pub const DEFAULT_BASE_URL: &str = "https://public.opendatasoft.com/api/records/1.0/search/";

/// Dataset holding one record per vehicle model
pub const DEFAULT_DATASET: &str = "all-vehicles-model";

/// Rows requested when the user does not ask for a specific count
pub const DEFAULT_ROWS: u32 = 10;

/// Largest row count the prompts accept
pub const MAX_ROWS: u32 = 50;

/// Earliest model year accepted as a refinement
pub const MIN_YEAR: u32 = 1980;

/// Latest model year accepted as a refinement
pub const MAX_YEAR: u32 = 2025;

/// Cylinder counts present in the dataset
pub const CYLINDER_COUNTS: [u32; 8] = [3, 4, 5, 6, 8, 10, 12, 16];

/// Endpoint and limits injected into [`QueryBuilder`] and used by validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryConfig {
    pub base_url: String,
    pub dataset: String,
    pub default_rows: u32,
    pub max_rows: u32,
    pub year_range: RangeInclusive<u32>,
    pub cylinder_counts: Vec<u32>,
    /// Percent-encode make/model values. Off by default, which sends free
    /// text exactly as typed.
    pub escape_values: bool,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            dataset: DEFAULT_DATASET.to_string(),
            default_rows: DEFAULT_ROWS,
            max_rows: MAX_ROWS,
            year_range: MIN_YEAR..=MAX_YEAR,
            cylinder_counts: CYLINDER_COUNTS.to_vec(),
            escape_values: false,
        }
    }
}

/// A fully built request URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryString(String);

impl QueryString {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `key=value` fragments after the `?`, in order
    pub fn clauses(&self) -> impl Iterator<Item = &str> {
        self.0
            .split_once('?')
            .map(|(_, query)| query)
            .unwrap_or("")
            .split('&')
            .filter(|clause| !clause.is_empty())
    }

    /// Whether a clause with the given key is present
    pub fn has_clause(&self, key: &str) -> bool {
        self.clauses()
            .any(|clause| clause.split_once('=').map(|(k, _)| k) == Some(key))
    }
}

impl fmt::Display for QueryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builds request URLs from [`FilterCriteria`]
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    config: QueryConfig,
}

impl QueryBuilder {
    pub fn new(config: QueryConfig) -> Self {
        Self { config }
    }

    /// Build the request URL.
    ///
    /// Clauses are appended in a fixed order: rows, sort, make, model, year,
    /// cylinders. Only `rows` is always present.
    pub fn build(&self, criteria: &FilterCriteria) -> QueryString {
        let mut url = format!("{}?dataset={}&q=", self.config.base_url, self.config.dataset);

        let rows = if criteria.result_limit != 0 {
            criteria.result_limit
        } else {
            self.config.default_rows
        };
        push_clause(&mut url, "rows", &rows.to_string());

        if let Some(sort) = criteria.sort_field {
            push_clause(&mut url, "sort", sort.as_str());
        }
        if !criteria.make.is_empty() {
            push_clause(&mut url, "refine.make", &self.text_value(&criteria.make));
        }
        if !criteria.model.is_empty() {
            push_clause(&mut url, "refine.model", &self.text_value(&criteria.model));
        }
        if criteria.year != 0 {
            push_clause(&mut url, "refine.year", &criteria.year.to_string());
        }
        if criteria.cylinders != 0 {
            push_clause(&mut url, "refine.cylinders", &criteria.cylinders.to_string());
        }

        QueryString(url)
    }

    /// Validate `criteria` against the configured limits, then build.
    pub fn build_checked(&self, criteria: &FilterCriteria) -> Result<QueryString, CriteriaError> {
        criteria.validate(&self.config)?;
        Ok(self.build(criteria))
    }

    fn text_value(&self, value: &str) -> String {
        if self.config.escape_values {
            form_urlencoded::byte_serialize(value.as_bytes()).collect()
        } else {
            value.to_string()
        }
    }
}

fn push_clause(url: &mut String, key: &str, value: &str) {
    url.push('&');
    url.push_str(key);
    url.push('=');
    url.push_str(value);
}
