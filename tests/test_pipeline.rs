//! End-to-end tests of a search run with a stub transport

mod common;

use std::cell::RefCell;

use carfinder::cli::execute_search;
use carfinder::pipeline::{
    FetchError, Fetcher, FilterCriteria, QueryBuilder, QueryString, RawBody, SortField,
};
use carfinder::report::OutputPaths;
use tempfile::TempDir;

/// Returns a canned outcome and remembers the URLs it was asked for
struct StubFetcher {
    response: Result<String, u16>,
    seen: RefCell<Vec<String>>,
}

impl StubFetcher {
    fn ok(body: &str) -> Self {
        Self {
            response: Ok(body.to_string()),
            seen: RefCell::new(Vec::new()),
        }
    }

    fn status(code: u16) -> Self {
        Self {
            response: Err(code),
            seen: RefCell::new(Vec::new()),
        }
    }
}

impl Fetcher for StubFetcher {
    fn fetch(&self, query: &QueryString) -> Result<RawBody, FetchError> {
        self.seen.borrow_mut().push(query.to_string());
        match &self.response {
            Ok(body) => Ok(RawBody::from(body.as_str())),
            Err(code) => Err(FetchError::RemoteStatus(*code)),
        }
    }
}

#[test]
fn test_successful_search_writes_both_exports() {
    let temp_dir = TempDir::new().unwrap();
    let paths = OutputPaths::in_dir(temp_dir.path());
    let fetcher = StubFetcher::ok(&common::sample_envelope());

    let summary = execute_search(
        &fetcher,
        &QueryBuilder::default(),
        &FilterCriteria::default(),
        Some(&paths),
    )
    .unwrap();

    assert_eq!(summary.records_found, 2);
    assert_eq!(summary.export_failures, 0);
    assert_eq!(summary.files_written, vec![paths.json.clone(), paths.csv.clone()]);
    assert!(paths.json.exists());
    assert!(paths.csv.exists());
}

#[test]
fn test_empty_result_runs_no_exporter() {
    let temp_dir = TempDir::new().unwrap();
    let paths = OutputPaths::in_dir(temp_dir.path());
    let fetcher = StubFetcher::ok(r#"{"records": []}"#);

    let summary = execute_search(
        &fetcher,
        &QueryBuilder::default(),
        &FilterCriteria::default(),
        Some(&paths),
    )
    .unwrap();

    assert_eq!(summary.records_found, 0);
    assert!(summary.files_written.is_empty());
    assert!(!paths.json.exists());
    assert!(!paths.csv.exists());
}

#[test]
fn test_only_malformed_wrappers_counts_as_empty() {
    let temp_dir = TempDir::new().unwrap();
    let paths = OutputPaths::in_dir(temp_dir.path());
    let fetcher = StubFetcher::ok(r#"{"records": [{"id": 1}, {"id": 2}]}"#);

    let summary = execute_search(
        &fetcher,
        &QueryBuilder::default(),
        &FilterCriteria::default(),
        Some(&paths),
    )
    .unwrap();

    assert_eq!(summary.records_found, 0);
    assert!(!paths.json.exists());
}

#[test]
fn test_export_failure_is_not_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let paths = OutputPaths {
        json: temp_dir.path().join("missing").join("vehicles.json"),
        csv: temp_dir.path().join("vehicles.csv"),
    };
    let fetcher = StubFetcher::ok(&common::sample_envelope());

    let summary = execute_search(
        &fetcher,
        &QueryBuilder::default(),
        &FilterCriteria::default(),
        Some(&paths),
    )
    .unwrap();

    assert_eq!(summary.export_failures, 1);
    assert_eq!(summary.files_written, vec![paths.csv.clone()]);
    assert!(paths.csv.exists());
}

#[test]
fn test_disabled_exports_write_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let fetcher = StubFetcher::ok(&common::sample_envelope());

    let summary = execute_search(
        &fetcher,
        &QueryBuilder::default(),
        &FilterCriteria::default(),
        None,
    )
    .unwrap();

    assert_eq!(summary.records_found, 2);
    assert!(summary.files_written.is_empty());
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_fetch_failure_is_fatal_and_skips_exports() {
    let temp_dir = TempDir::new().unwrap();
    let paths = OutputPaths::in_dir(temp_dir.path());
    let fetcher = StubFetcher::status(500);

    let err = execute_search(
        &fetcher,
        &QueryBuilder::default(),
        &FilterCriteria::default(),
        Some(&paths),
    )
    .unwrap_err();

    assert!(format!("{:#}", err).contains("external API returned an error: 500"));
    assert!(!paths.json.exists());
    assert!(!paths.csv.exists());
}

#[test]
fn test_unexpected_shape_is_fatal() {
    let fetcher = StubFetcher::ok(r#"{"error": "dataset not found"}"#);

    let err = execute_search(
        &fetcher,
        &QueryBuilder::default(),
        &FilterCriteria::default(),
        None,
    )
    .unwrap_err();

    assert!(format!("{:#}", err).contains("invalid JSON structure"));
}

#[test]
fn test_invalid_criteria_never_reach_the_transport() {
    let fetcher = StubFetcher::ok(&common::sample_envelope());
    let criteria = FilterCriteria {
        cylinders: 7,
        ..Default::default()
    };

    let result = execute_search(&fetcher, &QueryBuilder::default(), &criteria, None);

    assert!(result.is_err());
    assert!(fetcher.seen.borrow().is_empty());
}

#[test]
fn test_honda_scenario_request() {
    let fetcher = StubFetcher::ok(r#"{"records": []}"#);
    let criteria = FilterCriteria {
        make: "Honda".into(),
        model: String::new(),
        sort_field: Some(SortField::Year),
        year: 2015,
        cylinders: 4,
        result_limit: 5,
    };

    execute_search(&fetcher, &QueryBuilder::default(), &criteria, None).unwrap();

    let seen = fetcher.seen.borrow();
    assert_eq!(seen.len(), 1);
    assert!(seen[0].ends_with(
        "?dataset=all-vehicles-model&q=&rows=5&sort=year&refine.make=Honda&refine.year=2015&refine.cylinders=4"
    ));
}
