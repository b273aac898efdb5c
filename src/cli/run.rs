//! End-to-end search run: filters, request, listing and exports

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::debug;

use super::args::Cli;
use super::prompts::prompt_criteria;
use crate::pipeline::{search, FilterCriteria, Fetcher, HttpFetcher, QueryBuilder};
use crate::report::{export_all, print_listing, OutputPaths, SearchSummary};
use crate::utils::{
    create_spinner, finish_with_error, finish_with_success, print_banner, print_completion,
    print_criteria, print_failure, print_info, print_step_header, print_success,
};

/// Run the tool as configured by `cli`
pub fn run(cli: &Cli) -> Result<()> {
    let config = cli.query_config();

    print_banner(env!("CARGO_PKG_VERSION"));

    let criteria = if cli.no_prompt {
        cli.criteria()
    } else {
        prompt_criteria(&cli.criteria(), &config)?
    };

    print_criteria(&criteria, &config, &cli.output_dir);

    let fetcher = match cli.timeout() {
        Some(timeout) => HttpFetcher::with_timeout(timeout),
        None => HttpFetcher::new(),
    };
    let builder = QueryBuilder::new(config);

    let summary = execute_search(&fetcher, &builder, &criteria, cli.output_paths().as_ref())?;
    summary.display();
    print_completion();

    Ok(())
}

/// Build, fetch, decode, print and export for one set of filters.
///
/// Fetch and decode errors are returned. Export errors are printed and
/// counted in the summary. Exports are skipped when `paths` is `None` or the
/// search found nothing.
pub fn execute_search<F: Fetcher>(
    fetcher: &F,
    builder: &QueryBuilder,
    criteria: &FilterCriteria,
    paths: Option<&OutputPaths>,
) -> Result<SearchSummary> {
    print_step_header(1, "Query");
    let query = builder
        .build_checked(criteria)
        .context("Invalid search filters")?;
    debug!(url = %query, "built query");
    print_info(query.as_str());

    print_step_header(2, "Fetch");
    let step_start = Instant::now();
    let spinner = create_spinner("Querying vehicle API...");
    let records = match search(fetcher, &query) {
        Ok(records) => {
            finish_with_success(&spinner, &format!("Received {} record(s)", records.len()));
            records
        }
        Err(e) => {
            finish_with_error(&spinner, "Request failed");
            return Err(e).context("Vehicle search failed");
        }
    };

    let mut summary = SearchSummary::new(query.as_str(), records.len());
    summary.set_search_time(step_start.elapsed());

    print_step_header(3, "Results");
    print_listing(&records);

    if records.is_empty() {
        return Ok(summary);
    }

    let Some(paths) = paths else {
        print_info("Export disabled");
        return Ok(summary);
    };

    print_step_header(4, "Save Results");
    let outcome = export_all(&records, paths);
    match &outcome.json {
        Ok(path) => print_success(&format!("Vehicles data saved to {}", path.display())),
        Err(e) => print_failure(&format!("Error saving to JSON: {}", e)),
    }
    match &outcome.csv {
        Ok(path) => print_success(&format!("Vehicles data saved to {}", path.display())),
        Err(e) => print_failure(&format!("Error saving to CSV: {}", e)),
    }
    summary.add_exports(&outcome);

    Ok(summary)
}
