//! Terminal styling utilities

use console::{style, Emoji};
use std::path::Path;

use crate::pipeline::{FilterCriteria, QueryConfig};

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");
pub static CAR: Emoji<'_, '_> = Emoji("🚗 ", "");
pub static CALENDAR: Emoji<'_, '_> = Emoji("📅 ", "");
pub static GEAR: Emoji<'_, '_> = Emoji("⚙️  ", "");
pub static SORT: Emoji<'_, '_> = Emoji("🔃 ", "");
pub static ROWS: Emoji<'_, '_> = Emoji("🔢 ", "");
pub static SAVE: Emoji<'_, '_> = Emoji("💾 ", "");

/// Print the application banner
pub fn print_banner(version: &str) {
    println!();
    println!(
        "    {} {}",
        style("carfinder").cyan().bold(),
        style("Vehicle model search").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print the effective filters before the request is sent
pub fn print_criteria(criteria: &FilterCriteria, config: &QueryConfig, output_dir: &Path) {
    let rows = if criteria.result_limit == 0 {
        format!("{} (default)", config.default_rows)
    } else {
        criteria.result_limit.to_string()
    };

    println!(
        "    {}",
        style("Search Filters").cyan().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
    println!("      {}Make:      {}", CAR, or_any(&criteria.make));
    println!("      {}Model:     {}", CAR, or_any(&criteria.model));
    println!("      {}Year:      {}", CALENDAR, or_any_num(criteria.year));
    println!("      {}Cylinders: {}", GEAR, or_any_num(criteria.cylinders));
    println!(
        "      {}Sort:      {}",
        SORT,
        criteria
            .sort_field
            .map(|s| s.to_string())
            .unwrap_or_else(|| style("api order").dim().to_string())
    );
    println!("      {}Rows:      {}", ROWS, style(rows).yellow());
    println!(
        "      {}Output:    {}",
        SAVE,
        truncate_path(output_dir, 38)
    );
    if !criteria.has_refinements() {
        println!(
            "      {}",
            style("No refinements set, results are unfiltered").dim()
        );
    }
    println!();
}

/// Print a step header with styling
pub fn print_step_header(step_num: u8, title: &str) {
    println!();
    println!(
        "    {} {} {}",
        style(format!("STEP {}", step_num)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print a non-fatal error message
pub fn print_failure(message: &str) {
    println!("    {} {}", style("✗").red().bold(), style(message).red());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!(
        "    {} {}",
        ROCKET,
        style("Search complete!").green().bold()
    );
    println!();
}

// Helper functions

fn or_any(value: &str) -> String {
    if value.is_empty() {
        style("any").dim().to_string()
    } else {
        value.to_string()
    }
}

fn or_any_num(value: u32) -> String {
    if value == 0 {
        style("any").dim().to_string()
    } else {
        value.to_string()
    }
}

fn truncate_path(path: &Path, max_len: usize) -> String {
    let path_str = path.display().to_string();
    truncate_string(&path_str, max_len)
}

fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let tail: String = s
            .chars()
            .rev()
            .take(max_len.saturating_sub(3))
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        format!("...{}", tail)
    }
}
