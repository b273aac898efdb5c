//! Console listing of decoded vehicles

use console::style;

use crate::pipeline::VehicleRecord;

/// Message printed when a search returns nothing
pub const NO_RESULTS_MESSAGE: &str = "No vehicles found for the given criteria.";

/// Plain-text listing: a heading followed by one line per record
pub fn render_listing(records: &[VehicleRecord]) -> String {
    if records.is_empty() {
        return NO_RESULTS_MESSAGE.to_string();
    }

    let mut out = String::from("Vehicles found:");
    for record in records {
        out.push('\n');
        out.push_str(&record.summary_line());
    }
    out
}

/// Print the listing to stdout
pub fn print_listing(records: &[VehicleRecord]) {
    if records.is_empty() {
        println!("    {}", style(NO_RESULTS_MESSAGE).yellow());
        return;
    }

    println!(
        "    {} {}",
        style("Vehicles found:").white().bold(),
        style(format!("({})", records.len())).dim()
    );
    for record in records {
        println!("      {} {}", style("•").dim(), record.summary_line());
    }
}
