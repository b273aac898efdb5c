//! Search run summary report

use std::path::PathBuf;
use std::time::Duration;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use super::export::ExportOutcome;

/// Summary of one search run
#[derive(Debug, Default)]
pub struct SearchSummary {
    pub query: String,
    pub records_found: usize,
    pub files_written: Vec<PathBuf>,
    pub export_failures: usize,
    pub search_time: Duration,
}

impl SearchSummary {
    pub fn new(query: impl Into<String>, records_found: usize) -> Self {
        Self {
            query: query.into(),
            records_found,
            ..Default::default()
        }
    }

    pub fn set_search_time(&mut self, elapsed: Duration) {
        self.search_time = elapsed;
    }

    pub fn add_exports(&mut self, outcome: &ExportOutcome) {
        self.files_written = outcome
            .written()
            .into_iter()
            .map(|p| p.to_path_buf())
            .collect();
        self.export_failures = [outcome.json.is_err(), outcome.csv.is_err()]
            .iter()
            .filter(|failed| **failed)
            .count();
    }

    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![Cell::new("🔎 Query"), Cell::new(&self.query)]);

        table.add_row(vec![
            Cell::new("🚗 Vehicles"),
            Cell::new(self.records_found)
                .fg(if self.records_found == 0 {
                    Color::Yellow
                } else {
                    Color::Green
                })
                .add_attribute(Attribute::Bold),
        ]);

        let files = if self.files_written.is_empty() {
            "-".to_string()
        } else {
            self.files_written
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join("\n")
        };
        table.add_row(vec![Cell::new("💾 Files Written"), Cell::new(files)]);

        table.add_row(vec![
            Cell::new("⚠️  Export Failures"),
            Cell::new(self.export_failures).fg(if self.export_failures == 0 {
                Color::White
            } else {
                Color::Red
            }),
        ]);

        table.add_row(vec![
            Cell::new("⏱️  Search Time"),
            Cell::new(format!("{:.2}s", self.search_time.as_secs_f64())),
        ]);

        table
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("SEARCH SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        // Indent the table
        for line in self.to_table().to_string().lines() {
            println!("    {}", line);
        }
    }
}
