//! Carfinder: Vehicle Model Search CLI Tool
//!
//! Collects search filters, queries the vehicle-model dataset, prints the
//! matches and saves them to `vehicles.json` and `vehicles.csv`.

use anyhow::Result;
use clap::Parser;

use carfinder::cli::{run, Cli};
use carfinder::utils::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(&cli)
}
