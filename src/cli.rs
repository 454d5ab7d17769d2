//! Command line interface.

use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
/// Fetches past weather for the configured site and reports how often each
/// month was usable.
pub struct Cli {
    /// Settings file (TOML, YAML or JSON). Defaults and `USABILITY__*`
    /// environment variables apply on top.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// First day to fetch (YYYY-MM-DD). Defaults to five years ago.
    #[arg(long)]
    pub since: Option<NaiveDate>,

    /// Last day to fetch (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub until: Option<NaiveDate>,

    /// Where to write the chart, overriding `chart.path`.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only print the monthly table.
    #[arg(long)]
    pub no_chart: bool,
}
