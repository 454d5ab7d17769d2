mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use log::info;
use std::env;
use weather_usability::{Settings, WorldWeather};

fn main() -> Result<()> {
    // Set RUST_LOG=info (or debug) to follow the fetch page by page.
    env_logger::init();
    configure_polars_display();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref()).context("Failed to read settings")?;
    let client = WorldWeather::new(&settings.api)?;

    info!(
        "Computing usability for {} ({}, {})",
        settings.site.name, settings.site.latitude, settings.site.longitude
    );
    let report = client
        .usability()
        .location(settings.site.location())
        .criterion(&settings.criterion)
        .maybe_since(cli.since)
        .maybe_until(cli.until)
        .call()?;

    println!("{}", report.monthly);

    if !cli.no_chart {
        write_chart(&report.monthly, cli.output.unwrap_or(settings.chart.path))?;
    }

    Ok(())
}

#[cfg(feature = "chart")]
fn write_chart(
    monthly: &weather_usability::MonthlyExpectations,
    path: std::path::PathBuf,
) -> Result<()> {
    weather_usability::render_chart(&monthly.rows()?, &path)?;
    println!("Chart saved to `{}`", path.display());
    Ok(())
}

#[cfg(not(feature = "chart"))]
fn write_chart(
    _monthly: &weather_usability::MonthlyExpectations,
    path: std::path::PathBuf,
) -> Result<()> {
    log::warn!(
        "Built without the `chart` feature, not writing {}",
        path.display()
    );
    Ok(())
}

fn configure_polars_display() {
    // One row per month, show all of them with every column.
    env::set_var("POLARS_FMT_MAX_COLS", "-1");
    env::set_var("POLARS_FMT_MAX_ROWS", "12");
}
