// Main entry point - Reads sensor data and configuration, prints tables, saves statistics
mod application;
mod domain;
mod infrastructure;
mod presentation;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::application::reading_source::ReadingSource;
use crate::application::report_service::ReportService;
use crate::application::statistics_service::StatisticsService;
use crate::domain::reading::Thresholds;
use crate::infrastructure::cli_source::CliReadingSource;
use crate::infrastructure::config::load_stats_config;
use crate::infrastructure::csv_source::CsvReadingSource;
use crate::infrastructure::results_writer::write_report;
use crate::presentation::cli::Cli;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only the tables
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let source: Box<dyn ReadingSource> = match cli.cli_sample() {
        Some((temperature, humidity, pressure)) => {
            Box::new(CliReadingSource::new(temperature, humidity, pressure))
        }
        None => Box::new(CsvReadingSource::new(&cli.data)),
    };
    println!("✔ {}", source.describe());

    let data = source.load().context("Failed to load sensor readings")?;
    let requests = load_stats_config(&cli.config)?;

    let statistics = StatisticsService::new(Thresholds::default(), cli.unknown_statistic_policy());
    let report = ReportService::new(statistics, cli.table_style())
        .build(&data, &requests)
        .context("Failed to compute statistics")?;

    for (_, table) in &report.tables {
        println!();
        println!("{}", table);
    }

    write_report(&cli.output, &report.stats)?;
    println!();
    println!("✔ Results saved to {}", cli.output.display());

    Ok(())
}
