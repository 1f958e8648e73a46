// Command-line arguments
use crate::application::statistics_service::UnknownStatisticPolicy;
use crate::presentation::table::TableStyle;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sensor-stats")]
#[command(about = "Smart home sensor statistics", long_about = None)]
pub struct Cli {
    /// Temperature reading (use together with -H and -p)
    #[arg(short = 't', long, allow_negative_numbers = true)]
    pub temperature: Option<f64>,

    /// Humidity reading (use together with -t and -p)
    #[arg(short = 'H', long, allow_negative_numbers = true)]
    pub humidity: Option<f64>,

    /// Pressure reading (use together with -t and -H)
    #[arg(short = 'p', long, allow_negative_numbers = true)]
    pub pressure: Option<f64>,

    /// CSV data file
    #[arg(long, default_value = "data.csv")]
    pub data: PathBuf,

    /// INI statistics configuration
    #[arg(long, default_value = "config.ini")]
    pub config: PathBuf,

    /// Where the computed statistics are written
    #[arg(long, default_value = "results.json")]
    pub output: PathBuf,

    /// Print tables in markdown format
    #[arg(long)]
    pub md: bool,

    /// Fail on unknown statistic names instead of skipping them
    #[arg(long)]
    pub strict_stats: bool,
}

impl Cli {
    /// The single command-line sample, if all three readings were given
    pub fn cli_sample(&self) -> Option<(f64, f64, f64)> {
        match (self.temperature, self.humidity, self.pressure) {
            (Some(t), Some(h), Some(p)) => Some((t, h, p)),
            _ => None,
        }
    }

    pub fn table_style(&self) -> TableStyle {
        if self.md {
            TableStyle::Markdown
        } else {
            TableStyle::Boxed
        }
    }

    pub fn unknown_statistic_policy(&self) -> UnknownStatisticPolicy {
        if self.strict_stats {
            UnknownStatisticPolicy::Fail
        } else {
            UnknownStatisticPolicy::Ignore
        }
    }
}
