// Infrastructure layer - File formats and external inputs
pub mod cli_source;
pub mod config;
pub mod csv_source;
pub mod results_writer;
