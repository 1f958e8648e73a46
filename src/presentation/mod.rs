// Presentation layer - Command line and console output
pub mod cli;
pub mod table;
