//! Subcommand implementations. Each returns the text to print.

pub mod calculate;
pub mod defaults;

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Summary and bar chart
    Table,
    /// Inputs and full result as JSON
    Json,
}
