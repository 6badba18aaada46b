pub mod check;
pub mod preview;
pub mod run;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bistro", about = "Monthly restaurant-bookings report generator.")]
pub struct Cli {
    /// Log level: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the pipeline: validate, aggregate, append the report to Postgres.
    Run(RunArgs),
    /// Validate a bookings CSV without running the pipeline.
    Check {
        /// Path to the bookings CSV
        file: String,
    },
    /// Aggregate a bookings CSV and print the report, touching no sink.
    Preview {
        /// Path to the bookings CSV
        file: String,
    },
}

#[derive(Args)]
pub struct RunArgs {
    /// Path to the bookings CSV (overrides the settings file)
    #[arg(long)]
    pub bookings: Option<String>,
    /// Path to a JSON settings file (default: ~/.config/bistro/settings.json)
    #[arg(long)]
    pub config: Option<String>,
    /// Postgres username
    #[arg(long)]
    pub username: Option<String>,
    /// Postgres password (prefer the BISTRO_DB_PASSWORD environment variable)
    #[arg(long)]
    pub password: Option<String>,
    /// Database name
    #[arg(long)]
    pub database: Option<String>,
    /// Database host
    #[arg(long)]
    pub host: Option<String>,
    /// Database port
    #[arg(long)]
    pub port: Option<u16>,
    /// Target table name
    #[arg(long)]
    pub table: Option<String>,
    /// Also save the report as CSV at this path
    #[arg(long)]
    pub output: Option<String>,
}
