mod checks;
mod cli;
mod db;
mod error;
mod fmt;
mod importer;
mod models;
mod observe;
mod parse;
mod pipeline;
mod report;
mod settings;
mod sink;

use clap::Parser;
use tracing::level_filters::LevelFilter;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    setup_logging(parse_log_level(&cli.log_level));

    let result = match cli.command {
        Commands::Run(args) => cli::run::run(args),
        Commands::Check { file } => cli::check::run(&file),
        Commands::Preview { file } => cli::preview::run(&file),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => LevelFilter::INFO,
    }
}

fn setup_logging(level: LevelFilter) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
