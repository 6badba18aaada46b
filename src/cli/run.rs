use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::cli::RunArgs;
use crate::db::PgSink;
use crate::observe::TracingObserver;
use crate::pipeline;
use crate::settings;
use crate::sink::{CsvSink, ReportSink};

pub fn run(args: RunArgs) -> Result<()> {
    let mut settings = settings::load_settings(args.config.as_deref().map(Path::new))?;
    settings.apply_env();

    if let Some(v) = args.bookings {
        settings.bookings_path = Some(v);
    }
    if let Some(v) = args.username {
        settings.database.username = v;
    }
    if let Some(v) = args.password {
        settings.database.password = v;
    }
    if let Some(v) = args.database {
        settings.database.database = v;
    }
    if let Some(v) = args.host {
        settings.database.host = v;
    }
    if let Some(v) = args.port {
        settings.database.port = v;
    }
    if let Some(v) = args.table {
        settings.database.table = v;
    }
    if let Some(v) = args.output {
        settings.output_path = Some(v);
    }

    settings::validate(&settings)?;
    let Some(bookings_path) = settings.bookings_path.clone() else {
        anyhow::bail!("bookings path is required");
    };

    let mut sink = PgSink::new(settings.database.clone());
    let mut file_sink = settings
        .output_path
        .as_ref()
        .map(|p| CsvSink::new(Path::new(p)));

    let rows = pipeline::run(
        Path::new(&bookings_path),
        &mut sink,
        file_sink.as_mut().map(|s| s as &mut dyn ReportSink),
        &TracingObserver,
    )?;

    println!(
        "{}",
        format!("{rows} report rows appended to {}", settings.database.table).green()
    );
    if let Some(path) = &settings.output_path {
        println!("Report saved to {path}");
    }
    Ok(())
}
