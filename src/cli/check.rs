use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::checks;
use crate::importer;

pub fn run(file: &str) -> Result<()> {
    let table = importer::read_table(Path::new(file));
    if checks::check_bookings(table.as_ref()) {
        if let Some(table) = &table {
            println!(
                "{}",
                format!("{file}: valid bookings table ({} rows)", table.rows.len()).green()
            );
        }
        Ok(())
    } else {
        println!("{}", format!("{file}: not a valid bookings table").red());
        anyhow::bail!("bookings table failed validation");
    }
}
