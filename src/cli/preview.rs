use std::path::Path;

use anyhow::Result;
use comfy_table::Table;

use crate::checks;
use crate::fmt;
use crate::importer;
use crate::parse;
use crate::report;

pub fn run(file: &str) -> Result<()> {
    let table = importer::read_table(Path::new(file));
    let valid = checks::check_bookings(table.as_ref());
    let raw = match (valid, table) {
        (true, Some(table)) => table,
        _ => anyhow::bail!("bookings table failed validation"),
    };

    let bookings = importer::typed_rows(&raw)?;
    let normalized = parse::normalize(bookings)?;
    let display = fmt::format_report(report::aggregate(&normalized));

    let mut out = Table::new();
    out.set_header([
        "restaurant_id",
        "restaurant_name",
        "country",
        "month",
        "number_of_bookings",
        "number_of_guests",
        "amount",
    ]);
    for row in &display {
        out.add_row(vec![
            row.restaurant_id.clone(),
            row.restaurant_name.clone(),
            row.country.clone(),
            row.month.clone(),
            row.number_of_bookings.to_string(),
            row.number_of_guests.to_string(),
            row.amount.clone(),
        ]);
    }
    println!("{out}");
    Ok(())
}
