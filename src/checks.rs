use std::collections::HashSet;

use tracing::warn;

use crate::importer::RawTable;

/// The nine columns a bookings batch must carry, no more and no fewer.
pub const BOOKING_COLUMNS: [&str; 9] = [
    "booking_id",
    "restaurant_id",
    "restaurant_name",
    "client_id",
    "client_name",
    "amount",
    "guests",
    "date",
    "country",
];

// Membership is a set comparison: column order is irrelevant and duplicate
// names collapse, so a duplicated expected column still passes.
fn has_booking_columns(table: &RawTable) -> bool {
    let found: HashSet<&str> = table.headers.iter().collect();
    let expected: HashSet<&str> = BOOKING_COLUMNS.iter().copied().collect();
    found == expected
}

/// Structural check on an ingested bookings table. An absent table, an empty
/// table, or a wrong column set are expected, recoverable outcomes: they emit
/// a diagnostic and return `false` rather than erroring.
pub fn check_bookings(table: Option<&RawTable>) -> bool {
    let Some(table) = table else {
        return false;
    };
    if table.rows.is_empty() {
        warn!("bookings table is empty");
        return false;
    }
    if !has_booking_columns(table) {
        warn!("bookings table does not have the expected structure");
        return false;
    }
    true
}
