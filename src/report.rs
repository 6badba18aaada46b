use std::collections::BTreeMap;

use crate::models::{NormalizedBooking, ReportRow};

/// Group normalized bookings by (restaurant_id, restaurant_name, country,
/// month) and reduce each group to a booking count, a guest sum, and an
/// amount sum. Output order is deterministic: ascending by the key tuple,
/// which the BTreeMap gives for free.
pub fn aggregate(rows: &[NormalizedBooking]) -> Vec<ReportRow> {
    let mut groups: BTreeMap<(String, String, String, String), (u64, i64, f64)> = BTreeMap::new();

    for row in rows {
        let key = (
            row.restaurant_id.clone(),
            row.restaurant_name.clone(),
            row.country.clone(),
            row.month.clone(),
        );
        let entry = groups.entry(key).or_insert((0, 0, 0.0));
        entry.0 += 1;
        entry.1 += row.guests;
        entry.2 += row.amount;
    }

    groups
        .into_iter()
        .map(|((restaurant_id, restaurant_name, country, month), (bookings, guests, amount))| {
            ReportRow {
                restaurant_id,
                restaurant_name,
                country,
                month,
                number_of_bookings: bookings,
                number_of_guests: guests,
                amount,
            }
        })
        .collect()
}
