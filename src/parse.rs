use chrono::{Datelike, NaiveDate};

use crate::error::{BistroError, Result};
use crate::models::{Booking, NormalizedBooking};

/// Parse a day-first date string; `/` and `-` separators are both accepted,
/// mixed freely across a column. An unparseable value fails the whole batch.
pub fn parse_day_first_date(raw: &str) -> Result<NaiveDate> {
    let s = raw.trim().replace('-', "/");
    NaiveDate::parse_from_str(&s, "%d/%m/%Y").map_err(|_| BistroError::Date(raw.to_string()))
}

/// Parse a locale-ambiguous currency string into a float. Two-step legacy
/// substitution: every `,` becomes `.`, then every character that is not a
/// digit or `.` is stripped. A thousands-dot value like "1.234,56" therefore
/// comes out as 1.23456; historical report outputs depend on this, so it is
/// preserved rather than fixed.
pub fn parse_amount(raw: &str) -> Result<f64> {
    let cleaned: String = raw
        .replace(',', ".")
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    cleaned
        .parse()
        .map_err(|_| BistroError::Amount(raw.to_string()))
}

/// Zero-padded `YYYY_MM` month key for a calendar date.
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}_{:02}", date.year(), date.month())
}

/// Normalize a batch of raw bookings: typed date, derived month key, numeric
/// amount. Fail-fast: the first bad date or amount aborts the batch.
pub fn normalize(bookings: Vec<Booking>) -> Result<Vec<NormalizedBooking>> {
    bookings
        .into_iter()
        .map(|b| {
            let date = parse_day_first_date(&b.date)?;
            let amount = parse_amount(&b.amount)?;
            Ok(NormalizedBooking {
                booking_id: b.booking_id,
                restaurant_id: b.restaurant_id,
                restaurant_name: b.restaurant_name,
                client_id: b.client_id,
                client_name: b.client_name,
                amount,
                guests: b.guests,
                month: month_key(date),
                date,
                country: b.country,
            })
        })
        .collect()
}
