use crate::models::{DisplayRow, ReportRow};

/// Round to two decimal places with `f64::round` semantics
/// (half-away-from-zero).
pub fn round2(val: f64) -> f64 {
    (val * 100.0).round() / 100.0
}

// Plain decimal-to-string of the rounded float, with at least one fractional
// digit but no forced padding: 76.0 renders "76.0", never "76" or "76.00".
fn decimal_string(val: f64) -> String {
    let s = val.to_string();
    if s.contains('.') {
        s
    } else {
        format!("{s}.0")
    }
}

/// Render an aggregate amount as a locale-tagged display string: comma
/// decimal separator and a trailing " €", unless the country is exactly
/// "United Kingdom", which keeps the dot and takes a "£" prefix instead.
pub fn display_amount(amount: f64, country: &str) -> String {
    let s = decimal_string(round2(amount));
    if country == "United Kingdom" {
        format!("\u{a3}{s}")
    } else {
        format!("{} \u{20ac}", s.replace('.', ","))
    }
}

/// Replace each row's numeric amount with its display string. No other
/// column is touched.
pub fn format_report(rows: Vec<ReportRow>) -> Vec<DisplayRow> {
    rows.into_iter()
        .map(|row| DisplayRow {
            amount: display_amount(row.amount, &row.country),
            restaurant_id: row.restaurant_id,
            restaurant_name: row.restaurant_name,
            country: row.country,
            month: row.month,
            number_of_bookings: row.number_of_bookings,
            number_of_guests: row.number_of_guests,
        })
        .collect()
}
