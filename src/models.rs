use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One raw row from the bookings CSV. `amount` and `date` keep the source
/// strings until normalization.
#[allow(dead_code)]
#[derive(Debug, Clone, Deserialize)]
pub struct Booking {
    pub booking_id: String,
    pub restaurant_id: String,
    pub restaurant_name: String,
    pub client_id: String,
    pub client_name: String,
    pub amount: String,
    pub guests: i64,
    pub date: String,
    pub country: String,
}

/// A booking after normalization: typed calendar date, derived `YYYY_MM`
/// month key, numeric amount.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct NormalizedBooking {
    pub booking_id: String,
    pub restaurant_id: String,
    pub restaurant_name: String,
    pub client_id: String,
    pub client_name: String,
    pub amount: f64,
    pub guests: i64,
    pub date: NaiveDate,
    pub month: String,
    pub country: String,
}

/// One monthly aggregate row, keyed by
/// (restaurant_id, restaurant_name, country, month).
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub restaurant_id: String,
    pub restaurant_name: String,
    pub country: String,
    pub month: String,
    pub number_of_bookings: u64,
    pub number_of_guests: i64,
    pub amount: f64,
}

/// A report row with the amount rendered for display. Field order is the
/// report's column order, which serde carries through to the CSV header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRow {
    pub restaurant_id: String,
    pub restaurant_name: String,
    pub country: String,
    pub month: String,
    pub number_of_bookings: u64,
    pub number_of_guests: i64,
    pub amount: String,
}
