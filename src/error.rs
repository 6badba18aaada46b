use thiserror::Error;

#[derive(Error, Debug)]
pub enum BistroError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Database error: {0}")]
    Db(#[from] postgres::Error),

    #[error("Unparseable date: {0}")]
    Date(String),

    #[error("Unparseable amount: {0}")]
    Amount(String),

    #[error("Bookings table failed validation")]
    InvalidBookings,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, BistroError>;
