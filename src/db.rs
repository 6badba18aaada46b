use postgres::{Client, NoTls};

use crate::error::{BistroError, Result};
use crate::models::DisplayRow;
use crate::settings::DbSettings;
use crate::sink::ReportSink;

const REPORT_COLUMNS: &str =
    "restaurant_id, restaurant_name, country, month, number_of_bookings, number_of_guests, amount";

fn create_table_sql(table: &str) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {table} (
            restaurant_id TEXT NOT NULL,
            restaurant_name TEXT NOT NULL,
            country TEXT NOT NULL,
            month TEXT NOT NULL,
            number_of_bookings BIGINT NOT NULL,
            number_of_guests BIGINT NOT NULL,
            amount TEXT NOT NULL
        )"
    )
}

/// Bulk-append sink backed by PostgreSQL. Connects lazily on the first
/// append so a run that never reaches the sink never contacts the server;
/// creates the target table if absent, then streams rows in with COPY.
pub struct PgSink {
    db: DbSettings,
}

impl PgSink {
    pub fn new(db: DbSettings) -> Self {
        Self { db }
    }

    fn connect(&self) -> Result<Client> {
        let client = postgres::Config::new()
            .host(&self.db.host)
            .port(self.db.port)
            .user(&self.db.username)
            .password(&self.db.password)
            .dbname(&self.db.database)
            .connect(NoTls)?;
        Ok(client)
    }
}

impl ReportSink for PgSink {
    fn append(&mut self, rows: &[DisplayRow]) -> Result<()> {
        let mut client = self.connect()?;
        client.batch_execute(&create_table_sql(&self.db.table))?;

        let copy = format!(
            "COPY {} ({REPORT_COLUMNS}) FROM STDIN WITH CSV",
            self.db.table
        );
        let copy_writer = client.copy_in(copy.as_str())?;
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(copy_writer);
        for row in rows {
            csv_writer.serialize(row)?;
        }
        let copy_writer = csv_writer
            .into_inner()
            .map_err(|e| BistroError::Other(e.to_string()))?;
        copy_writer.finish()?;
        Ok(())
    }
}
