use std::path::Path;

use tracing::error;

use crate::error::Result;
use crate::models::Booking;

/// A CSV file read into memory: the header record plus every data record,
/// untyped. Validation runs against this before any typed conversion.
pub struct RawTable {
    pub headers: csv::StringRecord,
    pub rows: Vec<csv::StringRecord>,
}

/// Read a CSV with a header row. On any read failure (missing file, malformed
/// content, ragged records) the reason is surfaced as a diagnostic only and
/// the caller gets `None`.
pub fn read_table(path: &Path) -> Option<RawTable> {
    let mut rdr = match csv::Reader::from_path(path) {
        Ok(r) => r,
        Err(e) => {
            match e.kind() {
                csv::ErrorKind::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
                    error!("bookings file not found: {}", path.display());
                }
                _ => error!("could not read bookings file: {e}"),
            }
            return None;
        }
    };

    let headers = match rdr.headers() {
        Ok(h) => h.clone(),
        Err(e) => {
            error!("bookings file has incorrect format: {e}");
            return None;
        }
    };

    let mut rows = Vec::new();
    for record in rdr.records() {
        match record {
            Ok(r) => rows.push(r),
            Err(e) => {
                error!("bookings file has incorrect format: {e}");
                return None;
            }
        }
    }

    Some(RawTable { headers, rows })
}

/// Bind each record to the header row and deserialize it into a typed
/// booking. Fails the whole batch on the first bad record.
pub fn typed_rows(table: &RawTable) -> Result<Vec<Booking>> {
    table
        .rows
        .iter()
        .map(|r| Ok(r.deserialize::<Booking>(Some(&table.headers))?))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_csv(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    const VALID: &str = "\
booking_id,restaurant_id,restaurant_name,client_id,client_name,amount,guests,date,country
1,R1,Guerciotti,C1,Ada,\"11,95 \u{20ac}\",1,01/01/2021,Italia
2,R2,Adixen Vacuum Products,C2,Grace,\u{a3}128.35,6,02/01/2021,United Kingdom
";

    #[test]
    fn test_read_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(dir.path(), "bookings.csv", VALID);
        let table = read_table(&path).unwrap();
        assert_eq!(table.headers.len(), 9);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(&table.rows[0][2], "Guerciotti");
    }

    #[test]
    fn test_read_table_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_table(&dir.path().join("nope.csv")).is_none());
    }

    #[test]
    fn test_read_table_ragged_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(dir.path(), "bad.csv", "a,b,c\n1,2\n");
        assert!(read_table(&path).is_none());
    }

    #[test]
    fn test_typed_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(dir.path(), "bookings.csv", VALID);
        let table = read_table(&path).unwrap();
        let bookings = typed_rows(&table).unwrap();
        assert_eq!(bookings.len(), 2);
        assert_eq!(bookings[0].amount, "11,95 \u{20ac}");
        assert_eq!(bookings[1].guests, 6);
        assert_eq!(bookings[1].country, "United Kingdom");
    }

    #[test]
    fn test_typed_rows_bad_guests() {
        let dir = tempfile::tempdir().unwrap();
        let content = "\
booking_id,restaurant_id,restaurant_name,client_id,client_name,amount,guests,date,country
1,R1,Guerciotti,C1,Ada,76 \u{20ac},many,01/01/2021,Italia
";
        let path = write_csv(dir.path(), "bookings.csv", content);
        let table = read_table(&path).unwrap();
        assert!(typed_rows(&table).is_err());
    }

    #[test]
    fn test_typed_rows_column_order_irrelevant() {
        let dir = tempfile::tempdir().unwrap();
        let content = "\
country,date,guests,amount,client_name,client_id,restaurant_name,restaurant_id,booking_id
Italia,01/01/2021,3,76 \u{20ac},Ada,C1,Guerciotti,R1,1
";
        let path = write_csv(dir.path(), "bookings.csv", content);
        let table = read_table(&path).unwrap();
        let bookings = typed_rows(&table).unwrap();
        assert_eq!(bookings[0].restaurant_name, "Guerciotti");
        assert_eq!(bookings[0].guests, 3);
    }
}
