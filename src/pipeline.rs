use std::path::Path;

use crate::checks;
use crate::error::{BistroError, Result};
use crate::fmt;
use crate::importer;
use crate::observe::{timed, PipelineObserver};
use crate::parse;
use crate::report;
use crate::sink::ReportSink;

/// Run the full batch pipeline: load, validate, normalize, aggregate, format,
/// then hand the display table to the bulk-append sink and, if given, the
/// flat-file sink. A table that fails validation aborts the run before any
/// sink is contacted. Returns the number of report rows produced.
pub fn run(
    bookings_path: &Path,
    sink: &mut dyn ReportSink,
    file_sink: Option<&mut dyn ReportSink>,
    observer: &dyn PipelineObserver,
) -> Result<usize> {
    let table = timed(observer, "load", || importer::read_table(bookings_path));

    let valid = timed(observer, "validate", || {
        checks::check_bookings(table.as_ref())
    });
    let table = match (valid, table) {
        (true, Some(table)) => table,
        _ => return Err(BistroError::InvalidBookings),
    };

    let normalized = timed(observer, "normalize", || -> Result<_> {
        let bookings = importer::typed_rows(&table)?;
        parse::normalize(bookings)
    })?;

    let aggregated = timed(observer, "aggregate", || report::aggregate(&normalized));
    let display = timed(observer, "format", || fmt::format_report(aggregated));

    timed(observer, "append", || sink.append(&display))?;
    if let Some(file_sink) = file_sink {
        timed(observer, "export", || file_sink.append(&display))?;
    }

    Ok(display.len())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::time::Duration;

    use super::*;
    use crate::models::DisplayRow;

    #[derive(Default)]
    struct MemorySink {
        rows: Vec<DisplayRow>,
        appends: usize,
    }

    impl ReportSink for MemorySink {
        fn append(&mut self, rows: &[DisplayRow]) -> Result<()> {
            self.rows.extend_from_slice(rows);
            self.appends += 1;
            Ok(())
        }
    }

    struct FailingSink;

    impl ReportSink for FailingSink {
        fn append(&mut self, _rows: &[DisplayRow]) -> Result<()> {
            Err(BistroError::Other("connection refused".to_string()))
        }
    }

    #[derive(Default)]
    struct Recorder(RefCell<Vec<String>>);

    impl PipelineObserver for Recorder {
        fn stage_completed(&self, stage: &str, _elapsed: Duration) {
            self.0.borrow_mut().push(stage.to_string());
        }
    }

    const BOOKINGS: &str = "\
booking_id,restaurant_id,restaurant_name,client_id,client_name,amount,guests,date,country
1,81b15746,Guerciotti,C1,Ada,\"11,95 \u{20ac}\",1,01/01/2021,Italia
2,47bce3e7,Adixen Vacuum Products,C2,Grace,\u{a3}128.35,6,02/01/2021,United Kingdom
3,81b15746,Guerciotti,C3,Edsger,76 \u{20ac},3,03-01-2021,Italia
4,47bce3e7,Adixen Vacuum Products,C4,Barbara,\"29,33 \u{20ac}\",2,04/02/2021,United Kingdom
";

    fn write_bookings(dir: &Path, content: &str) -> std::path::PathBuf {
        let path = dir.join("bookings.csv");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_run_produces_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_bookings(dir.path(), BOOKINGS);
        let mut sink = MemorySink::default();
        let observer = Recorder::default();

        let rows = run(&path, &mut sink, None, &observer).unwrap();
        assert_eq!(rows, 3);
        assert_eq!(sink.appends, 1);

        assert_eq!(sink.rows[0].restaurant_id, "47bce3e7");
        assert_eq!(sink.rows[0].country, "United Kingdom");
        assert_eq!(sink.rows[0].month, "2021_01");
        assert_eq!(sink.rows[0].number_of_bookings, 1);
        assert_eq!(sink.rows[0].amount, "\u{a3}128.35");

        assert_eq!(sink.rows[1].month, "2021_02");
        assert_eq!(sink.rows[1].amount, "\u{a3}29.33");

        assert_eq!(sink.rows[2].restaurant_name, "Guerciotti");
        assert_eq!(sink.rows[2].number_of_bookings, 2);
        assert_eq!(sink.rows[2].number_of_guests, 4);
        assert_eq!(sink.rows[2].amount, "87,95 \u{20ac}");
    }

    #[test]
    fn test_run_reports_every_stage() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_bookings(dir.path(), BOOKINGS);
        let mut sink = MemorySink::default();
        let mut file_sink = MemorySink::default();
        let observer = Recorder::default();

        run(
            &path,
            &mut sink,
            Some(&mut file_sink),
            &observer,
        )
        .unwrap();

        assert_eq!(
            *observer.0.borrow(),
            ["load", "validate", "normalize", "aggregate", "format", "append", "export"]
        );
        assert_eq!(file_sink.rows, sink.rows);
    }

    #[test]
    fn test_run_aborts_before_sink_on_invalid_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_bookings(dir.path(), "a,b,c\n1,2,3\n");
        let mut sink = MemorySink::default();
        let observer = Recorder::default();

        let err = run(&path, &mut sink, None, &observer).unwrap_err();
        assert!(matches!(err, BistroError::InvalidBookings));
        assert_eq!(sink.appends, 0);
    }

    #[test]
    fn test_run_aborts_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = MemorySink::default();
        let observer = Recorder::default();

        let err = run(&dir.path().join("nope.csv"), &mut sink, None, &observer).unwrap_err();
        assert!(matches!(err, BistroError::InvalidBookings));
        assert_eq!(sink.appends, 0);
    }

    #[test]
    fn test_run_fails_on_bad_amount() {
        let dir = tempfile::tempdir().unwrap();
        let content = "\
booking_id,restaurant_id,restaurant_name,client_id,client_name,amount,guests,date,country
1,R1,Guerciotti,C1,Ada,gratis,1,01/01/2021,Italia
";
        let path = write_bookings(dir.path(), content);
        let mut sink = MemorySink::default();
        let observer = Recorder::default();

        let err = run(&path, &mut sink, None, &observer).unwrap_err();
        assert!(matches!(err, BistroError::Amount(_)));
        assert_eq!(sink.appends, 0);
    }

    #[test]
    fn test_run_surfaces_sink_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_bookings(dir.path(), BOOKINGS);
        let observer = Recorder::default();

        let err = run(&path, &mut FailingSink, None, &observer).unwrap_err();
        assert!(err.to_string().contains("connection refused"));
    }
}
