use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::DisplayRow;

/// A destination for the finished report. The pipeline only hands rows over;
/// connections and file handling live behind this seam.
pub trait ReportSink {
    fn append(&mut self, rows: &[DisplayRow]) -> Result<()>;
}

/// Flat-file sink: the report as comma-separated text with a header row and
/// no index column, columns in the report's natural order.
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl ReportSink for CsvSink {
    fn append(&mut self, rows: &[DisplayRow]) -> Result<()> {
        let mut writer = csv::Writer::from_path(&self.path)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}
