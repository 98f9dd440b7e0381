use crate::domain::model::ViewRecord;
use crate::domain::ports::SeriesSink;
use crate::utils::error::Result;
use std::io::Write;
use std::path::{Path, PathBuf};

/// One compact JSON object per line. Non-ASCII text is written as-is.
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SeriesSink for JsonLinesSink<W> {
    fn write_series(&mut self, series: &[ViewRecord]) -> Result<()> {
        for record in series {
            serde_json::to_writer(&mut self.writer, record)?;
            self.writer.write_all(b"\n")?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes `date,count` rows to a file, replacing whatever was there.
pub struct CsvFileSink {
    path: PathBuf,
}

impl CsvFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SeriesSink for CsvFileSink {
    fn write_series(&mut self, series: &[ViewRecord]) -> Result<()> {
        export_to_csv(series, &self.path)
    }
}

pub fn export_to_csv(series: &[ViewRecord], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    // Header is written explicitly so an empty series still gets one.
    writer.write_record(["date", "count"])?;
    for record in series {
        let count = record.count.to_string();
        writer.write_record([record.date.as_str(), count.as_str()])?;
    }
    writer.flush()?;

    tracing::debug!("Wrote {} rows to {}", series.len(), path.display());
    Ok(())
}
