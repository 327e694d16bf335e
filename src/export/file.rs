use super::{EXPORT_HEADER, ExportError, ExportResult};
use crate::calendar::format_export_date;
use crate::projection::{ProjectionRow, RECOMMENDATION_SEPARATOR, project};
use crate::recommendation::SleepWindow;
use crate::schedule::Schedule;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

#[derive(Debug, Serialize)]
struct ExportRecord {
    date: String,
    day_type: &'static str,
    sleep_time: String,
    wake_time: String,
    recommendations: String,
}

impl TryFrom<&ProjectionRow> for ExportRecord {
    type Error = ExportError;

    fn try_from(row: &ProjectionRow) -> ExportResult<Self> {
        let sleep_line = row.recommendation.first().ok_or_else(|| {
            ExportError::InvalidData(format!("{} has an empty recommendation", row.date))
        })?;
        let window = SleepWindow::parse(sleep_line)?;
        Ok(Self {
            date: format_export_date(row.date),
            day_type: row.day_type,
            sleep_time: window.start,
            wake_time: window.end,
            recommendations: row.recommendation.join(RECOMMENDATION_SEPARATOR),
        })
    }
}

/// Writes the header and one row per projected date. Returns the number of
/// data rows written.
pub fn write_projection_csv<W: Write>(rows: &[ProjectionRow], writer: W) -> ExportResult<usize> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    writer.write_record(EXPORT_HEADER)?;
    for row in rows {
        writer.serialize(ExportRecord::try_from(row)?)?;
    }
    writer.flush()?;
    Ok(rows.len())
}

pub fn export_to_csv_string(schedule: &Schedule) -> ExportResult<String> {
    let projection = project(schedule);
    let mut buffer = Vec::new();
    write_projection_csv(projection.rows(), &mut buffer)?;
    String::from_utf8(buffer).map_err(|err| ExportError::InvalidData(err.to_string()))
}

pub fn export_schedule_to_csv<P: AsRef<Path>>(schedule: &Schedule, path: P) -> ExportResult<usize> {
    let projection = project(schedule);
    let file = File::create(path.as_ref())?;
    let written = write_projection_csv(projection.rows(), file)?;
    info!(path = %path.as_ref().display(), rows = written, "schedule exported");
    Ok(written)
}
