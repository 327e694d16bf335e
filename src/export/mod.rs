use crate::recommendation::SleepWindowError;
use chrono::NaiveDate;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum ExportError {
    Csv(csv::Error),
    Io(io::Error),
    SleepWindow(SleepWindowError),
    InvalidData(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Csv(err) => write!(f, "csv error: {err}"),
            ExportError::Io(err) => write!(f, "io error: {err}"),
            ExportError::SleepWindow(err) => write!(f, "{err}"),
            ExportError::InvalidData(msg) => write!(f, "invalid data: {msg}"),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<csv::Error> for ExportError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

impl From<io::Error> for ExportError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<SleepWindowError> for ExportError {
    fn from(value: SleepWindowError) -> Self {
        Self::SleepWindow(value)
    }
}

pub type ExportResult<T> = Result<T, ExportError>;

pub const EXPORT_HEADER: [&str; 5] = [
    "Date",
    "Day Type",
    "Sleep Time",
    "Wake Time",
    "Recommendations",
];

/// `nurse-sleep-schedule-<yyyy-MM-dd>.csv`
pub fn export_file_name(today: NaiveDate) -> String {
    format!("nurse-sleep-schedule-{}.csv", today.format("%Y-%m-%d"))
}

pub mod file;

pub use file::{export_schedule_to_csv, export_to_csv_string, write_projection_csv};
