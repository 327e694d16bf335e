pub mod calendar;
pub mod classify;
pub mod export;
#[cfg(feature = "http_api")]
pub mod http_api;
pub mod projection;
pub mod recommendation;
pub mod schedule;
pub mod shift;

pub use calendar::{ParseDateError, parse_date};
pub use classify::{Classification, ShiftSource, classify};
pub use export::{
    ExportError, ExportResult, export_file_name, export_schedule_to_csv, export_to_csv_string,
    write_projection_csv,
};
pub use projection::{Projection, ProjectionRow, project};
pub use recommendation::{Category, SleepWindow, SleepWindowError};
pub use schedule::{AddWorkDayOutcome, DayKind, Schedule, ScheduleSummary, WorkDay};
pub use shift::{ParseShiftTypeError, ShiftType};
