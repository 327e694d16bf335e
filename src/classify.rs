use crate::recommendation::Category;
use crate::schedule::{DayKind, Schedule};
use crate::shift::ShiftType;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::warn;

/// How the shift type of a recovery or preparation day was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftSource {
    /// Taken from the adjacent work day.
    Matched(ShiftType),
    /// No adjacent work day exists; the day-shift variant was used.
    Fallback,
}

impl ShiftSource {
    pub fn shift_type(&self) -> ShiftType {
        match self {
            ShiftSource::Matched(shift) => *shift,
            ShiftSource::Fallback => ShiftType::Day,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub date: NaiveDate,
    /// Set membership, `None` for dates the schedule does not list.
    pub kind: Option<DayKind>,
    pub category: Category,
    /// Present for recovery and preparation days only.
    pub shift_source: Option<ShiftSource>,
    pub recommendation: &'static [&'static str],
}

impl Classification {
    fn new(
        date: NaiveDate,
        kind: Option<DayKind>,
        category: Category,
        shift_source: Option<ShiftSource>,
    ) -> Self {
        Self {
            date,
            kind,
            category,
            shift_source,
            recommendation: category.recommendation(),
        }
    }

    pub fn is_chore_day(&self) -> bool {
        self.category.is_chore_day()
    }
}

/// Classifies any date against the schedule.
///
/// Rules apply in priority order: work day, recovery day, preparation day,
/// and finally regular day. Productive days, second-job days and dates the
/// schedule does not know about all get the regular-day recommendation.
pub fn classify(schedule: &Schedule, date: NaiveDate) -> Classification {
    let kind = schedule.kind_of(date);

    if let Some(shift) = schedule.shift_on(date) {
        return Classification::new(date, kind, Category::work_day(shift), None);
    }

    if schedule.recovery_days().contains(&date) {
        let source = adjacent_shift(schedule, date, -1);
        let category = Category::recovery_day(source.shift_type());
        return Classification::new(date, kind, category, Some(source));
    }

    if schedule.preparation_days().contains(&date) {
        let source = adjacent_shift(schedule, date, 1);
        let category = Category::preparation_day(source.shift_type());
        return Classification::new(date, kind, category, Some(source));
    }

    Classification::new(date, kind, Category::RegularDay, None)
}

/// Looks for the work day on `date` itself, then on `date + offset`.
fn adjacent_shift(schedule: &Schedule, date: NaiveDate, offset: i64) -> ShiftSource {
    let same_day = schedule.shift_on(date);
    let neighbour = || {
        crate::calendar::offset(date, offset).and_then(|other| schedule.shift_on(other))
    };
    match same_day.or_else(neighbour) {
        Some(shift) => ShiftSource::Matched(shift),
        None => {
            warn!(%date, "no originating work day found, using day-shift recommendation");
            ShiftSource::Fallback
        }
    }
}
