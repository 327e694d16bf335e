use crate::classify::classify;
use crate::recommendation::Category;
use crate::schedule::{DayKind, Schedule};
use chrono::NaiveDate;
use polars::prelude::*;
use serde::Serialize;

/// Separator used when a recommendation is flattened to one field.
pub const RECOMMENDATION_SEPARATOR: &str = "; ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectionRow {
    pub date: NaiveDate,
    pub kind: DayKind,
    pub category: Category,
    pub day_type: &'static str,
    pub sleep_time: String,
    pub wake_time: String,
    pub available_daytime_hours: u32,
    pub chore_day: bool,
    pub recommendation: &'static [&'static str],
}

impl ProjectionRow {
    pub fn recommendation_text(&self) -> String {
        self.recommendation.join(RECOMMENDATION_SEPARATOR)
    }
}

/// Every listed date of a schedule with its classification, ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Projection {
    rows: Vec<ProjectionRow>,
}

impl Projection {
    pub fn rows(&self) -> &[ProjectionRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let dates: Vec<i32> = self.rows.iter().map(|r| date_to_i32(r.date)).collect();
        let day_types: Vec<&str> = self.rows.iter().map(|r| r.day_type).collect();
        let sleep: Vec<&str> = self.rows.iter().map(|r| r.sleep_time.as_str()).collect();
        let wake: Vec<&str> = self.rows.iter().map(|r| r.wake_time.as_str()).collect();
        let chore: Vec<bool> = self.rows.iter().map(|r| r.chore_day).collect();
        let text: Vec<String> = self
            .rows
            .iter()
            .map(ProjectionRow::recommendation_text)
            .collect();

        let columns: Vec<Column> = vec![
            Series::new(PlSmallStr::from_static("date"), dates)
                .cast(&DataType::Date)?
                .into_column(),
            Series::new(PlSmallStr::from_static("day_type"), day_types).into_column(),
            Series::new(PlSmallStr::from_static("sleep_time"), sleep).into_column(),
            Series::new(PlSmallStr::from_static("wake_time"), wake).into_column(),
            Series::new(PlSmallStr::from_static("chore_day"), chore).into_column(),
            Series::new(PlSmallStr::from_static("recommendations"), text).into_column(),
        ];
        DataFrame::new(columns)
    }
}

/// Lists the work, recovery, preparation and productive dates of `schedule`
/// in ascending order, each classified through [`classify`].
pub fn project(schedule: &Schedule) -> Projection {
    let rows = schedule
        .listed_dates()
        .into_iter()
        .filter_map(|date| {
            let classification = classify(schedule, date);
            let kind = classification.kind?;
            let category = classification.category;
            let window = category.sleep_window();
            Some(ProjectionRow {
                date,
                kind,
                category,
                day_type: category.label(),
                sleep_time: window.start,
                wake_time: window.end,
                available_daytime_hours: category.available_daytime_hours(),
                chore_day: category.is_chore_day(),
                recommendation: classification.recommendation,
            })
        })
        .collect();
    Projection { rows }
}

fn date_to_i32(date: NaiveDate) -> i32 {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default();
    (date - epoch).num_days() as i32
}
