use crate::calendar;
use crate::shift::ShiftType;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkDay {
    pub date: NaiveDate,
    pub shift_type: ShiftType,
}

impl WorkDay {
    pub fn new(date: NaiveDate, shift_type: ShiftType) -> Self {
        Self { date, shift_type }
    }
}

/// Which of the schedule's sets a date belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "shift_type", rename_all = "snake_case")]
pub enum DayKind {
    Work(ShiftType),
    Recovery,
    Preparation,
    Productive,
    /// Reserved. No rule populates the second-job set.
    SecondJob,
}

impl DayKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayKind::Work(_) => "work",
            DayKind::Recovery => "recovery",
            DayKind::Preparation => "preparation",
            DayKind::Productive => "productive",
            DayKind::SecondJob => "second_job",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AddWorkDayOutcome {
    Added,
    /// The date was already a work day; nothing changed.
    Duplicate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleSummary {
    pub work_days: usize,
    pub night_shifts: usize,
    pub day_shifts: usize,
    pub recovery_days: usize,
    pub preparation_days: usize,
    pub productive_days: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
}

impl ScheduleSummary {
    pub fn to_cli_summary(&self) -> String {
        let mut parts = Vec::new();
        parts.push(format!("work={}", self.work_days));
        if self.night_shifts > 0 {
            parts.push(format!("night={}", self.night_shifts));
        }
        if self.day_shifts > 0 {
            parts.push(format!("day={}", self.day_shifts));
        }
        parts.push(format!("recovery={}", self.recovery_days));
        parts.push(format!("preparation={}", self.preparation_days));
        parts.push(format!("productive={}", self.productive_days));
        if let (Some(first), Some(last)) = (self.first_date, self.last_date) {
            parts.push(format!("span={first}..{last}"));
        }
        parts.join(", ")
    }
}

/// Work days plus the auxiliary days derived from them.
///
/// Every date sits in at most one of the work, recovery, preparation and
/// productive sets. Derived days are computed once, when their work day is
/// added, and never overwrite a date that already has a category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    work_days: BTreeMap<NaiveDate, ShiftType>,
    recovery_days: BTreeSet<NaiveDate>,
    preparation_days: BTreeSet<NaiveDate>,
    productive_days: BTreeSet<NaiveDate>,
    second_job_days: BTreeSet<NaiveDate>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the schedule that results from adding `date` as a work day.
    /// A date that is already a work day yields an unchanged copy.
    pub fn with_work_day(&self, date: NaiveDate, shift_type: ShiftType) -> Self {
        self.next_with_work_day(date, shift_type)
            .unwrap_or_else(|| self.clone())
    }

    /// Adds a work day, replacing this schedule with the new snapshot.
    pub fn add_work_day(&mut self, date: NaiveDate, shift_type: ShiftType) -> AddWorkDayOutcome {
        match self.next_with_work_day(date, shift_type) {
            Some(next) => {
                *self = next;
                AddWorkDayOutcome::Added
            }
            None => AddWorkDayOutcome::Duplicate,
        }
    }

    /// `None` when `date` is already a work day.
    fn next_with_work_day(&self, date: NaiveDate, shift_type: ShiftType) -> Option<Self> {
        if self.work_days.contains_key(&date) {
            debug!(%date, "work day already scheduled");
            return None;
        }

        let mut next = self.clone();

        for (kind, set) in [
            ("recovery", &mut next.recovery_days),
            ("preparation", &mut next.preparation_days),
            ("productive", &mut next.productive_days),
            ("second_job", &mut next.second_job_days),
        ] {
            if set.remove(&date) {
                debug!(%date, kind, "work day replaces derived day");
            }
        }

        // Occupancy is judged against the schedule as it was before this call.
        let derived = [
            (calendar::recovery_date(date), &mut next.recovery_days),
            (calendar::preparation_date(date), &mut next.preparation_days),
            (calendar::productive_date(date), &mut next.productive_days),
        ];
        for (candidate, set) in derived {
            if let Some(candidate) = candidate
                && !self.has_any_category(candidate)
            {
                set.insert(candidate);
            }
        }

        next.work_days.insert(date, shift_type);
        debug!(%date, shift = %shift_type, "work day added");
        Some(next)
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Reset only makes sense once something has been entered.
    pub fn can_reset(&self) -> bool {
        !self.work_days.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.work_days.is_empty()
            && self.recovery_days.is_empty()
            && self.preparation_days.is_empty()
            && self.productive_days.is_empty()
            && self.second_job_days.is_empty()
    }

    pub fn has_any_category(&self, date: NaiveDate) -> bool {
        self.kind_of(date).is_some()
    }

    /// Set membership of `date`, checked in the order work, recovery,
    /// preparation, productive, second job.
    pub fn kind_of(&self, date: NaiveDate) -> Option<DayKind> {
        if let Some(shift) = self.work_days.get(&date) {
            Some(DayKind::Work(*shift))
        } else if self.recovery_days.contains(&date) {
            Some(DayKind::Recovery)
        } else if self.preparation_days.contains(&date) {
            Some(DayKind::Preparation)
        } else if self.productive_days.contains(&date) {
            Some(DayKind::Productive)
        } else if self.second_job_days.contains(&date) {
            Some(DayKind::SecondJob)
        } else {
            None
        }
    }

    pub fn shift_on(&self, date: NaiveDate) -> Option<ShiftType> {
        self.work_days.get(&date).copied()
    }

    pub fn work_days(&self) -> impl Iterator<Item = WorkDay> + '_ {
        self.work_days
            .iter()
            .map(|(date, shift)| WorkDay::new(*date, *shift))
    }

    pub fn recovery_days(&self) -> &BTreeSet<NaiveDate> {
        &self.recovery_days
    }

    pub fn preparation_days(&self) -> &BTreeSet<NaiveDate> {
        &self.preparation_days
    }

    pub fn productive_days(&self) -> &BTreeSet<NaiveDate> {
        &self.productive_days
    }

    pub fn second_job_days(&self) -> &BTreeSet<NaiveDate> {
        &self.second_job_days
    }

    /// Union of the work, recovery, preparation and productive dates in
    /// ascending order. Second-job dates are not listed.
    pub fn listed_dates(&self) -> BTreeSet<NaiveDate> {
        self.work_days
            .keys()
            .chain(self.recovery_days.iter())
            .chain(self.preparation_days.iter())
            .chain(self.productive_days.iter())
            .copied()
            .collect()
    }

    pub fn summary(&self) -> ScheduleSummary {
        let night_shifts = self
            .work_days
            .values()
            .filter(|shift| **shift == ShiftType::Night)
            .count();
        let listed = self.listed_dates();
        ScheduleSummary {
            work_days: self.work_days.len(),
            night_shifts,
            day_shifts: self.work_days.len() - night_shifts,
            recovery_days: self.recovery_days.len(),
            preparation_days: self.preparation_days.len(),
            productive_days: self.productive_days.len(),
            first_date: listed.first().copied(),
            last_date: listed.last().copied(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn new_schedule_is_empty_and_cannot_reset() {
        let s = Schedule::new();
        assert!(s.is_empty());
        assert!(!s.can_reset());
        assert_eq!(s.kind_of(d(2024, 6, 10)), None);
    }

    #[test]
    fn with_work_day_leaves_original_untouched() {
        let original = Schedule::new();
        let next = original.with_work_day(d(2024, 6, 10), ShiftType::Day);
        assert!(original.is_empty());
        assert_eq!(next.work_days().count(), 1);
    }

    #[test]
    fn duplicate_keeps_shift_and_derived_days_on_both_paths() {
        let mut s = Schedule::new();
        assert_eq!(
            s.add_work_day(d(2024, 6, 10), ShiftType::Night),
            AddWorkDayOutcome::Added
        );
        let before = s.clone();

        assert_eq!(s.with_work_day(d(2024, 6, 10), ShiftType::Day), before);
        assert_eq!(
            s.add_work_day(d(2024, 6, 10), ShiftType::Day),
            AddWorkDayOutcome::Duplicate
        );
        assert_eq!(s, before);
        assert_eq!(s.shift_on(d(2024, 6, 10)), Some(ShiftType::Night));
    }

    #[test]
    fn day_kind_names() {
        let names: Vec<&str> = [
            DayKind::Work(ShiftType::Day),
            DayKind::Recovery,
            DayKind::Preparation,
            DayKind::Productive,
            DayKind::SecondJob,
        ]
        .iter()
        .map(DayKind::as_str)
        .collect();
        assert_eq!(
            names,
            ["work", "recovery", "preparation", "productive", "second_job"]
        );
    }

    #[test]
    fn kind_of_reports_each_set() {
        let mut s = Schedule::new();
        s.add_work_day(d(2024, 6, 10), ShiftType::Night);
        assert_eq!(
            s.kind_of(d(2024, 6, 10)),
            Some(DayKind::Work(ShiftType::Night))
        );
        assert_eq!(s.kind_of(d(2024, 6, 11)), Some(DayKind::Recovery));
        assert_eq!(s.kind_of(d(2024, 6, 9)), Some(DayKind::Preparation));
        assert_eq!(s.kind_of(d(2024, 6, 8)), Some(DayKind::Productive));
        assert_eq!(s.kind_of(d(2024, 6, 7)), None);
    }

    #[test]
    fn work_day_claims_stale_second_job_date() {
        let mut s = Schedule::new();
        s.second_job_days.insert(d(2024, 6, 10));
        assert_eq!(s.kind_of(d(2024, 6, 10)), Some(DayKind::SecondJob));

        s.add_work_day(d(2024, 6, 10), ShiftType::Day);
        assert!(s.second_job_days().is_empty());
        assert_eq!(
            s.kind_of(d(2024, 6, 10)),
            Some(DayKind::Work(ShiftType::Day))
        );
    }

    #[test]
    fn second_job_dates_block_derived_days_but_are_not_listed() {
        let mut s = Schedule::new();
        s.second_job_days.insert(d(2024, 6, 11));
        s.add_work_day(d(2024, 6, 10), ShiftType::Night);
        assert!(s.recovery_days().is_empty());
        assert!(!s.listed_dates().contains(&d(2024, 6, 11)));
    }

    #[test]
    fn summary_counts_and_span() {
        let mut s = Schedule::new();
        s.add_work_day(d(2024, 6, 10), ShiftType::Night);
        s.add_work_day(d(2024, 6, 20), ShiftType::Day);
        let summary = s.summary();
        assert_eq!(summary.work_days, 2);
        assert_eq!(summary.night_shifts, 1);
        assert_eq!(summary.day_shifts, 1);
        assert_eq!(summary.recovery_days, 2);
        assert_eq!(summary.first_date, Some(d(2024, 6, 8)));
        assert_eq!(summary.last_date, Some(d(2024, 6, 21)));
        let line = summary.to_cli_summary();
        assert!(line.contains("work=2"));
        assert!(line.contains("span=2024-06-08..2024-06-21"));
    }

    #[test]
    fn schedule_serializes_dates_as_iso_keys() {
        let mut s = Schedule::new();
        s.add_work_day(d(2024, 6, 10), ShiftType::Night);
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["work_days"]["2024-06-10"], "night");
        assert_eq!(json["recovery_days"][0], "2024-06-11");
        let back: Schedule = serde_json::from_value(json).unwrap();
        assert_eq!(back, s);
    }
}
