//! Fixed sleep recommendations per day category and the chore-day indicator
//! derived from their sleep windows.

use crate::shift::ShiftType;
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Business window used by the chore-day indicator, in 24-hour clock hours.
const BUSINESS_START_HOUR: u32 = 9;
const BUSINESS_END_HOUR: u32 = 17;
const CHORE_DAY_MIN_HOURS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    NightShiftWorkDay,
    DayShiftWorkDay,
    NightShiftRecoveryDay,
    DayShiftRecoveryDay,
    NightShiftPreparationDay,
    DayShiftPreparationDay,
    RegularDay,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::NightShiftWorkDay,
        Category::DayShiftWorkDay,
        Category::NightShiftRecoveryDay,
        Category::DayShiftRecoveryDay,
        Category::NightShiftPreparationDay,
        Category::DayShiftPreparationDay,
        Category::RegularDay,
    ];

    pub fn work_day(shift: ShiftType) -> Self {
        match shift {
            ShiftType::Night => Category::NightShiftWorkDay,
            ShiftType::Day => Category::DayShiftWorkDay,
        }
    }

    pub fn recovery_day(shift: ShiftType) -> Self {
        match shift {
            ShiftType::Night => Category::NightShiftRecoveryDay,
            ShiftType::Day => Category::DayShiftRecoveryDay,
        }
    }

    pub fn preparation_day(shift: ShiftType) -> Self {
        match shift {
            ShiftType::Night => Category::NightShiftPreparationDay,
            ShiftType::Day => Category::DayShiftPreparationDay,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::NightShiftWorkDay => "Night Shift Work Day",
            Category::DayShiftWorkDay => "Day Shift Work Day",
            Category::NightShiftRecoveryDay => "Night Shift Recovery Day",
            Category::DayShiftRecoveryDay => "Day Shift Recovery Day",
            Category::NightShiftPreparationDay => "Night Shift Preparation Day",
            Category::DayShiftPreparationDay => "Day Shift Preparation Day",
            Category::RegularDay => "Regular Day",
        }
    }

    pub fn is_work_day(&self) -> bool {
        matches!(
            self,
            Category::NightShiftWorkDay | Category::DayShiftWorkDay
        )
    }

    /// Ordered recommendation lines. Line 0 is always the sleep window.
    pub fn recommendation(&self) -> &'static [&'static str] {
        match self {
            Category::NightShiftWorkDay => &[
                "Sleep: 9:00 AM - 5:00 PM (8 hours)",
                "Wake up at 5:00 PM and eat a balanced meal before work",
                "Shift starts at 7:00 PM so leave time to get ready",
                "Keep a water bottle with you and stay hydrated through the night",
            ],
            Category::DayShiftWorkDay => &[
                "Sleep: 10:00 PM - 6:00 AM (8 hours)",
                "Wake up at 6:00 AM and eat a nutritious breakfast",
                "Shift starts at 7:00 AM so leave time to get ready",
                "Stay hydrated and take short breaks when the unit allows",
            ],
            Category::NightShiftRecoveryDay => &[
                "Sleep: 8:00 AM - 4:00 PM (8 hours)",
                "Optional nap: 7:00 PM - 8:00 PM",
                "Eat a light dinner to ease back into a normal rhythm",
                "Drink plenty of water to recover from the shift",
            ],
            Category::DayShiftRecoveryDay => &[
                "Sleep: 10:00 PM - 6:00 AM (8 hours)",
                "Optional nap: 2:00 PM - 3:00 PM",
                "Get some light exercise or a walk outdoors",
                "Drink plenty of water to recover from the shift",
            ],
            Category::NightShiftPreparationDay => &[
                "Sleep: 11:00 PM - 7:00 AM (8 hours)",
                "Optional nap: 2:00 PM - 3:00 PM",
                "Avoid caffeine after 2:00 PM",
                "Plan meals and rest ahead of tomorrow's night shift",
            ],
            Category::DayShiftPreparationDay => &[
                "Sleep: 10:00 PM - 6:00 AM (8 hours)",
                "Avoid caffeine after 12:00 PM",
                "Lay out your uniform and plan tomorrow's commute",
                "Pack snacks and supplies for the shift",
            ],
            Category::RegularDay => &[
                "Sleep: 10:00 PM - 6:00 AM (8 hours)",
                "Fit in 30 minutes of exercise",
                "Avoid caffeine after 12:00 PM",
                "Keep meals at regular times",
            ],
        }
    }

    /// Sleep start and wake hour (24-hour clock) written in line 0.
    const fn sleep_hours(&self) -> (u32, u32) {
        match self {
            Category::NightShiftWorkDay => (9, 17),
            Category::NightShiftRecoveryDay => (8, 16),
            Category::NightShiftPreparationDay => (23, 7),
            Category::DayShiftWorkDay
            | Category::DayShiftRecoveryDay
            | Category::DayShiftPreparationDay
            | Category::RegularDay => (22, 6),
        }
    }

    pub fn sleep_window(&self) -> SleepWindow {
        let (start, wake) = self.sleep_hours();
        SleepWindow::from_hours(start, wake)
    }

    pub fn available_daytime_hours(&self) -> u32 {
        if self.is_work_day() {
            return 0;
        }
        self.sleep_window().available_daytime_hours()
    }

    /// Work days are never chore days; every other category qualifies when
    /// its sleep window leaves enough free business hours.
    pub fn is_chore_day(&self) -> bool {
        if self.is_work_day() {
            return false;
        }
        self.sleep_window().leaves_chore_time()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SleepWindowError {
    line: String,
    reason: &'static str,
}

impl SleepWindowError {
    fn new(line: &str, reason: &'static str) -> Self {
        Self {
            line: line.to_string(),
            reason,
        }
    }
}

impl fmt::Display for SleepWindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid sleep line '{}': {}", self.line, self.reason)
    }
}

impl std::error::Error for SleepWindowError {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SleepWindow {
    /// Label as written, e.g. `10:00 PM`.
    pub start: String,
    pub end: String,
    pub start_hour: u32,
    pub wake_hour: u32,
}

impl SleepWindow {
    pub fn from_hours(start_hour: u32, wake_hour: u32) -> Self {
        Self {
            start: clock_label(start_hour),
            end: clock_label(wake_hour),
            start_hour,
            wake_hour,
        }
    }

    /// Parse `Sleep: <start> - <end> (8 hours)` with 12-hour clock labels.
    pub fn parse(line: &str) -> Result<Self, SleepWindowError> {
        let body = line
            .trim()
            .strip_prefix("Sleep:")
            .ok_or_else(|| SleepWindowError::new(line, "missing 'Sleep:' prefix"))?;
        let range = body.split(" (").next().unwrap_or(body).trim();
        let (start, end) = range
            .split_once(" - ")
            .ok_or_else(|| SleepWindowError::new(line, "expected '<start> - <end>'"))?;
        let start = start.trim();
        let end = end.trim();
        let start_hour = parse_clock_hour(start)
            .ok_or_else(|| SleepWindowError::new(line, "unreadable start time"))?;
        let wake_hour = parse_clock_hour(end)
            .ok_or_else(|| SleepWindowError::new(line, "unreadable wake time"))?;
        Ok(Self {
            start: start.to_string(),
            end: end.to_string(),
            start_hour,
            wake_hour,
        })
    }

    /// Free hours between 09:00 and 17:00 given this window.
    pub fn available_daytime_hours(&self) -> u32 {
        if self.start_hour >= BUSINESS_END_HOUR || self.start_hour < BUSINESS_START_HOUR {
            BUSINESS_END_HOUR - BUSINESS_START_HOUR
        } else if (BUSINESS_START_HOUR..BUSINESS_END_HOUR).contains(&self.wake_hour) {
            BUSINESS_END_HOUR - self.wake_hour
        } else {
            0
        }
    }

    pub fn leaves_chore_time(&self) -> bool {
        self.available_daytime_hours() >= CHORE_DAY_MIN_HOURS
    }
}

/// 9 -> `9:00 AM`, 0 -> `12:00 AM`, 22 -> `10:00 PM`.
fn clock_label(hour: u32) -> String {
    let suffix = if hour % 24 < 12 { "AM" } else { "PM" };
    let twelve = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{twelve}:00 {suffix}")
}

/// `9:00 AM` -> 9, `12:00 AM` -> 0, `10:00 PM` -> 22.
fn parse_clock_hour(label: &str) -> Option<u32> {
    NaiveTime::parse_from_str(label, "%I:%M %p")
        .ok()
        .map(|time| time.hour())
}
