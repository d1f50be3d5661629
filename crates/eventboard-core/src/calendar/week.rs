//! ISO-8601 week arithmetic.
//!
//! Week labels come straight from the schedule sheet ("44", "CW44", "cw 45")
//! and are resolved against the configured event year.

use chrono::{DateTime, Datelike, Days, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};

use super::clock::EventClock;
use crate::config::EventConfig;
use crate::error::ResolveError;

/// The seven accepted day names, Monday first.
pub const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Parse a week label into its number.
///
/// Strips an optional case-insensitive `CW` prefix plus surrounding
/// whitespace, then reads the leading run of digits. Returns `None` when no
/// digits follow.
pub fn parse_week_label(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    let rest = match trimmed.get(..2) {
        Some(prefix) if prefix.eq_ignore_ascii_case("cw") => trimmed[2..].trim_start(),
        _ => trimmed,
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    rest[..digits_end].parse().ok()
}

/// Parse a weekday name ("Wednesday", "wednesday ").
pub fn parse_day_name(raw: &str) -> Option<Weekday> {
    let trimmed = raw.trim();
    DAY_NAMES
        .iter()
        .zip(WEEKDAYS)
        .find(|(name, _)| name.eq_ignore_ascii_case(trimmed))
        .map(|(_, weekday)| weekday)
}

/// Monday of ISO week `week` in `year`.
///
/// January 4 always falls in week 1, so week 1 starts on the Monday on or
/// before it. Weeks outside 1-53 yield `None`; week 53 of a 52-week year
/// lands on week 1 of the following year.
pub fn monday_of_iso_week(week: u32, year: i32) -> Option<NaiveDate> {
    if !(1..=53).contains(&week) {
        return None;
    }
    let jan4 = NaiveDate::from_ymd_opt(year, 1, 4)?;
    let first_monday =
        jan4.checked_sub_days(Days::new(u64::from(jan4.weekday().num_days_from_monday())))?;
    first_monday.checked_add_days(Days::new(u64::from(week - 1) * 7))
}

/// Monday-to-Sunday span of a week, as instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekRange {
    /// Local midnight opening Monday
    pub start: DateTime<Utc>,
    /// Local 23:59:59.999 closing Sunday
    pub end: DateTime<Utc>,
}

impl WeekRange {
    /// Inclusive on both ends.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}

/// Resolves week labels against the event year and timezone.
#[derive(Debug, Clone, Copy)]
pub struct WeekResolver {
    year: i32,
    clock: EventClock,
}

impl WeekResolver {
    pub fn new(config: &EventConfig) -> Self {
        Self {
            year: config.event_year,
            clock: EventClock::from_config(config),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn clock(&self) -> EventClock {
        self.clock
    }

    /// Monday of the labelled week as a calendar date.
    pub fn try_monday_date(&self, label: &str) -> Result<NaiveDate, ResolveError> {
        parse_week_label(label)
            .and_then(|week| monday_of_iso_week(week, self.year))
            .ok_or_else(|| ResolveError::MalformedWeekLabel(label.to_string()))
    }

    /// Local midnight of the labelled week's Monday.
    pub fn monday_of_week(&self, label: &str) -> Option<DateTime<Utc>> {
        self.try_monday_date(label)
            .ok()
            .map(|monday| self.clock.start_of_day(monday))
    }

    pub fn try_week_date_range(&self, label: &str) -> Result<WeekRange, ResolveError> {
        let monday = self.try_monday_date(label)?;
        let sunday = monday
            .checked_add_days(Days::new(6))
            .ok_or_else(|| ResolveError::MalformedWeekLabel(label.to_string()))?;
        Ok(WeekRange {
            start: self.clock.start_of_day(monday),
            end: self.clock.end_of_day(sunday),
        })
    }

    pub fn week_date_range(&self, label: &str) -> Option<WeekRange> {
        self.try_week_date_range(label).ok()
    }

    /// Calendar date of `weekday` within the labelled week.
    pub fn try_date_in_week(
        &self,
        label: &str,
        weekday: Weekday,
    ) -> Result<NaiveDate, ResolveError> {
        let monday = self.try_monday_date(label)?;
        monday
            .checked_add_days(Days::new(u64::from(weekday.num_days_from_monday())))
            .ok_or_else(|| ResolveError::MalformedWeekLabel(label.to_string()))
    }

    /// Local midnight of the named day within the labelled week.
    pub fn date_for_day_in_week(&self, label: &str, day_name: &str) -> Option<DateTime<Utc>> {
        let weekday = parse_day_name(day_name)?;
        self.try_date_in_week(label, weekday)
            .ok()
            .map(|date| self.clock.start_of_day(date))
    }
}
