//! Resolution of task schedules to absolute instants.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc, Weekday};
use serde::Serialize;

use super::level::{TaskSchedule, TimeLevel};
use super::record::Task;
use crate::calendar::{parse_day_name, EventClock, WeekResolver};
use crate::config::EventConfig;
use crate::error::ResolveError;

/// Which end of a task's interval to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    Start,
    End,
}

/// Both boundaries of a task, resolved once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedTask {
    pub level: TimeLevel,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl ResolvedTask {
    pub fn is_unresolved(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

/// Parse a strict 24-hour `H:MM` / `HH:MM` string.
///
/// # Errors
///
/// Returns [`ResolveError::MalformedTimeString`] for anything else, including
/// out-of-range hours or minutes.
pub fn parse_clock_time(raw: &str) -> Result<NaiveTime, ResolveError> {
    let malformed = || ResolveError::MalformedTimeString(raw.to_string());

    let (hour, minute) = raw.trim().split_once(':').ok_or_else(malformed)?;
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(hour) || hour.len() > 2 || !all_digits(minute) || minute.len() != 2 {
        return Err(malformed());
    }
    let hour: u32 = hour.parse().map_err(|_| malformed())?;
    let minute: u32 = minute.parse().map_err(|_| malformed())?;
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(malformed)
}

/// Turns task schedules into instants.
///
/// ISO week arithmetic is the source of truth. The legacy day table is only
/// consulted for day- and time-level tasks that carry no week label at all.
#[derive(Debug, Clone)]
pub struct TaskTimeResolver {
    weeks: WeekResolver,
    legacy_dates: [Option<NaiveDate>; 7],
}

impl TaskTimeResolver {
    pub fn new(config: &EventConfig) -> Self {
        let mut legacy_dates = [None; 7];
        for weekday in [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ] {
            legacy_dates[weekday.num_days_from_monday() as usize] = config.legacy_date(weekday);
        }
        Self {
            weeks: WeekResolver::new(config),
            legacy_dates,
        }
    }

    pub fn weeks(&self) -> &WeekResolver {
        &self.weeks
    }

    pub fn clock(&self) -> EventClock {
        self.weeks.clock()
    }

    /// Calendar date of a day, from its week or the legacy table.
    pub fn try_day_date(&self, week: Option<&str>, day: &str) -> Result<NaiveDate, ResolveError> {
        let weekday =
            parse_day_name(day).ok_or_else(|| ResolveError::UnknownDayName(day.to_string()))?;
        match week {
            Some(label) => self.weeks.try_date_in_week(label, weekday),
            None => self.legacy_dates[weekday.num_days_from_monday() as usize].ok_or_else(|| {
                ResolveError::MissingDateContext(format!("'{day}' without a week label"))
            }),
        }
    }

    /// Resolve one boundary of a task.
    ///
    /// # Errors
    ///
    /// Returns the first [`ResolveError`] hit while resolving.
    pub fn try_resolve_boundary(
        &self,
        task: &Task,
        which: Boundary,
    ) -> Result<DateTime<Utc>, ResolveError> {
        let clock = self.clock();
        match TaskSchedule::of(task) {
            TaskSchedule::Time {
                week,
                day,
                start,
                end,
            } => {
                let raw = match which {
                    Boundary::Start => start,
                    Boundary::End => end.ok_or(ResolveError::MissingEndTime)?,
                };
                let time = parse_clock_time(raw)?;
                let date = self.try_day_date(week, day)?;
                Ok(clock.at(date, time))
            }
            TaskSchedule::Day { week, day } => {
                let date = self.try_day_date(week, day)?;
                Ok(match which {
                    Boundary::Start => clock.start_of_day(date),
                    Boundary::End => clock.end_of_day(date),
                })
            }
            TaskSchedule::Week { week } => {
                let label = week.ok_or_else(|| {
                    ResolveError::MissingDateContext("task without week or day".to_string())
                })?;
                let range = self.weeks.try_week_date_range(label)?;
                Ok(match which {
                    Boundary::Start => range.start,
                    Boundary::End => range.end,
                })
            }
        }
    }

    pub fn resolve_boundary(&self, task: &Task, which: Boundary) -> Option<DateTime<Utc>> {
        match self.try_resolve_boundary(task, which) {
            Ok(instant) => Some(instant),
            Err(e) => {
                tracing::debug!(
                    task_id = task.id,
                    boundary = ?which,
                    error = %e,
                    "unresolved boundary"
                );
                None
            }
        }
    }

    pub fn resolve(&self, task: &Task) -> ResolvedTask {
        ResolvedTask {
            level: TaskSchedule::of(task).level(),
            start: self.resolve_boundary(task, Boundary::Start),
            end: self.resolve_boundary(task, Boundary::End),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn resolver() -> TaskTimeResolver {
        TaskTimeResolver::new(&EventConfig::new(2025, -5))
    }

    fn utc(d: u32, h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 11, d, h, m, 0).unwrap()
    }

    #[test]
    fn parses_strict_clock_times() {
        assert_eq!(parse_clock_time("9:05"), Ok(NaiveTime::from_hms_opt(9, 5, 0).unwrap()));
        assert_eq!(parse_clock_time("14:00"), Ok(NaiveTime::from_hms_opt(14, 0, 0).unwrap()));
        assert_eq!(parse_clock_time("0:00"), Ok(NaiveTime::MIN));
        assert_eq!(parse_clock_time("23:59"), Ok(NaiveTime::from_hms_opt(23, 59, 0).unwrap()));
    }

    #[test]
    fn rejects_malformed_clock_times() {
        for raw in [
            "", "14", "ab:cd", "14:5", "14:000", "24:00", "12:60", "2:00 PM", "-1:00", "123:00",
        ] {
            assert_eq!(
                parse_clock_time(raw),
                Err(ResolveError::MalformedTimeString(raw.to_string())),
                "{raw:?}"
            );
        }
    }

    #[test]
    fn time_level_boundaries_use_week_day_and_clock() {
        let task = Task::new(1, "Briefing")
            .with_week("CW45")
            .with_day("Wednesday")
            .with_time("14:00", "15:30");
        let resolved = resolver().resolve(&task);
        assert_eq!(resolved.level, TimeLevel::Time);
        assert_eq!(resolved.start, Some(utc(5, 19, 0)));
        assert_eq!(resolved.end, Some(utc(5, 20, 30)));
    }

    #[test]
    fn time_level_without_end_has_no_end_boundary() {
        let task = Task {
            end: None,
            ..Task::new(1, "Open").with_week("CW45").with_day("Monday").with_time("9:00", "")
        };
        let r = resolver();
        assert_eq!(r.resolve_boundary(&task, Boundary::Start), Some(utc(3, 14, 0)));
        assert_eq!(
            r.try_resolve_boundary(&task, Boundary::End),
            Err(ResolveError::MissingEndTime)
        );
    }

    #[test]
    fn malformed_time_resolves_to_none() {
        let task = Task::new(1, "Broken")
            .with_week("CW45")
            .with_day("Monday")
            .with_time("nine", "10:00");
        let resolved = resolver().resolve(&task);
        assert_eq!(resolved.start, None);
        assert_eq!(resolved.end, Some(utc(3, 15, 0)));
    }

    #[test]
    fn day_level_spans_the_whole_local_day() {
        let task = Task::new(1, "Packing").with_week("CW45").with_day("Friday");
        let resolved = resolver().resolve(&task);
        assert_eq!(resolved.level, TimeLevel::Day);
        assert_eq!(resolved.start, Some(utc(7, 5, 0)));
        assert_eq!(
            resolved.end,
            Some(utc(8, 4, 59) + chrono::Duration::milliseconds(59_999))
        );
    }

    #[test]
    fn week_level_uses_week_range() {
        let task = Task::new(1, "Sponsor outreach").with_week("CW 45");
        let r = resolver();
        let range = r.weeks().week_date_range("CW 45").unwrap();
        assert_eq!(r.resolve_boundary(&task, Boundary::Start), Some(range.start));
        assert_eq!(r.resolve_boundary(&task, Boundary::End), Some(range.end));
    }

    #[test]
    fn unknown_day_is_reported() {
        let task = Task::new(1, "Odd").with_week("CW45").with_day("Caturday");
        assert_eq!(
            resolver().try_resolve_boundary(&task, Boundary::Start),
            Err(ResolveError::UnknownDayName("Caturday".to_string()))
        );
    }

    #[test]
    fn missing_week_falls_back_to_legacy_table() {
        let config = EventConfig::new(2025, -5)
            .with_legacy_date("Thursday", NaiveDate::from_ymd_opt(2025, 11, 13).unwrap());
        let r = TaskTimeResolver::new(&config);

        let task = Task::new(1, "Gala").with_day("Thursday").with_time("19:00", "23:00");
        assert_eq!(r.resolve_boundary(&task, Boundary::Start), Some(utc(14, 0, 0)));

        let task = Task::new(2, "Gala prep").with_day("Thursday");
        assert_eq!(r.resolve_boundary(&task, Boundary::Start), Some(utc(13, 5, 0)));

        let task = Task::new(3, "Unmapped").with_day("Friday");
        assert!(matches!(
            r.try_resolve_boundary(&task, Boundary::Start),
            Err(ResolveError::MissingDateContext(_))
        ));
    }

    #[test]
    fn legacy_table_never_overrides_a_week_label() {
        let config = EventConfig::new(2025, -5)
            .with_legacy_date("Thursday", NaiveDate::from_ymd_opt(2025, 1, 2).unwrap());
        let r = TaskTimeResolver::new(&config);
        let task = Task::new(1, "Gala").with_week("CW46").with_day("Thursday");
        assert_eq!(r.resolve_boundary(&task, Boundary::Start), Some(utc(13, 5, 0)));

        // a malformed label is not "missing"
        let task = Task::new(2, "Gala").with_week("TBD").with_day("Thursday");
        assert_eq!(r.resolve_boundary(&task, Boundary::Start), None);
    }

    #[test]
    fn task_without_any_schedule_is_unresolved() {
        let resolved = resolver().resolve(&Task::new(1, "Someday"));
        assert_eq!(resolved.level, TimeLevel::Week);
        assert!(resolved.is_unresolved());
    }
}
