//! Time abstraction level of a task.
//!
//! A task is known to the week, to the day, or to the minute. [`TaskSchedule`]
//! captures which, together with the fields that level needs, so resolution
//! code matches on a variant instead of re-checking optional fields.

use serde::{Deserialize, Serialize};

use super::record::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeLevel {
    /// Day plus start time (and usually an end time)
    Time,
    /// Day without a start time
    Day,
    /// Week label only, or nothing at all
    Week,
}

impl TimeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::Day => "day",
            Self::Week => "week",
        }
    }
}

/// The schedule fields of a task, shaped by its level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskSchedule<'a> {
    Time {
        week: Option<&'a str>,
        day: &'a str,
        start: &'a str,
        end: Option<&'a str>,
    },
    Day {
        week: Option<&'a str>,
        day: &'a str,
    },
    Week {
        week: Option<&'a str>,
    },
}

impl<'a> TaskSchedule<'a> {
    pub fn of(task: &'a Task) -> Self {
        match (task.day(), task.start()) {
            (Some(day), Some(start)) => Self::Time {
                week: task.week(),
                day,
                start,
                end: task.end(),
            },
            (Some(day), None) => Self::Day {
                week: task.week(),
                day,
            },
            // a start time without a day has nothing to anchor to
            (None, _) => Self::Week { week: task.week() },
        }
    }

    pub fn level(&self) -> TimeLevel {
        match self {
            Self::Time { .. } => TimeLevel::Time,
            Self::Day { .. } => TimeLevel::Day,
            Self::Week { .. } => TimeLevel::Week,
        }
    }

    pub fn week(&self) -> Option<&'a str> {
        match *self {
            Self::Time { week, .. } | Self::Day { week, .. } | Self::Week { week } => week,
        }
    }
}

pub fn classify_level(task: &Task) -> TimeLevel {
    TaskSchedule::of(task).level()
}
