//! Distinct filter values offered by the filter bar.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::matching::{unique_names, BLOCKER_PLACEHOLDER};
use crate::calendar::{parse_day_name, parse_week_label};
use crate::schedule::Task;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Ordered by week number; unparseable labels sort as week 0.
    pub weeks: Vec<String>,
    /// Monday first; unknown names ahead of Monday.
    pub days: Vec<String>,
    pub locations: Vec<String>,
    pub teams: Vec<String>,
    pub people: Vec<String>,
}

fn distinct<'a>(values: impl Iterator<Item = &'a Option<String>>) -> BTreeSet<String> {
    values
        .filter_map(|v| v.as_deref())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

fn not_blocker(value: &String) -> bool {
    !value.eq_ignore_ascii_case(BLOCKER_PLACEHOLDER)
}

impl FilterOptions {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let mut weeks: Vec<String> = distinct(tasks.iter().map(|t| &t.week)).into_iter().collect();
        weeks.sort_by_key(|w| parse_week_label(w).unwrap_or(0));

        let mut days: Vec<String> = distinct(tasks.iter().map(|t| &t.day)).into_iter().collect();
        days.sort_by_key(|d| parse_day_name(d).map(|wd| wd.num_days_from_monday()));

        let locations = distinct(tasks.iter().map(|t| &t.location)).into_iter().collect();
        let teams = distinct(tasks.iter().map(|t| &t.team))
            .into_iter()
            .filter(not_blocker)
            .collect();
        let people = unique_names(tasks);

        Self {
            weeks,
            days,
            locations,
            teams,
            people,
        }
    }
}
