//! Multi-dimension task filter for list views.

use serde::{Deserialize, Serialize};

use super::matching::matches_person_query;
use crate::schedule::{Person, Task};

/// Separator placed between fields before free-text search.
pub const SEARCH_SEPARATOR: &str = " ";

/// Active filter values. An empty string leaves its dimension unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskFilter {
    pub week: String,
    pub day: String,
    pub location: String,
    pub team: String,
    pub person: String,
    pub search: String,
}

/// Descriptive fields of a task joined for free-text search.
///
/// Order is week, title, notes, location, team, lead, supports 1-5. Missing
/// fields still contribute a separator, and a query may span two adjacent
/// fields ("staff ann" hits team "Staff" followed by lead "Ann").
pub fn searchable_text(task: &Task) -> String {
    let fields = [
        &task.week,
        &task.title,
        &task.notes,
        &task.location,
        &task.team,
        &task.lead,
        &task.support1,
        &task.support2,
        &task.support3,
        &task.support4,
        &task.support5,
    ];
    fields
        .iter()
        .map(|field| field.as_deref().unwrap_or_default())
        .collect::<Vec<_>>()
        .join(SEARCH_SEPARATOR)
        .to_lowercase()
}

fn field_equals(field: &Option<String>, wanted: &str) -> bool {
    field.as_deref().unwrap_or_default() == wanted
}

impl TaskFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_week(mut self, week: impl Into<String>) -> Self {
        self.week = week.into();
        self
    }

    pub fn with_day(mut self, day: impl Into<String>) -> Self {
        self.day = day.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = team.into();
        self
    }

    pub fn with_person(mut self, person: impl Into<String>) -> Self {
        self.person = person.into();
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    fn values(&self) -> [&str; 6] {
        [
            self.week.as_str(),
            self.day.as_str(),
            self.location.as_str(),
            self.team.as_str(),
            self.person.as_str(),
            self.search.as_str(),
        ]
    }

    /// Number of constrained dimensions.
    pub fn active_count(&self) -> usize {
        self.values().iter().filter(|v| !v.is_empty()).count()
    }

    pub fn is_active(&self) -> bool {
        self.active_count() > 0
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether the task passes every active dimension.
    pub fn matches(&self, task: &Task, directory: &[Person]) -> bool {
        if !self.week.is_empty() && !field_equals(&task.week, &self.week) {
            return false;
        }
        if !self.day.is_empty() && !field_equals(&task.day, &self.day) {
            return false;
        }
        if !self.location.is_empty() && !field_equals(&task.location, &self.location) {
            return false;
        }
        if !self.team.is_empty() && !field_equals(&task.team, &self.team) {
            return false;
        }
        if !self.person.is_empty() && !matches_person_query(task, &self.person, directory) {
            return false;
        }
        if !self.search.is_empty()
            && !searchable_text(task).contains(&self.search.to_lowercase())
        {
            return false;
        }
        true
    }

    /// Matching tasks, in input order.
    pub fn apply<'a, I>(&self, tasks: I, directory: &[Person]) -> Vec<&'a Task>
    where
        I: IntoIterator<Item = &'a Task>,
    {
        tasks
            .into_iter()
            .filter(|task| self.matches(task, directory))
            .collect()
    }
}
