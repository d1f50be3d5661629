//! Task and person records as handed over by the ingestion layer.

use serde::{Deserialize, Serialize};

/// A row of the event schedule.
///
/// Text fields arrive trimmed with times already on the 24-hour clock. An
/// empty string is treated exactly like a missing value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    pub id: u32,
    pub week: Option<String>,
    pub day: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub location: Option<String>,
    #[serde(alias = "task")]
    pub title: Option<String>,
    pub team: Option<String>,
    pub lead: Option<String>,
    pub support1: Option<String>,
    pub support2: Option<String>,
    pub support3: Option<String>,
    pub support4: Option<String>,
    pub support5: Option<String>,
    pub notes: Option<String>,
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl Task {
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn week(&self) -> Option<&str> {
        present(&self.week)
    }

    pub fn day(&self) -> Option<&str> {
        present(&self.day)
    }

    pub fn start(&self) -> Option<&str> {
        present(&self.start)
    }

    pub fn end(&self) -> Option<&str> {
        present(&self.end)
    }

    pub fn title(&self) -> Option<&str> {
        present(&self.title)
    }

    /// Lead followed by the five support slots, raw.
    pub fn assignment_slots(&self) -> [&Option<String>; 6] {
        [
            &self.lead,
            &self.support1,
            &self.support2,
            &self.support3,
            &self.support4,
            &self.support5,
        ]
    }

    /// Non-empty assignment slots, lead first.
    pub fn assignees(&self) -> impl Iterator<Item = &str> {
        self.assignment_slots().into_iter().filter_map(present)
    }

    pub fn with_week(mut self, week: impl Into<String>) -> Self {
        self.week = Some(week.into());
        self
    }

    pub fn with_day(mut self, day: impl Into<String>) -> Self {
        self.day = Some(day.into());
        self
    }

    pub fn with_time(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self.end = Some(end.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    pub fn with_lead(mut self, lead: impl Into<String>) -> Self {
        self.lead = Some(lead.into());
        self
    }

    /// Fill the first empty support slot. A sixth support is ignored.
    pub fn with_support(mut self, name: impl Into<String>) -> Self {
        let slot = [
            &mut self.support1,
            &mut self.support2,
            &mut self.support3,
            &mut self.support4,
            &mut self.support5,
        ]
        .into_iter()
        .find(|slot| slot.is_none());
        if let Some(slot) = slot {
            *slot = Some(name.into());
        }
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// An entry of the people directory. Assignment matching reads `name` and
/// `team`; directory search also reads `role` and `contact_for`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Role")]
    pub role: String,
    #[serde(alias = "Phone")]
    pub phone: String,
    #[serde(alias = "Email")]
    pub email: String,
    #[serde(alias = "Team")]
    pub team: String,
    #[serde(alias = "Contact for?")]
    pub contact_for: String,
    #[serde(alias = "WhatsApp")]
    pub whatsapp: String,
}

impl Person {
    pub fn new(name: impl Into<String>, team: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            team: team.into(),
            ..Self::default()
        }
    }
}

/// An entry of the locations sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    #[serde(alias = "Place")]
    pub place: String,
    #[serde(alias = "Instructions/Notes")]
    pub notes: String,
}

impl Location {
    pub fn new(place: impl Into<String>, notes: impl Into<String>) -> Self {
        Self {
            place: place.into(),
            notes: notes.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_strings_count_as_absent() {
        let task = Task {
            week: Some("CW45".to_string()),
            day: Some("  ".to_string()),
            start: Some(String::new()),
            ..Task::default()
        };
        assert_eq!(task.week(), Some("CW45"));
        assert_eq!(task.day(), None);
        assert_eq!(task.start(), None);
    }

    #[test]
    fn deserializes_ingested_row() {
        let json = r#"{
            "id": 7,
            "week": "CW 45",
            "day": "Wednesday",
            "start": "14:00",
            "end": "15:30",
            "location": "Main Hall",
            "task": "Registration desk",
            "team": "Staff",
            "lead": "Ann",
            "support1": "Bob",
            "support2": "",
            "notes": ""
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, 7);
        assert_eq!(task.title(), Some("Registration desk"));
        assert_eq!(task.assignees().collect::<Vec<_>>(), vec!["Ann", "Bob"]);
        assert_eq!(task.support5, None);
    }

    #[test]
    fn with_support_fills_slots_in_order() {
        let task = Task::new(1, "Setup")
            .with_support("A")
            .with_support("B")
            .with_support("C")
            .with_support("D")
            .with_support("E")
            .with_support("F");
        assert_eq!(task.support1.as_deref(), Some("A"));
        assert_eq!(task.support5.as_deref(), Some("E"));
        assert_eq!(task.assignees().count(), 5);
    }

    #[test]
    fn person_accepts_sheet_headers() {
        let json = r#"{"Name": "Alice Smith", "Team": "Logistics", "Contact for?": "Parking"}"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert_eq!(
            person,
            Person {
                contact_for: "Parking".to_string(),
                ..Person::new("Alice Smith", "Logistics")
            }
        );
    }

    #[test]
    fn location_accepts_sheet_headers() {
        let json = r#"{"Place": "Dock B", "Instructions/Notes": "Use the side gate"}"#;
        let location: Location = serde_json::from_str(json).unwrap();
        assert_eq!(location, Location::new("Dock B", "Use the side gate"));
    }
}
