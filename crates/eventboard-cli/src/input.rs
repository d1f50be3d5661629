//! Input files shared by the subcommands.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use clap::Args;
use eventboard_core::error::Result;
use eventboard_core::{EventConfig, Location, Person, Task};

/// Task sheet, people directory and event config.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// JSON array of task records
    #[arg(long)]
    pub tasks: PathBuf,
    /// JSON array of people (used for team assignment)
    #[arg(long)]
    pub people: Option<PathBuf>,
    /// TOML event config (default: event year 2026, UTC-5)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Everything one pass over the board needs.
pub struct Board {
    pub tasks: Vec<Task>,
    pub people: Vec<Person>,
    pub config: EventConfig,
}

impl SourceArgs {
    pub fn load(&self) -> Result<Board> {
        let tasks = load_tasks(&self.tasks)?;
        let people = match &self.people {
            Some(path) => load_people(path)?,
            None => Vec::new(),
        };
        let config = load_config(self.config.as_deref())?;
        tracing::debug!(
            tasks = tasks.len(),
            people = people.len(),
            event_year = config.event_year,
            "loaded board"
        );
        Ok(Board {
            tasks,
            people,
            config,
        })
    }
}

pub fn load_tasks(path: &Path) -> Result<Vec<Task>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn load_people(path: &Path) -> Result<Vec<Person>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn load_locations(path: &Path) -> Result<Vec<Location>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn load_config(path: Option<&Path>) -> Result<EventConfig> {
    match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            Ok(EventConfig::from_toml_str(&content)?)
        }
        None => Ok(EventConfig::default()),
    }
}

/// `--now` override, or the system clock.
pub fn parse_now(raw: Option<&str>) -> std::result::Result<DateTime<Utc>, chrono::ParseError> {
    match raw {
        Some(raw) => Ok(DateTime::parse_from_rfc3339(raw)?.with_timezone(&Utc)),
        None => Ok(Utc::now()),
    }
}
