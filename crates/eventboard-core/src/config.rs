//! TOML-based event configuration.
//!
//! Holds the handful of static settings the resolvers need:
//! - the event year, combined with week labels to produce dates
//! - the timezone offset of the event venue, in hours
//! - an optional legacy `weekday → date` table for tasks without a week label
//!
//! Reading the file from disk is left to the caller; this module only parses
//! and validates the TOML text.

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::calendar::parse_day_name;
use crate::error::ConfigError;

/// Largest accepted offset magnitude, in hours.
pub const MAX_OFFSET_HOURS: u32 = 14;

/// Event configuration.
///
/// ```toml
/// event_year = 2025
/// timezone_offset = -5
///
/// [legacy_dates]
/// Monday = "2025-11-03"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventConfig {
    #[serde(default = "default_event_year")]
    pub event_year: i32,
    /// Hours from UTC. Only the magnitude is used; see [`EventConfig::offset_hours`].
    #[serde(default = "default_timezone_offset")]
    pub timezone_offset: i32,
    /// Weekday name → calendar date, consulted only when a task has no week.
    #[serde(default)]
    pub legacy_dates: BTreeMap<String, NaiveDate>,
}

fn default_event_year() -> i32 {
    2026
}
fn default_timezone_offset() -> i32 {
    -5
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            event_year: default_event_year(),
            timezone_offset: default_timezone_offset(),
            legacy_dates: BTreeMap::new(),
        }
    }
}

impl EventConfig {
    pub fn new(event_year: i32, timezone_offset: i32) -> Self {
        Self {
            event_year,
            timezone_offset,
            legacy_dates: BTreeMap::new(),
        }
    }

    /// Add an entry to the legacy day table.
    pub fn with_legacy_date(mut self, day: impl Into<String>, date: NaiveDate) -> Self {
        self.legacy_dates.insert(day.into(), date);
        self
    }

    /// Offset magnitude in hours.
    ///
    /// Local wall-clock time is always taken to be `UTC - offset_hours`, i.e.
    /// the offset is read as west of UTC whatever its sign. This is right for
    /// the Americas and wrong for venues east of Greenwich.
    pub fn offset_hours(&self) -> u32 {
        self.timezone_offset.unsigned_abs()
    }

    /// Legacy date for a weekday, if the table carries one.
    ///
    /// Table keys are matched the same way task day names are.
    pub fn legacy_date(&self, weekday: Weekday) -> Option<NaiveDate> {
        self.legacy_dates
            .iter()
            .find(|(name, _)| parse_day_name(name) == Some(weekday))
            .map(|(_, date)| *date)
    }

    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML for this struct or if a
    /// value fails [`validate`](Self::validate).
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let cfg: EventConfig = toml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Serialize to pretty TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first bad key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=9999).contains(&self.event_year) {
            return Err(ConfigError::InvalidValue {
                key: "event_year".to_string(),
                message: format!("{} is not a four-digit year", self.event_year),
            });
        }
        if self.offset_hours() > MAX_OFFSET_HOURS {
            return Err(ConfigError::InvalidValue {
                key: "timezone_offset".to_string(),
                message: format!(
                    "{} hours exceeds the maximum of {MAX_OFFSET_HOURS}",
                    self.timezone_offset
                ),
            });
        }
        if let Some(name) = self
            .legacy_dates
            .keys()
            .find(|name| parse_day_name(name).is_none())
        {
            return Err(ConfigError::InvalidValue {
                key: format!("legacy_dates.{name}"),
                message: "not a weekday name".to_string(),
            });
        }
        Ok(())
    }
}
