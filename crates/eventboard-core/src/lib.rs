//! # Eventboard Core Library
//!
//! This library provides the scheduling logic behind the Eventboard task
//! board for conference and event crews. Tasks arrive from a spreadsheet at
//! one of three granularities (a whole week, a single day, or an exact time
//! slot) and are resolved to absolute instants so they can be compared and
//! bucketed against the passage of time.
//!
//! ## Architecture
//!
//! - **Calendar**: ISO-8601 week arithmetic and event-local time conversion
//! - **Schedule**: task/person records and boundary resolution per level
//! - **Classify**: a pure NOW / NEXT / UPCOMING / FUTURE / PAST classifier
//!   that takes `now` as an argument; re-running it is the caller's business
//! - **Assignment**: person, team and "everyone" matching plus list filters
//! - **Directory**: people and locations search, key-contact grouping
//!
//! ## Key Components
//!
//! - [`WeekResolver`]: week label → Monday / week range / day date
//! - [`TaskTimeResolver`]: task → start and end instants
//! - [`TemporalClassifier`]: tasks + now → ordered [`TimeBuckets`]
//! - [`TaskFilter`]: multi-dimension list filter
//! - [`EventConfig`]: event year, timezone offset, legacy day table

pub mod assignment;
pub mod calendar;
pub mod classify;
pub mod config;
pub mod directory;
pub mod error;
pub mod schedule;

pub use assignment::{
    filter_user_tasks, is_assigned_to_user, matches_person_query, FilterOptions, TaskFilter,
};
pub use calendar::{EventClock, WeekRange, WeekResolver};
pub use classify::{Bucket, BucketCounts, TemporalClassifier, TimeBuckets};
pub use config::EventConfig;
pub use directory::{group_by_contact_for, search_locations, search_people, ContactGroups};
pub use error::{ConfigError, CoreError, ResolveError};
pub use schedule::{
    classify_level, Boundary, Location, Person, ResolvedTask, Task, TaskTimeResolver, TimeLevel,
};
