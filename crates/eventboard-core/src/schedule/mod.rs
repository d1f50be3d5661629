//! Schedule records and their resolution to absolute time.
//!
//! - [`Task`] / [`Person`] / [`Location`]: records handed over by the ingestion layer
//! - [`TaskSchedule`]: the level-tagged view of a task's schedule fields
//! - [`TaskTimeResolver`]: start/end boundaries as UTC instants

mod level;
mod record;
mod resolver;

pub use level::{classify_level, TaskSchedule, TimeLevel};
pub use record::{Location, Person, Task};
pub use resolver::{parse_clock_time, Boundary, ResolvedTask, TaskTimeResolver};
