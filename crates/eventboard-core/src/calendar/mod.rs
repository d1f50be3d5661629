//! Calendar arithmetic: ISO weeks, event-local time, display formatting.

pub mod clock;
pub mod format;
pub mod week;

pub use clock::EventClock;
pub use format::{format_date_short, format_day_date, format_time_12h, format_week_range};
pub use week::{
    monday_of_iso_week, parse_day_name, parse_week_label, WeekRange, WeekResolver, DAY_NAMES,
};
