//! Short human-readable date and time strings for list views.
//!
//! Every formatter returns an empty string when its input cannot be resolved,
//! so callers can print the result unconditionally.

use chrono::{DateTime, Utc};

use super::clock::EventClock;
use super::week::{parse_day_name, WeekResolver};

/// "Nov 13", in event-local time.
pub fn format_date_short(clock: &EventClock, instant: DateTime<Utc>) -> String {
    clock.local(instant).format("%b %-d").to_string()
}

/// "Oct 27 – Nov 2" for a week label.
pub fn format_week_range(weeks: &WeekResolver, label: &str) -> String {
    match weeks.week_date_range(label) {
        Some(range) => {
            let clock = weeks.clock();
            format!(
                "{} – {}",
                format_date_short(&clock, range.start),
                format_date_short(&clock, range.end)
            )
        }
        None => String::new(),
    }
}

/// "Thu, Nov 13" for a day within a labelled week.
pub fn format_day_date(weeks: &WeekResolver, label: &str, day_name: &str) -> String {
    let Some(weekday) = parse_day_name(day_name) else {
        return String::new();
    };
    match weeks.try_date_in_week(label, weekday) {
        Ok(date) => date.format("%a, %b %-d").to_string(),
        Err(_) => String::new(),
    }
}

/// Render a 24-hour "H:MM" string on the 12-hour clock ("14:00" → "2:00 PM").
///
/// Strings without a colon or with a non-numeric hour come back unchanged.
pub fn format_time_12h(time: &str) -> String {
    if time.is_empty() {
        return String::new();
    }
    let Some((hour, minutes)) = time.split_once(':') else {
        return time.to_string();
    };
    let Ok(hour) = hour.trim().parse::<u32>() else {
        return time.to_string();
    };
    let minutes = minutes.split(':').next().unwrap_or_default();

    let period = if hour >= 12 { "PM" } else { "AM" };
    let display_hour = match hour {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };
    format!("{display_hour}:{minutes} {period}")
}
