//! Conversion between event-local wall-clock time and UTC instants.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

use crate::config::EventConfig;

/// Event-local clock defined by an offset magnitude.
///
/// Local time is `UTC - offset_hours`. All instants handed out by the
/// resolvers come from here, so the same shift is applied everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventClock {
    offset_hours: u32,
}

impl EventClock {
    pub fn new(offset_hours: u32) -> Self {
        Self { offset_hours }
    }

    pub fn from_config(config: &EventConfig) -> Self {
        Self::new(config.offset_hours())
    }

    pub fn offset_hours(&self) -> u32 {
        self.offset_hours
    }

    fn shift(&self) -> Duration {
        Duration::hours(i64::from(self.offset_hours))
    }

    /// Instant at which the event-local wall clock reads `local`.
    pub fn to_instant(&self, local: NaiveDateTime) -> DateTime<Utc> {
        Utc.from_utc_datetime(&(local + self.shift()))
    }

    /// Event-local wall-clock reading at `instant`.
    pub fn local(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        instant.naive_utc() - self.shift()
    }

    /// Event-local calendar date at `instant`.
    pub fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        self.local(instant).date()
    }

    pub fn at(&self, date: NaiveDate, time: NaiveTime) -> DateTime<Utc> {
        self.to_instant(date.and_time(time))
    }

    /// Local midnight opening `date`.
    pub fn start_of_day(&self, date: NaiveDate) -> DateTime<Utc> {
        self.at(date, NaiveTime::MIN)
    }

    /// Local 23:59:59.999 closing `date`.
    pub fn end_of_day(&self, date: NaiveDate) -> DateTime<Utc> {
        self.start_of_day(date) + Duration::days(1) - Duration::milliseconds(1)
    }

    pub fn same_local_date(&self, a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
        self.local_date(a) == self.local_date(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn local_midnight_is_shifted_by_offset() {
        let clock = EventClock::new(5);
        let midnight = clock.start_of_day(date(2025, 11, 5));
        assert_eq!(midnight, Utc.with_ymd_and_hms(2025, 11, 5, 5, 0, 0).unwrap());
        assert_eq!(clock.local_date(midnight), date(2025, 11, 5));
    }

    #[test]
    fn end_of_day_is_one_millisecond_before_next_midnight() {
        let clock = EventClock::new(5);
        let end = clock.end_of_day(date(2025, 11, 5));
        let next = clock.start_of_day(date(2025, 11, 6));
        assert_eq!(next - end, Duration::milliseconds(1));
        assert_eq!(clock.local_date(end), date(2025, 11, 5));
    }

    #[test]
    fn late_evening_local_is_next_day_in_utc() {
        let clock = EventClock::new(5);
        // 02:00 UTC on the 6th is 21:00 local on the 5th
        let instant = Utc.with_ymd_and_hms(2025, 11, 6, 2, 0, 0).unwrap();
        assert_eq!(clock.local_date(instant), date(2025, 11, 5));
        assert!(clock.same_local_date(instant, clock.start_of_day(date(2025, 11, 5))));
    }
}
