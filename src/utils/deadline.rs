use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::config::Config;

/// How close to the deadline a reservation window turns urgent.
pub const URGENT_WITHIN_SECS: i64 = 86_400;

/// The last instant of `until` (23:59:59.999) in the display calendar.
pub fn reservation_deadline(until: NaiveDate) -> Option<DateTime<Utc>> {
    let end_of_day = until.and_hms_milli_opt(23, 59, 59, 999)?;
    Config::TIME_ZONE
        .from_local_datetime(&end_of_day)
        .earliest()
        .map(|deadline| deadline.with_timezone(&Utc))
}

/// Whole seconds left until the deadline, negative once it has passed.
pub fn seconds_remaining(until: NaiveDate, now: DateTime<Utc>) -> Option<i64> {
    reservation_deadline(until).map(|deadline| (deadline - now).num_seconds())
}

/// True once less than a day remains before the window closes.
pub fn is_urgent(until: NaiveDate, now: DateTime<Utc>) -> bool {
    seconds_remaining(until, now).is_some_and(|secs| secs < URGENT_WITHIN_SECS)
}
