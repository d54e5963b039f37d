// File: src/computus.rs
//! Tabulated Gregorian Easter computation for 1901-2199.
//!
//! Easter's calendar position repeats with a 19-year period (the Metonic
//! cycle), so one table row per residue class of `(year - 1901) mod 19` is
//! enough to pin down a nominal month/day for every covered year. The nominal
//! date deliberately sits a few days before the true date; snapping forward to
//! the next Sunday lands on Easter exactly.

use crate::error::Error;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use once_cell::sync::Lazy;

/// One slot of the 19-year Easter cycle.
///
/// `first` is the earliest year the slot's pattern holds (it is also the
/// actual Easter date of that year). `last` is the latest tabulated year
/// before the pattern would have to be re-derived; three slots break early
/// (2143, 2146, 2173) because century corrections disturb the cycle, the
/// rest run to the 2180s-2199.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleRule {
    pub first: NaiveDate,
    pub last: NaiveDate,
    pub month: u32,
    pub day: u32,
    pub weekday: Weekday,
}

/// First year covered by the table; slot 0 of the cycle.
pub const BASE_YEAR: i32 = 1901;

/// Length of the Metonic cycle in years.
pub const CYCLE_YEARS: i32 = 19;

pub static CYCLE_RULES: Lazy<[CycleRule; 19]> = Lazy::new(|| {
    let d = |y: i32, m: u32, day: u32| NaiveDate::from_ymd_opt(y, m, day).unwrap();
    let rule = |first: NaiveDate, last: NaiveDate, month: u32, day: u32| CycleRule {
        first,
        last,
        month,
        day,
        weekday: Weekday::Sun,
    };
    [
        rule(d(1901, 4, 7), d(2186, 4, 9), 4, 4),
        rule(d(1902, 3, 30), d(2187, 3, 25), 3, 24),
        rule(d(1903, 4, 12), d(2188, 4, 13), 4, 12),
        rule(d(1904, 4, 3), d(2189, 4, 5), 4, 1),
        rule(d(1905, 4, 23), d(2190, 4, 25), 4, 19),
        rule(d(1906, 4, 15), d(2191, 4, 10), 4, 9),
        rule(d(1907, 3, 31), d(2173, 4, 4), 3, 29),
        rule(d(1908, 4, 19), d(2193, 4, 21), 4, 17),
        rule(d(1909, 4, 11), d(2194, 4, 6), 4, 6),
        rule(d(1910, 3, 27), d(2195, 3, 29), 3, 26),
        rule(d(1911, 4, 16), d(2196, 4, 17), 4, 14),
        rule(d(1912, 4, 7), d(2197, 4, 9), 4, 3),
        rule(d(1913, 3, 23), d(2198, 3, 25), 3, 23),
        rule(d(1914, 4, 12), d(2199, 4, 14), 4, 11),
        rule(d(1915, 4, 4), d(2143, 3, 31), 3, 31),
        rule(d(1916, 4, 23), d(2182, 4, 21), 4, 18),
        rule(d(1917, 4, 8), d(2183, 4, 13), 4, 8),
        rule(d(1918, 3, 31), d(2146, 4, 3), 3, 28),
        rule(d(1919, 4, 20), d(2185, 4, 17), 4, 15),
    ]
});

/// Index of `year` within the 19-year cycle.
pub fn cycle_slot(year: i32) -> usize {
    (year - BASE_YEAR).rem_euclid(CYCLE_YEARS) as usize
}

/// Returns the Gregorian date of Easter Sunday for `year`.
///
/// Fails with [`Error::YearOutOfRange`] when `year` falls outside the
/// validity window of its cycle slot; the table cannot produce a correct
/// answer there and refuses instead of silently drifting.
pub fn easter(year: i32) -> Result<NaiveDate, Error> {
    let rule = &CYCLE_RULES[cycle_slot(year)];
    if year < rule.first.year() || year > rule.last.year() {
        return Err(Error::YearOutOfRange { year });
    }

    // The nominal date never sits past the true date, so the weekday
    // correction only ever moves forward (0-6 days).
    let base = NaiveDate::from_ymd_opt(year, rule.month, rule.day).unwrap();
    let delta = (rule.weekday.num_days_from_monday() + 7 - base.weekday().num_days_from_monday()) % 7;
    Ok(base + Duration::days(i64::from(delta)))
}
