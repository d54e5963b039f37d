// File: src/holiday.rs
//! Offset application: turns "N days before Easter" into a plan of
//! recurrence windows covering the whole cycle table.

use crate::computus::{CYCLE_RULES, easter};
use crate::error::Error;
use chrono::{Datelike, Duration, NaiveDate};
use std::fmt;

pub const MAX_OFFSET_DAYS: i64 = 80;

/// Number of days the holiday precedes Easter Sunday. Validated on
/// construction; everything downstream can assume the bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetDays(i64);

impl OffsetDays {
    pub fn new(days: i64) -> Result<Self, Error> {
        if !(0..=MAX_OFFSET_DAYS).contains(&days) {
            return Err(Error::OffsetOutOfRange { offset: days });
        }
        Ok(Self(days))
    }

    pub fn days(self) -> i64 {
        self.0
    }

    fn duration(self) -> Duration {
        Duration::days(self.0)
    }
}

impl fmt::Display for OffsetDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One recurrence window: the first real occurrence (`start`), the nominal
/// pre-correction date in the same year (`nominal`), and the repeat interval
/// in years (19, or 76 when the window sits in January/February).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolidayWindow {
    pub start: NaiveDate,
    pub nominal: NaiveDate,
    pub interval: u32,
}

/// The four start years partitioning a 19-year cycle slot into 76-year
/// sub-sequences. 76 = 4 x 19 steps return to the same position in the
/// 4-year leap cycle, so all years within one sub-sequence share their
/// anchor's leap phase; across the four anchors every phase occurs once.
pub fn leap_phase_windows(first_year: i32) -> [i32; 4] {
    [first_year, first_year + 19, first_year + 38, first_year + 57]
}

/// Plans the recurrence windows for a holiday `offset` days before Easter.
///
/// Slots whose offset date stays on or after March 1 keep a fixed month/day
/// across their whole 19-year cycle (the day-count back from March 1 never
/// involves February 29), so one 19-year window suffices. Slots pushed into
/// January or February shift by a day depending on leap phase and are split
/// into four 76-year windows instead, each re-anchored through the Easter
/// table for its own start year.
///
/// The plain 4-year leap rule fails at century years not divisible by 400
/// (1800, 1900, 2100, 2200). A 76-year window crossing such a boundary is
/// not validated here; with rules bounded to 2099 none currently does.
pub fn plan_windows(offset: OffsetDays) -> Result<Vec<HolidayWindow>, Error> {
    let mut windows = Vec::with_capacity(CYCLE_RULES.len());
    for (slot, rule) in CYCLE_RULES.iter().enumerate() {
        let nominal = NaiveDate::from_ymd_opt(rule.first.year(), rule.month, rule.day).unwrap()
            - offset.duration();
        if nominal.month() >= 3 {
            log::debug!("slot {slot}: offset date {nominal} is leap-safe, one 19-year window");
            windows.push(HolidayWindow {
                start: rule.first - offset.duration(),
                nominal,
                interval: 19,
            });
        } else {
            log::debug!("slot {slot}: offset date {nominal} is leap-sensitive, four 76-year windows");
            for year in leap_phase_windows(rule.first.year()) {
                let start = easter(year)? - offset.duration();
                let nominal = NaiveDate::from_ymd_opt(year, rule.month, rule.day).unwrap()
                    - offset.duration();
                windows.push(HolidayWindow {
                    start,
                    nominal,
                    interval: 76,
                });
            }
        }
    }
    Ok(windows)
}
