// File: src/recurrence.rs
//! Month-scoped recurrence clauses and the day-list compaction walk.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Every emitted rule stops at the end of 2099. The 76-year windows rely on
/// the plain 4-year leap rule, which 2100 breaks, so recurrences are not
/// extended past this horizon.
pub fn until_bound() -> NaiveDate {
    NaiveDate::from_ymd_opt(2099, 12, 31).unwrap()
}

/// A single `RRULE` worth of recurring dates, scoped to one month.
///
/// A clause can carry several day-of-month candidates but only one month, so
/// a 7-day window that straddles a month boundary needs two clauses, combined
/// by logical OR. The shared weekday constraint picks the single real
/// occurrence out of the candidate days each covered year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrenceClause {
    pub month: u32,
    pub days: Vec<u32>,
    pub weekday: Weekday,
    pub interval: u32,
    pub until: NaiveDate,
}

impl RecurrenceClause {
    /// Renders the clause as an RFC 5545 `RRULE` property value.
    pub fn to_rrule(&self) -> String {
        let days: Vec<String> = self.days.iter().map(u32::to_string).collect();
        format!(
            "FREQ=YEARLY;INTERVAL={};BYMONTH={};BYMONTHDAY={};BYDAY={};UNTIL={}",
            self.interval,
            self.month,
            days.join(","),
            byday_code(self.weekday),
            self.until.format("%Y%m%d"),
        )
    }
}

/// RFC 5545 two-letter weekday code.
pub fn byday_code(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "MO",
        Weekday::Tue => "TU",
        Weekday::Wed => "WE",
        Weekday::Thu => "TH",
        Weekday::Fri => "FR",
        Weekday::Sat => "SA",
        Weekday::Sun => "SU",
    }
}

/// Covers the 7-day window starting at `nominal` with the minimum number of
/// month-scoped clauses (at most two).
///
/// Walks forward one day at a time, accumulating day numbers while the walk
/// stays inside the current month and flushing a clause whenever it rolls
/// into the next one. Clauses come back in chronological month order, which
/// callers must preserve. The weekday constraint is taken from `anchor`, the
/// first real occurrence; every later instance shares its weekday.
pub fn month_clauses(anchor: NaiveDate, nominal: NaiveDate, interval: u32) -> Vec<RecurrenceClause> {
    let weekday = anchor.weekday();
    let until = until_bound();
    let mut clauses = Vec::with_capacity(2);
    let mut month = nominal.month();
    let mut days = vec![nominal.day()];

    for i in 1..7 {
        let next = nominal + Duration::days(i);
        if next.month() == month {
            days.push(next.day());
        } else {
            clauses.push(RecurrenceClause {
                month,
                days: std::mem::replace(&mut days, vec![next.day()]),
                weekday,
                interval,
                until,
            });
            month = next.month();
        }
    }
    clauses.push(RecurrenceClause {
        month,
        days,
        weekday,
        interval,
        until,
    });
    clauses
}
