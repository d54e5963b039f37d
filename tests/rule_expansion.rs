// File: tests/rule_expansion.rs
//! Expands the emitted recurrence rules with the `rrule` crate and checks
//! concrete holiday dates against the published civil calendar.

use chrono::{Datelike, NaiveDate};
use paschal::holiday::{OffsetDays, plan_windows};
use paschal::recurrence::month_clauses;
use paschal::verify;
use rrule::RRuleSet;
use std::str::FromStr;

#[test]
fn every_offset_regime_survives_full_verification() {
    // 199 = one occurrence per covered year per cycle slot through 2099; the
    // 76-year split partitions years, so the total is offset-independent.
    for offset in [0, 2, 7, 46, 47, 80] {
        let report = verify::check(OffsetDays::new(offset).unwrap()).unwrap();
        assert_eq!(report.occurrences, 199, "offset {offset}");
    }
}

fn all_occurrences(offset: OffsetDays) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    for window in plan_windows(offset).unwrap() {
        for clause in month_clauses(window.start, window.nominal, window.interval) {
            // The rrule parser wants DTSTART and UNTIL as matching UTC
            // datetimes, so upgrade the date-only UNTIL before parsing.
            let rule = clause
                .to_rrule()
                .replace("UNTIL=20991231", "UNTIL=20991231T235959Z");
            let set = format!(
                "DTSTART:{}T000000Z\nRRULE:{}",
                window.start.format("%Y%m%d"),
                rule
            );
            let set = RRuleSet::from_str(&set).unwrap();
            dates.extend(set.into_iter().take(512).map(|d| d.to_utc().date_naive()));
        }
    }
    dates.sort_unstable();
    dates.dedup();
    dates
}

#[test]
fn ash_wednesday_lands_on_the_published_dates() {
    let dates = all_occurrences(OffsetDays::new(46).unwrap());
    for (y, m, d) in [(2024, 2, 14), (2025, 3, 5), (2026, 2, 18)] {
        let expected = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        assert!(dates.contains(&expected), "Ash Wednesday {y} != {expected}");
    }
    // Exactly one occurrence per year.
    let mut years: Vec<i32> = dates.iter().map(|d| d.year()).collect();
    years.dedup();
    assert_eq!(years.len(), dates.len());
}

#[test]
fn good_friday_precedes_easter_by_two_days() {
    let dates = all_occurrences(OffsetDays::new(2).unwrap());
    for (y, m, d) in [(2024, 3, 29), (2025, 4, 18), (2026, 4, 3)] {
        let expected = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        assert!(dates.contains(&expected), "Good Friday {y} != {expected}");
    }
}

#[test]
fn occurrences_cover_every_year_through_2099() {
    let dates = all_occurrences(OffsetDays::new(46).unwrap());
    let years: Vec<i32> = dates.iter().map(|d| d.year()).collect();
    for year in 1901..=2099 {
        assert!(years.contains(&year), "no occurrence in {year}");
    }
    assert!(dates.iter().all(|d| d.year() <= 2099));
}
