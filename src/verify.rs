// File: src/verify.rs
//! Cross-checks emitted recurrence rules by expanding them with the `rrule`
//! crate and comparing every occurrence against direct computation.

use crate::computus::easter;
use crate::error::Error;
use crate::holiday::{OffsetDays, plan_windows};
use crate::recurrence::{month_clauses, until_bound};
use chrono::{Datelike, Duration, NaiveDate};
use rrule::RRuleSet;
use std::collections::BTreeSet;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckReport {
    pub windows: usize,
    pub occurrences: usize,
}

/// Expands every clause of every planned window and asserts the union of
/// occurrences equals the directly computed holiday dates for the covered
/// years. Set equality also pins the fixed-weekday invariant: the computed
/// dates all share the anchor's weekday.
pub fn check(offset: OffsetDays) -> Result<CheckReport, Error> {
    let windows = plan_windows(offset)?;
    let horizon = until_bound().year();
    let mut occurrences = 0;

    for (index, window) in windows.iter().enumerate() {
        let mut expanded = BTreeSet::new();
        for clause in month_clauses(window.start, window.nominal, window.interval) {
            expanded.extend(expand(window.start, &clause.to_rrule())?);
        }

        let mut expected = BTreeSet::new();
        let mut year = window.start.year();
        while year <= horizon {
            expected.insert(easter(year)? - Duration::days(offset.days()));
            year += window.interval as i32;
        }

        if expanded != expected {
            log::warn!(
                "window {index}: expanded {} occurrences, expected {}",
                expanded.len(),
                expected.len()
            );
            return Err(Error::RuleMismatch { index });
        }
        occurrences += expanded.len();
    }

    Ok(CheckReport {
        windows: windows.len(),
        occurrences,
    })
}

/// Expands one RRULE value from a date-only DTSTART.
///
/// The `rrule` crate wants DTSTART and UNTIL as matching UTC datetimes, so
/// the date-only UNTIL emitted in the exchange format is upgraded to the end
/// of that day before parsing.
fn expand(start: NaiveDate, rrule_value: &str) -> Result<Vec<NaiveDate>, Error> {
    let mut rule = rrule_value.to_string();
    if let Some(idx) = rule.find("UNTIL=") {
        let value_start = idx + 6;
        let value_end = rule[value_start..]
            .find(';')
            .map(|i| value_start + i)
            .unwrap_or(rule.len());
        if rule[value_start..value_end].len() == 8 {
            let upgraded = format!("{}T235959Z", &rule[value_start..value_end]);
            rule.replace_range(value_start..value_end, &upgraded);
        }
    }

    let set = format!("DTSTART:{}T000000Z\nRRULE:{}", start.format("%Y%m%d"), rule);
    let set = RRuleSet::from_str(&set).map_err(|e| Error::RuleExpansion {
        rule: rrule_value.to_string(),
        message: e.to_string(),
    })?;

    // UNTIL bounds the iteration; the take() is a backstop against a rule
    // that parses to something unbounded.
    Ok(set
        .into_iter()
        .take(512)
        .map(|d| d.to_utc().date_naive())
        .collect())
}
