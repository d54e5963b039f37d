// File: tests/easter_dates.rs
use chrono::{Datelike, NaiveDate, Weekday};
use paschal::computus::easter;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn historical_easter_dates_across_the_century() {
    // Includes the calendar extremes: 1913 is the earliest possible Easter
    // (March 23 for this table's span) and 1943 the latest (April 25).
    let expected = [
        (1913, 3, 23),
        (1934, 4, 1),
        (1943, 4, 25),
        (1948, 3, 28),
        (1954, 4, 18),
        (1964, 3, 29),
        (1999, 4, 4),
        (2000, 4, 23),
        (2008, 3, 23),
        (2011, 4, 24),
        (2018, 4, 1),
        (2029, 4, 1),
        (2038, 4, 25),
    ];
    for (year, month, day) in expected {
        assert_eq!(easter(year).unwrap(), date(year, month, day), "easter({year})");
    }
}

#[test]
fn every_computable_easter_is_a_sunday_in_season() {
    for year in 1901..=2199 {
        if let Ok(d) = easter(year) {
            assert_eq!(d.weekday(), Weekday::Sun, "easter({year})");
            assert!(
                d >= date(year, 3, 22) && d <= date(year, 4, 25),
                "easter({year}) = {d} is out of season"
            );
        }
    }
}

#[test]
fn nineteen_year_periodicity_holds_within_validity() {
    // Same cycle slot, 19 years apart: the nominal date matches, so the two
    // Easters differ by at most the weekday correction spread.
    for year in 1901..=1919 {
        let a = easter(year).unwrap();
        let b = easter(year + 19).unwrap();
        // Nominal anchors are equal 19 years apart; only the weekday
        // correction (0-6 days) and the leap-day shift separate the two.
        let a_doy = i64::from(a.ordinal());
        let b_doy = i64::from(b.ordinal());
        assert!((a_doy - b_doy).abs() <= 7, "{year} vs {}", year + 19);
    }
}
