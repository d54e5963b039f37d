// File: src/ics.rs
//! Assembles holiday recurrence windows into iCalendar VEVENT blocks.

use crate::config::Config;
use crate::error::Error;
use crate::holiday::{HolidayWindow, OffsetDays, plan_windows};
use crate::recurrence::month_clauses;
use icalendar::{Component, Event, Property};

/// Builds one VEVENT for a recurrence window.
///
/// `index` is the window's position in emission order; consumers key on the
/// positional UID, so callers must number windows sequentially. The DTSTAMP
/// is derived from the anchor date instead of the wall clock so that
/// repeated runs stay byte-identical.
pub fn holiday_event(
    window: &HolidayWindow,
    name: &str,
    offset: OffsetDays,
    index: usize,
    config: &Config,
) -> Event {
    let mut event = Event::new();
    event.add_property("CATEGORIES", &config.category);
    event.add_property("CLASS", &config.class);
    let stamp = format!("{}T000000Z", window.start.format("%Y%m%d"));
    event.add_property("DTSTAMP", &stamp);

    let start = window.start.format("%Y%m%d").to_string();
    let mut dtstart = Property::new("DTSTART", &start);
    dtstart.add_parameter("VALUE", "DATE");
    event.append_property(dtstart);

    for clause in month_clauses(window.start, window.nominal, window.interval) {
        let rule = clause.to_rrule();
        event.append_multi_property(Property::new("RRULE", &rule));
    }

    event.summary(name);
    event.uid(&event_uid(offset, index));
    event
}

/// Positional unique identifier; increments once per window, not per clause.
pub fn event_uid(offset: OffsetDays, index: usize) -> String {
    format!("EASTER-OFFSET-{}-{}", offset.days(), index)
}

/// Renders the full sequence of event blocks for a holiday.
///
/// Blocks are separated by a blank line, in window order; both are part of
/// the exchange shape consumers round-trip on. With `config.wrap_calendar`
/// set the blocks are enclosed in a VCALENDAR envelope so the output is a
/// complete `.ics` document rather than a fragment for pasting.
pub fn render(name: &str, offset: OffsetDays, config: &Config) -> Result<String, Error> {
    let windows = plan_windows(offset)?;
    log::info!(
        "planned {} recurrence windows for '{}' ({} days before Easter)",
        windows.len(),
        name,
        offset
    );

    let mut body = String::new();
    for (index, window) in windows.iter().enumerate() {
        if index > 0 {
            body.push_str("\r\n");
        }
        let block = holiday_event(window, name, offset, index, config).to_string();
        body.push_str(block.trim_end());
        body.push_str("\r\n");
    }

    if config.wrap_calendar {
        let mut wrapped = String::with_capacity(body.len() + 96);
        wrapped.push_str("BEGIN:VCALENDAR\r\nVERSION:2.0\r\n");
        wrapped.push_str(&format!("PRODID:{}\r\n", config.prodid));
        wrapped.push_str(&body);
        wrapped.push_str("END:VCALENDAR\r\n");
        return Ok(wrapped);
    }
    Ok(body)
}
