//! ICS document generation.
//!
//! One all-day VEVENT per interval. Output is byte-stable for
//! unchanged input so the writer can detect changes by content
//! equality: the UID derives from the interval's content, DTSTAMP from
//! its processing year, and the icalendar crate's version-dependent
//! header lines are normalized away.

use chrono::{Days, TimeZone, Utc};
use icalendar::{Calendar, Component, Event, EventLike, Property, ValueType};
use sha2::{Digest, Sha256};

use crate::interval::HolidayInterval;

/// Display name of the published calendar.
pub const CALENDAR_NAME: &str = "Производственный календарь";

/// Refresh interval clients should honor: one day.
const CALENDAR_TTL: &str = "PT86400S";

/// Serialize intervals into an all-day-event calendar document.
///
/// The intervals may span several years (the aggregate artifact); they
/// are emitted in the order given.
pub fn generate_ics(intervals: &[HolidayInterval]) -> String {
    let mut cal = Calendar::new();
    // X-WR-CALNAME - human-readable calendar name (de facto standard)
    cal.append_property(Property::new("X-WR-CALNAME", CALENDAR_NAME));
    cal.append_property(Property::new("X-PUBLISHED-TTL", CALENDAR_TTL));

    for interval in intervals {
        let mut event = Event::new();
        event.uid(&interval_uid(interval));
        event.summary(&interval.title);

        // DTSTAMP pinned to Jan 1 of the processing year, not the
        // current time, to keep repeated runs byte-identical.
        let stamp = Utc
            .with_ymd_and_hms(interval.year, 1, 1, 0, 0, 0)
            .unwrap()
            .format("%Y%m%dT%H%M%SZ")
            .to_string();
        event.add_property("DTSTAMP", &stamp);

        add_date_property(&mut event, "DTSTART", interval.started_at);
        // DTEND is exclusive per the all-day-event convention.
        add_date_property(&mut event, "DTEND", interval.ended_at + Days::new(1));

        // Holidays never mark the calendar's subject as busy.
        event.add_property("TRANSP", "TRANSPARENT");

        cal.push(event.done());
    }

    normalize_ics(&cal.done().to_string())
}

/// Stable identifier for an interval: the same logical interval always
/// produces the same UID across runs.
fn interval_uid(interval: &HolidayInterval) -> String {
    let mut hasher = Sha256::new();
    hasher.update(interval.title.as_bytes());
    hasher.update(interval.started_at.format("%Y-%m-%d").to_string().as_bytes());
    hasher.update(interval.ended_at.format("%Y-%m-%d").to_string().as_bytes());
    hex::encode(hasher.finalize())
}

/// Add an all-day date property with a VALUE=DATE parameter.
fn add_date_property(event: &mut Event, name: &str, date: chrono::NaiveDate) {
    let mut prop = Property::new(name, date.format("%Y%m%d").to_string());
    prop.append_parameter(ValueType::Date);
    event.append_property(prop);
}

/// Normalize the icalendar crate's output for byte-stability:
/// - fixed PRODID (the crate embeds its version)
/// - no CALSCALE:GREGORIAN (it is the default)
fn normalize_ics(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:PRODCAL\r\n");
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}
