//! The holiday interval emitted by the merger.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A maximal contiguous run of day records sharing a title and the
/// shortened-day flag. The unit serialized as one calendar event.
///
/// `year` is the processing year the interval was computed for, which
/// may differ from `started_at.year()` in the year-wrap case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayInterval {
    pub title: String,
    pub year: i32,
    pub started_at: NaiveDate,
    pub ended_at: NaiveDate,
    pub shortened_day: bool,
}

impl HolidayInterval {
    /// A single calendar day, the state every interval starts in before
    /// the merger extends it backward.
    pub fn single_day(title: impl Into<String>, year: i32, date: NaiveDate, shortened_day: bool) -> Self {
        HolidayInterval {
            title: title.into(),
            year,
            started_at: date,
            ended_at: date,
            shortened_day,
        }
    }

    pub fn is_single_day(&self) -> bool {
        self.started_at == self.ended_at
    }
}
