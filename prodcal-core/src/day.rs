//! Raw feed types and the per-day record the pipeline operates on.
//!
//! Only non-working days are modeled; ordinary working days never
//! appear in the feed and never produce a `DayRecord`.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How the feed classifies a listed day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayKind {
    /// Fully non-working day (holiday or moved weekend).
    NonWorking,
    /// Official work day with reduced hours.
    Shortened,
}

impl DayKind {
    /// Map the feed's numeric type code. Every code other than `2`
    /// (shortened day) counts as a plain non-working day.
    pub fn from_type_code(code: u8) -> Self {
        if code == 2 {
            DayKind::Shortened
        } else {
            DayKind::NonWorking
        }
    }
}

/// One entry of the feed's per-day table, as parsed from the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDay {
    pub date: NaiveDate,
    pub kind: DayKind,
    /// Reference into the holiday title table, when the day carries one.
    pub holiday_ref: Option<u32>,
}

/// A year's worth of raw feed data: the holiday-id → title lookup plus
/// the ordered per-day annotation table.
#[derive(Debug, Clone)]
pub struct RawYearDocument {
    pub year: i32,
    pub titles: HashMap<u32, String>,
    pub days: Vec<RawDay>,
}

/// One non-working calendar day, ready for interval merging.
///
/// `title` is empty until assigned by lookup, bridge inheritance or
/// merger backfill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub title: String,
    pub shortened_day: bool,
}

impl DayRecord {
    pub fn new(date: NaiveDate, title: impl Into<String>, shortened_day: bool) -> Self {
        DayRecord {
            date,
            title: title.into(),
            shortened_day,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_code_two_is_shortened() {
        assert_eq!(DayKind::from_type_code(2), DayKind::Shortened);
    }

    #[test]
    fn test_other_type_codes_are_non_working() {
        assert_eq!(DayKind::from_type_code(1), DayKind::NonWorking);
        assert_eq!(DayKind::from_type_code(3), DayKind::NonWorking);
    }
}
