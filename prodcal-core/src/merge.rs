//! Interval Merger.
//!
//! Collapses the day-record sequence into maximal contiguous intervals.
//! The scan runs in reverse chronological order so each untitled day
//! can inherit from its already-processed successor, then the working
//! list is reversed once to restore ascending order.

use chrono::{Days, NaiveDate};

use crate::day::DayRecord;
use crate::interval::HolidayInterval;

/// Merge a year's day records into holiday intervals.
///
/// The records must be in ascending date order, as produced by the
/// extractor and bridge passes. The returned intervals are sorted by
/// `started_at` ascending, non-overlapping and non-adjacent for equal
/// attributes.
pub fn merge_intervals(mut days: Vec<DayRecord>, year: i32) -> Vec<HolidayInterval> {
    let Some(first) = days.first() else {
        return Vec::new();
    };

    // Captured before the scan: the year-wrap rule consults the year's
    // opening record while processing its closing days.
    let first_date = first.date;
    let first_title = first.title.clone();
    let wrap_from = NaiveDate::from_ymd_opt(year, 12, 29).expect("Dec 29 exists in every year");
    let jan_first = NaiveDate::from_ymd_opt(year, 1, 1).expect("Jan 1 exists in every year");

    let mut intervals: Vec<HolidayInterval> = Vec::new();

    for i in (0..days.len()).rev() {
        // Backfill: an untitled day takes the title of the next
        // chronological day, unless it is the last day of the year.
        if days[i].title.is_empty() && i + 1 < days.len() {
            days[i].title = days[i + 1].title.clone();
        }

        // Year-wrap: a trailing untitled run continues the holiday that
        // opens on January 1. Written back onto the record so earlier
        // days of the run inherit it through backfill.
        if days[i].title.is_empty() && days[i].date >= wrap_from && first_date == jan_first {
            days[i].title = first_title.clone();
        }

        let day = &days[i];

        let merged = match intervals.last_mut() {
            Some(top)
                if top.started_at == day.date + Days::new(1)
                    && top.shortened_day == day.shortened_day
                    && top.title == day.title =>
            {
                top.started_at = day.date;
                true
            }
            _ => false,
        };

        if !merged {
            intervals.push(HolidayInterval::single_day(
                day.title.clone(),
                year,
                day.date,
                day.shortened_day,
            ));
        }
    }

    intervals.reverse();
    intervals
}
