//! Title Resolver.
//!
//! Fills in default labels for intervals that left the merger untitled
//! and annotates shortened work days. Labels are explicit configuration
//! so a different locale never touches the merge logic.

use crate::interval::HolidayInterval;

/// Localized label set applied after merging.
#[derive(Debug, Clone)]
pub struct Labels {
    /// Default title for a single untitled non-working day.
    pub single_day: String,
    /// Default title for a run of untitled non-working days.
    pub multi_day: String,
    /// Wrapper for shortened work days; `{title}` is replaced with the
    /// interval's title.
    pub shortened: String,
}

impl Default for Labels {
    /// The upstream feed's Russian labels.
    fn default() -> Self {
        Labels {
            single_day: "Выходной".to_string(),
            multi_day: "Выходные".to_string(),
            shortened: "* Сокращённый день ({title})".to_string(),
        }
    }
}

/// Assign defaults to untitled intervals, then wrap shortened-day
/// titles. The wrap runs last so defaulted titles are annotated the
/// same way as inherited ones.
pub fn resolve_titles(intervals: &mut [HolidayInterval], labels: &Labels) {
    for interval in intervals {
        if interval.title.is_empty() {
            interval.title = if interval.is_single_day() {
                labels.single_day.clone()
            } else {
                labels.multi_day.clone()
            };
        }

        if interval.shortened_day {
            interval.title = labels.shortened.replace("{title}", &interval.title);
        }
    }
}
