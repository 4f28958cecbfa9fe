//! Bridge Day Inferrer.
//!
//! A named holiday next to a weekend extends the non-working period
//! without the feed labeling the weekend days themselves. This pass
//! walks the extracted records chronologically and decides, for each
//! untitled day, whether it continues or bridges from the preceding
//! holiday, synthesizing the skipped weekend records where needed.

use chrono::{Datelike, Days, Weekday};

use crate::day::DayRecord;

/// Run the forward inference pass, producing a new record sequence.
///
/// The input is never mutated; synthesized records are inserted in date
/// order, and the output stays chronologically sorted.
pub fn infer_bridge_days(days: &[DayRecord]) -> Vec<DayRecord> {
    let mut out: Vec<DayRecord> = Vec::with_capacity(days.len());

    for day in days {
        let mut day = day.clone();

        if day.title.is_empty() {
            if let Some(prev) = out.last() {
                let gap = (day.date - prev.date).num_days();
                let prev_title = prev.title.clone();
                let prev_shortened = prev.shortened_day;

                if gap == 1 {
                    // Simple continuation of the previous day's holiday.
                    day.title = prev_title;
                } else if !prev_shortened && is_bridge_gap(gap, day.date.weekday()) {
                    day.title = prev_title.clone();

                    // A three-day gap skips two days; cover both so the
                    // merger sees an unbroken run.
                    if gap == 3 {
                        out.push(DayRecord::new(
                            day.date - Days::new(2),
                            prev_title.clone(),
                            false,
                        ));
                    }
                    out.push(DayRecord::new(day.date - Days::new(1), prev_title, false));
                }
            }
        }

        out.push(day);
    }

    out
}

/// The feed's bridge convention: a short gap landing on a weekend, or a
/// three-day gap landing on Monday/Tuesday. The `gap == 2` weekday case
/// being unreachable is part of the convention, not an oversight.
fn is_bridge_gap(gap: i64, weekday: Weekday) -> bool {
    (gap <= 3 && matches!(weekday, Weekday::Sat | Weekday::Sun))
        || (gap == 3 && matches!(weekday, Weekday::Mon | Weekday::Tue))
}
