//! The full per-year pipeline: extract, bridge, merge, resolve.

use crate::bridge::infer_bridge_days;
use crate::day::RawYearDocument;
use crate::error::ProdCalResult;
use crate::extract::{extract_day_records, parse_year_document};
use crate::interval::HolidayInterval;
use crate::merge::merge_intervals;
use crate::titles::{Labels, resolve_titles};

/// Compute a year's holiday intervals from its parsed feed document.
pub fn compute_holidays(doc: &RawYearDocument, labels: &Labels) -> Vec<HolidayInterval> {
    let records = extract_day_records(doc);
    let records = infer_bridge_days(&records);
    let mut intervals = merge_intervals(records, doc.year);
    resolve_titles(&mut intervals, labels);
    intervals
}

/// Convenience entry point: feed XML in, finished intervals out.
pub fn holidays_from_xml(year: i32, xml: &str, labels: &Labels) -> ProdCalResult<Vec<HolidayInterval>> {
    let doc = parse_year_document(year, xml)?;
    Ok(compute_holidays(&doc, labels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// A compact year in the upstream feed's shape: New Year holidays
    /// opening the year, a holiday bridged over its weekend, a
    /// shortened eve, an isolated day off, and an untitled year-end
    /// tail that wraps into the opening holiday.
    const SAMPLE_YEAR: &str = r#"
        <calendar year="2024" lang="ru">
          <holidays>
            <holiday id="1" title="Новогодние каникулы"/>
            <holiday id="5" title="День Победы"/>
          </holidays>
          <days>
            <day d="01.01" t="1" h="1"/>
            <day d="01.02" t="1"/>
            <day d="05.08" t="2"/>
            <day d="05.09" t="1" h="5"/>
            <day d="05.12" t="1"/>
            <day d="11.16" t="1"/>
            <day d="12.30" t="1"/>
            <day d="12.31" t="1"/>
          </days>
        </calendar>"#;

    #[test]
    fn test_full_pipeline_sample_year() {
        let intervals = holidays_from_xml(2024, SAMPLE_YEAR, &Labels::default()).unwrap();

        let summary: Vec<(&str, NaiveDate, NaiveDate)> = intervals
            .iter()
            .map(|i| (i.title.as_str(), i.started_at, i.ended_at))
            .collect();

        assert_eq!(
            summary,
            vec![
                // Jan 2 continues Jan 1 by adjacency.
                (
                    "Новогодние каникулы",
                    date(2024, 1, 1),
                    date(2024, 1, 2)
                ),
                // Shortened May 8 stays its own interval; its title is
                // backfilled from May 9 and wrapped.
                (
                    "* Сокращённый день (День Победы)",
                    date(2024, 5, 8),
                    date(2024, 5, 8)
                ),
                // May 9 (Thursday) holiday; May 12 (Sunday, gap 3)
                // bridges back across Friday and Saturday.
                ("День Победы", date(2024, 5, 9), date(2024, 5, 12)),
                // Backfill is unconditional: the lone November Saturday
                // takes its title from the next record in the year,
                // which by then carries the year-wrap title.
                (
                    "Новогодние каникулы",
                    date(2024, 11, 16),
                    date(2024, 11, 16)
                ),
                // Dec 30-31 inherit the opening holiday's title.
                (
                    "Новогодние каникулы",
                    date(2024, 12, 30),
                    date(2024, 12, 31)
                ),
            ]
        );

        for interval in &intervals {
            assert_eq!(interval.year, 2024);
            assert!(interval.started_at <= interval.ended_at);
        }
    }

    #[test]
    fn test_trailing_untitled_days_get_default_labels() {
        // The year does not open on Jan 1, so the year-wrap rule is
        // off and the untitled tail falls back to default labels.
        let xml = r#"
            <calendar year="2024">
              <holidays>
                <holiday id="3" title="Women's Day"/>
              </holidays>
              <days>
                <day d="03.08" t="1" h="3"/>
                <day d="06.12" t="1"/>
                <day d="12.30" t="1"/>
                <day d="12.31" t="1"/>
              </days>
            </calendar>"#;

        let intervals = holidays_from_xml(2024, xml, &Labels::default()).unwrap();
        assert_eq!(intervals.len(), 3);

        // June 12 backfills the empty title of the December tail and
        // ends up a single default day.
        assert_eq!(intervals[1].title, "Выходной");
        assert_eq!(intervals[2].title, "Выходные");
        assert_eq!(intervals[2].started_at, date(2024, 12, 30));
        assert_eq!(intervals[2].ended_at, date(2024, 12, 31));
    }

    #[test]
    fn test_intervals_never_touch() {
        let intervals = holidays_from_xml(2024, SAMPLE_YEAR, &Labels::default()).unwrap();
        for pair in intervals.windows(2) {
            assert!(pair[0].ended_at < pair[1].started_at);
        }
    }
}
