//! Day Record Extractor.
//!
//! Parses the upstream XML feed for one year into a [`RawYearDocument`]
//! and flattens it into the ordered [`DayRecord`] sequence the rest of
//! the pipeline consumes.
//!
//! Feed layout:
//!
//! ```text
//! <calendar year="2024" ...>
//!   <holidays><holiday id="1" title="..."/>...</holidays>
//!   <days><day d="01.01" t="1" h="1"/>...</days>
//! </calendar>
//! ```
//!
//! `d` is `MM.DD` within the document's year, `t` is the type code
//! (`2` = shortened work day), `h` references a holiday title.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::day::{DayKind, DayRecord, RawDay, RawYearDocument};
use crate::error::{ProdCalError, ProdCalResult};

/// Parse the feed XML for `year` into its raw tables.
///
/// Fails with [`ProdCalError::MalformedInput`] when the expected
/// `<calendar>`/`<holidays>`/`<days>` nesting is absent or a day entry
/// cannot be decoded.
pub fn parse_year_document(year: i32, xml: &str) -> ProdCalResult<RawYearDocument> {
    let doc = roxmltree::Document::parse(xml)
        .map_err(|e| ProdCalError::MalformedInput(format!("invalid XML: {e}")))?;

    let calendar = doc.root_element();
    if calendar.tag_name().name() != "calendar" {
        return Err(ProdCalError::MalformedInput(
            "missing <calendar> root element".into(),
        ));
    }

    let holidays = calendar
        .children()
        .find(|n| n.tag_name().name() == "holidays")
        .ok_or_else(|| ProdCalError::MalformedInput("missing <holidays> table".into()))?;

    let days_node = calendar
        .children()
        .find(|n| n.tag_name().name() == "days")
        .ok_or_else(|| ProdCalError::MalformedInput("missing <days> table".into()))?;

    let mut titles = HashMap::new();
    for holiday in holidays.children().filter(|n| n.tag_name().name() == "holiday") {
        let id = holiday
            .attribute("id")
            .and_then(|v| v.parse::<u32>().ok())
            .ok_or_else(|| ProdCalError::MalformedInput("holiday entry without numeric id".into()))?;
        let title = holiday
            .attribute("title")
            .ok_or_else(|| ProdCalError::MalformedInput(format!("holiday {id} without title")))?;
        titles.insert(id, title.to_string());
    }

    let mut days = Vec::new();
    for day in days_node.children().filter(|n| n.tag_name().name() == "day") {
        days.push(parse_day(year, day)?);
    }

    Ok(RawYearDocument { year, titles, days })
}

fn parse_day(year: i32, node: roxmltree::Node) -> ProdCalResult<RawDay> {
    let d = node
        .attribute("d")
        .ok_or_else(|| ProdCalError::MalformedInput("day entry without date".into()))?;

    let date = parse_feed_date(year, d)
        .ok_or_else(|| ProdCalError::MalformedInput(format!("unparsable day date '{d}'")))?;

    let type_code = node
        .attribute("t")
        .and_then(|v| v.parse::<u8>().ok())
        .ok_or_else(|| ProdCalError::MalformedInput(format!("day {d} without type code")))?;

    // A malformed holiday reference is an error; a missing one is normal.
    let holiday_ref = match node.attribute("h") {
        Some(raw) => Some(raw.parse::<u32>().map_err(|_| {
            ProdCalError::MalformedInput(format!("day {d} has non-numeric holiday ref '{raw}'"))
        })?),
        None => None,
    };

    Ok(RawDay {
        date,
        kind: DayKind::from_type_code(type_code),
        holiday_ref,
    })
}

/// Decode the feed's `MM.DD` day-of-year notation.
fn parse_feed_date(year: i32, d: &str) -> Option<NaiveDate> {
    let (month, day) = d.split_once('.')?;
    NaiveDate::from_ymd_opt(year, month.parse().ok()?, day.parse().ok()?)
}

/// Flatten a raw document into the ordered day-record sequence.
///
/// Emission order matches the feed's chronological order; no entry is
/// dropped. Titles come from the holiday table when the day carries a
/// reference (an unknown reference yields an empty title), and the
/// shortened flag reflects the type code.
pub fn extract_day_records(doc: &RawYearDocument) -> Vec<DayRecord> {
    doc.days
        .iter()
        .map(|raw| {
            let title = raw
                .holiday_ref
                .and_then(|id| doc.titles.get(&id))
                .cloned()
                .unwrap_or_default();

            DayRecord {
                date: raw.date,
                title,
                shortened_day: raw.kind == DayKind::Shortened,
            }
        })
        .collect()
}
