//! Fetch every listed year, refresh the artifacts, report changes.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;
use prodcal_core::ics::generate_ics;
use prodcal_core::{HolidayInterval, Labels, holidays_from_xml};

use super::create_spinner;
use crate::output::{OutputDir, commit_message};
use crate::source::CalendarSource;

pub async fn run(dir: &Path) -> Result<()> {
    let source = CalendarSource::new();
    let output = OutputDir::new(dir);
    let labels = Labels::default();

    let years = source.list_years().await?;

    let mut all_holidays: Vec<HolidayInterval> = Vec::new();
    let mut changes = BTreeMap::new();

    // Years arrive ascending, which keeps the aggregate chronological.
    for year in years {
        let spinner = create_spinner(format!("Fetching {year}"));
        let xml = source.fetch_year(year).await?;
        let holidays = holidays_from_xml(year, &xml, &labels)?;
        let ics = generate_ics(&holidays);
        spinner.finish_and_clear();

        if let Some(change) = output.write_year(year, &ics)? {
            println!("{} calendar for {year}", change.verb().green());
            changes.insert(year, change);
        }

        all_holidays.extend(holidays);
    }

    if changes.is_empty() {
        println!("no changes");
        return Ok(());
    }

    output.write_aggregate(&generate_ics(&all_holidays))?;

    println!("\n{}", commit_message(&changes));

    Ok(())
}
