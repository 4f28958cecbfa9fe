//! Print one year's calendar to stdout without touching the filesystem.

use anyhow::Result;
use prodcal_core::ics::generate_ics;
use prodcal_core::{Labels, holidays_from_xml};

use crate::source::CalendarSource;

pub async fn run(year: i32) -> Result<()> {
    let source = CalendarSource::new();

    let xml = source.fetch_year(year).await?;
    let holidays = holidays_from_xml(year, &xml, &Labels::default())?;

    print!("{}", generate_ics(&holidays));

    Ok(())
}
