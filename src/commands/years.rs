//! List the years the feed has data for.

use anyhow::Result;

use crate::source::CalendarSource;

pub async fn run() -> Result<()> {
    let source = CalendarSource::new();

    for year in source.list_years().await? {
        println!("{year}");
    }

    Ok(())
}
