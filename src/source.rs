//! Remote production-calendar feed.
//!
//! The upstream service publishes a JSON index of available years and
//! one XML document per year. A non-success status is fatal: the run
//! aborts before the core pipeline ever sees the year.

use anyhow::{Context, Result};
use serde::Deserialize;

const BASE_URL: &str = "http://xmlcalendar.ru/data/ru";

/// One entry of the feed's year index. The index carries statistics we
/// have no use for; only the year number is kept.
#[derive(Debug, Deserialize)]
struct YearEntry {
    year: i32,
}

pub struct CalendarSource {
    client: reqwest::Client,
    base_url: String,
}

impl CalendarSource {
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    /// Point the source at a different host (used by tests and mirrors).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        CalendarSource {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Years the feed has data for, ascending.
    pub async fn list_years(&self) -> Result<Vec<i32>> {
        let url = format!("{}/all/calendar.json", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch year index from {url}"))?;

        if !response.status().is_success() {
            anyhow::bail!("Year index request failed with status {}", response.status());
        }

        let body = response.text().await.context("Failed to read year index body")?;
        let entries: Vec<YearEntry> =
            serde_json::from_str(&body).context("Failed to parse year index JSON")?;

        let mut years: Vec<i32> = entries.into_iter().map(|e| e.year).collect();
        years.sort_unstable();
        Ok(years)
    }

    /// The raw XML document for one year.
    pub async fn fetch_year(&self, year: i32) -> Result<String> {
        let url = format!("{}/{}/calendar.xml", self.base_url, year);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch calendar for {year} from {url}"))?;

        if !response.status().is_success() {
            anyhow::bail!(
                "Calendar request for {} failed with status {}",
                year,
                response.status()
            );
        }

        response
            .text()
            .await
            .with_context(|| format!("Failed to read calendar body for {year}"))
    }
}

impl Default for CalendarSource {
    fn default() -> Self {
        Self::new()
    }
}
