//! Core pipeline for the prodcal ecosystem.
//!
//! Turns one year of the production-calendar feed into contiguous
//! holiday intervals and serializes them as an all-day-event .ics
//! document:
//! - `extract` parses the feed and emits ordered day records
//! - `bridge` infers implicit weekend bridge days
//! - `merge` collapses adjacent records into intervals
//! - `titles` assigns default labels and shortened-day annotations
//! - `ics` produces the byte-stable calendar document
//!
//! Fetching the feed, writing files and change detection live in the
//! CLI; this crate is a pure batch transformation.

pub mod bridge;
pub mod day;
pub mod error;
pub mod extract;
pub mod ics;
pub mod interval;
pub mod merge;
pub mod pipeline;
pub mod titles;

pub use day::{DayKind, DayRecord, RawDay, RawYearDocument};
pub use error::{ProdCalError, ProdCalResult};
pub use interval::HolidayInterval;
pub use pipeline::{compute_holidays, holidays_from_xml};
pub use titles::Labels;
