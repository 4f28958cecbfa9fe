//! Artifact writing, change detection and commit-message composition.
//!
//! Every artifact write is guarded by a byte-for-byte comparison with
//! the existing file, so an unchanged feed produces no filesystem
//! churn and the caller can tell exactly which years moved.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// What happened to a year's artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Create,
    Update,
}

impl Change {
    pub fn verb(self) -> &'static str {
        match self {
            Change::Create => "create",
            Change::Update => "update",
        }
    }
}

/// The directory the .ics artifacts live in: `years/holidays_<year>.ics`
/// per year plus an aggregate `holidays.ics`.
pub struct OutputDir {
    root: PathBuf,
}

impl OutputDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        OutputDir { root: root.into() }
    }

    pub fn year_path(&self, year: i32) -> PathBuf {
        self.root.join("years").join(format!("holidays_{year}.ics"))
    }

    pub fn aggregate_path(&self) -> PathBuf {
        self.root.join("holidays.ics")
    }

    /// Write a year's artifact unless its content is already current.
    /// Returns what changed, or `None` when the file was left alone.
    pub fn write_year(&self, year: i32, ics: &str) -> Result<Option<Change>> {
        let path = self.year_path(year);
        let current = read_if_exists(&path)?;

        if current.as_deref() == Some(ics) {
            return Ok(None);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&path, ics).with_context(|| format!("Failed to write {}", path.display()))?;

        Ok(Some(if current.is_some() {
            Change::Update
        } else {
            Change::Create
        }))
    }

    pub fn write_aggregate(&self, ics: &str) -> Result<()> {
        let path = self.aggregate_path();
        fs::create_dir_all(&self.root)
            .with_context(|| format!("Failed to create {}", self.root.display()))?;
        fs::write(&path, ics).with_context(|| format!("Failed to write {}", path.display()))
    }
}

fn read_if_exists(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
    }
}

/// The commit message the surrounding automation uses: a fixed subject
/// plus one line per changed year.
pub fn commit_message(changes: &BTreeMap<i32, Change>) -> String {
    let mut message = String::from("Update calendar");

    for (year, change) in changes {
        message.push_str(&format!("\n\n* {} calendar for {}", change.verb(), year));
    }

    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_write_is_a_create() {
        let dir = tempfile::tempdir().unwrap();
        let output = OutputDir::new(dir.path());

        let change = output.write_year(2024, "BEGIN:VCALENDAR\r\n").unwrap();
        assert_eq!(change, Some(Change::Create));
        assert!(output.year_path(2024).exists());
    }

    #[test]
    fn test_identical_content_is_no_change() {
        let dir = tempfile::tempdir().unwrap();
        let output = OutputDir::new(dir.path());

        output.write_year(2024, "same").unwrap();
        let change = output.write_year(2024, "same").unwrap();
        assert_eq!(change, None);
    }

    #[test]
    fn test_different_content_is_an_update() {
        let dir = tempfile::tempdir().unwrap();
        let output = OutputDir::new(dir.path());

        output.write_year(2024, "old").unwrap();
        let change = output.write_year(2024, "new").unwrap();
        assert_eq!(change, Some(Change::Update));
        assert_eq!(fs::read_to_string(output.year_path(2024)).unwrap(), "new");
    }

    #[test]
    fn test_commit_message_lists_changes_in_year_order() {
        let mut changes = BTreeMap::new();
        changes.insert(2025, Change::Update);
        changes.insert(2024, Change::Create);

        assert_eq!(
            commit_message(&changes),
            "Update calendar\n\n* create calendar for 2024\n\n* update calendar for 2025"
        );
    }

    #[test]
    fn test_commit_message_without_changes_is_bare() {
        assert_eq!(commit_message(&BTreeMap::new()), "Update calendar");
    }
}
