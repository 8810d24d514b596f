//! Data model for the analysis output.
//!
//! `Analysis` is the aggregate root handed to the renderers: it is built
//! incrementally by the history walker and read-only from then on. Per-day
//! maps use `BTreeMap` so renderers iterate in calendar order without
//! sorting.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::Serialize;

use crate::folders::FolderTree;

/// Statistics for one logical file across its whole renamed history.
#[derive(Debug, Serialize)]
pub struct FileStat {
    pub filename: String,
    pub commit_count: usize,
    pub commit_dates: Vec<NaiveDate>,
    pub lines_of_code: Option<usize>,
    pub cyclomatic_complexity: Option<usize>,
    pub method_count: usize,
    pub file_exists: bool,
    pub latest_commit: Option<NaiveDate>,
}

impl FileStat {
    pub fn new(filename: &str) -> Self {
        Self {
            filename: filename.to_string(),
            commit_count: 0,
            commit_dates: Vec::new(),
            lines_of_code: None,
            cyclomatic_complexity: None,
            method_count: 0,
            file_exists: false,
            latest_commit: None,
        }
    }

    /// Attribute one diff event to this file.
    pub fn record_commit(&mut self, date: NaiveDate) {
        self.commit_count += 1;
        self.commit_dates.push(date);
        if self.latest_commit.is_none_or(|latest| date > latest) {
            self.latest_commit = Some(date);
        }
    }

    /// Months between `now` and the latest recorded commit, or None when no
    /// commit has been recorded yet. A future-dated commit (clock skew,
    /// forged timestamp) clamps to 0 rather than counting as old.
    pub fn code_age_months(&self, now: NaiveDate) -> Option<u32> {
        let latest = self.latest_commit?;
        let months = 12 * (now.year() - latest.year()) + now.month() as i32 - latest.month() as i32;
        Some(months.max(0) as u32)
    }
}

/// Per (author, file) commit statistics. Unlike `FileStat`, no static
/// analysis fields — only the change history.
#[derive(Debug, Serialize)]
pub struct UserFileStat {
    pub filename: String,
    pub username: String,
    pub commit_count: usize,
    pub commit_dates: Vec<NaiveDate>,
    pub latest_commit: Option<NaiveDate>,
}

impl UserFileStat {
    pub fn new(filename: &str, username: &str) -> Self {
        Self {
            filename: filename.to_string(),
            username: username.to_string(),
            commit_count: 0,
            commit_dates: Vec::new(),
            latest_commit: None,
        }
    }

    /// Composite dictionary key for the (filename, username) pair.
    pub fn key(filename: &str, username: &str) -> String {
        format!("{filename}*{username}")
    }

    pub fn record_commit(&mut self, date: NaiveDate) {
        self.commit_count += 1;
        self.commit_dates.push(date);
        if self.latest_commit.is_none_or(|latest| date > latest) {
            self.latest_commit = Some(date);
        }
    }
}

/// The frozen output of a full history walk.
#[derive(Debug, Serialize)]
pub struct Analysis {
    pub created_at: DateTime<Utc>,
    pub first_commit: Option<NaiveDate>,
    pub latest_commit: Option<NaiveDate>,
    pub analysis_duration_ms: u64,
    pub total_lines_of_code: usize,
    pub commits_each_day: BTreeMap<NaiveDate, usize>,
    pub lines_added_each_day: BTreeMap<NaiveDate, usize>,
    pub lines_deleted_each_day: BTreeMap<NaiveDate, usize>,
    /// Tag name keyed by the date of the commit it points at.
    pub tags: BTreeMap<NaiveDate, String>,
    pub branches: Vec<String>,
    /// File count per extension, one entry per distinct canonical file read.
    pub file_extensions: HashMap<String, usize>,
    /// Change count bucketed by months since the file was last touched.
    pub code_age: BTreeMap<u32, usize>,
    pub file_commits: HashMap<String, FileStat>,
    pub folders: FolderTree,
    pub user_file_commits: HashMap<String, UserFileStat>,
}

impl Default for Analysis {
    fn default() -> Self {
        Self::new()
    }
}

impl Analysis {
    pub fn new() -> Self {
        Self {
            created_at: Utc::now(),
            first_commit: None,
            latest_commit: None,
            analysis_duration_ms: 0,
            total_lines_of_code: 0,
            commits_each_day: BTreeMap::new(),
            lines_added_each_day: BTreeMap::new(),
            lines_deleted_each_day: BTreeMap::new(),
            tags: BTreeMap::new(),
            branches: Vec::new(),
            file_extensions: HashMap::new(),
            code_age: BTreeMap::new(),
            file_commits: HashMap::new(),
            folders: FolderTree::new(),
            user_file_commits: HashMap::new(),
        }
    }

    /// Track the overall first/latest commit dates. Explicit min/max
    /// updates keep both correct whatever order the walk visits commits in.
    pub fn observe_commit_date(&mut self, date: NaiveDate) {
        if self.first_commit.is_none_or(|first| date < first) {
            self.first_commit = Some(date);
        }
        if self.latest_commit.is_none_or(|latest| date > latest) {
            self.latest_commit = Some(date);
        }
    }

    pub fn record_commit_day(&mut self, date: NaiveDate) {
        *self.commits_each_day.entry(date).or_insert(0) += 1;
    }

    pub fn record_churn(&mut self, date: NaiveDate, added: usize, deleted: usize) {
        *self.lines_added_each_day.entry(date).or_insert(0) += added;
        *self.lines_deleted_each_day.entry(date).or_insert(0) += deleted;
    }
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
