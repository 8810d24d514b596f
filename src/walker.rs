//! Drives the full history walk and produces the frozen `Analysis`.
//!
//! Strictly sequential: the rename resolver's first-rename-wins rule and
//! the aggregator's analyze-on-first-sight rule both depend on commits
//! arriving in a consistent chronological order, which the git layer's
//! time-sorted revwalk provides.

use std::error::Error;
use std::path::Path;
use std::time::Instant;

use chrono::Utc;

use crate::fsio::FileAccess;
use crate::git::GitRepo;
use crate::model::Analysis;
use crate::stats::StatAggregator;

/// Walk the repository at `path` and aggregate its whole commit history.
///
/// An unopenable repository is fatal — no partial `Analysis` comes back.
/// Per-file problems (deleted or unreadable working-tree files, parse
/// failures) are absorbed into the stats as unset fields.
pub fn run(
    path: &Path,
    io: &dyn FileAccess,
    ignored_extensions: &[String],
) -> Result<Analysis, Box<dyn Error>> {
    let started = Instant::now();
    let repo = GitRepo::open(path)
        .map_err(|e| format!("not a git repository (or any parent): {e}"))?;

    let mut analysis = Analysis::new();
    let root = repo.root().to_path_buf();
    let mut aggregator = StatAggregator::new(io, &root, ignored_extensions);

    repo.walk_history(|info, change_sets| {
        analysis.observe_commit_date(info.date);
        analysis.record_commit_day(info.date);
        for cs in change_sets {
            analysis.record_churn(info.date, cs.lines_added, cs.lines_deleted);
            for change in &cs.changes {
                aggregator.record(&change.old_path, &change.new_path, &info.author, info.date);
            }
        }
    })?;

    for (date, name) in repo.tags()? {
        analysis.tags.insert(date, name);
    }
    analysis.branches = repo.branch_names()?;

    let aggregates = aggregator.finish();
    let today = Utc::now().date_naive();
    for stat in aggregates.file_commits.values() {
        if let Some(age) = stat.code_age_months(today) {
            *analysis.code_age.entry(age).or_insert(0) += stat.commit_count;
        }
    }

    analysis.total_lines_of_code = aggregates.total_lines_of_code;
    analysis.file_extensions = aggregates.file_extensions;
    analysis.file_commits = aggregates.file_commits;
    analysis.user_file_commits = aggregates.user_file_commits;
    analysis.folders = aggregates.folders;
    analysis.analysis_duration_ms = started.elapsed().as_millis() as u64;

    Ok(analysis)
}

#[cfg(test)]
#[path = "walker_test.rs"]
mod tests;
