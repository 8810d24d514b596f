//! Per-file statistics aggregation.
//!
//! `StatAggregator` owns every mutable map the walk writes into: per-file
//! stats, per-(author, file) stats, the folder tree, and the extension
//! histogram. Callers only ever see `record` and `finish`; the maps are
//! never handed out mid-walk.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::cycom;
use crate::folders::FolderTree;
use crate::fsio::FileAccess;
use crate::loc;
use crate::model::{FileStat, UserFileStat};
use crate::renames::RenameResolver;

/// Everything the aggregator accumulated, surrendered at the end of the walk.
pub struct Aggregates {
    pub file_commits: HashMap<String, FileStat>,
    pub user_file_commits: HashMap<String, UserFileStat>,
    pub folders: FolderTree,
    pub file_extensions: HashMap<String, usize>,
    pub total_lines_of_code: usize,
}

pub struct StatAggregator<'a> {
    io: &'a dyn FileAccess,
    repo_root: PathBuf,
    ignored_extensions: HashSet<String>,
    renames: RenameResolver,
    files: HashMap<String, FileStat>,
    user_files: HashMap<String, UserFileStat>,
    folders: FolderTree,
    extensions: HashMap<String, usize>,
    total_lines: usize,
}

impl<'a> StatAggregator<'a> {
    pub fn new(io: &'a dyn FileAccess, repo_root: &Path, ignored_extensions: &[String]) -> Self {
        Self {
            io,
            repo_root: repo_root.to_path_buf(),
            ignored_extensions: ignored_extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
                .collect(),
            renames: RenameResolver::new(),
            files: HashMap::new(),
            user_files: HashMap::new(),
            folders: FolderTree::new(),
            extensions: HashMap::new(),
            total_lines: 0,
        }
    }

    /// Record one changed-path event from a commit diff.
    ///
    /// `old_path != new_path` marks a rename: the live stat entry is re-keyed
    /// to the new path and the resolver learns the alias before anything is
    /// counted. The ignore-list is checked against the resolved canonical
    /// path on every event, since a rename can carry a file across an
    /// ignore boundary.
    pub fn record(&mut self, old_path: &str, new_path: &str, author: &str, date: NaiveDate) {
        if old_path != new_path {
            // a chain a -> b -> c arrives c-first in the time-sorted walk, so
            // the rename target may itself already be retired; resolve it to
            // the live key before re-keying and aliasing, otherwise a would
            // alias to the dead b and later events would resurrect it
            let target = self.renames.canonical(new_path).to_string();
            if let Some(mut stat) = self.files.remove(old_path) {
                stat.filename = target.clone();
                self.files.insert(target.clone(), stat);
            }
            self.renames.record_rename(old_path, &target);
        }

        // the first rename of a path is its permanent alias, so looking up
        // the old path lands on the right entry for late events too
        let canonical = self.renames.canonical(old_path).to_string();

        if self.ignored_extensions.contains(&extension_of(&canonical)) {
            return;
        }

        if !self.files.contains_key(&canonical) {
            let stat = self.analyze_file(&canonical);
            self.files.insert(canonical.clone(), stat);
        }

        if let Some(stat) = self.files.get_mut(&canonical) {
            stat.record_commit(date);
        }

        self.folders.accumulate(&canonical, 1);

        self.user_files
            .entry(UserFileStat::key(&canonical, author))
            .or_insert_with(|| UserFileStat::new(&canonical, author))
            .record_commit(date);
    }

    /// First-sight analysis of a canonical path. Runs at most once per path
    /// per walk — every later event finds the entry already present.
    fn analyze_file(&mut self, canonical: &str) -> FileStat {
        let mut stat = FileStat::new(canonical);
        let full_path = self.repo_root.join(canonical);
        if !self.io.exists(&full_path) {
            return stat;
        }

        let contents = match self.io.read_text(&full_path) {
            Ok(c) => c,
            // recovered locally, treated as absent
            Err(err) => {
                eprintln!("warning: could not read {}: {err}", full_path.display());
                return stat;
            }
        };
        stat.file_exists = true;

        let ext = extension_of(canonical);
        if ext == "rs" {
            match cycom::analyze(&contents) {
                Some(fa) => {
                    stat.cyclomatic_complexity = Some(fa.complexity);
                    stat.method_count = fa.method_count;
                    stat.lines_of_code = Some(loc::count_strict(&contents));
                }
                // parse failure degrades to the generic counter
                None => stat.lines_of_code = Some(loc::count_generic(&contents)),
            }
        } else {
            stat.lines_of_code = Some(loc::count_generic(&contents));
        }

        self.total_lines += stat.lines_of_code.unwrap_or(0);
        *self.extensions.entry(ext).or_insert(0) += 1;

        stat
    }

    pub fn finish(self) -> Aggregates {
        Aggregates {
            file_commits: self.files,
            user_file_commits: self.user_files,
            folders: self.folders,
            file_extensions: self.extensions,
            total_lines_of_code: self.total_lines,
        }
    }
}

/// Lowercased extension without the dot; empty string when there is none.
fn extension_of(path: &str) -> String {
    Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "stats_test.rs"]
mod tests;
