//! Report renderers over the frozen `Analysis`.
//!
//! Renderers are pure consumers: they read the aggregate, format it, and
//! write one file each through the `FileAccess` seam. All shared shaping
//! (top-N ordering, folder-tree flattening, "N/A" for unset fields) lives
//! here so the format modules stay templating-only.

pub mod html;
pub mod json;
pub mod markdown;
pub mod text;

use crate::folders::FolderStat;
use crate::model::{Analysis, FileStat, UserFileStat};

/// Presentation settings shared by every renderer.
pub struct ReportContext {
    pub title: String,
    pub number_of_files: usize,
}

/// Files ordered by change count (descending), truncated to the context's
/// top-N. Ties break on filename so output is stable.
pub(crate) fn top_files<'a>(analysis: &'a Analysis, ctx: &ReportContext) -> Vec<&'a FileStat> {
    let mut files: Vec<&FileStat> = analysis.file_commits.values().collect();
    files.sort_by(|a, b| {
        b.commit_count
            .cmp(&a.commit_count)
            .then_with(|| a.filename.cmp(&b.filename))
    });
    files.truncate(ctx.number_of_files);
    files
}

/// (author, file) pairs ordered by change count, truncated to top-N.
pub(crate) fn top_user_files<'a>(
    analysis: &'a Analysis,
    ctx: &ReportContext,
) -> Vec<&'a UserFileStat> {
    let mut entries: Vec<&UserFileStat> = analysis.user_file_commits.values().collect();
    entries.sort_by(|a, b| {
        b.commit_count
            .cmp(&a.commit_count)
            .then_with(|| a.filename.cmp(&b.filename))
            .then_with(|| a.username.cmp(&b.username))
    });
    entries.truncate(ctx.number_of_files);
    entries
}

/// One folder-tree node flattened for rendering.
pub(crate) struct FolderRow {
    pub depth: usize,
    pub name: String,
    pub file_changes: usize,
}

/// Depth-first flattening of the folder tree, children ordered by change
/// count descending (name as tiebreak).
pub(crate) fn folder_rows(root: &FolderStat) -> Vec<FolderRow> {
    let mut rows = Vec::new();
    push_folder(root, 0, &mut rows);
    rows
}

fn push_folder(node: &FolderStat, depth: usize, rows: &mut Vec<FolderRow>) {
    rows.push(FolderRow {
        depth,
        name: node.name.clone(),
        file_changes: node.file_changes,
    });
    let mut children: Vec<&FolderStat> = node.children.values().collect();
    children.sort_by(|a, b| {
        b.file_changes
            .cmp(&a.file_changes)
            .then_with(|| a.name.cmp(&b.name))
    });
    for child in children {
        push_folder(child, depth + 1, rows);
    }
}

/// Unset analysis fields render as "N/A" — a deleted file is not a file
/// with zero lines.
pub(crate) fn fmt_opt(value: Option<usize>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| v.to_string())
}

/// A small populated aggregate shared by the renderer tests.
#[cfg(test)]
pub(crate) fn sample_analysis() -> Analysis {
    use chrono::NaiveDate;

    let date = |d: u32| NaiveDate::from_ymd_opt(2024, 5, d).unwrap();
    let mut analysis = Analysis::new();

    let mut lib = FileStat::new("src/lib.rs");
    lib.lines_of_code = Some(120);
    lib.cyclomatic_complexity = Some(14);
    lib.method_count = 6;
    lib.file_exists = true;
    lib.record_commit(date(1));
    lib.record_commit(date(2));
    lib.record_commit(date(2));
    analysis.file_commits.insert(lib.filename.clone(), lib);

    let mut gone = FileStat::new("old|name.cs");
    gone.record_commit(date(1));
    analysis.file_commits.insert(gone.filename.clone(), gone);

    let mut uf = UserFileStat::new("src/lib.rs", "alice");
    uf.record_commit(date(1));
    uf.record_commit(date(2));
    analysis
        .user_file_commits
        .insert(UserFileStat::key("src/lib.rs", "alice"), uf);

    analysis.folders.accumulate("src/lib.rs", 3);
    analysis.folders.accumulate("old|name.cs", 1);

    analysis.observe_commit_date(date(1));
    analysis.observe_commit_date(date(2));
    for _ in 0..3 {
        analysis.record_commit_day(date(2));
    }
    analysis.record_commit_day(date(1));
    analysis.record_churn(date(2), 40, 12);
    analysis.tags.insert(date(2), "v1.0.0".to_string());
    analysis.branches = vec!["main".to_string()];
    analysis.file_extensions.insert("rs".to_string(), 1);
    analysis.total_lines_of_code = 120;
    analysis
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
