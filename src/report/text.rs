use std::error::Error;
use std::path::Path;

use crate::fsio::FileAccess;
use crate::model::Analysis;

use super::{ReportContext, fmt_opt, folder_rows, top_files, top_user_files};

fn separator(width: usize) -> String {
    "\u{2500}".repeat(width)
}

pub fn write(
    io: &dyn FileAccess,
    path: &Path,
    ctx: &ReportContext,
    analysis: &Analysis,
) -> Result<(), Box<dyn Error>> {
    io.write_text(path, &render(ctx, analysis))?;
    Ok(())
}

fn render(ctx: &ReportContext, analysis: &Analysis) -> String {
    let mut out = String::new();
    let sep = separator(78);
    let today = analysis.created_at.date_naive();

    out.push_str(&format!("{sep}\n {}\n{sep}\n", ctx.title));
    out.push_str(&format!(
        "Created: {}\n",
        analysis.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    if let (Some(first), Some(latest)) = (analysis.first_commit, analysis.latest_commit) {
        out.push_str(&format!("Commits from {first} to {latest}\n"));
    }
    out.push_str(&format!(
        "Total lines of code analyzed: {}\n",
        analysis.total_lines_of_code
    ));
    out.push_str(&format!(
        "Analysis duration: {} ms\n\n",
        analysis.analysis_duration_ms
    ));

    if !analysis.branches.is_empty() {
        out.push_str(&format!("Branches: {}\n\n", analysis.branches.join(", ")));
    }

    let files = top_files(analysis, ctx);
    out.push_str(&format!(
        "Most changed files (top {} of {})\n{sep}\n",
        files.len(),
        analysis.file_commits.len()
    ));
    out.push_str(&format!(
        " {:>8} {:>8} {:>11} {:>8} {:>12}  {}\n",
        "Commits", "LOC", "Complexity", "Methods", "Age (months)", "File"
    ));
    for f in &files {
        let age = f
            .code_age_months(today)
            .map_or_else(|| "N/A".to_string(), |a| a.to_string());
        let deleted = if f.file_exists { "" } else { " (deleted)" };
        out.push_str(&format!(
            " {:>8} {:>8} {:>11} {:>8} {:>12}  {}{}\n",
            f.commit_count,
            fmt_opt(f.lines_of_code),
            fmt_opt(f.cyclomatic_complexity),
            f.method_count,
            age,
            f.filename,
            deleted,
        ));
    }
    out.push('\n');

    out.push_str(&format!("Most changed folders\n{sep}\n"));
    for row in folder_rows(analysis.folders.root()) {
        out.push_str(&format!(
            " {:>8}  {}{}\n",
            row.file_changes,
            "  ".repeat(row.depth),
            row.name
        ));
    }
    out.push('\n');

    let user_files = top_user_files(analysis, ctx);
    out.push_str(&format!("Most active (author, file) pairs\n{sep}\n"));
    out.push_str(&format!(
        " {:>8}  {:<24} {}\n",
        "Commits", "Author", "File"
    ));
    for uf in &user_files {
        out.push_str(&format!(
            " {:>8}  {:<24} {}\n",
            uf.commit_count, uf.username, uf.filename
        ));
    }
    out.push('\n');

    out.push_str(&format!("Commits and churn per day\n{sep}\n"));
    out.push_str(&format!(
        " {:<12} {:>8} {:>8} {:>8}\n",
        "Date", "Commits", "Added", "Deleted"
    ));
    for (date, commits) in &analysis.commits_each_day {
        let added = analysis.lines_added_each_day.get(date).copied().unwrap_or(0);
        let deleted = analysis
            .lines_deleted_each_day
            .get(date)
            .copied()
            .unwrap_or(0);
        out.push_str(&format!(
            " {:<12} {:>8} {:>8} {:>8}\n",
            date.to_string(),
            commits,
            added,
            deleted
        ));
    }
    out.push('\n');

    if !analysis.tags.is_empty() {
        out.push_str(&format!("Tags\n{sep}\n"));
        for (date, name) in &analysis.tags {
            out.push_str(&format!(" {date}  {name}\n"));
        }
        out.push('\n');
    }

    if !analysis.file_extensions.is_empty() {
        out.push_str(&format!("Files per extension\n{sep}\n"));
        let mut exts: Vec<(&String, &usize)> = analysis.file_extensions.iter().collect();
        exts.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        for (ext, count) in exts {
            let label = if ext.is_empty() {
                "(none)".to_string()
            } else {
                format!(".{ext}")
            };
            out.push_str(&format!(" {:>8}  {label}\n", count));
        }
        out.push('\n');
    }

    if !analysis.code_age.is_empty() {
        out.push_str(&format!("Changes by code age\n{sep}\n"));
        out.push_str(&format!(" {:>8} {:>8}\n", "Months", "Changes"));
        for (months, changes) in &analysis.code_age {
            out.push_str(&format!(" {:>8} {:>8}\n", months, changes));
        }
    }

    out
}

#[cfg(test)]
#[path = "text_test.rs"]
mod tests;
