use std::error::Error;
use std::path::Path;

use crate::fsio::FileAccess;
use crate::model::Analysis;

use super::{ReportContext, fmt_opt, folder_rows, top_files, top_user_files};

/// Escape backslashes and pipe characters in file paths so markdown tables
/// render correctly. Backslashes must be escaped first to avoid
/// double-escaping.
fn escape_md(s: &str) -> String {
    s.replace('\\', "\\\\").replace('|', "\\|")
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
    let today = analysis.created_at.date_naive();

    out.push_str(&format!("# {}\n\n", ctx.title));
    out.push_str(&format!(
        "**Created:** {}\n\n",
        analysis.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    if let (Some(first), Some(latest)) = (analysis.first_commit, analysis.latest_commit) {
        out.push_str(&format!("**Commits:** {first} — {latest}\n\n"));
    }
    out.push_str(&format!(
        "**Total lines of code:** {} · **Duration:** {} ms\n\n",
        analysis.total_lines_of_code, analysis.analysis_duration_ms
    ));
    if !analysis.branches.is_empty() {
        out.push_str(&format!(
            "**Branches:** {}\n\n",
            analysis.branches.join(", ")
        ));
    }

    let files = top_files(analysis, ctx);
    out.push_str(&format!(
        "## Most changed files (top {} of {})\n\n",
        files.len(),
        analysis.file_commits.len()
    ));
    out.push_str("| Commits | LOC | Complexity | Methods | Age (months) | File |\n");
    out.push_str("|--------:|----:|-----------:|--------:|-------------:|:-----|\n");
    for f in &files {
        let age = f
            .code_age_months(today)
            .map_or_else(|| "N/A".to_string(), |a| a.to_string());
        let name = if f.file_exists {
            escape_md(&f.filename)
        } else {
            format!("~~{}~~", escape_md(&f.filename))
        };
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} |\n",
            f.commit_count,
            fmt_opt(f.lines_of_code),
            fmt_opt(f.cyclomatic_complexity),
            f.method_count,
            age,
            name,
        ));
    }
    out.push('\n');

    out.push_str("## Most changed folders\n\n");
    out.push_str("| Changes | Folder |\n|--------:|:-------|\n");
    for row in folder_rows(analysis.folders.root()) {
        out.push_str(&format!(
            "| {} | {}{} |\n",
            row.file_changes,
            "··".repeat(row.depth),
            escape_md(&row.name)
        ));
    }
    out.push('\n');

    out.push_str("## Most active (author, file) pairs\n\n");
    out.push_str("| Commits | Author | File |\n|--------:|:-------|:-----|\n");
    for uf in top_user_files(analysis, ctx) {
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            uf.commit_count,
            escape_md(&uf.username),
            escape_md(&uf.filename)
        ));
    }
    out.push('\n');

    out.push_str("## Commits and churn per day\n\n");
    out.push_str("| Date | Commits | Added | Deleted |\n|:-----|--------:|------:|--------:|\n");
    for (date, commits) in &analysis.commits_each_day {
        let added = analysis.lines_added_each_day.get(date).copied().unwrap_or(0);
        let deleted = analysis
            .lines_deleted_each_day
            .get(date)
            .copied()
            .unwrap_or(0);
        out.push_str(&format!("| {date} | {commits} | {added} | {deleted} |\n"));
    }
    out.push('\n');

    if !analysis.tags.is_empty() {
        out.push_str("## Tags\n\n| Date | Tag |\n|:-----|:----|\n");
        for (date, name) in &analysis.tags {
            out.push_str(&format!("| {date} | {} |\n", escape_md(name)));
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
#[path = "markdown_test.rs"]
mod tests;
