use std::error::Error;
use std::fmt::Write as _;
use std::path::Path;

use crate::fsio::FileAccess;
use crate::model::Analysis;

use super::{ReportContext, fmt_opt, folder_rows, top_files, top_user_files};

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
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
    let title = escape_html(&ctx.title);

    let _ = write!(
        out,
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n\
         <style>\n\
         body {{ font-family: sans-serif; margin: 2em; }}\n\
         table {{ border-collapse: collapse; margin-bottom: 2em; }}\n\
         th, td {{ border: 1px solid #ccc; padding: 4px 10px; text-align: right; }}\n\
         th {{ background: #f0f0f0; }}\n\
         td.name, th.name {{ text-align: left; }}\n\
         .deleted {{ text-decoration: line-through; color: #888; }}\n\
         </style>\n</head>\n<body>\n<h1>{title}</h1>\n"
    );

    let _ = write!(
        out,
        "<p>Created: {} · Total lines of code: {} · Duration: {} ms</p>\n",
        analysis.created_at.format("%Y-%m-%d %H:%M UTC"),
        analysis.total_lines_of_code,
        analysis.analysis_duration_ms
    );
    if let (Some(first), Some(latest)) = (analysis.first_commit, analysis.latest_commit) {
        let _ = write!(out, "<p>Commits from {first} to {latest}</p>\n");
    }

    let files = top_files(analysis, ctx);
    let _ = write!(
        out,
        "<h2>Most changed files (top {} of {})</h2>\n<table>\n\
         <tr><th>Commits</th><th>LOC</th><th>Complexity</th><th>Methods</th>\
         <th>Age (months)</th><th class=\"name\">File</th></tr>\n",
        files.len(),
        analysis.file_commits.len()
    );
    for f in &files {
        let age = f
            .code_age_months(today)
            .map_or_else(|| "N/A".to_string(), |a| a.to_string());
        let class = if f.file_exists { "name" } else { "name deleted" };
        let _ = write!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
             <td class=\"{class}\">{}</td></tr>\n",
            f.commit_count,
            fmt_opt(f.lines_of_code),
            fmt_opt(f.cyclomatic_complexity),
            f.method_count,
            age,
            escape_html(&f.filename),
        );
    }
    out.push_str("</table>\n");

    out.push_str("<h2>Most changed folders</h2>\n<table>\n<tr><th>Changes</th><th class=\"name\">Folder</th></tr>\n");
    for row in folder_rows(analysis.folders.root()) {
        let _ = write!(
            out,
            "<tr><td>{}</td><td class=\"name\">{}{}</td></tr>\n",
            row.file_changes,
            "&nbsp;&nbsp;".repeat(row.depth),
            escape_html(&row.name)
        );
    }
    out.push_str("</table>\n");

    out.push_str(
        "<h2>Most active (author, file) pairs</h2>\n<table>\n\
         <tr><th>Commits</th><th class=\"name\">Author</th><th class=\"name\">File</th></tr>\n",
    );
    for uf in top_user_files(analysis, ctx) {
        let _ = write!(
            out,
            "<tr><td>{}</td><td class=\"name\">{}</td><td class=\"name\">{}</td></tr>\n",
            uf.commit_count,
            escape_html(&uf.username),
            escape_html(&uf.filename)
        );
    }
    out.push_str("</table>\n");

    out.push_str(
        "<h2>Commits and churn per day</h2>\n<table>\n\
         <tr><th class=\"name\">Date</th><th>Commits</th><th>Added</th><th>Deleted</th></tr>\n",
    );
    for (date, commits) in &analysis.commits_each_day {
        let added = analysis.lines_added_each_day.get(date).copied().unwrap_or(0);
        let deleted = analysis
            .lines_deleted_each_day
            .get(date)
            .copied()
            .unwrap_or(0);
        let _ = write!(
            out,
            "<tr><td class=\"name\">{date}</td><td>{commits}</td><td>{added}</td><td>{deleted}</td></tr>\n"
        );
    }
    out.push_str("</table>\n");

    if !analysis.tags.is_empty() {
        out.push_str("<h2>Tags</h2>\n<table>\n<tr><th class=\"name\">Date</th><th class=\"name\">Tag</th></tr>\n");
        for (date, name) in &analysis.tags {
            let _ = write!(
                out,
                "<tr><td class=\"name\">{date}</td><td class=\"name\">{}</td></tr>\n",
                escape_html(name)
            );
        }
        out.push_str("</table>\n");
    }

    out.push_str("</body>\n</html>\n");
    out
}

#[cfg(test)]
#[path = "html_test.rs"]
mod tests;
