use super::*;
use crate::report::sample_analysis;

fn ctx() -> ReportContext {
    ReportContext {
        title: "Report <with> & chars".to_string(),
        number_of_files: 50,
    }
}

#[test]
fn escape_html_special_chars() {
    assert_eq!(escape_html("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
    assert_eq!(escape_html("plain.rs"), "plain.rs");
}

#[test]
fn renders_complete_document() {
    let body = render(&ctx(), &sample_analysis());
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.ends_with("</html>\n"));
    assert!(body.contains("<h1>Report &lt;with&gt; &amp; chars</h1>"));
    assert!(body.contains("<h2>Most changed files (top 2 of 2)</h2>"));
    assert!(body.contains("<h2>Tags</h2>"));
}

#[test]
fn deleted_file_gets_deleted_class() {
    let body = render(&ctx(), &sample_analysis());
    let row = body
        .lines()
        .find(|l| l.contains("old|name.cs"))
        .expect("deleted row");
    assert!(row.contains("deleted"));
    assert!(row.contains("N/A"));
}

#[test]
fn title_is_escaped_in_head() {
    let body = render(&ctx(), &sample_analysis());
    assert!(body.contains("<title>Report &lt;with&gt; &amp; chars</title>"));
}
