//! CLI argument definitions for the `strata` command.
//!
//! One flat argument set: the tool does one thing — walk a repository's
//! history and write reports in the requested formats.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(
    name = "strata",
    version,
    about = "Git history metrics: commit frequency, churn, rename-aware file stats, complexity",
    long_about = "\
Walk a git repository's full commit history and aggregate longitudinal
metrics: per-file and per-folder change counts (rename-aware), per-author
activity, commits and line churn per day, and static metrics for files
still in the working tree (lines of code, cyclomatic complexity and method
count for Rust sources).

Reports are written to the output folder in every requested format.

Examples:
  strata -o reports                       # text report for the CWD's repo
  strata -r ../proj -o out -f json html   # JSON + HTML
  strata -o out --ignore lock --ignore svg
  strata -o out -n 100 --title \"My Project\""
)]
pub struct Cli {
    /// Root folder of the repository to analyze
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Output folder for the generated reports
    #[arg(short, long)]
    pub output: PathBuf,

    /// Base filename (without extension) for the report files
    #[arg(short = 'a', long, default_value = "strata-report")]
    pub report_filename: String,

    /// Report format(s) to generate
    #[arg(short = 'f', long = "format", value_enum, num_args = 1.., default_values_t = [OutputFormat::Text])]
    pub formats: Vec<OutputFormat>,

    /// Number of files to include in the most-changed lists
    #[arg(short = 'n', long, default_value = "50")]
    pub number_of_files: usize,

    /// Title shown at the top of the reports
    #[arg(short, long, default_value = "Strata")]
    pub title: String,

    /// File extension(s) to exclude from every statistic (e.g. lock)
    #[arg(long = "ignore")]
    pub ignored_extensions: Vec<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Markdown,
    Json,
    Html,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Markdown => "md",
            Self::Json => "json",
            Self::Html => "html",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_invocation() {
        let cli = Cli::try_parse_from(["strata", "-o", "out"]).unwrap();
        assert_eq!(cli.root, PathBuf::from("."));
        assert_eq!(cli.formats, vec![OutputFormat::Text]);
        assert_eq!(cli.number_of_files, 50);
        assert!(cli.ignored_extensions.is_empty());
    }

    #[test]
    fn parses_multiple_formats() {
        let cli = Cli::try_parse_from(["strata", "-o", "out", "-f", "json", "html"]).unwrap();
        assert_eq!(cli.formats, vec![OutputFormat::Json, OutputFormat::Html]);
    }

    #[test]
    fn parses_repeated_ignores() {
        let cli =
            Cli::try_parse_from(["strata", "-o", "out", "--ignore", "lock", "--ignore", "svg"])
                .unwrap();
        assert_eq!(cli.ignored_extensions, vec!["lock", "svg"]);
    }

    #[test]
    fn output_is_required() {
        assert!(Cli::try_parse_from(["strata"]).is_err());
    }

    #[test]
    fn format_extensions() {
        assert_eq!(OutputFormat::Text.extension(), "txt");
        assert_eq!(OutputFormat::Markdown.extension(), "md");
        assert_eq!(OutputFormat::Json.extension(), "json");
        assert_eq!(OutputFormat::Html.extension(), "html");
    }
}
