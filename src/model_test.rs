use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn file_stat_records_commits_in_order() {
    let mut fs = FileStat::new("src/main.rs");
    fs.record_commit(date(2024, 1, 10));
    fs.record_commit(date(2024, 3, 2));
    fs.record_commit(date(2024, 2, 1));

    assert_eq!(fs.commit_count, 3);
    assert_eq!(
        fs.commit_dates,
        vec![date(2024, 1, 10), date(2024, 3, 2), date(2024, 2, 1)]
    );
    // latest is the max, not the last appended
    assert_eq!(fs.latest_commit, Some(date(2024, 3, 2)));
}

#[test]
fn code_age_in_months() {
    let mut fs = FileStat::new("a.rs");
    fs.record_commit(date(2024, 3, 15));
    assert_eq!(fs.code_age_months(date(2025, 1, 2)), Some(10));
    assert_eq!(fs.code_age_months(date(2024, 3, 30)), Some(0));
}

#[test]
fn future_dated_commit_clamps_age_to_zero() {
    let mut fs = FileStat::new("a.rs");
    fs.record_commit(date(2025, 6, 1));
    assert_eq!(fs.code_age_months(date(2024, 1, 1)), Some(0));
}

#[test]
fn code_age_without_commits_is_none() {
    let fs = FileStat::new("a.rs");
    assert_eq!(fs.code_age_months(date(2025, 1, 1)), None);
}

#[test]
fn new_file_stat_has_unset_analysis_fields() {
    let fs = FileStat::new("a.bin");
    assert_eq!(fs.lines_of_code, None);
    assert_eq!(fs.cyclomatic_complexity, None);
    assert_eq!(fs.method_count, 0);
    assert!(!fs.file_exists);
}

#[test]
fn user_file_key_is_composite() {
    assert_eq!(UserFileStat::key("src/a.rs", "alice"), "src/a.rs*alice");
    assert_ne!(
        UserFileStat::key("src/a.rs", "alice"),
        UserFileStat::key("src/a.rs", "bob")
    );
}

#[test]
fn analysis_tracks_first_and_latest_dates() {
    let mut a = Analysis::new();
    assert_eq!(a.first_commit, None);
    assert_eq!(a.latest_commit, None);

    // out-of-order observations still settle on min/max
    a.observe_commit_date(date(2023, 6, 1));
    a.observe_commit_date(date(2022, 1, 1));
    a.observe_commit_date(date(2023, 2, 2));

    assert_eq!(a.first_commit, Some(date(2022, 1, 1)));
    assert_eq!(a.latest_commit, Some(date(2023, 6, 1)));
    assert!(a.first_commit <= a.latest_commit);
}

#[test]
fn day_buckets_increment_or_insert() {
    let mut a = Analysis::new();
    a.record_commit_day(date(2024, 5, 5));
    a.record_commit_day(date(2024, 5, 5));
    a.record_commit_day(date(2024, 5, 6));

    assert_eq!(a.commits_each_day[&date(2024, 5, 5)], 2);
    assert_eq!(a.commits_each_day[&date(2024, 5, 6)], 1);

    a.record_churn(date(2024, 5, 5), 10, 3);
    a.record_churn(date(2024, 5, 5), 5, 0);
    assert_eq!(a.lines_added_each_day[&date(2024, 5, 5)], 15);
    assert_eq!(a.lines_deleted_each_day[&date(2024, 5, 5)], 3);
}

#[test]
fn analysis_serializes_to_json() {
    let mut a = Analysis::new();
    a.observe_commit_date(date(2024, 1, 1));
    a.record_commit_day(date(2024, 1, 1));
    a.file_commits
        .insert("a.rs".to_string(), FileStat::new("a.rs"));

    let json = serde_json::to_string(&a).unwrap();
    assert!(json.contains("\"commits_each_day\""));
    assert!(json.contains("\"2024-01-01\""));
}
