use chrono::Weekday;

use super::*;
use crate::BikeshareError;
use crate::filter::{DayFilter, FilterCriteria, MonthFilter};
use crate::test_fixtures::{CHICAGO_CSV, WASHINGTON_CSV, chicago, washington};

fn loader() -> DatasetLoader<MemorySource> {
    DatasetLoader::new(
        MemorySource::new()
            .with_table(City::Chicago, CHICAGO_CSV)
            .with_table(City::Washington, WASHINGTON_CSV),
    )
}

fn rows(dataset: &Dataset) -> Vec<usize> {
    dataset.records().iter().map(|r| r.row).collect()
}

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn parses_all_rows_with_derived_fields() {
    let dataset = chicago();
    assert_eq!(dataset.len(), 8);
    assert_eq!(dataset.source_rows(), 8);

    let first = &dataset.records()[0];
    assert_eq!(first.row, 0);
    assert_eq!(first.month(), 1);
    assert_eq!(first.weekday(), Weekday::Mon);
    assert_eq!(first.day_name(), "Monday");
    assert_eq!(first.hour(), 8);
    assert_eq!(first.full_trip(), "Canal St ==> Clark St");
    assert_eq!(first.birth_year, Some(1985));
}

#[test]
fn blank_optional_cells_become_none() {
    let dataset = chicago();
    let third = &dataset.records()[2];
    assert_eq!(third.gender, None);
    assert_eq!(third.birth_year, None);
    assert_eq!(third.user_type.as_deref(), Some("Customer"));
}

#[test]
fn schema_flags_optional_columns() {
    assert_eq!(chicago().schema(), Schema::full());
    let schema = washington().schema();
    assert!(!schema.has_gender);
    assert!(!schema.has_birth_year);
}

#[test]
fn fractional_durations_are_kept() {
    let dataset = washington();
    assert!((dataset.records()[0].trip_duration - 489.066).abs() < f64::EPSILON);
}

#[test]
fn iso_timestamps_are_accepted() {
    let csv = "Start Time,Trip Duration,Start Station,End Station,User Type\n\
               2017-05-01T09:30:00.250,10,A,B,Subscriber\n";
    let dataset = parse_csv(City::Chicago, csv.as_bytes(), || {}).unwrap();
    assert_eq!(dataset.records()[0].hour(), 9);
}

#[test]
fn missing_required_column_is_rejected() {
    let csv = "Start Time,Start Station,End Station,User Type\n";
    let err = parse_csv(City::Chicago, csv.as_bytes(), || {}).unwrap_err();
    match err {
        BikeshareError::InvalidRecord { line, reason } => {
            assert_eq!(line, 1);
            assert!(reason.contains("Trip Duration"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn bad_timestamp_names_its_line() {
    let csv = "Start Time,Trip Duration,Start Station,End Station,User Type\n\
               2017-05-01 09:30:00,10,A,B,Subscriber\n\
               yesterday,10,A,B,Subscriber\n";
    let err = parse_csv(City::Chicago, csv.as_bytes(), || {}).unwrap_err();
    assert!(matches!(err, BikeshareError::InvalidRecord { line: 3, .. }));
}

#[test]
fn non_numeric_duration_is_rejected() {
    let csv = "Start Time,Trip Duration,Start Station,End Station,User Type\n\
               2017-05-01 09:30:00,abc,A,B,Subscriber\n";
    let err = parse_csv(City::Chicago, csv.as_bytes(), || {}).unwrap_err();
    assert!(matches!(err, BikeshareError::InvalidRecord { line: 2, .. }));
}

#[test]
fn row_callback_counts_rows() {
    let mut seen = 0;
    parse_csv(City::Chicago, CHICAGO_CSV.as_bytes(), || seen += 1).unwrap();
    assert_eq!(seen, 8);
}

#[test]
fn header_only_table_is_empty() {
    let csv = "Start Time,Trip Duration,Start Station,End Station,User Type\n";
    let dataset = parse_csv(City::Chicago, csv.as_bytes(), || {}).unwrap();
    assert!(dataset.is_empty());
}

// =============================================================================
// Filtering
// =============================================================================

#[test]
fn month_filter_keeps_only_that_month() {
    let criteria = FilterCriteria::new(City::Chicago).with_month(MonthFilter::Only(3));
    let dataset = loader().load(&criteria).unwrap();
    assert_eq!(rows(&dataset), vec![2, 3, 4]);
    assert!(dataset.records().iter().all(|r| r.month() == 3));
    assert_eq!(dataset.source_rows(), 8);
}

#[test]
fn day_filter_keeps_only_that_day() {
    let dataset = loader().load_by_name("chicago", "all", "FRIDAY").unwrap();
    assert_eq!(rows(&dataset), vec![1, 2, 5, 7]);
    assert!(dataset.records().iter().all(|r| r.day_name() == "Friday"));
}

#[test]
fn both_filters_intersect() {
    let month_only = loader().load_by_name("chicago", "march", "all").unwrap();
    let day_only = loader().load_by_name("chicago", "all", "monday").unwrap();
    let both = loader().load_by_name("chicago", "march", "monday").unwrap();

    let expected: Vec<usize> = rows(&month_only)
        .into_iter()
        .filter(|row| rows(&day_only).contains(row))
        .collect();
    assert_eq!(rows(&both), expected);
    assert_eq!(rows(&both), vec![3, 4]);
}

#[test]
fn filter_order_does_not_matter() {
    let month_first = chicago().retain_month(6).retain_day(Weekday::Mon);
    let day_first = chicago().retain_day(Weekday::Mon).retain_month(6);
    assert_eq!(month_first, day_first);
    assert_eq!(rows(&month_first), vec![6]);
}

#[test]
fn filters_may_leave_nothing() {
    let dataset = chicago().filter(MonthFilter::Only(4), DayFilter::All);
    assert!(dataset.is_empty());
    assert_eq!(dataset.city(), City::Chicago);
}

#[test]
fn unknown_city_name_fails_before_loading() {
    let err = loader().load_by_name("boston", "all", "all").unwrap_err();
    assert!(matches!(err, BikeshareError::UnknownCity(_)));
}

#[test]
fn missing_table_is_a_data_source_error() {
    let err = loader()
        .load(&FilterCriteria::new(City::NewYorkCity))
        .unwrap_err();
    assert!(matches!(err, BikeshareError::DataSource { .. }));
}

// =============================================================================
// DirectorySource
// =============================================================================

#[test]
fn directory_source_uses_default_file_names() {
    let source = DirectorySource::new("/data");
    assert_eq!(
        source.path_for(City::NewYorkCity),
        std::path::PathBuf::from("/data/new_york_city.csv")
    );
}

#[test]
fn directory_source_honours_overrides() {
    let source = DirectorySource::new("/data").with_file(City::Chicago, "chi/2017.csv");
    assert_eq!(
        source.path_for(City::Chicago),
        std::path::PathBuf::from("/data/chi/2017.csv")
    );
}

#[test]
fn directory_source_reads_files() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("washington.csv"), WASHINGTON_CSV).unwrap();

    let loader = DatasetLoader::new(DirectorySource::new(dir.path()));
    let dataset = loader.load(&FilterCriteria::new(City::Washington)).unwrap();
    assert_eq!(dataset.len(), 3);

    let err = loader.load(&FilterCriteria::new(City::Chicago)).unwrap_err();
    match err {
        BikeshareError::DataSource { path, .. } => assert!(path.ends_with("chicago.csv")),
        other => panic!("unexpected error: {other}"),
    }
}
