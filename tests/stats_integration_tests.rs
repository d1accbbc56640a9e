//! Integration tests for the `stats` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn stats_prints_all_sections() {
    let fixture = TestFixture::with_cities();

    fixture
        .command()
        .args(["stats", "--city", "chicago", "--no-timing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Analysing 8 trips for chicago (month: all, day: all)"))
        .stdout(predicate::str::contains("Most Common Start Month: March"))
        .stdout(predicate::str::contains("Most Common Start Hour: 05:00 PM"))
        .stdout(predicate::str::contains("Most Frequent Trip: Canal St ==> Clark St"))
        .stdout(predicate::str::contains("Total Travel Time: 01 hours 06 minutes 45 seconds"))
        .stdout(predicate::str::contains("- There is 5 Subscriber User"))
        .stdout(predicate::str::contains("This took").not());
}

#[test]
fn stats_prints_timing_by_default() {
    let fixture = TestFixture::with_cities();

    fixture
        .command()
        .args(["stats", "--city", "chicago", "--section", "durations"])
        .assert()
        .success()
        .stdout(predicate::str::contains("This took"));
}

#[test]
fn stats_applies_month_and_day_filters() {
    let fixture = TestFixture::with_cities();

    fixture
        .command()
        .args([
            "stats", "--city", "Chicago", "--month", "March", "--day", "Monday",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Analysing 2 trips for chicago (month: March, day: Monday)",
        ));
}

#[test]
fn stats_json_matches_text_values() {
    let fixture = TestFixture::with_cities();

    let output = fixture
        .command()
        .args(["stats", "--city", "chicago", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["trips"], 8);
    assert_eq!(value["time"]["month"], "March");
    assert_eq!(value["time"]["hour_label"], "05:00 PM");
    assert_eq!(value["stations"]["trip"], "Canal St ==> Clark St");
    assert_eq!(value["durations"]["total"], "01 hours 06 minutes 45 seconds");
    assert_eq!(value["users"]["birth_years"]["value"]["earliest"], 1972);
}

#[test]
fn stats_reports_missing_columns_for_washington() {
    let fixture = TestFixture::with_cities();

    fixture
        .command()
        .args(["stats", "--city", "washington", "--section", "users"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Unfortunately Gender information is not available!"))
        .stdout(predicate::str::contains(
            "- Unfortunately Year of Birth information is not available!",
        ));
}

#[test]
fn stats_empty_selection_is_not_an_error() {
    let fixture = TestFixture::with_cities();

    fixture
        .command()
        .args(["stats", "--city", "chicago", "--month", "april"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No trips match the selected filters."))
        .stderr(predicate::str::contains("Warning"));
}

#[test]
fn stats_writes_output_file() {
    let fixture = TestFixture::with_cities();

    fixture
        .command()
        .args([
            "stats",
            "--city",
            "chicago",
            "-o",
            "out/report.json",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = fixture.read("out/report.json");
    assert!(content.contains("\"city\": \"chicago\""));
}

#[test]
fn stats_missing_data_file_exits_with_data_error() {
    let fixture = TestFixture::with_cities();

    fixture
        .command()
        .args(["stats", "--city", "new york city"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("DataSource"))
        .stderr(predicate::str::contains("new_york_city.csv"));
}

#[test]
fn stats_bad_row_names_the_line() {
    let fixture = TestFixture::new();
    fixture.create_file(
        "chicago.csv",
        "Start Time,Trip Duration,Start Station,End Station,User Type\n\
         2017-01-02 08:05:00,600,A,B,Subscriber\n\
         yesterday,600,A,B,Subscriber\n",
    );

    fixture
        .command()
        .args(["stats", "--city", "chicago"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("line 3"));
}

#[test]
fn stats_unknown_city_is_usage_error() {
    let fixture = TestFixture::with_cities();

    fixture
        .command()
        .args(["stats", "--city", "paris"])
        .assert()
        .code(2);
}

#[test]
fn stats_reads_data_dir_flag() {
    let fixture = TestFixture::new();
    fixture.create_file("trips/chicago.csv", common::CHICAGO_CSV);

    fixture
        .command()
        .args([
            "--data-dir",
            "trips",
            "stats",
            "--city",
            "chicago",
            "--section",
            "time",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Most Common Start Month: March"));
}

#[test]
fn stats_verbose_prints_load_summary() {
    let fixture = TestFixture::with_cities();

    fixture
        .command()
        .args(["-v", "stats", "--city", "chicago", "--month", "march"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Loaded 3 of 8 rows from"));
}
