#![cfg(feature = "cli")]

use assert_cmd::Command;
use predicates::str::contains as str_contains;
use std::fs;
use tempfile::{NamedTempFile, tempdir};

#[allow(deprecated)]
fn run_cli(script: &str) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin("cli").expect("cli binary");
    cmd.write_stdin(script.to_string()).assert()
}

#[test]
fn cli_add_shows_derived_days() {
    run_cli("add 2024-06-10 night\nquit\n")
        .success()
        .stdout(str_contains("Added Night shift on 2024-06-10."))
        .stdout(str_contains("Night Shift Recovery Day"))
        .stdout(str_contains("Night Shift Preparation Day"))
        .stdout(str_contains("Regular Day"));
}

#[test]
fn cli_reports_duplicate_work_day() {
    run_cli("add 06/10/2024 day\nadd 2024-06-10 night\nquit\n")
        .success()
        .stdout(str_contains("2024-06-10 is already scheduled as a work day."));
}

#[test]
fn cli_rejects_bad_input() {
    run_cli("add 2024-13-01 day\nadd 2024-06-10 evening\nadd\nquit\n")
        .success()
        .stdout(str_contains("invalid date '2024-13-01'"))
        .stdout(str_contains("unknown shift type 'evening'"))
        .stdout(str_contains("Usage: add <date> <day|night>"));
}

#[test]
fn cli_reset_requires_work_days() {
    run_cli("reset\nadd 2024-06-10 day\nreset\nshow\nquit\n")
        .success()
        .stdout(str_contains("Nothing to reset."))
        .stdout(str_contains("Schedule cleared."))
        .stdout(str_contains("No days planned yet."));
}

#[test]
fn cli_classify_prints_recommendation() {
    run_cli("add 2024-06-10 day\nclassify 2024-06-09\nquit\n")
        .success()
        .stdout(str_contains("2024-06-09 : Day Shift Preparation Day"))
        .stdout(str_contains("Chore day          : yes (8 free hours"))
        .stdout(str_contains("  - Sleep: 10:00 PM - 6:00 AM (8 hours)"));
}

#[test]
fn cli_classify_shows_listed_kind() {
    run_cli("add 2024-06-10 night\nclassify 2024-06-11\nclassify 2024-06-08\nclassify 2024-07-01\nquit\n")
        .success()
        .stdout(str_contains("2024-06-11 : Night Shift Recovery Day\nListed as          : recovery"))
        .stdout(str_contains("2024-06-08 : Regular Day\nListed as          : productive"))
        .stdout(str_contains("2024-07-01 : Regular Day\nListed as          : not listed"));
}

#[test]
fn cli_summary_counts_days() {
    run_cli("add 2024-06-10 night\nadd 2024-06-20 day\nsummary\nquit\n")
        .success()
        .stdout(str_contains("work=2, night=1, day=1, recovery=2"));
}

#[test]
fn cli_export_to_explicit_path() {
    let tmp = NamedTempFile::new().expect("create temp file");
    let path = tmp.path().to_string_lossy().to_string();
    let script = format!("add 2024-06-10 night\nexport {}\nquit\n", path);
    run_cli(&script)
        .success()
        .stdout(str_contains("Exported 4 days to"));
    let contents = fs::read_to_string(tmp.path()).expect("read export");
    assert!(contents.starts_with("Date,Day Type,Sleep Time,Wake Time,Recommendations\n"));
    assert!(contents.contains("06/10/2024,Night Shift Work Day,9:00 AM,5:00 PM,"));
}

#[test]
#[allow(deprecated)]
fn cli_export_defaults_to_configured_directory() {
    let dir = tempdir().expect("create temp dir");
    let mut cmd = Command::cargo_bin("cli").expect("cli binary");
    cmd.env("NURSE_SLEEP_EXPORT_DIR", dir.path())
        .write_stdin("add 2024-06-10 day\nexport\nquit\n")
        .assert()
        .success()
        .stdout(str_contains("nurse-sleep-schedule-"));
    let exported: Vec<_> = fs::read_dir(dir.path())
        .expect("list export dir")
        .filter_map(Result::ok)
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(exported.len(), 1);
    assert!(exported[0].starts_with("nurse-sleep-schedule-"));
    assert!(exported[0].ends_with(".csv"));
}
