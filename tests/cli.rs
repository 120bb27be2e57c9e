use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

const FRIDAY_LINE: &str =
    "07-03-2025,Friday,5:07,5:30,6:31,12:40,13:00,13:15,15:52,16:05,18:22,18:27,19:42,19:55";

fn timetable() -> String {
    format!(
        "\
Istiqlal Mosque Prayer Times,,,,,,,,,,,,,
Date,Day,Fajr,Iqama,Sunrise,Dhuhr,Iqama,Jummah,Asr,Iqama,Maghrib,Iqama,Isha,Iqama
06-03-2025,Thursday,5:09,5:30,6:33,12:40,13:00,,15:51,16:05,18:21,18:26,19:41,19:55
{FRIDAY_LINE}
"
    )
}

struct Fixture {
    dir: TempDir,
    table: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempdir().expect("tempdir");
        let table = dir.path().join("prayer_times.csv");
        fs::write(&table, timetable()).expect("write table");
        Self { dir, table }
    }

    // Points at a config that does not exist so the user's own config is never read
    fn config(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    fn cmd(&self, table: &Path) -> assert_cmd::Command {
        let mut cmd = cargo_bin_cmd!("iqama");
        cmd.arg("--config")
            .arg(self.config())
            .arg("--table")
            .arg(table);
        cmd
    }
}

#[test]
fn times_json_reports_active_jummah_and_countdown() {
    let fx = Fixture::new();
    fx.cmd(&fx.table)
        .args(["times", "--json", "--at", "2025-03-07T13:20"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""status": "ready""#))
        .stdout(predicate::str::contains(r#""next_label": "Next: Asr in 2h 32m""#))
        .stdout(predicate::str::contains(r#""time": "13:15""#));
}

#[test]
fn times_after_isha_points_to_tomorrow() {
    let fx = Fixture::new();
    fx.cmd(&fx.table)
        .args(["times", "--at", "2025-03-06T21:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Athan at 5:09"))
        .stdout(predicate::str::contains("Next: Fajr (Tomorrow)"));
}

#[test]
fn times_without_row_shows_no_data() {
    let fx = Fixture::new();
    fx.cmd(&fx.table)
        .args(["times", "--at", "2025-04-01T09:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No data for today"));
}

#[test]
fn missing_table_fails_with_context() {
    let fx = Fixture::new();
    let absent = fx.dir.path().join("absent.csv");
    fx.cmd(&absent)
        .args(["times", "--at", "2025-03-07T09:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Loading timetable"))
        .stderr(predicate::str::contains("absent.csv"));
}

#[test]
fn row_prints_normalised_record() {
    let fx = Fixture::new();
    fx.cmd(&fx.table)
        .args(["row", "07-03-2025"])
        .assert()
        .success()
        .stdout(format!("{FRIDAY_LINE}\n"));
}

#[test]
fn row_keeps_zero_padded_hours() {
    let fx = Fixture::new();
    let padded_line =
        "07-03-2025,Friday,05:07,05:30,06:31,12:40,13:00,13:15,15:52,16:05,18:22,18:27,19:42,19:55";
    let padded = fx.dir.path().join("padded.csv");
    fs::write(&padded, format!("Istiqlal Mosque\nDate,Day\n{padded_line}\n")).expect("write table");

    fx.cmd(&padded)
        .args(["row", "07-03-2025"])
        .assert()
        .success()
        .stdout(format!("{padded_line}\n"));
}

#[test]
fn row_outside_table_names_covered_range() {
    let fx = Fixture::new();
    fx.cmd(&fx.table)
        .args(["row", "01-01-2025"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("table covers 06-03-2025 to 07-03-2025"));
}

#[test]
fn init_writes_config_once() {
    let fx = Fixture::new();
    fx.cmd(&fx.table).arg("init").assert().success();

    let written = fs::read_to_string(fx.config()).expect("config written");
    assert!(written.contains("refresh_secs = 60"));
    assert!(written.contains(r#"highlight = "until-next-athan""#));

    fx.cmd(&fx.table)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}
