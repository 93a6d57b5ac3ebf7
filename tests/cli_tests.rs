use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{setup_test_dir, wl, write_config, write_input};

#[test]
fn test_build_uses_minutes_and_writes_daily_summary() {
    let dir = setup_test_dir("build_minutes");
    let input = write_input(&dir, &["2026-02-13,,,ミキサー準備,A,25,test"]);
    let out = dir.join("reports");
    let cfg = write_config(&dir, "");

    wl()
        .args(["--config", cfg.to_str().unwrap(), "build", "--input"])
        .arg(&input)
        .arg("--out")
        .arg(&out)
        .assert()
        .code(0)
        .stdout(contains("BUILD DONE"));

    let daily = fs::read_to_string(out.join("summary_daily.csv")).expect("read daily");
    assert!(daily.contains("2026-02-13,25,1"));
}

#[test]
fn test_build_calculates_minutes_from_start_end() {
    let dir = setup_test_dir("build_start_end");
    let input = write_input(&dir, &["2026-02-13,09:00,09:40,ミキサー準備,A,,test"]);
    let out = dir.join("reports");
    let cfg = write_config(&dir, "");

    wl()
        .args(["--config", cfg.to_str().unwrap(), "build", "--input"])
        .arg(&input)
        .arg("--out")
        .arg(&out)
        .assert()
        .code(0);

    let daily = fs::read_to_string(out.join("summary_daily.csv")).expect("read daily");
    assert!(daily.starts_with("date,total_minutes,entry_count,process_breakdown"));
    assert!(daily.contains("2026-02-13,40,1,ミキサー準備=40"));

    let process = fs::read_to_string(out.join("summary_process.csv")).expect("read process");
    assert!(process.starts_with("process,total_minutes,entry_count,avg_minutes,max_minutes"));
    assert!(process.contains("ミキサー準備,40,1,40"));
}

#[test]
fn test_build_with_errors_writes_everything_and_exits_2() {
    let dir = setup_test_dir("build_with_errors");
    let input = write_input(
        &dir,
        &[
            "2026-02-13,09:00,09:40,ミキサー準備,A,,test",
            "2026-02-13,xx:yy,09:40,ミキサー準備,A,,test",
            "2026-02-13,,,ミキサー準備,A,,test",
        ],
    );
    let out = dir.join("reports");
    let cfg = write_config(&dir, "");

    wl()
        .args(["--config", cfg.to_str().unwrap(), "build", "--json", "--input"])
        .arg(&input)
        .arg("--out")
        .arg(&out)
        .assert()
        .code(2)
        .stdout(contains("BUILD DONE (with errors)"));

    let errors = fs::read_to_string(out.join("errors.csv")).expect("read errors");
    let lines: Vec<&str> = errors.lines().collect();
    assert_eq!(lines[0], "line_number,reason_code,detail,raw");
    assert!(lines[1].starts_with("3,INVALID_TIME_FORMAT,"));
    assert!(lines[2].starts_with("4,MISSING_TIME_INFORMATION,"));
    assert!(errors.contains("xx:yy"));

    let daily = fs::read_to_string(out.join("summary_daily.csv")).expect("read daily");
    assert!(daily.contains("2026-02-13,40,1"));

    let html = fs::read_to_string(out.join("report.html")).expect("read html");
    assert!(html.contains("error rows: 2"));
    assert!(html.contains("<td>ミキサー準備</td>"));

    let json = fs::read_to_string(out.join("report.json")).expect("read json");
    let report: serde_json::Value = serde_json::from_str(&json).expect("parse json");
    assert_eq!(report["error_count"], 2);
    assert_eq!(report["valid_count"], 1);
    assert_eq!(report["process"][0]["total_minutes"], 40);
}

#[test]
fn test_build_without_valid_rows_writes_empty_summaries() {
    let dir = setup_test_dir("build_no_valid");
    let input = write_input(&dir, &[",,,,,,"]);
    let out = dir.join("reports");
    let cfg = write_config(&dir, "");

    wl()
        .args(["--config", cfg.to_str().unwrap(), "build", "--input"])
        .arg(&input)
        .arg("--out")
        .arg(&out)
        .assert()
        .code(2);

    let daily = fs::read_to_string(out.join("summary_daily.csv")).expect("read daily");
    assert_eq!(daily.trim_end(), "date,total_minutes,entry_count,process_breakdown");
    assert!(out.join("report.html").exists());
}

#[test]
fn test_build_escapes_html() {
    let dir = setup_test_dir("build_html_escape");
    let input = write_input(&dir, &["2026-02-13,,,<b>mix</b>,A,5,"]);
    let out = dir.join("reports");
    let cfg = write_config(&dir, "");

    wl()
        .args(["--config", cfg.to_str().unwrap(), "build", "--input"])
        .arg(&input)
        .arg("--out")
        .arg(&out)
        .assert()
        .success();

    let html = fs::read_to_string(out.join("report.html")).expect("read html");
    assert!(html.contains("&lt;b&gt;mix&lt;/b&gt;"));
    assert!(!html.contains("<b>mix</b>"));
}

#[test]
fn test_build_precedence_flag_overrides_config() {
    let dir = setup_test_dir("build_precedence");
    let input = write_input(&dir, &["2026-02-13,09:00,10:00,mix,A,30,"]);
    let out = dir.join("reports");
    let cfg = write_config(&dir, "");

    wl()
        .args(["--config", cfg.to_str().unwrap(), "build", "--precedence", "minutes", "--input"])
        .arg(&input)
        .arg("--out")
        .arg(&out)
        .assert()
        .success();

    let daily = fs::read_to_string(out.join("summary_daily.csv")).expect("read daily");
    assert!(daily.contains("2026-02-13,30,1"));
}

#[test]
fn test_build_precedence_from_config() {
    let dir = setup_test_dir("build_precedence_cfg");
    let input = write_input(&dir, &["2026-02-13,09:00,10:00,mix,A,30,"]);
    let cfg = write_config(&dir, "time_precedence: minutes\n");

    // no --out: reports go to output_dir from the config
    wl()
        .args(["--config", cfg.to_str().unwrap(), "build", "--input"])
        .arg(&input)
        .assert()
        .success();

    let daily = fs::read_to_string(dir.join("reports").join("summary_daily.csv")).expect("read");
    assert!(daily.contains("2026-02-13,30,1"));
}

#[test]
fn test_build_writes_run_log() {
    let dir = setup_test_dir("build_run_log");
    let input = write_input(&dir, &["2026-02-13,,,mix,A,25,"]);
    let cfg = write_config(&dir, "");

    wl()
        .args(["--config", cfg.to_str().unwrap(), "build", "--input"])
        .arg(&input)
        .assert()
        .success();

    let log = fs::read_to_string(dir.join("logs").join("run.log")).expect("read run log");
    assert!(log.contains("[INFO] build: start"));
    assert!(log.contains("rows=1 valid=1 errors=0"));
    assert!(log.contains("[INFO] build: finished"));
}

#[test]
fn test_build_missing_input_is_fatal() {
    let dir = setup_test_dir("build_missing_input");
    let cfg = write_config(&dir, "");

    wl()
        .args(["--config", cfg.to_str().unwrap(), "build", "--input"])
        .arg(dir.join("nope.csv"))
        .assert()
        .code(1)
        .stderr(contains("I/O error"));
}

#[test]
fn test_validate_clean_file() {
    let dir = setup_test_dir("validate_clean");
    let input = write_input(
        &dir,
        &["2026-02-13,09:00,09:10,mix,A,,", "2026-02-13,,,mix,A,5,"],
    );
    let errors = dir.join("errors.csv");
    let cfg = write_config(&dir, "");

    wl()
        .args(["--config", cfg.to_str().unwrap(), "validate", "--input"])
        .arg(&input)
        .arg("--errors")
        .arg(&errors)
        .assert()
        .code(0)
        .stdout(contains("VALID: no errors."));

    let content = fs::read_to_string(&errors).expect("read errors");
    assert_eq!(content.trim_end(), "line_number,reason_code,detail,raw");
}

#[test]
fn test_validate_reports_row_errors() {
    let dir = setup_test_dir("validate_row_errors");
    let input = write_input(
        &dir,
        &[
            "2026-02-13,,,ミキサー準備,A,25,",
            "2026-02-13,,,,A,25,",
            "2026-02-13,09:00,,mix,A,,",
            "2026-02-13,10:00,09:00,mix,A,,",
        ],
    );
    let errors = dir.join("errors.csv");
    let cfg = write_config(&dir, "");

    wl()
        .args(["--config", cfg.to_str().unwrap(), "validate", "--input"])
        .arg(&input)
        .arg("--errors")
        .arg(&errors)
        .assert()
        .code(2)
        .stdout(contains("INVALID: 3 error(s)."));

    let mut rdr = csv::Reader::from_path(&errors).expect("open errors");
    let rows: Vec<(String, String)> = rdr
        .records()
        .map(|r| {
            let r = r.expect("record");
            (r[0].to_string(), r[1].to_string())
        })
        .collect();
    assert_eq!(
        rows,
        vec![
            ("3".to_string(), "MISSING_REQUIRED_FIELD".to_string()),
            ("4".to_string(), "MISSING_TIME_INFORMATION".to_string()),
            ("5".to_string(), "NON_POSITIVE_DURATION".to_string()),
        ]
    );
}

#[test]
fn test_validate_raw_row_is_kept_for_audit() {
    let dir = setup_test_dir("validate_raw_row");
    let input = write_input(&dir, &["2026/02/13,,,mix,A,25,メモ"]);
    let errors = dir.join("errors.csv");
    let cfg = write_config(&dir, "");

    wl()
        .args(["--config", cfg.to_str().unwrap(), "validate", "--input"])
        .arg(&input)
        .arg("--errors")
        .arg(&errors)
        .assert()
        .code(2);

    let mut rdr = csv::Reader::from_path(&errors).expect("open errors");
    let record = rdr.records().next().expect("one record").expect("record");
    assert_eq!(&record[1], "INVALID_DATE");

    let raw: serde_json::Value = serde_json::from_str(&record[3]).expect("raw is json");
    assert_eq!(raw["date"], "2026/02/13");
    assert_eq!(raw["note"], "メモ");
}

#[test]
fn test_validate_writes_file_error_on_no_header() {
    let dir = setup_test_dir("validate_no_header");
    let input = dir.join("broken.csv");
    fs::write(&input, "").expect("write empty input");
    let errors = dir.join("errors.csv");
    let cfg = write_config(&dir, "");

    wl()
        .args(["--config", cfg.to_str().unwrap(), "validate", "--input"])
        .arg(&input)
        .arg("--errors")
        .arg(&errors)
        .assert()
        .code(1)
        .stderr(contains("CSV has no header row"));

    let txt = fs::read_to_string(&errors).expect("read errors");
    assert!(txt.contains("FILE_ERROR"));
    assert!(txt.contains("CSV has no header row"));
}

#[test]
fn test_validate_missing_header_columns() {
    let dir = setup_test_dir("validate_missing_columns");
    let input = dir.join("in.csv");
    fs::write(&input, "date,minutes\n2026-02-13,10\n").expect("write input");
    let errors = dir.join("errors.csv");
    let cfg = write_config(&dir, "");

    wl()
        .args(["--config", cfg.to_str().unwrap(), "validate", "--input"])
        .arg(&input)
        .arg("--errors")
        .arg(&errors)
        .assert()
        .code(1)
        .stderr(contains("missing required columns").and(contains("process,operator")));
}

#[test]
fn test_validate_zero_minutes_policy_from_config() {
    let dir = setup_test_dir("validate_zero_minutes");
    let input = write_input(&dir, &["2026-02-13,,,mix,A,0,"]);
    let errors = dir.join("errors.csv");

    let accept = write_config(&dir, "");
    wl()
        .args(["--config", accept.to_str().unwrap(), "validate", "--input"])
        .arg(&input)
        .arg("--errors")
        .arg(&errors)
        .assert()
        .code(0);

    let reject = write_config(&dir, "allow_zero_minutes: false\n");
    wl()
        .args(["--config", reject.to_str().unwrap(), "validate", "--input"])
        .arg(&input)
        .arg("--errors")
        .arg(&errors)
        .assert()
        .code(2);

    let txt = fs::read_to_string(&errors).expect("read errors");
    assert!(txt.contains("INVALID_MINUTES"));
}

#[test]
fn test_config_init_and_print() {
    let dir = setup_test_dir("config_init_print");
    let cfg = dir.join("nested").join("worklog.conf");

    wl()
        .args(["--config", cfg.to_str().unwrap(), "config", "--init"])
        .assert()
        .success();
    assert!(cfg.exists());

    // second init without --force refuses to overwrite
    wl()
        .args(["--config", cfg.to_str().unwrap(), "config", "--init"])
        .assert()
        .code(1)
        .stderr(contains("already exists"));

    wl()
        .args(["--config", cfg.to_str().unwrap(), "config", "--print"])
        .assert()
        .success()
        .stdout(contains("time_precedence: start_end").and(contains("allow_zero_minutes: true")));
}

#[test]
fn test_broken_config_is_fatal() {
    let dir = setup_test_dir("config_broken");
    let cfg = dir.join("worklog.conf");
    fs::write(&cfg, "time_precedence: sometimes\n").expect("write config");

    wl()
        .args(["--config", cfg.to_str().unwrap(), "config", "--print"])
        .assert()
        .code(1)
        .stderr(contains("Configuration error"));
}

#[test]
fn test_validate_keeps_input_error_when_error_report_is_unwritable() {
    let dir = setup_test_dir("validate_unwritable_errors");
    let input = dir.join("broken.csv");
    fs::write(&input, "").expect("write empty input");
    // parent of the error report is a plain file
    let blocker = dir.join("blocker");
    fs::write(&blocker, "x").expect("write blocker");
    let errors = blocker.join("errors.csv");
    let cfg = write_config(&dir, "");

    wl()
        .args(["--config", cfg.to_str().unwrap(), "validate", "--input"])
        .arg(&input)
        .arg("--errors")
        .arg(&errors)
        .assert()
        .code(1)
        .stderr(contains("CSV has no header row"));

    let log = fs::read_to_string(dir.join("logs").join("run.log")).expect("read run log");
    assert!(log.contains("[ERROR] validate: file_error"));
    assert!(log.contains("CSV has no header row"));
}

#[test]
fn test_validate_rejects_repeated_header_columns() {
    let dir = setup_test_dir("validate_duplicate_columns");
    let input = dir.join("in.csv");
    fs::write(&input, "date,process,operator,minutes,minutes\n2026-02-13,P,A,abc,5\n")
        .expect("write input");
    let errors = dir.join("errors.csv");
    let cfg = write_config(&dir, "");

    wl()
        .args(["--config", cfg.to_str().unwrap(), "validate", "--input"])
        .arg(&input)
        .arg("--errors")
        .arg(&errors)
        .assert()
        .code(1)
        .stderr(contains("CSV header repeats columns: minutes"));

    let txt = fs::read_to_string(&errors).expect("read errors");
    assert!(txt.contains("FILE_ERROR"));
}
