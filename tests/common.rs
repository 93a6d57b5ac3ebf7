#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use worklog::models::RawRow;

pub const HEADER: &str = "date,start,end,process,operator,minutes,note";

pub fn wl() -> Command {
    cargo_bin_cmd!("worklog")
}

/// Create a fresh, empty directory inside the system temp dir
pub fn setup_test_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_worklog", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path
}

/// Write an input CSV made of HEADER + `lines`
pub fn write_input(dir: &Path, lines: &[&str]) -> PathBuf {
    let path = dir.join("in.csv");
    let mut content = vec![HEADER];
    content.extend_from_slice(lines);
    fs::write(&path, content.join("\n")).expect("write input csv");
    path
}

/// Write a config file that keeps reports and the run log inside `dir`
pub fn write_config(dir: &Path, extra: &str) -> PathBuf {
    let path = dir.join("worklog.conf");
    let yaml = format!(
        "output_dir: {}\nlog_file: {}\n{}",
        dir.join("reports").display(),
        dir.join("logs").join("run.log").display(),
        extra
    );
    fs::write(&path, yaml).expect("write config");
    path
}

/// Row with every column of HEADER, in order, at line 2
pub fn full_row(
    date: &str,
    start: &str,
    end: &str,
    process: &str,
    operator: &str,
    minutes: &str,
    note: &str,
) -> RawRow {
    RawRow::from_pairs(
        2,
        [
            ("date", date),
            ("start", start),
            ("end", end),
            ("process", process),
            ("operator", operator),
            ("minutes", minutes),
            ("note", note),
        ],
    )
}
