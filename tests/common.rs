#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Duration, TimeZone, Utc};
use rhabits::db::initialize::init_db;
use rhabits::db::pool::DbPool;
use rhabits::models::completion::CompletionEvent;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rhb() -> Command {
    cargo_bin_cmd!("rhabits")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rhabits.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a DB through the CLI (test mode: no config file written)
pub fn init_cli_db(db_path: &str) {
    rhb()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Open a fresh, migrated database through the library API
pub fn open_test_pool(name: &str) -> (DbPool, String) {
    let db_path = setup_test_db(name);
    let pool = DbPool::new(&db_path).expect("open db");
    init_db(&pool.conn).expect("init db");
    (pool, db_path)
}

/// 2025-01-01T08:00:00Z
pub fn day0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 8, 0, 0).unwrap()
}

pub fn at_day(day: i64) -> DateTime<Utc> {
    day0() + Duration::days(day)
}

pub fn event(habit_id: &str, at: DateTime<Utc>) -> CompletionEvent {
    CompletionEvent::new(habit_id, "tester", at)
}

/// One event per listed day offset, all for `habit_id`
pub fn events_on_days(habit_id: &str, days: &[i64]) -> Vec<CompletionEvent> {
    days.iter().map(|d| event(habit_id, at_day(*d))).collect()
}
