use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_cli_db, rhb, setup_test_db, temp_out};

fn add_habit(db_path: &str, title: &str, freq: &str) {
    rhb()
        .args(["--db", db_path, "add", title, "--freq", freq])
        .assert()
        .success();
}

fn done_at(db_path: &str, title: &str, at: &str) {
    rhb()
        .args(["--db", db_path, "done", title, "--at", at])
        .assert()
        .success();
}

/// Stdout of `streaks` for the given DB
fn streaks_output(db_path: &str) -> String {
    let out = rhb()
        .args(["--db", db_path, "streaks"])
        .output()
        .expect("failed to run streaks");
    assert!(out.status.success());
    String::from_utf8_lossy(&out.stdout).to_string()
}

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    rhb()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_add_and_list_habits() {
    let db_path = setup_test_db("cli_add_list");
    init_cli_db(&db_path);

    rhb()
        .args([
            "--db",
            &db_path,
            "add",
            "Meditate",
            "--description",
            "Ten minutes",
        ])
        .assert()
        .success()
        .stdout(contains("Habit 'Meditate' added"));

    add_habit(&db_path, "Journal", "weekly");

    rhb()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Meditate"))
        .stdout(contains("Journal"))
        .stdout(contains("Daily"))
        .stdout(contains("Weekly"));
}

#[test]
fn test_list_without_habits() {
    let db_path = setup_test_db("cli_list_empty");
    init_cli_db(&db_path);

    rhb()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No habits yet"));
}

#[test]
fn test_add_rejects_unknown_frequency() {
    let db_path = setup_test_db("cli_bad_freq");
    init_cli_db(&db_path);

    rhb()
        .args(["--db", &db_path, "add", "Meditate", "--freq", "yearly"])
        .assert()
        .failure();
}

#[test]
fn test_done_reports_streak() {
    let db_path = setup_test_db("cli_done");
    init_cli_db(&db_path);
    add_habit(&db_path, "Meditate", "daily");

    done_at(&db_path, "Meditate", "2025-06-01T08:00:00Z");
    done_at(&db_path, "Meditate", "2025-06-02T08:00:00Z");

    rhb()
        .args([
            "--db",
            &db_path,
            "done",
            "meditate",
            "--at",
            "2025-06-03T08:00:00Z",
        ])
        .assert()
        .success()
        .stdout(contains("3 days streak"))
        .stdout(contains("best 3, total 3"));
}

#[test]
fn test_done_same_day_requires_force() {
    let db_path = setup_test_db("cli_done_twice");
    init_cli_db(&db_path);
    add_habit(&db_path, "Meditate", "daily");

    done_at(&db_path, "Meditate", "2025-06-01T08:00:00Z");

    rhb()
        .args([
            "--db",
            &db_path,
            "done",
            "Meditate",
            "--at",
            "2025-06-01T08:00:00Z",
        ])
        .assert()
        .failure()
        .stderr(contains("already been completed"));

    rhb()
        .args([
            "--db",
            &db_path,
            "done",
            "Meditate",
            "--at",
            "2025-06-01T08:00:00Z",
            "--force",
        ])
        .assert()
        .success()
        .stdout(contains("total 2"));
}

#[test]
fn test_done_unknown_habit_fails() {
    let db_path = setup_test_db("cli_done_unknown");
    init_cli_db(&db_path);

    rhb()
        .args(["--db", &db_path, "done", "Nope"])
        .assert()
        .failure()
        .stderr(contains("Habit not found"));
}

#[test]
fn test_done_invalid_timestamp_fails() {
    let db_path = setup_test_db("cli_done_bad_at");
    init_cli_db(&db_path);
    add_habit(&db_path, "Meditate", "daily");

    rhb()
        .args(["--db", &db_path, "done", "Meditate", "--at", "someday"])
        .assert()
        .failure()
        .stderr(contains("Invalid timestamp"));
}

#[test]
fn test_streaks_ranked_by_best_streak() {
    let db_path = setup_test_db("cli_streaks");
    init_cli_db(&db_path);

    add_habit(&db_path, "Journal", "daily");
    add_habit(&db_path, "Meditate", "daily");

    done_at(&db_path, "Journal", "2025-06-01T08:00:00Z");

    for day in ["01", "02", "03"] {
        done_at(&db_path, "Meditate", &format!("2025-06-{day}T08:00:00Z"));
    }

    let stdout = streaks_output(&db_path);
    assert!(stdout.contains("Top Streaks"));
    assert!(stdout.contains("Best Streak: 3"));

    let meditate = stdout.find("Meditate").expect("Meditate listed");
    let journal = stdout.find("Journal").expect("Journal listed");
    assert!(meditate < journal, "Meditate should rank first:\n{stdout}");
}

#[test]
fn test_streaks_ties_keep_creation_order() {
    let db_path = setup_test_db("cli_streaks_ties");
    init_cli_db(&db_path);

    add_habit(&db_path, "Stretch", "daily");
    add_habit(&db_path, "Floss", "daily");

    done_at(&db_path, "Stretch", "2025-06-01T08:00:00Z");
    done_at(&db_path, "Floss", "2025-06-01T09:00:00Z");

    let stdout = streaks_output(&db_path);
    let stretch = stdout.find("Stretch").expect("Stretch listed");
    let floss = stdout.find("Floss").expect("Floss listed");
    assert!(stretch < floss, "tie should keep creation order:\n{stdout}");
}

#[test]
fn test_streaks_without_habits() {
    let db_path = setup_test_db("cli_streaks_empty");
    init_cli_db(&db_path);

    rhb()
        .args(["--db", &db_path, "streaks"])
        .assert()
        .success()
        .stdout(contains("No habits yet"))
        .stdout(contains("Top Streaks").not());
}

#[test]
fn test_delete_habit_with_force() {
    let db_path = setup_test_db("cli_del");
    init_cli_db(&db_path);
    add_habit(&db_path, "Meditate", "daily");
    done_at(&db_path, "Meditate", "2025-06-01T08:00:00Z");

    rhb()
        .args(["--db", &db_path, "del", "Meditate", "--force"])
        .assert()
        .success()
        .stdout(contains("1 completion(s) removed"));

    rhb()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No habits yet"));
}

#[test]
fn test_export_csv_and_json() {
    let db_path = setup_test_db("cli_export");
    init_cli_db(&db_path);
    add_habit(&db_path, "Meditate", "daily");
    add_habit(&db_path, "Journal", "weekly");
    done_at(&db_path, "Meditate", "2025-06-01T08:00:00Z");
    done_at(&db_path, "Meditate", "2025-06-02T08:00:00Z");

    let csv_out = temp_out("cli_export", "csv");
    rhb()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &csv_out])
        .assert()
        .success();

    let content = fs::read_to_string(&csv_out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("rank,habit_id,title,frequency,current_streak,best_streak,total_completions")
    );
    let first = lines.next().expect("first row");
    assert!(first.starts_with("1,"));
    assert!(first.contains("Meditate"));
    assert!(first.ends_with(",daily,2,2,2"));

    let json_out = temp_out("cli_export", "json");
    rhb()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &json_out,
        ])
        .assert()
        .success();

    let json = fs::read_to_string(&json_out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(rows.as_array().map(|a| a.len()), Some(2));
    assert_eq!(rows[0]["title"], "Meditate");
    assert_eq!(rows[1]["title"], "Journal");
    assert_eq!(rows[1]["best_streak"], 0);
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("cli_export_rel");
    init_cli_db(&db_path);
    add_habit(&db_path, "Meditate", "daily");

    rhb()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "csv",
            "--file",
            "relative.csv",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_log_print_shows_operations() {
    let db_path = setup_test_db("cli_log");
    init_cli_db(&db_path);
    add_habit(&db_path, "Meditate", "daily");

    rhb()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("Added daily habit 'Meditate'"));
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("cli_db_info");
    init_cli_db(&db_path);
    add_habit(&db_path, "Meditate", "daily");

    rhb()
        .args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Habits:"))
        .stdout(contains("Integrity check passed"));
}
