use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{table}')"))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `habits` table.
fn create_habits_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS habits (
            id             TEXT PRIMARY KEY,
            user_id        TEXT NOT NULL,
            title          TEXT NOT NULL,
            description    TEXT NOT NULL DEFAULT '',
            frequency      TEXT NOT NULL DEFAULT 'daily'
                           CHECK(frequency IN ('daily','weekly','monthly')),
            streak_count   INTEGER NOT NULL DEFAULT 0,
            last_completed TEXT,
            created_at     TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_habits_user ON habits(user_id);
        "#,
    )?;
    Ok(())
}

/// Create the `completions` table.
fn create_completions_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS completions (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            habit_id     TEXT NOT NULL REFERENCES habits(id) ON DELETE CASCADE,
            user_id      TEXT NOT NULL,
            completed_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_completions_user ON completions(user_id);
        CREATE INDEX IF NOT EXISTS idx_completions_habit_time ON completions(habit_id, completed_at);
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_migration(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Databases created before the streak cache existed lack
/// `streak_count` / `last_completed` on `habits`.
fn migrate_add_streak_cache(conn: &Connection) -> Result<()> {
    let version = "20250301_0002_habit_streak_cache";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    let mut altered = false;

    if !has_column(conn, "habits", "streak_count")? {
        conn.execute(
            "ALTER TABLE habits ADD COLUMN streak_count INTEGER NOT NULL DEFAULT 0;",
            [],
        )?;
        altered = true;
    }
    if !has_column(conn, "habits", "last_completed")? {
        conn.execute("ALTER TABLE habits ADD COLUMN last_completed TEXT;", [])?;
        altered = true;
    }

    mark_migration(conn, version, "Added streak cache columns to habits")?;

    if altered {
        success(format!(
            "Migration applied: {} → streak cache columns on habits",
            version
        ));
    }

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if !table_exists(conn, "habits")? {
        create_habits_table(conn)?;
        success("Created habits table.");
    }

    if !table_exists(conn, "completions")? {
        create_completions_table(conn)?;
        success("Created completions table.");
    }

    migrate_add_streak_cache(conn)?;

    Ok(())
}
