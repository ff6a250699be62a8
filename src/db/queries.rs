use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::completion::{CompletionEvent, CompletionRecord, parse_records};
use crate::models::frequency::Frequency;
use crate::models::habit::Habit;
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{Connection, Result, Row, params};

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}

fn parse_utc(idx: usize, raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| conversion_error(idx, AppError::InvalidTimestamp(raw.to_string())))
}

/// Format used for every timestamp written by this crate.
pub fn to_db_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn map_habit_row(row: &Row) -> Result<Habit> {
    let freq_str: String = row.get("frequency")?;
    let frequency = Frequency::from_db_str(&freq_str)
        .ok_or_else(|| conversion_error(4, AppError::InvalidFrequency(freq_str.clone())))?;

    let created_str: String = row.get("created_at")?;
    let created_at = parse_utc(7, &created_str)?;

    let last_completed = match row.get::<_, Option<String>>("last_completed")? {
        Some(s) if !s.trim().is_empty() => Some(parse_utc(6, &s)?),
        _ => None,
    };

    Ok(Habit {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        frequency,
        streak_count: row.get("streak_count")?,
        last_completed,
        created_at,
    })
}

pub fn map_completion_row(row: &Row) -> Result<CompletionRecord> {
    Ok(CompletionRecord {
        id: row.get("id")?,
        habit_id: row.get("habit_id")?,
        user_id: row.get("user_id")?,
        completed_at: row.get("completed_at")?,
    })
}

pub fn insert_habit(conn: &Connection, habit: &Habit) -> AppResult<()> {
    conn.execute(
        "INSERT INTO habits (id, user_id, title, description, frequency, streak_count, last_completed, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            habit.id,
            habit.user_id,
            habit.title,
            habit.description,
            habit.frequency.to_db_str(),
            habit.streak_count,
            habit.last_completed.as_ref().map(to_db_timestamp),
            to_db_timestamp(&habit.created_at),
        ],
    )?;
    Ok(())
}

/// All habits of `user_id`, in creation order.
pub fn load_habits(pool: &mut DbPool, user_id: &str) -> AppResult<Vec<Habit>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM habits
         WHERE user_id = ?1
         ORDER BY created_at ASC, rowid ASC",
    )?;

    let rows = stmt.query_map([user_id], map_habit_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Shortest id prefix accepted as a habit reference.
pub const MIN_ID_PREFIX: usize = 4;

/// Resolve a habit reference typed on the command line.
///
/// `key` is tried, in order, as the full id, the title (case-insensitive) and
/// a unique id prefix of at least [`MIN_ID_PREFIX`] characters.
pub fn find_habit(pool: &mut DbPool, user_id: &str, key: &str) -> AppResult<Habit> {
    let key = key.trim();
    if key.is_empty() {
        return Err(AppError::HabitNotFound(key.to_string()));
    }

    let habits = load_habits(pool, user_id)?;

    if let Some(h) = habits.iter().find(|h| h.id == key) {
        return Ok(h.clone());
    }

    let by_title: Vec<&Habit> = habits
        .iter()
        .filter(|h| h.title.eq_ignore_ascii_case(key))
        .collect();
    match by_title.len() {
        1 => return Ok(by_title[0].clone()),
        n if n > 1 => {
            return Err(AppError::AmbiguousHabit(format!(
                "{} habits are titled '{}', use the id instead",
                n, key
            )));
        }
        _ => {}
    }

    if key.chars().count() < MIN_ID_PREFIX {
        return Err(AppError::HabitNotFound(key.to_string()));
    }

    let by_prefix: Vec<&Habit> = habits.iter().filter(|h| h.id.starts_with(key)).collect();
    match by_prefix.len() {
        1 => Ok(by_prefix[0].clone()),
        0 => Err(AppError::HabitNotFound(key.to_string())),
        n => Err(AppError::AmbiguousHabit(format!(
            "'{}' matches {} habit ids",
            key, n
        ))),
    }
}

/// Delete a habit together with all its completions. Returns the number of
/// completions removed.
pub fn delete_habit(pool: &mut DbPool, habit_id: &str) -> AppResult<usize> {
    let tx = pool.conn.transaction()?;
    let removed = tx.execute("DELETE FROM completions WHERE habit_id = ?1", [habit_id])?;
    let n = tx.execute("DELETE FROM habits WHERE id = ?1", [habit_id])?;
    tx.commit()?;

    if n == 0 {
        return Err(AppError::HabitNotFound(habit_id.to_string()));
    }
    Ok(removed)
}

pub fn insert_completion(conn: &Connection, ev: &CompletionEvent) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO completions (habit_id, user_id, completed_at)
         VALUES (?1, ?2, ?3)",
        params![ev.habit_id, ev.user_id, to_db_timestamp(&ev.completed_at)],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Raw completion rows of `user_id`, timestamps still unparsed.
pub fn load_completion_records(pool: &mut DbPool, user_id: &str) -> AppResult<Vec<CompletionRecord>> {
    let mut stmt = pool.conn.prepare(
        "SELECT id, habit_id, user_id, completed_at FROM completions
         WHERE user_id = ?1
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([user_id], map_completion_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Parsed completions of `user_id`, optionally only those at or after `since`.
pub fn load_completions(
    pool: &mut DbPool,
    user_id: &str,
    since: Option<DateTime<Utc>>,
) -> AppResult<Vec<CompletionEvent>> {
    let records = load_completion_records(pool, user_id)?;
    let mut events = parse_records(&records)?;

    if let Some(lower) = since {
        events.retain(|e| e.completed_at >= lower);
    }
    Ok(events)
}

/// Refresh the cached streak shown by `list`.
pub fn update_habit_streak(
    conn: &Connection,
    habit_id: &str,
    streak_count: u32,
    last_completed: Option<&DateTime<Utc>>,
) -> AppResult<()> {
    conn.execute(
        "UPDATE habits SET streak_count = ?1, last_completed = ?2 WHERE id = ?3",
        params![streak_count, last_completed.map(to_db_timestamp), habit_id],
    )?;
    Ok(())
}

pub fn load_log(pool: &mut DbPool) -> Result<Vec<(i64, String, String, String, String)>> {
    let mut stmt = pool
        .conn
        .prepare_cached("SELECT id, date, operation, target, message FROM log ORDER BY id ASC")?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            row.get::<_, String>(4)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Habits owned by `user_id`.
pub fn count_habits(conn: &Connection, user_id: &str) -> Result<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM habits WHERE user_id = ?1",
        [user_id],
        |row| row.get(0),
    )
}

/// Completions recorded by `user_id`.
pub fn count_completions(conn: &Connection, user_id: &str) -> Result<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM completions WHERE user_id = ?1",
        [user_id],
        |row| row.get(0),
    )
}

/// Earliest and latest completion of `user_id`, compared as instants.
pub fn completion_bounds(
    pool: &mut DbPool,
    user_id: &str,
) -> AppResult<Option<(DateTime<Utc>, DateTime<Utc>)>> {
    let events = load_completions(pool, user_id, None)?;

    let first = events.iter().map(|e| e.completed_at).min();
    let last = events.iter().map(|e| e.completed_at).max();

    Ok(first.zip(last))
}
