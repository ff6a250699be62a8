use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Raw completion row as it comes out of storage: the timestamp is still text.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRecord {
    pub id: i64,              // ⇔ completions.id
    pub habit_id: String,     // ⇔ completions.habit_id
    pub user_id: String,      // ⇔ completions.user_id
    pub completed_at: String, // ⇔ completions.completed_at (RFC 3339)
}

/// A parsed, immutable completion event.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CompletionEvent {
    pub id: i64,
    pub habit_id: String,
    pub user_id: String,
    pub completed_at: DateTime<Utc>,
}

impl CompletionEvent {
    pub fn new(habit_id: &str, user_id: &str, completed_at: DateTime<Utc>) -> Self {
        Self {
            id: 0,
            habit_id: habit_id.to_string(),
            user_id: user_id.to_string(),
            completed_at,
        }
    }
}

impl TryFrom<&CompletionRecord> for CompletionEvent {
    type Error = AppError;

    fn try_from(rec: &CompletionRecord) -> AppResult<Self> {
        let completed_at = DateTime::parse_from_rfc3339(rec.completed_at.trim())
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|_| {
                AppError::InvalidTimestamp(format!(
                    "'{}' (completion #{} of habit {})",
                    rec.completed_at, rec.id, rec.habit_id
                ))
            })?;

        Ok(Self {
            id: rec.id,
            habit_id: rec.habit_id.clone(),
            user_id: rec.user_id.clone(),
            completed_at,
        })
    }
}

/// Parse every record, failing on the first malformed timestamp.
pub fn parse_records(records: &[CompletionRecord]) -> AppResult<Vec<CompletionEvent>> {
    records.iter().map(CompletionEvent::try_from).collect()
}
