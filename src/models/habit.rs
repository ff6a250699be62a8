use super::frequency::Frequency;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Habit {
    pub id: String,                              // ⇔ habits.id (TEXT, uuid v4)
    pub user_id: String,                         // ⇔ habits.user_id
    pub title: String,                           // ⇔ habits.title
    pub description: String,                     // ⇔ habits.description (default '')
    pub frequency: Frequency,                    // ⇔ habits.frequency ('daily' | 'weekly' | 'monthly')
    pub streak_count: u32,                       // ⇔ habits.streak_count (cached, display only)
    pub last_completed: Option<DateTime<Utc>>,   // ⇔ habits.last_completed (RFC 3339 or NULL)
    pub created_at: DateTime<Utc>,               // ⇔ habits.created_at (RFC 3339)
}

impl Habit {
    /// Build a brand-new habit for `user_id` with a fresh uuid.
    /// - `streak_count = 0`
    /// - `last_completed = None`
    /// - `created_at = now()`
    pub fn new(user_id: &str, title: &str, description: &str, frequency: Frequency) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            title: title.trim().to_string(),
            description: description.trim().to_string(),
            frequency,
            streak_count: 0,
            last_completed: None,
            created_at: Utc::now(),
        }
    }

    /// First 8 characters of the id, enough to reference a habit from the CLI.
    pub fn short_id(&self) -> &str {
        self.id.get(..8).unwrap_or(&self.id)
    }
}
