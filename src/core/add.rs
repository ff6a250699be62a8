use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries::insert_habit;
use crate::errors::{AppError, AppResult};
use crate::models::frequency::Frequency;
use crate::models::habit::Habit;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    pub fn apply(
        pool: &mut DbPool,
        user_id: &str,
        title: &str,
        description: Option<&str>,
        frequency: Frequency,
    ) -> AppResult<Habit> {
        if title.trim().is_empty() {
            return Err(AppError::EmptyTitle);
        }

        let habit = Habit::new(user_id, title, description.unwrap_or(""), frequency);
        insert_habit(&pool.conn, &habit)?;

        ttlog_soft(
            &pool.conn,
            "add",
            habit.short_id(),
            &format!("Added {} habit '{}'", habit.frequency.to_db_str(), habit.title),
        );

        Ok(habit)
    }
}
