use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries::delete_habit;
use crate::errors::AppResult;
use crate::models::habit::Habit;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove the habit and its completion history.
    /// Returns how many completions were removed with it.
    pub fn apply(pool: &mut DbPool, habit: &Habit) -> AppResult<usize> {
        let removed = delete_habit(pool, &habit.id)?;

        ttlog_soft(
            &pool.conn,
            "del",
            habit.short_id(),
            &format!(
                "Deleted habit '{}' and {} completion(s)",
                habit.title, removed
            ),
        );

        Ok(removed)
    }
}
