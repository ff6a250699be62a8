use crate::core::calculator::streak::{GapThresholds, compute_streak_for};
use crate::core::logic::Core;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_completion, load_completions, update_habit_streak};
use crate::errors::{AppError, AppResult};
use crate::models::completion::CompletionEvent;
use crate::models::habit::Habit;
use crate::models::streak::StreakResult;
use chrono::{DateTime, Local, Utc};

/// High-level business logic for the `done` command.
pub struct CompleteLogic;

impl CompleteLogic {
    /// Record a completion of `habit` at `at` and refresh its cached streak.
    ///
    /// Without `force`, a second completion on the same local day is refused.
    pub fn apply(
        pool: &mut DbPool,
        habit: &Habit,
        at: DateTime<Utc>,
        force: bool,
        thresholds: &GapThresholds,
    ) -> AppResult<StreakResult> {
        let mut events = load_completions(pool, &habit.user_id, None)?;

        if !force && Core::is_completed_today(&habit.id, &events, &at.with_timezone(&Local)) {
            return Err(AppError::AlreadyCompletedToday(habit.title.clone()));
        }

        // the completion and the cached streak are stored together or not at all
        let tx = pool.conn.transaction()?;

        let mut ev = CompletionEvent::new(&habit.id, &habit.user_id, at);
        ev.id = insert_completion(&tx, &ev)?;
        events.push(ev);

        let threshold = thresholds.for_frequency(habit.frequency);
        let result = compute_streak_for(&habit.id, &events, threshold);

        let last = events
            .iter()
            .filter(|e| e.habit_id == habit.id)
            .map(|e| e.completed_at)
            .max();
        update_habit_streak(&tx, &habit.id, result.current_streak, last.as_ref())?;
        tx.commit()?;

        ttlog_soft(
            &pool.conn,
            "done",
            habit.short_id(),
            &format!(
                "Completed '{}' (streak {}, best {})",
                habit.title, result.current_streak, result.best_streak
            ),
        );

        Ok(result)
    }
}
