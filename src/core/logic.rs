use crate::core::calculator::ranking::{rank_habits, top};
use crate::core::calculator::streak::{GapThresholds, compute_all};
use crate::models::completion::CompletionEvent;
use crate::models::habit::Habit;
use crate::models::streak::RankedHabit;
use chrono::{DateTime, TimeZone};

/// Ranked streak statistics of a user's habits, ready to be rendered.
#[derive(Debug, Default, Clone)]
pub struct StreakBoard {
    pub ranked: Vec<RankedHabit>,
}

impl StreakBoard {
    pub fn top(&self, n: usize) -> &[RankedHabit] {
        top(&self.ranked, n)
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}

pub struct Core;

impl Core {
    /// Recompute every streak from scratch and rank the habits.
    pub fn build_board(
        habits: &[Habit],
        events: &[CompletionEvent],
        thresholds: &GapThresholds,
    ) -> StreakBoard {
        let results = compute_all(habits, events, thresholds);
        StreakBoard {
            ranked: rank_habits(habits, &results),
        }
    }

    /// True if `habit_id` has a completion on the calendar day of `now`,
    /// evaluated in `now`'s time zone.
    pub fn is_completed_today<Tz: TimeZone>(
        habit_id: &str,
        events: &[CompletionEvent],
        now: &DateTime<Tz>,
    ) -> bool {
        let today = now.date_naive();
        let tz = now.timezone();

        events
            .iter()
            .filter(|e| e.habit_id == habit_id)
            .any(|e| e.completed_at.with_timezone(&tz).date_naive() == today)
    }
}
