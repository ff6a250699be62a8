use super::habit::Habit;
use serde::Serialize;

/// Streak statistics of a single habit. Derived on every call, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StreakResult {
    pub current_streak: u32,
    pub best_streak: u32,
    pub total_completions: u32,
}

impl StreakResult {
    pub fn is_empty(&self) -> bool {
        self.total_completions == 0
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedHabit {
    pub habit: Habit,
    pub streak: StreakResult,
}
