// src/export/model.rs

use crate::models::streak::RankedHabit;
use serde::Serialize;

/// Flat row of the streak board, one per habit.
#[derive(Serialize, Clone, Debug)]
pub struct StreakExport {
    pub rank: usize,
    pub habit_id: String,
    pub title: String,
    pub frequency: String,
    pub current_streak: u32,
    pub best_streak: u32,
    pub total_completions: u32,
}

impl StreakExport {
    pub fn from_ranked(ranked: &[RankedHabit]) -> Vec<Self> {
        ranked
            .iter()
            .enumerate()
            .map(|(i, r)| StreakExport {
                rank: i + 1,
                habit_id: r.habit.id.clone(),
                title: r.habit.title.clone(),
                frequency: r.habit.frequency.to_db_str().to_string(),
                current_streak: r.streak.current_streak,
                best_streak: r.streak.best_streak,
                total_completions: r.streak.total_completions,
            })
            .collect()
    }
}
