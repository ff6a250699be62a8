//! Ranking of habits by best streak.

use crate::models::habit::Habit;
use crate::models::streak::{RankedHabit, StreakResult};
use std::collections::HashMap;

/// Sort habits descending by `best_streak`.
///
/// Ties keep the order in which habits were supplied (stable sort), which
/// decides the podium. A habit without an entry in `results` ranks as zero.
pub fn rank_habits(habits: &[Habit], results: &HashMap<String, StreakResult>) -> Vec<RankedHabit> {
    let mut ranked: Vec<RankedHabit> = habits
        .iter()
        .map(|h| RankedHabit {
            habit: h.clone(),
            streak: results.get(&h.id).copied().unwrap_or_default(),
        })
        .collect();

    ranked.sort_by(|a, b| b.streak.best_streak.cmp(&a.streak.best_streak));
    ranked
}

/// First `n` entries of a ranking.
pub fn top(ranked: &[RankedHabit], n: usize) -> &[RankedHabit] {
    &ranked[..n.min(ranked.len())]
}
