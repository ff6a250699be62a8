//! Streak computation over a snapshot of completion events.
//!
//! A run is a maximal sequence of completions where each one follows the
//! previous by at most the gap threshold, measured as exact elapsed time.
//! The current streak is the run that contains the most recent completion,
//! regardless of how long ago that completion happened.

use crate::errors::{AppError, AppResult};
use crate::models::completion::{CompletionEvent, CompletionRecord, parse_records};
use crate::models::frequency::Frequency;
use crate::models::habit::Habit;
use crate::models::streak::StreakResult;
use chrono::{DateTime, TimeDelta, Utc};
use std::collections::HashMap;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Maximum elapsed time between two consecutive completions of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GapThreshold(TimeDelta);

impl GapThreshold {
    pub const DEFAULT_DAYS: f64 = 1.5;

    pub fn from_days(days: f64) -> AppResult<Self> {
        if !days.is_finite() || days <= 0.0 {
            return Err(AppError::InvalidThreshold(format!(
                "{days} days (must be a positive number)"
            )));
        }

        let millis = (days * MILLIS_PER_DAY).round() as i64;
        TimeDelta::try_milliseconds(millis)
            .map(Self)
            .ok_or_else(|| AppError::InvalidThreshold(format!("{days} days is out of range")))
    }

    pub fn as_delta(&self) -> TimeDelta {
        self.0
    }
}

impl Default for GapThreshold {
    fn default() -> Self {
        // 36 hours
        Self(TimeDelta::hours(36))
    }
}

/// One threshold per frequency class. All default to 1.5 days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GapThresholds {
    pub daily: GapThreshold,
    pub weekly: GapThreshold,
    pub monthly: GapThreshold,
}

impl GapThresholds {
    pub fn for_frequency(&self, frequency: Frequency) -> GapThreshold {
        match frequency {
            Frequency::Daily => self.daily,
            Frequency::Weekly => self.weekly,
            Frequency::Monthly => self.monthly,
        }
    }

    pub fn set(&mut self, frequency: Frequency, threshold: GapThreshold) {
        match frequency {
            Frequency::Daily => self.daily = threshold,
            Frequency::Weekly => self.weekly = threshold,
            Frequency::Monthly => self.monthly = threshold,
        }
    }
}

/// Compute current/best/total for the completions of a single habit.
///
/// Input order is irrelevant and duplicates are counted. Never fails.
pub fn compute_streak(events: &[CompletionEvent], threshold: GapThreshold) -> StreakResult {
    let timestamps: Vec<DateTime<Utc>> = events.iter().map(|e| e.completed_at).collect();
    streak_from_timestamps(timestamps, threshold)
}

/// Same as [`compute_streak`] with the 1.5-day threshold.
pub fn compute_streak_default(events: &[CompletionEvent]) -> StreakResult {
    compute_streak(events, GapThreshold::default())
}

/// Compute the streak of `habit_id` out of a mixed collection of events.
pub fn compute_streak_for(
    habit_id: &str,
    events: &[CompletionEvent],
    threshold: GapThreshold,
) -> StreakResult {
    let timestamps: Vec<DateTime<Utc>> = events
        .iter()
        .filter(|e| e.habit_id == habit_id)
        .map(|e| e.completed_at)
        .collect();
    streak_from_timestamps(timestamps, threshold)
}

/// Parse raw storage records and compute their streak.
/// A malformed timestamp aborts with `InvalidTimestamp`; nothing is dropped.
pub fn compute_streak_from_records(
    records: &[CompletionRecord],
    threshold: GapThreshold,
) -> AppResult<StreakResult> {
    let events = parse_records(records)?;
    Ok(compute_streak(&events, threshold))
}

/// Streak of every habit in `habits`, each one with its frequency threshold.
/// Events referencing unknown habits are ignored.
pub fn compute_all(
    habits: &[Habit],
    events: &[CompletionEvent],
    thresholds: &GapThresholds,
) -> HashMap<String, StreakResult> {
    let mut by_habit: HashMap<&str, Vec<DateTime<Utc>>> = HashMap::new();
    for ev in events {
        by_habit
            .entry(ev.habit_id.as_str())
            .or_default()
            .push(ev.completed_at);
    }

    habits
        .iter()
        .map(|h| {
            let timestamps = by_habit.remove(h.id.as_str()).unwrap_or_default();
            let threshold = thresholds.for_frequency(h.frequency);
            (h.id.clone(), streak_from_timestamps(timestamps, threshold))
        })
        .collect()
}

fn streak_from_timestamps(mut timestamps: Vec<DateTime<Utc>>, threshold: GapThreshold) -> StreakResult {
    if timestamps.is_empty() {
        return StreakResult::default();
    }

    timestamps.sort();

    let limit = threshold.as_delta();
    let mut current_run: u32 = 1;
    let mut best: u32 = 1;

    for w in timestamps.windows(2) {
        let gap = w[1] - w[0];

        if gap <= limit {
            current_run += 1;
        } else {
            current_run = 1;
        }

        best = best.max(current_run);
    }

    StreakResult {
        current_streak: current_run,
        best_streak: best,
        total_completions: u32::try_from(timestamps.len()).unwrap_or(u32::MAX),
    }
}
