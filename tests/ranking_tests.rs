use chrono::{Duration, FixedOffset, TimeZone, Utc};
use rhabits::core::calculator::ranking::{rank_habits, top};
use rhabits::core::calculator::streak::GapThresholds;
use rhabits::core::logic::Core;
use rhabits::models::frequency::Frequency;
use rhabits::models::habit::Habit;
use rhabits::models::streak::StreakResult;
use std::collections::HashMap;

mod common;
use common::{event, events_on_days};

fn habit(title: &str) -> Habit {
    Habit::new("tester", title, "", Frequency::Daily)
}

fn best(n: u32) -> StreakResult {
    StreakResult {
        current_streak: n.min(1),
        best_streak: n,
        total_completions: n,
    }
}

fn titles(ranked: &[rhabits::models::streak::RankedHabit]) -> Vec<&str> {
    ranked.iter().map(|r| r.habit.title.as_str()).collect()
}

#[test]
fn test_rank_descending_with_stable_ties() {
    let a = habit("A");
    let b = habit("B");
    let c = habit("C");

    let mut results = HashMap::new();
    results.insert(a.id.clone(), best(2));
    results.insert(b.id.clone(), best(5));
    results.insert(c.id.clone(), best(5));

    let ranked = rank_habits(&[a, b, c], &results);
    assert_eq!(titles(&ranked), vec!["B", "C", "A"]);
}

#[test]
fn test_tie_order_follows_input_order() {
    let a = habit("A");
    let b = habit("B");
    let c = habit("C");

    let mut results = HashMap::new();
    results.insert(a.id.clone(), best(4));
    results.insert(b.id.clone(), best(4));
    results.insert(c.id.clone(), best(4));

    let ranked = rank_habits(&[c.clone(), a.clone(), b.clone()], &results);
    assert_eq!(titles(&ranked), vec!["C", "A", "B"]);
}

#[test]
fn test_missing_result_ranks_as_zero() {
    let a = habit("A");
    let ghost = habit("Ghost");
    let b = habit("B");

    let mut results = HashMap::new();
    results.insert(a.id.clone(), best(1));
    results.insert(b.id.clone(), best(3));

    let ranked = rank_habits(&[ghost, a, b], &results);
    assert_eq!(titles(&ranked), vec!["B", "A", "Ghost"]);
    assert_eq!(ranked[2].streak, StreakResult::default());
}

#[test]
fn test_rank_empty() {
    assert!(rank_habits(&[], &HashMap::new()).is_empty());
}

#[test]
fn test_top_slices_podium() {
    let habits: Vec<Habit> = ["A", "B", "C", "D"].iter().map(|t| habit(t)).collect();
    let mut results = HashMap::new();
    for (i, h) in habits.iter().enumerate() {
        results.insert(h.id.clone(), best(i as u32));
    }

    let ranked = rank_habits(&habits, &results);
    assert_eq!(titles(top(&ranked, 3)), vec!["D", "C", "B"]);
    assert_eq!(top(&ranked, 10).len(), 4);
    assert!(top(&ranked, 0).is_empty());
}

#[test]
fn test_board_recomputes_and_ranks() {
    let read = habit("Read");
    let walk = habit("Walk");
    let swim = habit("Swim");

    let mut events = events_on_days(&read.id, &[0, 1]);
    events.extend(events_on_days(&walk.id, &[0, 1, 2, 3]));
    events.extend(events_on_days(&swim.id, &[0, 1]));

    let habits = vec![read.clone(), walk.clone(), swim.clone()];
    let board = Core::build_board(&habits, &events, &GapThresholds::default());

    assert_eq!(titles(&board.ranked), vec!["Walk", "Read", "Swim"]);
    assert_eq!(board.ranked[0].streak.best_streak, 4);
    assert_eq!(titles(board.top(1)), vec!["Walk"]);

    // pure: a second call over the same snapshot gives the same board
    let again = Core::build_board(&habits, &events, &GapThresholds::default());
    assert_eq!(titles(&again.ranked), titles(&board.ranked));
}

#[test]
fn test_board_without_habits_is_empty() {
    let events = events_on_days("orphan", &[0, 1]);
    let board = Core::build_board(&[], &events, &GapThresholds::default());
    assert!(board.is_empty());
}

#[test]
fn test_is_completed_today() {
    let h = habit("Floss");
    let now = Utc.with_ymd_and_hms(2025, 3, 10, 18, 0, 0).unwrap();

    let events = vec![
        event(&h.id, now - Duration::days(1)),
        event("other", now - Duration::hours(1)),
    ];
    assert!(!Core::is_completed_today(&h.id, &events, &now));

    let events = vec![event(&h.id, Utc.with_ymd_and_hms(2025, 3, 10, 0, 5, 0).unwrap())];
    assert!(Core::is_completed_today(&h.id, &events, &now));
}

#[test]
fn test_is_completed_today_uses_callers_time_zone() {
    let h = habit("Floss");
    let tz = FixedOffset::east_opt(2 * 3600).unwrap();

    // 23:30Z on the 9th is 01:30 on the 10th at +02:00
    let completion = Utc.with_ymd_and_hms(2025, 3, 9, 23, 30, 0).unwrap();
    let events = vec![event(&h.id, completion)];

    let now_local = tz.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap();
    assert!(Core::is_completed_today(&h.id, &events, &now_local));

    let now_utc = Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap();
    assert!(!Core::is_completed_today(&h.id, &events, &now_utc));
}
