use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::{load_completions, load_habits};
use crate::errors::AppResult;
use crate::models::habit::Habit;
use crate::ui::messages::{header, info, success};
use crate::utils::colors::{GREEN, GREY, RESET, color_for_streak};
use crate::utils::date::{format_local, start_of_today_utc};
use crate::utils::table::{Column, Table};
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { today } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let habits = load_habits(&mut pool, &cfg.user)?;
        if habits.is_empty() {
            info("No habits yet. Add your first habit to get started!");
            return Ok(());
        }

        let todays = load_completions(&mut pool, &cfg.user, start_of_today_utc())?;
        let now = Local::now();

        let rows: Vec<(&Habit, bool)> = habits
            .iter()
            .map(|h| (h, Core::is_completed_today(&h.id, &todays, &now)))
            .filter(|(_, done)| !*today || !*done)
            .collect();

        header("🔥 Today's Habits");

        if rows.is_empty() {
            success("All habits completed today!");
            return Ok(());
        }

        print_habits(&rows);
    }
    Ok(())
}

fn print_habits(rows: &[(&Habit, bool)]) {
    let mut table = Table::new(vec![
        Column::new("ID", 8),
        Column::new("TITLE", 24),
        Column::new("FREQ", 8),
        Column::new("STREAK", 7),
        Column::new("TODAY", 5),
        Column::new("LAST", 16),
    ]);

    for (habit, done) in rows {
        let streak = format!(
            "{}{}{}",
            color_for_streak(habit.streak_count),
            habit.streak_count,
            RESET
        );
        let mark = if *done {
            format!("{GREEN}✔{RESET}")
        } else {
            format!("{GREY}·{RESET}")
        };
        let last = habit
            .last_completed
            .as_ref()
            .map(format_local)
            .unwrap_or_else(|| format!("{GREY}--{RESET}"));

        table.add_row(vec![
            habit.short_id().to_string(),
            habit.title.clone(),
            habit.frequency.label().to_string(),
            streak,
            mark,
            last,
        ]);
    }

    print!("{}", table.render());
}
