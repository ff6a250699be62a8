use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::streak::GapThresholds;
use crate::core::logic::{Core, StreakBoard};
use crate::db::pool::DbPool;
use crate::db::queries::{load_completions, load_habits};
use crate::db::watch::ChangeDetector;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::{BOLD, RESET, color_for_rank, color_for_streak};
use crate::utils::formatting::pad_left;
use crate::utils::table::{Column, Table};
use chrono::Local;
use std::thread;
use std::time::Duration;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Streaks {
        top,
        watch,
        interval,
    } = cmd
    {
        let thresholds = cfg.streak.thresholds()?;
        let top_n = top.unwrap_or(cfg.top_streaks);
        let mut pool = DbPool::new(&cfg.database)?;

        let board = load_board(&mut pool, cfg, &thresholds)?;
        print_board(&board, top_n);

        if *watch {
            let mut detector = ChangeDetector::new(&mut pool)?;
            info(format!(
                "Watching for changes every {}s (Ctrl+C to stop)…",
                interval
            ));

            loop {
                thread::sleep(Duration::from_secs((*interval).max(1)));

                if detector.has_changed(&mut pool)? {
                    let board = load_board(&mut pool, cfg, &thresholds)?;
                    info(format!("Refreshed at {}", Local::now().format("%H:%M:%S")));
                    print_board(&board, top_n);
                }
            }
        }
    }
    Ok(())
}

/// Fresh snapshot → full recomputation.
fn load_board(pool: &mut DbPool, cfg: &Config, thresholds: &GapThresholds) -> AppResult<StreakBoard> {
    let habits = load_habits(pool, &cfg.user)?;
    let events = load_completions(pool, &cfg.user, None)?;
    Ok(Core::build_board(&habits, &events, thresholds))
}

fn print_board(board: &StreakBoard, top_n: usize) {
    header("🔥 Habit Streaks");

    if board.is_empty() {
        info("No habits yet. Add your first habit to get started!");
        return;
    }

    let podium = board.top(top_n);
    if !podium.is_empty() {
        println!("\n{BOLD}🎖️  Top Streaks{RESET}");
        for (i, item) in podium.iter().enumerate() {
            let rank = i + 1;
            println!(
                "  {}{}{}{}  {}  🏆 Best Streak: {}",
                color_for_rank(rank),
                BOLD,
                pad_left(&rank.to_string(), 2),
                RESET,
                item.habit.title,
                item.streak.best_streak
            );
        }
        println!();
    }

    let mut table = Table::new(vec![
        Column::new("#", 4),
        Column::new("TITLE", 24),
        Column::new("FREQ", 8),
        Column::new("🔥 CUR", 7),
        Column::new("🏆 BEST", 8),
        Column::new("✅ TOTAL", 9),
    ]);

    for (i, item) in board.ranked.iter().enumerate() {
        let rank = if i == 0 {
            "👑".to_string()
        } else {
            (i + 1).to_string()
        };
        let s = &item.streak;

        table.add_row(vec![
            rank,
            item.habit.title.clone(),
            item.habit.frequency.label().to_string(),
            format!("{}{}{}", color_for_streak(s.current_streak), s.current_streak, RESET),
            s.best_streak.to_string(),
            s.total_completions.to_string(),
        ]);
    }

    print!("{}", table.render());
}
