use crate::db::pool::DbPool;
use crate::db::queries::{completion_bounds, count_completions, count_habits};
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::date::format_local;
use std::fs;

/// `db --info`: file details plus the totals of `user_id`.
pub fn print_db_info(pool: &mut DbPool, db_path: &str, user_id: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);
    println!("{}• User:{} {}", CYAN, RESET, user_id);

    //
    // 2) TOTALS
    //
    let habits = count_habits(&pool.conn, user_id)?;
    let completions = count_completions(&pool.conn, user_id)?;
    println!("{}• Habits:{} {}{}{}", CYAN, RESET, GREEN, habits, RESET);
    println!(
        "{}• Completions:{} {}{}{}",
        CYAN, RESET, GREEN, completions, RESET
    );

    //
    // 3) COMPLETION RANGE
    //
    let bounds = completion_bounds(pool, user_id)?;
    let none = format!("{GREY}--{RESET}");

    println!("{}• Completion range:{}", CYAN, RESET);
    match &bounds {
        Some((first, last)) => {
            println!("    from: {}", format_local(first));
            println!("    to:   {}", format_local(last));
        }
        None => {
            println!("    from: {none}");
            println!("    to:   {none}");
        }
    }

    //
    // 4) AVERAGE COMPLETIONS/DAY
    //
    if let Some((first, last)) = bounds {
        let days = (last - first).num_days().max(1);
        let avg = completions as f64 / days as f64;
        println!("{}• Average completions/day:{} {:.2}", CYAN, RESET, avg);
    }

    println!();
    Ok(())
}
