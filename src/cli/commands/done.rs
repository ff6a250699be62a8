use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::done::CompleteLogic;
use crate::db::pool::DbPool;
use crate::db::queries::find_habit;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date::parse_timestamp;
use crate::utils::formatting::days;
use chrono::Utc;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Done { habit, at, force } = cmd {
        let when = match at {
            Some(s) => parse_timestamp(s)?,
            None => Utc::now(),
        };
        let thresholds = cfg.streak.thresholds()?;

        let mut pool = DbPool::new(&cfg.database)?;
        let target = find_habit(&mut pool, &cfg.user, habit)?;
        let result = CompleteLogic::apply(&mut pool, &target, when, *force, &thresholds)?;

        success(format!(
            "'{}' completed: 🔥 {} streak (best {}, total {})",
            target.title,
            days(result.current_streak),
            result.best_streak,
            result.total_completions
        ));
    }
    Ok(())
}
