use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        title,
        description,
        frequency,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let habit = AddLogic::apply(
            &mut pool,
            &cfg.user,
            title,
            description.as_deref(),
            *frequency,
        )?;

        success(format!(
            "Habit '{}' added ({}, id {})",
            habit.title,
            habit.frequency.label(),
            habit.short_id()
        ));
    }
    Ok(())
}
