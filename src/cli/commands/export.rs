use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries::{load_completions, load_habits};
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde_string;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let thresholds = cfg.streak.thresholds()?;
        let mut pool = DbPool::new(&cfg.database)?;

        let habits = load_habits(&mut pool, &cfg.user)?;
        let events = load_completions(&mut pool, &cfg.user, None)?;
        let board = Core::build_board(&habits, &events, &thresholds);

        let file = expand_tilde_string(file);
        let rows = ExportLogic::export(&board, *format, &file, *force)?;

        if rows > 0 {
            ttlog_soft(
                &pool.conn,
                "export",
                format.as_str(),
                &format!("Exported {} habit(s) to {}", rows, file),
            );
        }
    }
    Ok(())
}
