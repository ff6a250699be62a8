use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::db::queries::find_habit;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { habit, force } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let target = find_habit(&mut pool, &cfg.user, habit)?;

        let prompt = format!(
            "Delete habit '{}' and all its completions? This action is irreversible.",
            target.title
        );

        if !*force && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let removed = DeleteLogic::apply(&mut pool, &target)?;
        success(format!(
            "Habit '{}' deleted ({} completion(s) removed).",
            target.title, removed
        ));
    }

    Ok(())
}
