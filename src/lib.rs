//! rHabits library root.
//! Exposes the CLI parser, the high-level run() function, the streak
//! engine and the storage layer.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::Done { .. } => cli::commands::done::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Streaks { .. } => cli::commands::streaks::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let mut cli = Cli::parse();

    // load the configuration once
    let mut cfg = Config::load()?;

    // --db overrides the configured database
    if let Some(custom_db) = &cli.db {
        let expanded = utils::path::expand_tilde_string(custom_db);
        cfg.database = expanded.clone();
        cli.db = Some(expanded);
    }

    dispatch(&cli, &cfg)
}
