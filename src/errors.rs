//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid frequency: {0} (expected daily, weekly or monthly)")]
    InvalidFrequency(String),

    #[error("Invalid gap threshold: {0}")]
    InvalidThreshold(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Habit not found: {0}")]
    HabitNotFound(String),

    #[error("Habit reference is ambiguous: {0}")]
    AmbiguousHabit(String),

    #[error("Habit title cannot be empty")]
    EmptyTitle,

    #[error("Habit '{0}' has already been completed today (use --force to record it anyway)")]
    AlreadyCompletedToday(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
