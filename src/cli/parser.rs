use crate::export::ExportFormat;
use crate::models::frequency::Frequency;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rHabits
/// CLI application to track habits and streaks with SQLite
#[derive(Parser)]
#[command(
    name = "rhabits",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple habit tracker CLI: mark habits done and rank them by streak using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a new habit
    Add {
        /// Habit title
        title: String,

        #[arg(long, short, help = "Optional description")]
        description: Option<String>,

        #[arg(
            long = "freq",
            short,
            value_enum,
            default_value = "daily",
            help = "Recurrence: daily, weekly or monthly"
        )]
        frequency: Frequency,
    },

    /// Delete a habit and its completion history
    Del {
        /// Habit id, id prefix or title
        habit: String,

        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },

    /// Mark a habit as completed
    Done {
        /// Habit id, id prefix or title
        habit: String,

        #[arg(
            long = "at",
            value_name = "WHEN",
            help = "Completion time (RFC 3339, 'YYYY-MM-DD HH:MM' or 'YYYY-MM-DD'); default: now"
        )]
        at: Option<String>,

        #[arg(long, short = 'f', help = "Record it even if already completed that day")]
        force: bool,
    },

    /// List habits
    List {
        #[arg(long = "today", help = "Show only habits not yet completed today")]
        today: bool,
    },

    /// Show habit streaks ranked by best streak
    Streaks {
        #[arg(long, value_name = "N", help = "Size of the top ranking (default from config)")]
        top: Option<usize>,

        #[arg(long, help = "Keep running and refresh whenever the database changes")]
        watch: bool,

        #[arg(
            long,
            value_name = "SECONDS",
            default_value_t = 2,
            requires = "watch",
            help = "Polling interval for --watch"
        )]
        interval: u64,
    },

    /// Export the streak board
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
