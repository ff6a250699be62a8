use crate::core::calculator::streak::{GapThreshold, GapThresholds};
use crate::errors::{AppError, AppResult};
use crate::models::frequency::Frequency;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_user")]
    pub user: String,
    #[serde(default = "default_top_streaks")]
    pub top_streaks: usize,
    #[serde(default)]
    pub streak: StreakConfig,
}

/// Maximum gap, in days, between two completions of the same run.
/// One value per frequency class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreakConfig {
    #[serde(default = "default_gap_days")]
    pub daily_gap_days: f64,
    #[serde(default = "default_gap_days")]
    pub weekly_gap_days: f64,
    #[serde(default = "default_gap_days")]
    pub monthly_gap_days: f64,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_user() -> String {
    env::var("USER")
        .or_else(|_| env::var("USERNAME"))
        .unwrap_or_else(|_| "local".to_string())
}
fn default_top_streaks() -> usize {
    3
}
fn default_gap_days() -> f64 {
    GapThreshold::DEFAULT_DAYS
}

impl Default for StreakConfig {
    fn default() -> Self {
        Self {
            daily_gap_days: default_gap_days(),
            weekly_gap_days: default_gap_days(),
            monthly_gap_days: default_gap_days(),
        }
    }
}

impl StreakConfig {
    /// Validate the configured values and build the per-frequency thresholds.
    pub fn thresholds(&self) -> AppResult<GapThresholds> {
        let mut t = GapThresholds::default();
        t.set(Frequency::Daily, GapThreshold::from_days(self.daily_gap_days)?);
        t.set(Frequency::Weekly, GapThreshold::from_days(self.weekly_gap_days)?);
        t.set(Frequency::Monthly, GapThreshold::from_days(self.monthly_gap_days)?);
        Ok(t)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            user: default_user(),
            top_streaks: default_top_streaks(),
            streak: StreakConfig::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        let base = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        if cfg!(target_os = "windows") {
            dirs::config_dir().unwrap_or(base).join("rhabits")
        } else {
            base.join(".rhabits")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rhabits.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rhabits.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Initialize configuration and database files.
    /// Returns the database path that was configured.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        // DB path: user provided or default
        let db_path = match custom_db {
            Some(name) => {
                let p = std::path::Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => dir.join("rhabits.sqlite"),
        };

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write config file
        if !is_test {
            fs::create_dir_all(&dir)?;
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(db_path)
    }

    /// Serialize the current configuration for `config --print`.
    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::from(io::Error::other(e.to_string())))
    }
}
