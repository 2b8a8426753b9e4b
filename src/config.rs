//! Runtime settings
//!
//! Command-line flags (with environment fallbacks handled by clap) are
//! resolved into a `Settings` value before any game code runs.

use crate::daily;
use crate::database::{FishDatabase, loader};
use crate::error::Result;
use crate::storage::{AnyStore, FileStore, MemoryStore};
use chrono::NaiveDate;
use log::LevelFilter;
use std::path::PathBuf;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "FISHDLE_DATA_DIR";

/// Fully resolved settings for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Where sessions and stats are saved
    pub data_dir: PathBuf,
    /// Fish database file; `None` uses the embedded database
    pub database: Option<PathBuf>,
    /// Game day
    pub date: NaiveDate,
    /// Save progress to `data_dir`
    pub persist: bool,
}

impl Settings {
    /// Resolve raw flag values
    ///
    /// # Errors
    /// Returns `FishdleError::Configuration` if `date` is not `YYYY-MM-DD`.
    pub fn resolve(
        data_dir: Option<PathBuf>,
        database: Option<PathBuf>,
        date: Option<&str>,
        memory: bool,
    ) -> Result<Self> {
        let date = match date {
            Some(text) => daily::parse_date(text)?,
            None => daily::today_utc(),
        };

        Ok(Self {
            data_dir: data_dir.unwrap_or_else(default_data_dir),
            database,
            date,
            persist: !memory,
        })
    }

    /// Load the configured fish database
    ///
    /// An unreadable or invalid database file yields an empty database, which
    /// `GameSession::start` then rejects with a configuration error.
    ///
    /// # Errors
    /// Returns an error if the embedded database is invalid.
    pub fn load_database(&self) -> Result<FishDatabase> {
        match &self.database {
            Some(path) => Ok(loader::load_or_empty(path)),
            None => loader::embedded(),
        }
    }

    /// Open the store sessions are saved to
    #[must_use]
    pub fn open_store(&self) -> AnyStore {
        if self.persist {
            AnyStore::File(FileStore::new(&self.data_dir))
        } else {
            log::info!("playing without saving progress");
            AnyStore::Memory(MemoryStore::new())
        }
    }
}

/// `<platform data dir>/fishdle`, or `./.fishdle` where the platform has none
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from(".fishdle"), |dir| dir.join("fishdle"))
}

/// Default log level for a `-v` count
#[must_use]
pub const fn log_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FishdleError;
    use crate::game::GameSession;

    #[test]
    fn explicit_values_win() {
        let settings = Settings::resolve(
            Some(PathBuf::from("/tmp/fish")),
            None,
            Some("2024-03-05"),
            true,
        )
        .unwrap();
        assert_eq!(settings.data_dir, PathBuf::from("/tmp/fish"));
        assert_eq!(settings.date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert!(!settings.persist);
        assert!(matches!(settings.open_store(), AnyStore::Memory(_)));
    }

    #[test]
    fn bad_date_is_a_configuration_error() {
        let err = Settings::resolve(None, None, Some("05/03/2024"), false).unwrap_err();
        assert!(matches!(err, FishdleError::Configuration(_)));
    }

    #[test]
    fn default_data_dir_ends_in_fishdle() {
        assert!(default_data_dir().ends_with("fishdle") || default_data_dir().ends_with(".fishdle"));
    }

    #[test]
    fn embedded_database_is_the_default() {
        let settings = Settings::resolve(None, None, Some("2024-01-01"), true).unwrap();
        assert!(!settings.load_database().unwrap().is_empty());
    }

    #[test]
    fn missing_database_file_loads_empty() {
        let settings = Settings::resolve(
            None,
            Some(PathBuf::from("/nope/fish.json")),
            Some("2024-03-05"),
            true,
        )
        .unwrap();
        let db = settings.load_database().unwrap();
        assert!(db.is_empty());

        let started = GameSession::start(&db, settings.open_store(), settings.date);
        assert!(matches!(started, Err(FishdleError::Configuration(_))));
    }

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(log_level(0), LevelFilter::Warn);
        assert_eq!(log_level(2), LevelFilter::Debug);
        assert_eq!(log_level(9), LevelFilter::Trace);
    }
}
