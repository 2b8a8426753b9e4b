//! Daily target selection
//!
//! The target fish is derived from the UTC calendar date alone: the date is
//! turned into a `YYYYMMDD` seed, fed through Mulberry32, and the first draw
//! indexes the database. The game number counts days since 2024-01-01.

mod rng;

pub use rng::Mulberry32;

use crate::core::FishEntity;
use crate::error::{FishdleError, Result};
use chrono::{Datelike, NaiveDate, Utc};

/// First day of the game (game #1)
pub const EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2024, 1, 1) {
    Some(date) => date,
    None => panic!("invalid epoch"),
};

/// Storage key prefix for per-day sessions
pub const SESSION_KEY_PREFIX: &str = "session-";

/// The fish selected for a given day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailySelection<'a> {
    pub entity: &'a FishEntity,
    /// Position of `entity` in the database
    pub index: usize,
    pub game_index: i64,
    pub date: NaiveDate,
}

/// Seed for a date: the date written as an 8-digit number
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use fishdle::daily::date_seed;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
/// assert_eq!(date_seed(date), 20_240_305);
/// ```
#[must_use]
pub fn date_seed(date: NaiveDate) -> u32 {
    let ymd =
        i64::from(date.year()) * 10_000 + i64::from(date.month()) * 100 + i64::from(date.day());
    ymd as u32
}

/// Game number for a date; 2024-01-01 is game 1
#[must_use]
pub fn game_index(date: NaiveDate) -> i64 {
    (date - EPOCH).num_days() + 1
}

/// Storage key for the session of `date`, e.g. `session-2024-03-05`
#[must_use]
pub fn day_key(date: NaiveDate) -> String {
    format!("{SESSION_KEY_PREFIX}{}", date.format("%Y-%m-%d"))
}

/// Today's date at UTC, regardless of the local time zone
#[must_use]
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Parse a `YYYY-MM-DD` date
///
/// # Errors
/// Returns `FishdleError::Configuration` if the text is not a valid date.
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|e| FishdleError::Configuration(format!("invalid date '{text}': {e}")))
}

/// Select the fish for `date`
///
/// # Errors
/// Returns `FishdleError::Configuration` if the database is empty.
pub fn select(database: &[FishEntity], date: NaiveDate) -> Result<DailySelection<'_>> {
    let mut rng = Mulberry32::new(date_seed(date));
    let index = rng.next_index(database.len()).ok_or_else(|| {
        FishdleError::Configuration("fish database is empty; cannot pick a daily target".into())
    })?;

    log::debug!(
        "daily selection for {date}: index {index} of {}",
        database.len()
    );

    Ok(DailySelection {
        entity: &database[index],
        index,
        game_index: game_index(date),
        date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixtures::fish;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn database(len: usize) -> Vec<FishEntity> {
        (0..len)
            .map(|i| {
                fish(
                    &format!("fish-{i}"),
                    &format!("Fish {i}"),
                    ["Reef", "small", "Family", "Pacific"],
                )
            })
            .collect()
    }

    #[test]
    fn epoch_is_game_one() {
        let db = database(10);
        let selection = select(&db, date(2024, 1, 1)).unwrap();
        assert_eq!(selection.game_index, 1);
    }

    #[test]
    fn consecutive_days_increment_game_index() {
        let mut day = date(2024, 2, 27);
        let mut previous = game_index(day);
        for _ in 0..400 {
            day = day.succ_opt().unwrap();
            let current = game_index(day);
            assert_eq!(current, previous + 1);
            previous = current;
        }
    }

    #[test]
    fn leap_day_is_counted() {
        assert_eq!(game_index(date(2024, 3, 1)), 61);
        assert_eq!(game_index(date(2025, 1, 1)), 367);
    }

    #[test]
    fn days_before_epoch_are_not_positive() {
        assert_eq!(game_index(date(2023, 12, 31)), 0);
    }

    #[test]
    fn selection_is_deterministic() {
        let db = database(37);
        for offset in 0..60 {
            let day = date(2024, 5, 1) + chrono::Days::new(offset);
            let a = select(&db, day).unwrap();
            let b = select(&db, day).unwrap();
            assert_eq!(a.entity.id, b.entity.id);
            assert_eq!(a.game_index, b.game_index);
        }
    }

    #[test]
    fn reference_date_picks_reference_index() {
        // First Mulberry32 draw for seed 20240305 is 0.1198...
        let db = database(100);
        let selection = select(&db, date(2024, 3, 5)).unwrap();
        assert_eq!(selection.index, 11);
        assert_eq!(selection.entity.id, "fish-11");
    }

    #[test]
    fn empty_database_is_a_configuration_error() {
        let err = select(&[], date(2024, 3, 5)).unwrap_err();
        assert!(matches!(err, FishdleError::Configuration(_)));
    }

    #[test]
    fn day_key_format() {
        assert_eq!(day_key(date(2024, 3, 5)), "session-2024-03-05");
    }

    #[test]
    fn parse_date_accepts_iso_dates() {
        assert_eq!(parse_date("2024-03-05").unwrap(), date(2024, 3, 5));
        assert!(parse_date("03/05/2024").is_err());
    }
}
