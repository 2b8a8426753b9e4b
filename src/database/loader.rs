//! Database loading utilities
//!
//! Loads the fish database from JSON, either embedded or from a file.

use super::{EMBEDDED_DATABASE, FishDatabase};
use crate::core::FishEntity;
use crate::error::{FishdleError, Result};
use std::fs;
use std::path::Path;

/// Parse a JSON array of fish records
///
/// # Errors
/// Returns `FishdleError::Configuration` if the JSON is malformed or ids are
/// empty or duplicated.
pub fn from_json(json: &str) -> Result<FishDatabase> {
    let fish: Vec<FishEntity> = serde_json::from_str(json)
        .map_err(|e| FishdleError::Configuration(format!("malformed fish database: {e}")))?;
    FishDatabase::new(fish)
}

/// Load the database from a JSON file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, or a configuration error
/// if its contents are invalid.
///
/// # Examples
/// ```no_run
/// use fishdle::database::loader::load_from_file;
///
/// let db = load_from_file("data/fish.json").unwrap();
/// println!("Loaded {} fish", db.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<FishDatabase> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let db = from_json(&content)?;
    log::info!("loaded {} fish from {}", db.len(), path.display());
    Ok(db)
}

/// Load the database, degrading to an empty one on failure
///
/// The failure is logged; starting a session on the empty database then
/// reports a configuration error instead of crashing on load.
#[must_use]
pub fn load_or_empty<P: AsRef<Path>>(path: P) -> FishDatabase {
    load_from_file(&path).unwrap_or_else(|e| {
        log::error!(
            "could not load fish database from {}: {e}",
            path.as_ref().display()
        );
        FishDatabase::empty()
    })
}

/// The database compiled into the binary
///
/// # Errors
/// Returns `FishdleError::Configuration` if the embedded JSON is invalid.
pub fn embedded() -> Result<FishDatabase> {
    from_json(EMBEDDED_DATABASE)
}
