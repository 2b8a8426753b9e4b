//! Error taxonomy for the game library
//!
//! - `Configuration`: the entity database is empty or malformed
//! - `DataIntegrity`: a persisted save cannot be reconciled with the database
//! - `InvalidAttribute`: an attribute value lies outside its defined domain
//! - `NotFound`: a free-text guess matches no fish

use crate::core::Attribute;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FishdleError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("data integrity error: {0}")]
    DataIntegrity(String),

    #[error("invalid {attribute} value '{value}'")]
    InvalidAttribute { attribute: Attribute, value: String },

    #[error("no fish matches '{0}'")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FishdleError {
    /// Whether the current session should be discarded in favour of a fresh one
    #[must_use]
    pub const fn resets_session(&self) -> bool {
        matches!(self, Self::Configuration(_) | Self::DataIntegrity(_))
    }
}

pub type Result<T> = std::result::Result<T, FishdleError>;
