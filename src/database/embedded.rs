//! Embedded fish database
//!
//! The default database compiled into the binary.

/// JSON array of fish records shipped with the game
pub const EMBEDDED_DATABASE: &str = include_str!("../../data/fish.json");
