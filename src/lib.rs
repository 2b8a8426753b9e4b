//! Fishdle
//!
//! A daily fish guessing game. Every UTC day picks one fish from the database;
//! players guess species and learn, attribute by attribute, how close they are.
//!
//! # Quick Start
//!
//! ```rust
//! use fishdle::daily;
//! use fishdle::database::loader;
//! use fishdle::game::{GameSession, GuessOutcome};
//! use fishdle::storage::MemoryStore;
//!
//! let db = loader::embedded().unwrap();
//! let date = daily::parse_date("2024-03-05").unwrap();
//! let mut session = GameSession::start(&db, MemoryStore::new(), date).unwrap();
//!
//! let target = session.target();
//! assert_eq!(session.submit_guess(target).unwrap(), GuessOutcome::Correct);
//! assert_eq!(session.current_score(), 100);
//! ```

// Core domain types
pub mod core;

// Daily target selection
pub mod daily;

// Fish database
pub mod database;

pub mod error;

// Rules, hints, scoring and the session
pub mod game;

// Persistence backends
pub mod storage;

pub mod silhouette;

pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
