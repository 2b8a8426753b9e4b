//! Daily game session
//!
//! A `GameSession` owns one UTC day's state: the target, the ordered guesses,
//! the hint ledger and the completion flags. Every mutation is written back to
//! the injected key-value store under the day key, so a session can be resumed
//! later the same day. Aggregate stats live in the same store under `stats`
//! and are updated exactly once, when the session is won.

use super::card::ShareCard;
use super::hints::{AttributeHint, HintLedger, HintState, LetterHint};
use super::score::score;
use super::stats::{PlayerStats, STATS_KEY};
use crate::core::{Attribute, Comparison, FishEntity, compare};
use crate::daily::{self, DailySelection};
use crate::database::FishDatabase;
use crate::error::{FishdleError, Result};
use crate::storage::KeyValueStore;
use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A submitted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess<'db> {
    pub entity: &'db FishEntity,
    pub comparison: Comparison,
    pub correct: bool,
}

/// What happened to a submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct,
    Incorrect,
    /// Already guessed this session; nothing changed
    Duplicate,
    /// The session is finished; nothing changed
    AlreadyOver,
}

/// One character of the target's name as the player currently sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameSlot {
    Gap,
    Hidden,
    Revealed(char),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedGuess {
    pub entity_id: String,
    pub comparison: Comparison,
    pub correct: bool,
}

/// Stored form of a session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSession {
    pub guesses: Vec<PersistedGuess>,
    pub hints: HintState,
    pub is_over: bool,
    pub won: bool,
}

pub struct GameSession<'db, S: KeyValueStore> {
    database: &'db FishDatabase,
    store: S,
    target: &'db FishEntity,
    game_index: i64,
    date: NaiveDate,
    guesses: Vec<Guess<'db>>,
    hints: HintLedger,
    stats: PlayerStats,
    is_over: bool,
    won: bool,
}

impl<'db, S: KeyValueStore> GameSession<'db, S> {
    /// Start or resume the session for `date`
    ///
    /// A save that cannot be reconciled with the database is logged and
    /// replaced by a fresh session.
    ///
    /// # Errors
    /// Returns `FishdleError::Configuration` if the database is empty.
    pub fn start(database: &'db FishDatabase, store: S, date: NaiveDate) -> Result<Self> {
        let mut session = Self::fresh(database, store, date)?;
        match session.load_saved() {
            Ok(true) => log::info!(
                "resumed game #{} with {} guesses",
                session.game_index,
                session.guesses.len()
            ),
            Ok(false) => log::debug!("no saved session for {date}; starting fresh"),
            Err(e) if e.resets_session() => {
                log::warn!("discarding saved session for {date}: {e}");
            }
            Err(e) => return Err(e),
        }
        Ok(session)
    }

    /// Like `start`, but an unusable save is an error instead of a fresh start
    ///
    /// # Errors
    /// Returns `FishdleError::Configuration` for an empty database and
    /// `FishdleError::DataIntegrity` for a save that is malformed, references
    /// unknown fish, or belongs to a different target.
    pub fn restore(database: &'db FishDatabase, store: S, date: NaiveDate) -> Result<Self> {
        let mut session = Self::fresh(database, store, date)?;
        session.load_saved()?;
        Ok(session)
    }

    fn fresh(database: &'db FishDatabase, store: S, date: NaiveDate) -> Result<Self> {
        let DailySelection {
            entity, game_index, ..
        } = daily::select(database.as_slice(), date)?;
        let stats = load_stats(&store);

        Ok(Self {
            database,
            store,
            target: entity,
            game_index,
            date,
            guesses: Vec::new(),
            hints: HintLedger::new(entity),
            stats,
            is_over: false,
            won: false,
        })
    }

    /// Replace in-memory state with the stored session, if any
    ///
    /// State is only touched once the whole save has been validated.
    fn load_saved(&mut self) -> Result<bool> {
        let key = daily::day_key(self.date);
        let json = match self.store.get(&key) {
            Ok(Some(json)) => json,
            Ok(None) => return Ok(false),
            Err(e) => {
                log::warn!("could not read {key}: {e}");
                return Ok(false);
            }
        };

        let saved: PersistedSession = serde_json::from_str(&json)
            .map_err(|e| FishdleError::DataIntegrity(format!("malformed save {key}: {e}")))?;

        let mut guesses = Vec::with_capacity(saved.guesses.len());
        for record in saved.guesses {
            let entity = self.database.get(&record.entity_id).ok_or_else(|| {
                FishdleError::DataIntegrity(format!(
                    "save {key} references unknown fish '{}'",
                    record.entity_id
                ))
            })?;
            if record.correct != (entity.id == self.target.id) {
                return Err(FishdleError::DataIntegrity(format!(
                    "save {key} was recorded against a different target"
                )));
            }
            if guesses.iter().any(|g: &Guess<'_>| g.entity.id == entity.id) {
                return Err(FishdleError::DataIntegrity(format!(
                    "save {key} repeats guess '{}'",
                    entity.id
                )));
            }
            guesses.push(Guess {
                entity,
                comparison: record.comparison,
                correct: record.correct,
            });
        }

        let has_correct = guesses.iter().any(|g| g.correct);
        if saved.won != has_correct || (saved.won && !saved.is_over) {
            return Err(FishdleError::DataIntegrity(format!(
                "save {key} has inconsistent completion flags"
            )));
        }

        let hints = HintLedger::restore(self.target, &saved.hints)?;

        self.guesses = guesses;
        self.hints = hints;
        self.is_over = saved.is_over;
        self.won = saved.won;
        Ok(true)
    }

    /// Submit a guess
    ///
    /// # Errors
    /// - `FishdleError::NotFound` if the candidate is not in the database
    /// - `FishdleError::InvalidAttribute` if the comparison hits bad data
    ///
    /// Neither error changes the session.
    pub fn submit_guess(&mut self, candidate: &FishEntity) -> Result<GuessOutcome> {
        let entity = self
            .database
            .get(&candidate.id)
            .ok_or_else(|| FishdleError::NotFound(candidate.name.clone()))?;
        self.submit(entity)
    }

    /// Submit a guess typed as free text (common or scientific name)
    ///
    /// # Errors
    /// Same as `submit_guess`; unmatched text is `FishdleError::NotFound`.
    pub fn submit_guess_by_name(&mut self, text: &str) -> Result<GuessOutcome> {
        let entity = self.database.find_by_name(text)?;
        self.submit(entity)
    }

    fn submit(&mut self, entity: &'db FishEntity) -> Result<GuessOutcome> {
        if self.is_over {
            return Ok(GuessOutcome::AlreadyOver);
        }
        if self.has_guessed(&entity.id) {
            return Ok(GuessOutcome::Duplicate);
        }

        let comparison = compare(entity, self.target).inspect_err(|e| {
            log::error!("cannot compare '{}' with today's fish: {e}", entity.id);
        })?;
        let correct = entity.id == self.target.id;

        self.guesses.push(Guess {
            entity,
            comparison,
            correct,
        });

        if correct {
            self.is_over = true;
            self.won = true;
            log::info!(
                "game #{} won in {} guesses, score {}",
                self.game_index,
                self.guesses.len(),
                self.current_score()
            );
        }

        // Stats only count a win whose session was saved
        if self.persist() && correct {
            self.stats.record_win();
            self.persist_stats();
        } else if correct {
            log::warn!(
                "game #{} was not saved; the win is not added to stats",
                self.game_index
            );
        }

        Ok(if correct {
            GuessOutcome::Correct
        } else {
            GuessOutcome::Incorrect
        })
    }

    /// Reveal a random letter of the target's name
    ///
    /// Returns `None` if the session is over or every letter is shown.
    pub fn use_letter_hint(&mut self) -> Option<LetterHint> {
        self.use_letter_hint_with(&mut rand::rng())
    }

    pub fn use_letter_hint_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<LetterHint> {
        if self.is_over {
            return None;
        }
        let hint = self.hints.reveal_letter(rng)?;
        self.persist();
        Some(hint)
    }

    /// Reveal a random attribute of the target
    ///
    /// Returns `None` if the session is over or all attributes are shown.
    pub fn use_attribute_hint(&mut self) -> Option<AttributeHint> {
        self.use_attribute_hint_with(&mut rand::rng())
    }

    pub fn use_attribute_hint_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Option<AttributeHint> {
        if self.is_over {
            return None;
        }
        let hint = self.hints.reveal_attribute(rng)?;
        self.persist();
        Some(hint)
    }

    #[must_use]
    pub fn can_use_letter_hint(&self) -> bool {
        !self.is_over && self.hints.can_reveal_letter()
    }

    #[must_use]
    pub fn can_use_attribute_hint(&self) -> bool {
        !self.is_over && self.hints.can_reveal_attribute()
    }

    /// Score so far; only missed guesses cost points, the winning one is free
    #[must_use]
    pub fn current_score(&self) -> u32 {
        score(self.missed_guesses(), self.hints.penalty())
    }

    #[must_use]
    pub fn missed_guesses(&self) -> usize {
        self.guesses.iter().filter(|g| !g.correct).count()
    }

    #[must_use]
    pub fn has_guessed(&self, id: &str) -> bool {
        self.guesses.iter().any(|g| g.entity.id == id)
    }

    /// The target's name with unrevealed letters hidden; fully shown once over
    #[must_use]
    pub fn name_slots(&self) -> Vec<NameSlot> {
        self.target
            .name
            .chars()
            .enumerate()
            .map(|(i, c)| {
                if c.is_whitespace() {
                    NameSlot::Gap
                } else if self.is_over || self.hints.is_letter_revealed(i) {
                    NameSlot::Revealed(c)
                } else {
                    NameSlot::Hidden
                }
            })
            .collect()
    }

    /// Attributes revealed by hints, in reveal order
    #[must_use]
    pub fn revealed_attributes(&self) -> Vec<(Attribute, &str)> {
        self.hints.revealed_attributes()
    }

    /// Projection consumed by the share formatter and the board renderers
    #[must_use]
    pub fn share_card(&self) -> ShareCard {
        ShareCard {
            game_index: self.game_index,
            score: self.current_score(),
            rows: self.guesses.iter().map(|g| g.comparison.kinds()).collect(),
            won: self.won,
            letters_used: self.hints.letters_revealed(),
            attributes_used: self.hints.attributes_revealed(),
        }
    }

    /// Stored form of the current state
    #[must_use]
    pub fn snapshot(&self) -> PersistedSession {
        PersistedSession {
            guesses: self
                .guesses
                .iter()
                .map(|g| PersistedGuess {
                    entity_id: g.entity.id.clone(),
                    comparison: g.comparison.clone(),
                    correct: g.correct,
                })
                .collect(),
            hints: self.hints.state(),
            is_over: self.is_over,
            won: self.won,
        }
    }

    // Persistence is best-effort: a failed write only costs resumability.
    // Returns whether the session reached the store.
    fn persist(&mut self) -> bool {
        let key = daily::day_key(self.date);
        let written = serde_json::to_string(&self.snapshot())
            .map_err(|e| log::warn!("could not serialize {key}: {e}"))
            .and_then(|json| {
                self.store
                    .set(&key, &json)
                    .map_err(|e| log::warn!("could not save {key}: {e}"))
            });
        written.is_ok()
    }

    fn persist_stats(&mut self) {
        match serde_json::to_string(&self.stats) {
            Ok(json) => {
                if let Err(e) = self.store.set(STATS_KEY, &json) {
                    log::warn!("could not save stats: {e}");
                }
            }
            Err(e) => log::warn!("could not serialize stats: {e}"),
        }
    }

    #[must_use]
    pub const fn target(&self) -> &'db FishEntity {
        self.target
    }

    #[must_use]
    pub const fn game_index(&self) -> i64 {
        self.game_index
    }

    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn guesses(&self) -> &[Guess<'db>] {
        &self.guesses
    }

    #[must_use]
    pub const fn hints(&self) -> &HintLedger {
        &self.hints
    }

    #[must_use]
    pub const fn stats(&self) -> &PlayerStats {
        &self.stats
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.is_over
    }

    #[must_use]
    pub const fn won(&self) -> bool {
        self.won
    }

    #[must_use]
    pub const fn database(&self) -> &'db FishDatabase {
        self.database
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }
}

/// Read the aggregate stats; missing or unreadable stats start from zero
pub fn load_stats<S: KeyValueStore + ?Sized>(store: &S) -> PlayerStats {
    match store.get(STATS_KEY) {
        Ok(Some(json)) => serde_json::from_str(&json).unwrap_or_else(|e| {
            log::warn!("ignoring malformed stats: {e}");
            PlayerStats::default()
        }),
        Ok(None) => PlayerStats::default(),
        Err(e) => {
            log::warn!("could not read stats: {e}");
            PlayerStats::default()
        }
    }
}
