//! Game rules and session orchestration

mod card;
pub mod hints;
mod score;
mod session;
pub mod stats;

pub use card::ShareCard;
pub use hints::{
    ATTRIBUTE_HINT_COST, AttributeHint, HintLedger, HintState, LETTER_HINT_COST, LetterHint,
};
pub use score::{BASE_SCORE, GUESS_COST, SCORE_FLOOR, score};
pub use session::{
    GameSession, Guess, GuessOutcome, NameSlot, PersistedGuess, PersistedSession, load_stats,
};
pub use stats::{PlayerStats, STATS_KEY};
