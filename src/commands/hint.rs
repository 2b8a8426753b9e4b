//! Hint requests shared by the line-mode and one-shot commands

use crate::game::{AttributeHint, GameSession, LetterHint};
use crate::storage::KeyValueStore;
use clap::ValueEnum;

/// Which kind of hint to buy
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HintKind {
    /// Reveal one letter of the fish's name
    Letter,
    /// Reveal one of the fish's attributes
    Attribute,
}

impl HintKind {
    /// Parse a typed command such as `letter`, `l`, `attr` or `a`
    #[must_use]
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "letter" | "l" => Some(Self::Letter),
            "attribute" | "attr" | "a" => Some(Self::Attribute),
            _ => None,
        }
    }
}

/// What a hint request produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintResult {
    Letter(LetterHint),
    Attribute(AttributeHint),
    /// Game over, or nothing of that kind left to reveal
    Unavailable(HintKind),
}

/// Buy a hint of `kind` for the current session
pub fn take_hint<S: KeyValueStore>(session: &mut GameSession<'_, S>, kind: HintKind) -> HintResult {
    let result = match kind {
        HintKind::Letter => session.use_letter_hint().map(HintResult::Letter),
        HintKind::Attribute => session.use_attribute_hint().map(HintResult::Attribute),
    };
    result.unwrap_or(HintResult::Unavailable(kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixtures::{clownfish, goldfish};
    use crate::daily;
    use crate::database::FishDatabase;
    use crate::storage::MemoryStore;

    #[test]
    fn typed_hint_names() {
        assert_eq!(HintKind::from_input("L"), Some(HintKind::Letter));
        assert_eq!(HintKind::from_input(" attr "), Some(HintKind::Attribute));
        assert_eq!(HintKind::from_input("colour"), None);
    }

    #[test]
    fn attribute_hints_run_out() {
        let db = FishDatabase::new(vec![clownfish(), goldfish()]).unwrap();
        let mut session = GameSession::start(&db, MemoryStore::new(), daily::EPOCH).unwrap();

        for _ in 0..4 {
            assert!(matches!(
                take_hint(&mut session, HintKind::Attribute),
                HintResult::Attribute(_)
            ));
        }
        assert_eq!(
            take_hint(&mut session, HintKind::Attribute),
            HintResult::Unavailable(HintKind::Attribute)
        );
    }
}
