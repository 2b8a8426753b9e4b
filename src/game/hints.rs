//! Hint ledger
//!
//! Tracks which letters of the target's name and which of its attributes have
//! been revealed. The ledger only ever grows during a session, and each reveal
//! costs points: 10 per letter, 5 per attribute.

use crate::core::{Attribute, Attributes, FishEntity};
use crate::error::{FishdleError, Result};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Score cost of revealing one letter
pub const LETTER_HINT_COST: u32 = 10;

/// Score cost of revealing one attribute
pub const ATTRIBUTE_HINT_COST: u32 = 5;

/// A revealed letter of the target's name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterHint {
    /// Character index into the display name
    pub position: usize,
    pub letter: char,
}

/// A revealed attribute of the target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeHint {
    pub attribute: Attribute,
    pub value: String,
}

/// Serializable hint state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HintState {
    pub revealed_letters: Vec<usize>,
    pub revealed_attributes: Vec<Attribute>,
}

/// Revealed letters and attributes for one session's target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintLedger {
    name: Vec<char>,
    attributes: Attributes,
    letters: BTreeSet<usize>,
    /// Reveal order is kept for display
    revealed_attributes: Vec<Attribute>,
}

impl HintLedger {
    #[must_use]
    pub fn new(target: &FishEntity) -> Self {
        Self {
            name: target.name.chars().collect(),
            attributes: target.attributes.clone(),
            letters: BTreeSet::new(),
            revealed_attributes: Vec::new(),
        }
    }

    /// Rebuild a ledger from saved state
    ///
    /// Duplicate entries collapse. Positions past the end of the name or on a
    /// space mean the save belongs to a different target.
    ///
    /// # Errors
    /// Returns `FishdleError::DataIntegrity` for an impossible letter position.
    pub fn restore(target: &FishEntity, state: &HintState) -> Result<Self> {
        let mut ledger = Self::new(target);

        for &position in &state.revealed_letters {
            match ledger.name.get(position) {
                Some(c) if !c.is_whitespace() => {
                    ledger.letters.insert(position);
                }
                _ => {
                    return Err(FishdleError::DataIntegrity(format!(
                        "letter hint position {position} is not a letter of '{}'",
                        target.name
                    )));
                }
            }
        }

        for &attribute in &state.revealed_attributes {
            if !ledger.revealed_attributes.contains(&attribute) {
                ledger.revealed_attributes.push(attribute);
            }
        }

        Ok(ledger)
    }

    #[must_use]
    pub fn state(&self) -> HintState {
        HintState {
            revealed_letters: self.letters.iter().copied().collect(),
            revealed_attributes: self.revealed_attributes.clone(),
        }
    }

    fn hidden_positions(&self) -> Vec<usize> {
        self.name
            .iter()
            .enumerate()
            .filter(|(i, c)| !c.is_whitespace() && !self.letters.contains(i))
            .map(|(i, _)| i)
            .collect()
    }

    fn hidden_attributes(&self) -> Vec<Attribute> {
        Attribute::ALL
            .into_iter()
            .filter(|a| !self.revealed_attributes.contains(a))
            .collect()
    }

    #[must_use]
    pub fn can_reveal_letter(&self) -> bool {
        self.name
            .iter()
            .enumerate()
            .any(|(i, c)| !c.is_whitespace() && !self.letters.contains(&i))
    }

    #[must_use]
    pub fn can_reveal_attribute(&self) -> bool {
        self.revealed_attributes.len() < Attribute::ALL.len()
    }

    /// Reveal a random hidden letter; `None` once every letter is shown
    pub fn reveal_letter<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<LetterHint> {
        let position = *self.hidden_positions().choose(rng)?;
        self.letters.insert(position);
        Some(LetterHint {
            position,
            letter: self.name[position],
        })
    }

    /// Reveal a random hidden attribute; `None` once all four are shown
    pub fn reveal_attribute<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<AttributeHint> {
        let attribute = *self.hidden_attributes().choose(rng)?;
        self.revealed_attributes.push(attribute);
        Some(AttributeHint {
            attribute,
            value: self.attributes.get(attribute).to_string(),
        })
    }

    #[must_use]
    pub fn letters_revealed(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn attributes_revealed(&self) -> usize {
        self.revealed_attributes.len()
    }

    #[must_use]
    pub fn is_letter_revealed(&self, position: usize) -> bool {
        self.letters.contains(&position)
    }

    /// Revealed attributes with their values, in reveal order
    #[must_use]
    pub fn revealed_attributes(&self) -> Vec<(Attribute, &str)> {
        self.revealed_attributes
            .iter()
            .map(|&a| (a, self.attributes.get(a)))
            .collect()
    }

    /// Total score penalty for hints used so far
    #[must_use]
    pub fn penalty(&self) -> u32 {
        let letters = u32::try_from(self.letters.len()).unwrap_or(u32::MAX);
        let attributes = u32::try_from(self.revealed_attributes.len()).unwrap_or(u32::MAX);
        letters
            .saturating_mul(LETTER_HINT_COST)
            .saturating_add(attributes.saturating_mul(ATTRIBUTE_HINT_COST))
    }
}
