//! Terminal projection of a session for sharing and rendering

use crate::core::MatchKind;

/// Everything the share text and board renderers need from a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareCard {
    pub game_index: i64,
    pub score: u32,
    /// One row per guess, attributes in habitat/size/family/region order
    pub rows: Vec<[MatchKind; 4]>,
    pub won: bool,
    pub letters_used: usize,
    pub attributes_used: usize,
}
