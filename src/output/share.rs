//! Shareable result text
//!
//! A `ShareCard` is the terminal data of a session; `format_share` turns it
//! into the emoji grid players paste elsewhere. Renderers draw their boards
//! from the same `rows`, so the grid and the board always agree.

use super::formatters::row_emoji;
use crate::game::ShareCard;

/// Trailer appended to every share text
pub const SHARE_TRAILER: &str = "#Fishdle 🐟";

/// Suffix on the final row of a won game
pub const WIN_MARK: &str = "🏆";

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

/// Render the share text for a finished (or in-progress) game
///
/// # Examples
/// ```
/// use fishdle::core::MatchKind::Exact;
/// use fishdle::game::ShareCard;
/// use fishdle::output::format_share;
///
/// let card = ShareCard {
///     game_index: 42,
///     score: 95,
///     rows: vec![[Exact; 4]],
///     won: true,
///     letters_used: 0,
///     attributes_used: 1,
/// };
/// let text = format_share(&card);
/// assert!(text.starts_with("Fishdle #42 1/∞ Score: 95\n🟩🟩🟩🟩 🏆\n"));
/// ```
#[must_use]
pub fn format_share(card: &ShareCard) -> String {
    let tries = if card.won {
        card.rows.len().to_string()
    } else {
        "X".to_string()
    };

    let mut lines = Vec::with_capacity(card.rows.len() + 3);
    lines.push(format!(
        "Fishdle #{} {tries}/∞ Score: {}",
        card.game_index, card.score
    ));

    let last = card.rows.len().saturating_sub(1);
    for (i, row) in card.rows.iter().enumerate() {
        let mut line = row_emoji(row);
        if card.won && i == last {
            line.push(' ');
            line.push_str(WIN_MARK);
        }
        lines.push(line);
    }

    lines.push(format!(
        "Hints: {}, {}",
        plural(card.letters_used, "letter"),
        plural(card.attributes_used, "attribute")
    ));
    lines.push(SHARE_TRAILER.to_string());
    lines.join("\n")
}
