//! Formatting utilities for terminal output

use crate::core::{AttributeComparison, MatchKind};
use crate::game::NameSlot;

/// Emoji squares for one board row
#[must_use]
pub fn row_emoji(row: &[MatchKind; 4]) -> String {
    row.iter().map(|k| k.emoji()).collect()
}

/// Target name as the player sees it, e.g. `B _ _ _   T _ _ _`
#[must_use]
pub fn name_mask(slots: &[NameSlot]) -> String {
    slots
        .iter()
        .map(|slot| match slot {
            NameSlot::Gap => ' ',
            NameSlot::Hidden => '_',
            NameSlot::Revealed(c) => *c,
        })
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Board cell text: the guessed value, with the size arrow when there is one
#[must_use]
pub fn cell_text(cell: &AttributeComparison) -> String {
    match cell.direction {
        Some(direction) => format!("{} {}", cell.value, direction.arrow()),
        None => cell.value.clone(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Direction;

    #[test]
    fn row_emoji_in_attribute_order() {
        let row = [MatchKind::Wrong, MatchKind::Exact, MatchKind::Close, MatchKind::Wrong];
        assert_eq!(row_emoji(&row), "⬜🟩🟨⬜");
    }

    #[test]
    fn name_mask_keeps_gaps() {
        let slots = [
            NameSlot::Revealed('B'),
            NameSlot::Hidden,
            NameSlot::Gap,
            NameSlot::Hidden,
        ];
        assert_eq!(name_mask(&slots), "B _   _");
    }

    #[test]
    fn size_cell_shows_arrow() {
        let cell = AttributeComparison {
            value: "large".to_string(),
            kind: MatchKind::Close,
            direction: Some(Direction::Down),
        };
        assert_eq!(cell_text(&cell), "large ↓");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }
}
