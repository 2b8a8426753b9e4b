//! Score calculation

/// Score before any deductions
pub const BASE_SCORE: u32 = 100;

/// Points lost per submitted guess
pub const GUESS_COST: u32 = 5;

/// Minimum score, however many guesses or hints were used
pub const SCORE_FLOOR: u32 = 10;

/// `max(10, 100 - 5 × guesses - hint_penalty)`
///
/// # Examples
/// ```
/// use fishdle::game::score;
///
/// assert_eq!(score(1, 0), 95);
/// assert_eq!(score(3, 25), 60);
/// assert_eq!(score(50, 0), 10);
/// ```
#[must_use]
pub fn score(guess_count: usize, hint_penalty: u32) -> u32 {
    let guesses = u32::try_from(guess_count).unwrap_or(u32::MAX);
    let deductions = guesses
        .saturating_mul(GUESS_COST)
        .saturating_add(hint_penalty);
    BASE_SCORE.saturating_sub(deductions).max(SCORE_FLOOR)
}
