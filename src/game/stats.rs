//! Aggregate player statistics across days

use serde::{Deserialize, Serialize};

/// Storage key for the aggregate stats
pub const STATS_KEY: &str = "stats";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub games_played: u32,
    pub wins: u32,
    pub current_streak: u32,
    pub max_streak: u32,
}

impl PlayerStats {
    /// Record a won game
    pub fn record_win(&mut self) {
        self.games_played += 1;
        self.wins += 1;
        self.current_streak += 1;
        self.max_streak = self.max_streak.max(self.current_streak);
    }

    /// Win percentage (0-100)
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.games_played) * 100.0
        }
    }
}
