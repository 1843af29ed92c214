use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::achievement::PlayerAchievement;

/// Running totals for one player, derived from stored results on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub player_id: Uuid,
    pub player_name: String,
    pub total_games: u32,
    pub total_points: i32,
    pub wins: u32,
    pub average_difference: f64,
    pub achievements: Vec<PlayerAchievement>,
}

impl PlayerStats {
    pub fn average_points(&self) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        self.total_points as f64 / self.total_games as f64
    }

    /// Percentage of games won, 0 to 100.
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        self.wins as f64 / self.total_games as f64 * 100.0
    }

    pub fn achievement_count(&self) -> usize {
        self.achievements.len()
    }
}

/// One row of the points leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRanking {
    pub player_id: Uuid,
    pub name: String,
    pub total_points: i32,
    pub games_played: u32,
    pub average_points: f64,
    pub rank: u32,
}
