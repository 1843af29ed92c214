use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use uuid::Uuid;

use crate::roster::Restaurant;

/// How over-guesses are treated when ranking a round.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum GameMode {
    /// Everyone is ranked by distance to the real price
    #[default]
    Closest,
    /// Guesses above the real price are disqualified
    UnderOnly,
}

impl GameMode {
    pub fn disqualifies(&self, guessed_price: f64, actual_price: f64) -> bool {
        match self {
            GameMode::Closest => false,
            GameMode::UnderOnly => guessed_price > actual_price,
        }
    }
}

/// One player's input for a round. The name is a snapshot so history stays
/// readable after the player is deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerGuess {
    pub id: Uuid,
    pub player_id: Uuid,
    pub player_name: String,
    pub guessed_price: f64,
}

impl PlayerGuess {
    pub fn new(player_id: Uuid, player_name: impl Into<String>, guessed_price: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            player_id,
            player_name: player_name.into(),
            guessed_price,
        }
    }
}

/// Outcome of one guess. `difference` is fixed at construction; `points` and
/// `rank` are filled in by scoring. The stored `difference` is written for
/// readers of the JSON but recomputed from the prices on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredGameResult")]
pub struct GameResult {
    pub id: Uuid,
    pub player_id: Uuid,
    pub player_name: String,
    pub guessed_price: f64,
    pub actual_price: f64,
    difference: f64,
    pub points: i32,
    pub rank: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredGameResult {
    id: Uuid,
    player_id: Uuid,
    player_name: String,
    guessed_price: f64,
    actual_price: f64,
    points: i32,
    rank: u32,
}

impl From<StoredGameResult> for GameResult {
    fn from(stored: StoredGameResult) -> Self {
        let mut result = GameResult::new(
            stored.player_id,
            stored.player_name,
            stored.guessed_price,
            stored.actual_price,
        );
        result.id = stored.id;
        result.points = stored.points;
        result.rank = stored.rank;
        result
    }
}

impl GameResult {
    pub fn new(
        player_id: Uuid,
        player_name: impl Into<String>,
        guessed_price: f64,
        actual_price: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            player_id,
            player_name: player_name.into(),
            guessed_price,
            actual_price,
            difference: (guessed_price - actual_price).abs(),
            points: 0,
            rank: 0,
        }
    }

    pub fn from_guess(guess: &PlayerGuess, actual_price: f64) -> Self {
        Self::new(
            guess.player_id,
            guess.player_name.clone(),
            guess.guessed_price,
            actual_price,
        )
    }

    pub fn difference(&self) -> f64 {
        self.difference
    }

    /// Distance to the real price as a percentage of it. `None` when the real
    /// price is not positive.
    pub fn percentage_difference(&self) -> Option<f64> {
        if self.actual_price > 0.0 {
            Some(self.difference / self.actual_price * 100.0)
        } else {
            None
        }
    }

    pub fn is_win(&self) -> bool {
        self.rank == 1
    }
}

/// A finished round. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: Uuid,
    pub restaurant: Restaurant,
    pub date_played: DateTime<Utc>,
    pub participants: Vec<PlayerGuess>,
    pub actual_price: f64,
    pub results: Vec<GameResult>,
    pub currency_code: String,
    #[serde(default)]
    pub game_mode: GameMode,
}

impl Game {
    pub fn has_participant(&self, player_id: Uuid) -> bool {
        self.participants.iter().any(|p| p.player_id == player_id)
    }

    pub fn result_for(&self, player_id: Uuid) -> Option<&GameResult> {
        self.results.iter().find(|r| r.player_id == player_id)
    }

    /// True when `player_id` ranked first in this game.
    pub fn won_by(&self, player_id: Uuid) -> bool {
        self.results
            .iter()
            .any(|r| r.player_id == player_id && r.is_win())
    }

    pub fn winners(&self) -> impl Iterator<Item = &GameResult> {
        self.results.iter().filter(|r| r.is_win())
    }
}
