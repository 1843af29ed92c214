use chrono::{Duration, Utc};
use uuid::Uuid;

use priceguesser::{Game, GameMode, Player, PlayerGuess, Restaurant, RoundSetup, ScoringEngine};

// ============================================================================
// Round Setup Utilities
// ============================================================================

/// Collects guesses for a round the way the setup screen would.
pub struct RoundBuilder {
    restaurant: Restaurant,
    guesses: Vec<PlayerGuess>,
    mode: GameMode,
}

impl RoundBuilder {
    pub fn at(restaurant: &Restaurant) -> Self {
        Self {
            restaurant: restaurant.clone(),
            guesses: vec![],
            mode: GameMode::Closest,
        }
    }

    pub fn guess(mut self, player: &Player, price: f64) -> Self {
        self.guesses
            .push(PlayerGuess::new(player.id, player.name.clone(), price));
        self
    }

    pub fn guesses(mut self, players: &[Player], prices: &[f64]) -> Self {
        for (player, price) in players.iter().zip(prices) {
            self = self.guess(player, *price);
        }
        self
    }

    pub fn under_only(mut self) -> Self {
        self.mode = GameMode::UnderOnly;
        self
    }

    pub fn bill(self, actual_price: f64) -> RoundSetup {
        RoundSetup::new(self.restaurant, self.guesses, actual_price).with_mode(self.mode)
    }
}

// ============================================================================
// Stored Game Utilities
// ============================================================================

/// Builds already-scored games for seeding history directly.
pub struct ScoredGameBuilder {
    guesses: Vec<PlayerGuess>,
    actual_price: f64,
    days_ago: i64,
}

impl ScoredGameBuilder {
    pub fn new(actual_price: f64) -> Self {
        Self {
            guesses: vec![],
            actual_price,
            days_ago: 0,
        }
    }

    pub fn guess(mut self, player: &Player, price: f64) -> Self {
        self.guesses
            .push(PlayerGuess::new(player.id, player.name.clone(), price));
        self
    }

    pub fn days_ago(mut self, days: i64) -> Self {
        self.days_ago = days;
        self
    }

    pub fn build(self) -> Game {
        Game {
            id: Uuid::new_v4(),
            restaurant: Restaurant::new("Seeded Diner"),
            date_played: Utc::now() - Duration::days(self.days_ago),
            results: ScoringEngine::compute_results(
                &self.guesses,
                self.actual_price,
                GameMode::Closest,
            ),
            participants: self.guesses,
            actual_price: self.actual_price,
            currency_code: "USD".to_string(),
            game_mode: GameMode::Closest,
        }
    }
}
