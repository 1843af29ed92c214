use uuid::Uuid;

use super::models::Game;
use crate::shared::AppError;
use crate::store::{keys, CollectionRepository, Placement, StoredRecord};

/// Stored game history, newest first.
pub type GameRepository = CollectionRepository<Game>;

impl StoredRecord for Game {
    const KEY: &'static str = keys::GAME_HISTORY;
    const ENTITY: &'static str = "Game";
    const PLACEMENT: Placement = Placement::Prepend;

    fn record_id(&self) -> Uuid {
        self.id
    }

    fn sort(items: &mut [Self]) {
        items.sort_by(|a, b| b.date_played.cmp(&a.date_played));
    }
}

impl CollectionRepository<Game> {
    pub async fn games_for_player(&self, player_id: Uuid) -> Result<Vec<Game>, AppError> {
        let games = self.get_all().await?;
        Ok(games
            .into_iter()
            .filter(|game| game.has_participant(player_id))
            .collect())
    }

    pub async fn games_for_restaurant(&self, restaurant_id: Uuid) -> Result<Vec<Game>, AppError> {
        let games = self.get_all().await?;
        Ok(games
            .into_iter()
            .filter(|game| game.restaurant.id == restaurant_id)
            .collect())
    }
}
