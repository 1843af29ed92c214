use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, instrument};
use uuid::Uuid;

use super::{aggregate, leaderboard, PlayerRanking, PlayerStats};
use crate::achievement::AchievementRepository;
use crate::game::{GameRepository, GameResult};
use crate::shared::AppError;

/// Read-only views derived from the stored games and achievements.
pub struct StatsService {
    games: Arc<GameRepository>,
    achievements: Arc<AchievementRepository>,
}

impl StatsService {
    pub fn new(games: Arc<GameRepository>, achievements: Arc<AchievementRepository>) -> Self {
        Self {
            games,
            achievements,
        }
    }

    #[instrument(skip(self))]
    pub async fn player_stats(&self) -> Result<HashMap<Uuid, PlayerStats>, AppError> {
        let games = self.games.get_all().await?;
        let achievements = self.achievements.get_all().await?;

        let results: Vec<GameResult> = games
            .into_iter()
            .flat_map(|game| game.results.into_iter())
            .collect();

        let stats = aggregate(&results, &achievements);
        debug!(players = stats.len(), "Aggregated player stats");
        Ok(stats)
    }

    /// Stats for one player, or `None` when they have no recorded results.
    pub async fn player_summary(&self, player_id: Uuid) -> Result<Option<PlayerStats>, AppError> {
        let mut stats = self.player_stats().await?;
        Ok(stats.remove(&player_id))
    }

    #[instrument(skip(self))]
    pub async fn leaderboard(&self) -> Result<Vec<PlayerRanking>, AppError> {
        let games = self.games.get_all().await?;
        Ok(leaderboard(&games))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievement::{AchievementType, PlayerAchievement};
    use crate::game::{Game, GameMode, PlayerGuess, ScoringEngine};
    use crate::roster::Restaurant;
    use crate::store::InMemoryRecordStore;
    use chrono::{Duration, Utc};

    fn game(entries: &[(Uuid, &str, f64)], actual_price: f64, days_ago: i64) -> Game {
        let participants: Vec<PlayerGuess> = entries
            .iter()
            .map(|(id, name, price)| PlayerGuess::new(*id, *name, *price))
            .collect();
        Game {
            id: Uuid::new_v4(),
            restaurant: Restaurant::new("Noodle Bar"),
            date_played: Utc::now() - Duration::days(days_ago),
            results: ScoringEngine::compute_results(&participants, actual_price, GameMode::Closest),
            participants,
            actual_price,
            currency_code: "USD".into(),
            game_mode: GameMode::Closest,
        }
    }

    async fn service_with(games: Vec<Game>, achievements: Vec<PlayerAchievement>) -> StatsService {
        let store = Arc::new(InMemoryRecordStore::new());
        let game_repo = Arc::new(GameRepository::new(store.clone()));
        let achievement_repo = Arc::new(AchievementRepository::new(store));
        for g in games {
            game_repo.save(g).await.unwrap();
        }
        achievement_repo.save_all(achievements).await.unwrap();
        StatsService::new(game_repo, achievement_repo)
    }

    #[tokio::test]
    async fn test_stats_over_stored_history() {
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        let service = service_with(
            vec![
                game(&[(alice, "Alice", 52.0), (bob, "Bob", 40.0)], 50.0, 2),
                game(&[(alice, "Alice", 30.0), (bob, "Bob", 35.0)], 36.0, 1),
            ],
            vec![PlayerAchievement::new(bob, AchievementType::FirstWin, None)],
        )
        .await;

        let stats = service.player_stats().await.unwrap();
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[&alice].total_games, 2);
        assert_eq!(stats[&alice].wins, 1);
        assert_eq!(stats[&bob].wins, 1);
        assert_eq!(stats[&bob].achievement_count(), 1);

        let summary = service.player_summary(alice).await.unwrap().unwrap();
        assert_eq!(summary.total_points, 17);
        assert!(service.player_summary(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_empty_store_gives_empty_views() {
        let service = service_with(vec![], vec![]).await;
        assert!(service.player_stats().await.unwrap().is_empty());
        assert!(service.leaderboard().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_leaderboard_from_repository() {
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        let service = service_with(
            vec![
                game(&[(alice, "Alice", 50.0), (bob, "Bob", 60.0)], 50.0, 3),
                game(&[(alice, "Alice", 21.0), (bob, "Bob", 30.0)], 20.0, 2),
            ],
            vec![],
        )
        .await;

        let board = service.leaderboard().await.unwrap();
        assert_eq!(board[0].player_id, alice);
        assert_eq!(board[0].total_points, 20);
        assert_eq!(board[1].total_points, 14);
        assert_eq!(board[1].rank, 2);
    }
}
