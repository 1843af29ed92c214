use chrono::Utc;
use std::sync::Arc;
use tokio::sync::Mutex as AsyncMutex;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use super::models::{Game, GameMode, PlayerGuess};
use super::repository::GameRepository;
use super::scoring::ScoringEngine;
use crate::achievement::{AchievementEvaluator, AchievementRepository, PlayerAchievement};
use crate::config::AppConfig;
use crate::identity::IdGenerator;
use crate::roster::Restaurant;
use crate::shared::AppError;
use crate::validation::{ValidationError, Validator};

/// Everything picked on the setup screen plus the revealed bill.
#[derive(Debug, Clone)]
pub struct RoundSetup {
    pub restaurant: Option<Restaurant>,
    pub guesses: Vec<PlayerGuess>,
    pub actual_price: f64,
    pub mode: GameMode,
}

impl RoundSetup {
    pub fn new(restaurant: Restaurant, guesses: Vec<PlayerGuess>, actual_price: f64) -> Self {
        Self {
            restaurant: Some(restaurant),
            guesses,
            actual_price,
            mode: GameMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }
}

#[derive(Debug, Clone)]
pub struct CompletedRound {
    pub game: Game,
    pub new_achievements: Vec<PlayerAchievement>,
}

pub struct GameService {
    games: Arc<GameRepository>,
    achievements: Arc<AchievementRepository>,
    evaluator: AchievementEvaluator,
    ids: Arc<dyn IdGenerator>,
    currency_code: String,
    min_players: usize,
    /// Held from the game write through the achievement write
    round_lock: AsyncMutex<()>,
}

impl GameService {
    pub fn new(
        games: Arc<GameRepository>,
        achievements: Arc<AchievementRepository>,
        ids: Arc<dyn IdGenerator>,
        config: &AppConfig,
    ) -> Self {
        Self {
            games,
            achievements,
            evaluator: AchievementEvaluator::default(),
            ids,
            currency_code: config.currency_code.clone(),
            min_players: config.min_players,
            round_lock: AsyncMutex::new(()),
        }
    }

    pub fn with_evaluator(mut self, evaluator: AchievementEvaluator) -> Self {
        self.evaluator = evaluator;
        self
    }

    /// Scores a finished round, stores it and hands out achievements.
    ///
    /// The game is persisted before achievements are evaluated. If the
    /// achievement write fails the game stays stored and the error is
    /// returned. Rounds completing at the same time are handled one after
    /// the other, so each sees the achievements the previous one wrote.
    #[instrument(skip(self, setup), fields(players = setup.guesses.len()))]
    pub async fn complete_round(&self, setup: RoundSetup) -> Result<CompletedRound, AppError> {
        self.check_round(&setup).map_err(|e| {
            warn!(error = %e, "Rejected round");
            e
        })?;

        let RoundSetup {
            restaurant,
            guesses,
            actual_price,
            mode,
        } = setup;
        let Some(restaurant) = restaurant else {
            return Err(ValidationError::NoRestaurantSelected.into());
        };

        let results = ScoringEngine::compute_results(&guesses, actual_price, mode);
        let game = Game {
            id: self.ids.generate(),
            restaurant,
            date_played: Utc::now(),
            participants: guesses,
            actual_price,
            results,
            currency_code: self.currency_code.clone(),
            game_mode: mode,
        };

        let _guard = self.round_lock.lock().await;
        self.games.save(game.clone()).await?;

        let history = self.games.get_all().await?;
        let earned = self.achievements.get_all().await?;
        let new_achievements = self
            .evaluator
            .evaluate(&game, &game.results, &history, &earned);

        if let Err(e) = self.achievements.save_all(new_achievements.clone()).await {
            error!(game_id = %game.id, error = %e, "Game stored but achievements were not");
            return Err(e);
        }

        info!(
            game_id = %game.id,
            restaurant = %game.restaurant.name,
            winners = game.winners().count(),
            achievements = new_achievements.len(),
            "Round completed"
        );

        Ok(CompletedRound {
            game,
            new_achievements,
        })
    }

    fn check_round(&self, setup: &RoundSetup) -> Result<(), ValidationError> {
        Validator::validate_game_setup(
            setup.guesses.len(),
            setup.restaurant.is_some(),
            self.min_players,
        )?;
        Validator::validate_price(setup.actual_price)?;
        for guess in &setup.guesses {
            Validator::validate_price(guess.guessed_price)?;
        }
        Ok(())
    }

    /// All stored games, newest first.
    pub async fn history(&self) -> Result<Vec<Game>, AppError> {
        self.games.get_all().await
    }

    pub async fn game(&self, id: Uuid) -> Result<Game, AppError> {
        self.games
            .get(id)
            .await?
            .ok_or(AppError::NotFound { entity: "Game", id })
    }

    /// Removes a game from history. Achievements it produced are kept.
    #[instrument(skip(self))]
    pub async fn delete_game(&self, id: Uuid) -> Result<(), AppError> {
        self.games.delete(id).await?;
        info!(game_id = %id, "Game deleted");
        Ok(())
    }

    pub async fn games_for_player(&self, player_id: Uuid) -> Result<Vec<Game>, AppError> {
        self.games.games_for_player(player_id).await
    }

    pub async fn games_for_restaurant(&self, restaurant_id: Uuid) -> Result<Vec<Game>, AppError> {
        self.games.games_for_restaurant(restaurant_id).await
    }
}
