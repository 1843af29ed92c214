use std::sync::Arc;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::achievement::AchievementRepository;
use crate::config::AppConfig;
use crate::game::{GameRepository, GameService};
use crate::identity::{DeviceScopedIdGenerator, IdGenerator, RandomIdGenerator};
use crate::roster::{GroupRepository, PlayerRepository, RestaurantRepository, RosterService};
use crate::stats::StatsService;
use crate::store::{InMemoryRecordStore, JsonFileRecordStore, RecordStore};
use crate::validation::ValidationError;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub store: Arc<dyn RecordStore>,
    pub players: Arc<PlayerRepository>,
    pub restaurants: Arc<RestaurantRepository>,
    pub groups: Arc<GroupRepository>,
    pub games: Arc<GameRepository>,
    pub achievements: Arc<AchievementRepository>,
    pub roster: Arc<RosterService>,
    pub game_service: Arc<GameService>,
    pub stats: Arc<StatsService>,
}

impl AppState {
    /// Wires every repository and service onto one record store.
    pub fn new(store: Arc<dyn RecordStore>, ids: Arc<dyn IdGenerator>, config: AppConfig) -> Self {
        let players = Arc::new(PlayerRepository::new(store.clone()));
        let restaurants = Arc::new(RestaurantRepository::new(store.clone()));
        let groups = Arc::new(GroupRepository::new(store.clone()));
        let games = Arc::new(GameRepository::new(store.clone()));
        let achievements = Arc::new(AchievementRepository::new(store.clone()));

        let roster = Arc::new(RosterService::new(
            players.clone(),
            restaurants.clone(),
            groups.clone(),
        ));
        let game_service = Arc::new(GameService::new(
            games.clone(),
            achievements.clone(),
            ids,
            &config,
        ));
        let stats = Arc::new(StatsService::new(games.clone(), achievements.clone()));

        Self {
            config,
            store,
            players,
            restaurants,
            groups,
            games,
            achievements,
            roster,
            game_service,
            stats,
        }
    }

    /// File-backed state under `config.data_dir`, with device-scoped game ids.
    pub async fn from_config(config: AppConfig) -> Result<Self, AppError> {
        let store: Arc<dyn RecordStore> = Arc::new(JsonFileRecordStore::new(config.data_dir.clone()));
        let ids = DeviceScopedIdGenerator::load_or_create(store.as_ref()).await?;

        info!(
            data_dir = %config.data_dir.display(),
            device_id = %ids.device_id(),
            "Opened record store"
        );

        Ok(Self::new(store, Arc::new(ids), config))
    }

    /// Volatile state with random ids.
    pub fn in_memory(config: AppConfig) -> Self {
        Self::new(
            Arc::new(InMemoryRecordStore::new()),
            Arc::new(RandomIdGenerator),
            config,
        )
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("Failed to encode records: {0}")]
    EncodingFailed(String),

    #[error("Failed to decode records: {0}")]
    DecodingFailed(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl AppError {
    /// Short hint a front end can show next to the error.
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            AppError::NotFound { .. } => None,
            AppError::EncodingFailed(_) | AppError::Storage(_) => {
                Some("Check that there is enough storage space available.")
            }
            AppError::DecodingFailed(_) => {
                Some("The saved data may be corrupted. Restart, or reset the app data if the problem persists.")
            }
            AppError::Validation(e) => match e {
                ValidationError::NoPlayersSelected | ValidationError::InsufficientPlayers { .. } => {
                    Some("Add more players or select existing players.")
                }
                ValidationError::NoRestaurantSelected => {
                    Some("Select a restaurant from the list or create a new one.")
                }
                ValidationError::InvalidPrice | ValidationError::PriceNotPositive => {
                    Some("Enter a valid positive number for the price.")
                }
                ValidationError::DuplicateName { .. } => Some("Choose a different name."),
                ValidationError::EmptyName { .. } => Some("Enter a name."),
            },
        }
    }
}
