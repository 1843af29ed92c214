// Library crate for the price guessing game core
// This file exposes the public API for the binary and integration tests

pub mod achievement;
pub mod config;
pub mod game;
pub mod identity;
pub mod roster;
pub mod shared;
pub mod stats;
pub mod store;
pub mod validation;

// Re-export commonly used types for easier access in tests
pub use achievement::{AchievementEvaluator, AchievementType, PlayerAchievement};
pub use config::AppConfig;
pub use game::{CompletedRound, Game, GameMode, GameResult, GameService, PlayerGuess, RoundSetup, ScoringEngine};
pub use roster::{Group, Player, Restaurant, RosterService};
pub use shared::{AppError, AppState};
pub use stats::{PlayerRanking, PlayerStats, StatsService};
pub use store::{InMemoryRecordStore, JsonFileRecordStore, RecordStore};
pub use validation::ValidationError;
