// Public API
pub use models::{Game, GameMode, GameResult, PlayerGuess};
pub use repository::GameRepository;
pub use scoring::ScoringEngine;
pub use service::{CompletedRound, GameService, RoundSetup};

pub mod models;
pub mod repository;
pub mod scoring;
pub mod service;
