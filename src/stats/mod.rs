pub mod aggregator;
pub mod models;
pub mod service;

pub use aggregator::{aggregate, leaderboard};
pub use models::{PlayerRanking, PlayerStats};
pub use service::StatsService;
