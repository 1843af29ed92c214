// Public API - what other modules can use
pub use models::{Group, Player, Restaurant};
pub use repository::{GroupRepository, PlayerRepository, RestaurantRepository};
pub use service::RosterService;

pub mod models;
pub mod repository;
pub mod service;
