use uuid::Uuid;

use super::{AchievementIndex, PlayerAchievement};
use crate::shared::AppError;
use crate::store::{keys, CollectionRepository, Placement, StoredRecord};

/// Append-only log of earned achievements, oldest first.
pub type AchievementRepository = CollectionRepository<PlayerAchievement>;

impl StoredRecord for PlayerAchievement {
    const KEY: &'static str = keys::ACHIEVEMENTS;
    const ENTITY: &'static str = "Achievement";
    const PLACEMENT: Placement = Placement::Append;

    fn record_id(&self) -> Uuid {
        self.id
    }

    fn sort(items: &mut [Self]) {
        items.sort_by(|a, b| a.date_earned.cmp(&b.date_earned));
    }
}

impl CollectionRepository<PlayerAchievement> {
    /// Achievements of one player, most recently earned first.
    pub async fn for_player(&self, player_id: Uuid) -> Result<Vec<PlayerAchievement>, AppError> {
        let mut achievements: Vec<PlayerAchievement> = self
            .get_all()
            .await?
            .into_iter()
            .filter(|a| a.player_id == player_id)
            .collect();
        achievements.sort_by(|a, b| b.date_earned.cmp(&a.date_earned));
        Ok(achievements)
    }

    pub async fn index(&self) -> Result<AchievementIndex, AppError> {
        let achievements = self.get_all().await?;
        Ok(AchievementIndex::from_achievements(&achievements))
    }
}
