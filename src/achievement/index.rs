use std::collections::{HashMap, HashSet};
use uuid::Uuid;

use super::models::{AchievementType, PlayerAchievement};

/// Lookup structure over earned achievements.
///
/// Answers "already earned" for lifetime keys `(player, type)` and per-game
/// keys `(player, type, game)` in constant time, and counts per
/// `(player, type)`.
#[derive(Debug, Default, Clone)]
pub struct AchievementIndex {
    lifetime: HashMap<(Uuid, AchievementType), usize>,
    per_game: HashSet<(Uuid, AchievementType, Uuid)>,
}

impl AchievementIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_achievements<'a>(
        achievements: impl IntoIterator<Item = &'a PlayerAchievement>,
    ) -> Self {
        let mut index = Self::new();
        for achievement in achievements {
            index.insert(achievement);
        }
        index
    }

    pub fn insert(&mut self, achievement: &PlayerAchievement) {
        *self
            .lifetime
            .entry((achievement.player_id, achievement.kind))
            .or_default() += 1;

        if let Some(game_id) = achievement.game_id {
            self.per_game
                .insert((achievement.player_id, achievement.kind, game_id));
        }
    }

    /// True when the player holds `kind` at all, from any game.
    pub fn has(&self, player_id: Uuid, kind: AchievementType) -> bool {
        self.count(player_id, kind) > 0
    }

    pub fn has_for_game(&self, player_id: Uuid, kind: AchievementType, game_id: Uuid) -> bool {
        self.per_game.contains(&(player_id, kind, game_id))
    }

    pub fn count(&self, player_id: Uuid, kind: AchievementType) -> usize {
        self.lifetime
            .get(&(player_id, kind))
            .copied()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifetime_and_per_game_lookups() {
        let player = Uuid::new_v4();
        let game = Uuid::new_v4();
        let earned = vec![
            PlayerAchievement::new(player, AchievementType::PerfectGuess, Some(game)),
            PlayerAchievement::new(player, AchievementType::PerfectGuess, Some(Uuid::new_v4())),
            PlayerAchievement::new(player, AchievementType::Veteran, None),
        ];

        let index = AchievementIndex::from_achievements(&earned);

        assert!(index.has(player, AchievementType::Veteran));
        assert!(!index.has(player, AchievementType::Centurion));
        assert!(index.has_for_game(player, AchievementType::PerfectGuess, game));
        assert!(!index.has_for_game(player, AchievementType::CloseCall, game));
        assert_eq!(index.count(player, AchievementType::PerfectGuess), 2);
        assert_eq!(index.count(Uuid::new_v4(), AchievementType::PerfectGuess), 0);
    }
}
