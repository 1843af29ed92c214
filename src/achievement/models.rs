use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use uuid::Uuid;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AchievementType {
    PerfectGuess,
    CloseCall,
    ConsistentWinner,
    /// Defined for stored data compatibility; no rule awards it
    ComebackKid,
    GroupHost,
    Centurion,
    Veteran,
    SharpShooter,
    SocialButterfly,
    FirstWin,
}

impl AchievementType {
    /// Per-game achievements can be earned once per game; the rest once per
    /// lifetime.
    pub fn is_per_game(&self) -> bool {
        matches!(
            self,
            AchievementType::PerfectGuess | AchievementType::CloseCall | AchievementType::GroupHost
        )
    }

    pub fn bonus_points(&self) -> i32 {
        match self {
            AchievementType::PerfectGuess => 5,
            AchievementType::CloseCall => 2,
            AchievementType::ConsistentWinner => 10,
            AchievementType::ComebackKid => 5,
            AchievementType::GroupHost => 3,
            AchievementType::Centurion => 50,
            AchievementType::Veteran => 20,
            AchievementType::SharpShooter => 15,
            AchievementType::SocialButterfly => 10,
            AchievementType::FirstWin => 5,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AchievementType::PerfectGuess => "🎯",
            AchievementType::CloseCall => "🔥",
            AchievementType::ConsistentWinner => "👑",
            AchievementType::ComebackKid => "💪",
            AchievementType::GroupHost => "🎉",
            AchievementType::Centurion => "💯",
            AchievementType::Veteran => "⭐️",
            AchievementType::SharpShooter => "🏹",
            AchievementType::SocialButterfly => "🦋",
            AchievementType::FirstWin => "🏆",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerAchievement {
    pub id: Uuid,
    pub player_id: Uuid,
    #[serde(rename = "type")]
    pub kind: AchievementType,
    pub date_earned: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_id: Option<Uuid>,
}

impl PlayerAchievement {
    pub fn new(player_id: Uuid, kind: AchievementType, game_id: Option<Uuid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            player_id,
            kind,
            date_earned: Utc::now(),
            game_id,
        }
    }
}
