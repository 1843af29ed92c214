pub mod evaluator;
pub mod index;
pub mod models;
pub mod repository;
pub mod rules;

pub use evaluator::{AchievementEvaluator, AchievementEvaluatorBuilder};
pub use index::AchievementIndex;
pub use models::{AchievementType, PlayerAchievement};
pub use repository::AchievementRepository;

use uuid::Uuid;

use crate::game::{Game, GameResult};

/// Priority constants for achievement rules.
/// Lower values run first. Later rules see what earlier rules awarded
/// in the same evaluation through `EvaluationContext::earned`.
pub mod rule_priority {
    /// Per-result accuracy awards (perfect guess, close call)
    pub const ACCURACY: u32 = 100;
    pub const FIRST_WIN: u32 = 200;
    /// Group size and distinct co-players
    pub const SOCIAL: u32 = 300;
    pub const STREAK: u32 = 400;
    /// Lifetime counters, including those built on earlier awards
    pub const MILESTONE: u32 = 500;
}

/// A rule's claim that a player earned something. The evaluator drops claims
/// that are already held and turns the rest into records.
#[derive(Debug, Clone, PartialEq)]
pub struct Award {
    pub player_id: Uuid,
    pub kind: AchievementType,
    /// Game the award is attributed to; `None` for pure lifetime milestones
    pub game_id: Option<Uuid>,
}

impl Award {
    pub fn new(player_id: Uuid, kind: AchievementType, game_id: Option<Uuid>) -> Self {
        Self {
            player_id,
            kind,
            game_id,
        }
    }
}

pub trait AchievementRule: Send + Sync {
    fn evaluate(&self, context: &EvaluationContext) -> Vec<Award>;

    fn priority(&self) -> u32;

    fn name(&self) -> &'static str;
}

pub struct EvaluationContext<'a> {
    pub game: &'a Game,
    pub results: &'a [GameResult],
    /// Every known game oldest first, the current game included exactly once
    pub history: &'a [Game],
    /// Achievements held before this evaluation plus those awarded so far in it
    pub earned: &'a AchievementIndex,
    /// Achievements already persisted when the evaluation started
    pub recorded: &'a AchievementIndex,
}

impl<'a> EvaluationContext<'a> {
    pub fn new(
        game: &'a Game,
        results: &'a [GameResult],
        history: &'a [Game],
        earned: &'a AchievementIndex,
    ) -> Self {
        Self {
            game,
            results,
            history,
            earned,
            recorded: earned,
        }
    }

    /// Sets the persisted view when it differs from `earned`.
    pub fn with_recorded(mut self, recorded: &'a AchievementIndex) -> Self {
        self.recorded = recorded;
        self
    }

    /// Games the player took part in, oldest first.
    pub fn games_with(&self, player_id: Uuid) -> impl Iterator<Item = &'a Game> + '_ {
        self.history
            .iter()
            .filter(move |game| game.has_participant(player_id))
    }
}
