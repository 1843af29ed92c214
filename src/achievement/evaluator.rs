use std::sync::Arc;
use tracing::{debug, info};

use super::{
    rules::{AccuracyRule, FirstWinRule, MilestoneRule, SocialRule, StreakRule},
    AchievementIndex, AchievementRule, EvaluationContext, PlayerAchievement,
};
use crate::game::{Game, GameResult};

/// Runs the achievement rules for one completed game.
pub struct AchievementEvaluator {
    rules: Vec<Arc<dyn AchievementRule>>,
}

impl Default for AchievementEvaluator {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl AchievementEvaluator {
    pub fn builder() -> AchievementEvaluatorBuilder {
        AchievementEvaluatorBuilder::new()
    }

    /// Returns only the achievements newly earned with `game`.
    ///
    /// `history` may or may not already contain `game` and may come in any
    /// order: rules always see every game once, oldest first, with `game`
    /// included. `already_earned` is the full persisted achievement set;
    /// nothing it holds is issued again. Nothing is persisted here.
    pub fn evaluate(
        &self,
        game: &Game,
        results: &[GameResult],
        history: &[Game],
        already_earned: &[PlayerAchievement],
    ) -> Vec<PlayerAchievement> {
        let timeline = chronological_history(game, history);
        let recorded = AchievementIndex::from_achievements(already_earned);
        let mut earned = recorded.clone();
        let mut awarded = Vec::new();

        for rule in &self.rules {
            let awards = {
                let context = EvaluationContext::new(game, results, &timeline, &earned)
                    .with_recorded(&recorded);
                rule.evaluate(&context)
            };

            for award in awards {
                let held = if award.kind.is_per_game() {
                    let game_id = award.game_id.unwrap_or(game.id);
                    earned.has_for_game(award.player_id, award.kind, game_id)
                } else {
                    earned.has(award.player_id, award.kind)
                };

                if held {
                    debug!(
                        rule = rule.name(),
                        player_id = %award.player_id,
                        kind = %award.kind,
                        "Achievement already held"
                    );
                    continue;
                }

                let game_id = if award.kind.is_per_game() {
                    Some(award.game_id.unwrap_or(game.id))
                } else {
                    award.game_id
                };
                let achievement = PlayerAchievement::new(award.player_id, award.kind, game_id);
                earned.insert(&achievement);
                awarded.push(achievement);
            }
        }

        if !awarded.is_empty() {
            info!(
                game_id = %game.id,
                count = awarded.len(),
                "New achievements earned"
            );
        }

        awarded
    }
}

/// History with `game` in it exactly once, sorted oldest first. The sort is
/// stable, so games with equal dates keep their relative order.
fn chronological_history(game: &Game, history: &[Game]) -> Vec<Game> {
    let mut timeline: Vec<Game> = history
        .iter()
        .filter(|candidate| candidate.id != game.id)
        .cloned()
        .collect();
    timeline.push(game.clone());
    timeline.sort_by(|a, b| a.date_played.cmp(&b.date_played));
    timeline
}

pub struct AchievementEvaluatorBuilder {
    rules: Vec<Arc<dyn AchievementRule>>,
}

impl Default for AchievementEvaluatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AchievementEvaluatorBuilder {
    fn new() -> Self {
        Self {
            rules: vec![
                Arc::new(AccuracyRule::new()),
                Arc::new(FirstWinRule::new()),
                Arc::new(SocialRule::new()),
                Arc::new(StreakRule::new()),
                Arc::new(MilestoneRule::new()),
            ],
        }
    }

    /// Starts with no rules at all.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn with_rule(mut self, rule: Arc<dyn AchievementRule>) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn build(mut self) -> AchievementEvaluator {
        self.rules.sort_by_key(|r| r.priority());
        AchievementEvaluator { rules: self.rules }
    }
}
