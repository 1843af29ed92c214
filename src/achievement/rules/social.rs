use std::collections::HashSet;

use super::super::{rule_priority, AchievementRule, AchievementType, Award, EvaluationContext};

/// Participant count that makes a game a group-host game.
pub const GROUP_HOST_PARTICIPANTS: usize = 8;
/// Distinct players (self included) met across all games.
pub const SOCIAL_BUTTERFLY_PLAYERS: usize = 20;

/// Group host for every player of a big game, and social butterfly for
/// players who have shared a table with enough different people.
pub struct SocialRule;

impl Default for SocialRule {
    fn default() -> Self {
        Self::new()
    }
}

impl SocialRule {
    pub fn new() -> Self {
        Self
    }
}

impl AchievementRule for SocialRule {
    fn evaluate(&self, context: &EvaluationContext) -> Vec<Award> {
        let mut awards = Vec::new();
        let big_game = context.game.participants.len() >= GROUP_HOST_PARTICIPANTS;

        for result in context.results {
            if big_game {
                awards.push(Award::new(
                    result.player_id,
                    AchievementType::GroupHost,
                    Some(context.game.id),
                ));
            }

            if context
                .earned
                .has(result.player_id, AchievementType::SocialButterfly)
            {
                continue;
            }

            let met: HashSet<_> = context
                .games_with(result.player_id)
                .flat_map(|game| game.participants.iter().map(|p| p.player_id))
                .collect();

            if met.len() >= SOCIAL_BUTTERFLY_PLAYERS {
                awards.push(Award::new(
                    result.player_id,
                    AchievementType::SocialButterfly,
                    None,
                ));
            }
        }

        awards
    }

    fn priority(&self) -> u32 {
        rule_priority::SOCIAL
    }

    fn name(&self) -> &'static str {
        "social"
    }
}
