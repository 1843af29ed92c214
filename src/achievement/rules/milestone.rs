use super::super::{rule_priority, AchievementRule, AchievementType, Award, EvaluationContext};

pub const VETERAN_GAMES: usize = 50;
pub const CENTURION_GAMES: usize = 100;
pub const SHARP_SHOOTER_PERFECT_GUESSES: usize = 10;

/// Lifetime milestones: games played (veteran, centurion) and perfect guesses
/// collected (sharp shooter). None of them is tied to a game.
pub struct MilestoneRule;

impl Default for MilestoneRule {
    fn default() -> Self {
        Self::new()
    }
}

impl MilestoneRule {
    pub fn new() -> Self {
        Self
    }
}

impl AchievementRule for MilestoneRule {
    fn evaluate(&self, context: &EvaluationContext) -> Vec<Award> {
        let mut awards = Vec::new();

        for result in context.results {
            let player_id = result.player_id;
            let games_played = context.games_with(player_id).count();

            if games_played >= VETERAN_GAMES {
                awards.push(Award::new(player_id, AchievementType::Veteran, None));
            }
            if games_played >= CENTURION_GAMES {
                awards.push(Award::new(player_id, AchievementType::Centurion, None));
            }

            // Only perfect guesses persisted before this game count
            let perfect_guesses = context
                .recorded
                .count(player_id, AchievementType::PerfectGuess);
            if perfect_guesses >= SHARP_SHOOTER_PERFECT_GUESSES {
                awards.push(Award::new(player_id, AchievementType::SharpShooter, None));
            }
        }

        awards
    }

    fn priority(&self) -> u32 {
        rule_priority::MILESTONE
    }

    fn name(&self) -> &'static str {
        "milestone"
    }
}
