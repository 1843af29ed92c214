use super::super::{rule_priority, AchievementRule, AchievementType, Award, EvaluationContext};

/// Awarded to a winner of the current game when it is the only game in the
/// history that player has won.
pub struct FirstWinRule;

impl Default for FirstWinRule {
    fn default() -> Self {
        Self::new()
    }
}

impl FirstWinRule {
    pub fn new() -> Self {
        Self
    }
}

impl AchievementRule for FirstWinRule {
    fn evaluate(&self, context: &EvaluationContext) -> Vec<Award> {
        context
            .results
            .iter()
            .filter(|result| result.is_win())
            .filter(|result| !context.earned.has(result.player_id, AchievementType::FirstWin))
            .filter(|result| {
                let wins = context
                    .history
                    .iter()
                    .filter(|game| game.won_by(result.player_id))
                    .count();
                wins == 1
            })
            .map(|result| {
                Award::new(
                    result.player_id,
                    AchievementType::FirstWin,
                    Some(context.game.id),
                )
            })
            .collect()
    }

    fn priority(&self) -> u32 {
        rule_priority::FIRST_WIN
    }

    fn name(&self) -> &'static str {
        "first_win"
    }
}
