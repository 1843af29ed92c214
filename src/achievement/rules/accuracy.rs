use super::super::{rule_priority, AchievementRule, AchievementType, Award, EvaluationContext};

/// Within this percentage of the real price counts as a perfect guess.
pub const PERFECT_GUESS_PERCENT: f64 = 1.0;
/// Within this percentage (but not perfect) counts as a close call.
pub const CLOSE_CALL_PERCENT: f64 = 5.0;

/// Perfect guess and close call, judged per result of the current game.
pub struct AccuracyRule;

impl Default for AccuracyRule {
    fn default() -> Self {
        Self::new()
    }
}

impl AccuracyRule {
    pub fn new() -> Self {
        Self
    }
}

impl AchievementRule for AccuracyRule {
    fn evaluate(&self, context: &EvaluationContext) -> Vec<Award> {
        context
            .results
            .iter()
            .filter_map(|result| {
                let percentage = result.percentage_difference()?;
                let kind = if percentage <= PERFECT_GUESS_PERCENT {
                    AchievementType::PerfectGuess
                } else if percentage <= CLOSE_CALL_PERCENT {
                    AchievementType::CloseCall
                } else {
                    return None;
                };
                Some(Award::new(result.player_id, kind, Some(context.game.id)))
            })
            .collect()
    }

    fn priority(&self) -> u32 {
        rule_priority::ACCURACY
    }

    fn name(&self) -> &'static str {
        "accuracy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievement::rules::test_support::scored_game;
    use crate::achievement::AchievementIndex;
    use rstest::rstest;
    use uuid::Uuid;

    #[rstest]
    #[case(100.0, Some(AchievementType::PerfectGuess))]
    #[case(99.0, Some(AchievementType::PerfectGuess))]
    #[case(101.0, Some(AchievementType::PerfectGuess))]
    #[case(101.5, Some(AchievementType::CloseCall))]
    #[case(95.0, Some(AchievementType::CloseCall))]
    #[case(105.0, Some(AchievementType::CloseCall))]
    #[case(105.5, None)]
    #[case(150.0, None)]
    fn test_accuracy_thresholds(#[case] guess: f64, #[case] expected: Option<AchievementType>) {
        let player = Uuid::new_v4();
        let game = scored_game(&[(player, guess)], 100.0, 0);
        let history = vec![game.clone()];
        let index = AchievementIndex::new();
        let context = EvaluationContext::new(&game, &game.results, &history, &index);

        let awards = AccuracyRule::new().evaluate(&context);
        let kinds: Vec<AchievementType> = awards.iter().map(|a| a.kind).collect();
        assert_eq!(kinds, expected.into_iter().collect::<Vec<_>>());
        if let Some(award) = awards.first() {
            assert_eq!(award.game_id, Some(game.id));
            assert_eq!(award.player_id, player);
        }
    }

    #[test]
    fn test_zero_price_awards_nothing() {
        let game = scored_game(&[(Uuid::new_v4(), 0.0)], 0.0, 0);
        let history = vec![game.clone()];
        let index = AchievementIndex::new();
        let context = EvaluationContext::new(&game, &game.results, &history, &index);

        assert!(AccuracyRule::new().evaluate(&context).is_empty());
    }
}
