use super::super::{rule_priority, AchievementRule, AchievementType, Award, EvaluationContext};

/// Consecutive most recent games a player must have won.
pub const CONSISTENT_WINNER_STREAK: usize = 3;

/// Consistent winner: a winner of the current game who also won every one of
/// the most recent games in the chronological history.
pub struct StreakRule;

impl Default for StreakRule {
    fn default() -> Self {
        Self::new()
    }
}

impl StreakRule {
    pub fn new() -> Self {
        Self
    }
}

impl AchievementRule for StreakRule {
    fn evaluate(&self, context: &EvaluationContext) -> Vec<Award> {
        let start = context
            .history
            .len()
            .saturating_sub(CONSISTENT_WINNER_STREAK);
        let recent = &context.history[start..];

        if recent.len() < CONSISTENT_WINNER_STREAK {
            return Vec::new();
        }

        context
            .results
            .iter()
            .filter(|result| result.is_win())
            .filter(|result| {
                !context
                    .earned
                    .has(result.player_id, AchievementType::ConsistentWinner)
            })
            .filter(|result| {
                recent.iter().all(|game| {
                    game.result_for(result.player_id)
                        .map(|r| r.is_win())
                        .unwrap_or(false)
                })
            })
            .map(|result| {
                Award::new(
                    result.player_id,
                    AchievementType::ConsistentWinner,
                    Some(context.game.id),
                )
            })
            .collect()
    }

    fn priority(&self) -> u32 {
        rule_priority::STREAK
    }

    fn name(&self) -> &'static str {
        "streak"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievement::rules::test_support::scored_game;
    use crate::achievement::AchievementIndex;
    use uuid::Uuid;

    fn evaluate(history: &[crate::game::Game]) -> Vec<Award> {
        let current = history.last().unwrap();
        let index = AchievementIndex::new();
        let context = EvaluationContext::new(current, &current.results, history, &index);
        StreakRule::new().evaluate(&context)
    }

    #[test]
    fn test_three_wins_in_a_row() {
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        let history: Vec<_> = (0..3)
            .map(|i| scored_game(&[(alice, 50.0), (bob, 60.0)], 50.0, 30 - i))
            .collect();

        let awards = evaluate(&history);
        assert_eq!(awards.len(), 1);
        assert_eq!(awards[0].player_id, alice);
        assert_eq!(awards[0].game_id, Some(history[2].id));
    }

    #[test]
    fn test_only_most_recent_games_count() {
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        let mut history = vec![
            scored_game(&[(alice, 50.0), (bob, 60.0)], 50.0, 50),
            scored_game(&[(alice, 50.0), (bob, 60.0)], 50.0, 40),
            scored_game(&[(alice, 50.0), (bob, 60.0)], 50.0, 30),
            // bob breaks the streak
            scored_game(&[(alice, 60.0), (bob, 50.0)], 50.0, 20),
        ];
        history.push(scored_game(&[(alice, 50.0), (bob, 60.0)], 50.0, 10));
        history.push(scored_game(&[(alice, 50.0), (bob, 60.0)], 50.0, 0));

        assert!(evaluate(&history).is_empty());
    }

    #[test]
    fn test_streak_requires_playing_every_recent_game() {
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        let carol = Uuid::new_v4();
        let history = vec![
            scored_game(&[(alice, 50.0), (bob, 60.0)], 50.0, 20),
            scored_game(&[(carol, 50.0), (bob, 60.0)], 50.0, 10),
            scored_game(&[(alice, 50.0), (bob, 60.0)], 50.0, 0),
        ];

        assert!(evaluate(&history).is_empty());
    }

    #[test]
    fn test_short_history_awards_nothing() {
        let alice = Uuid::new_v4();
        let history = vec![
            scored_game(&[(alice, 50.0), (Uuid::new_v4(), 60.0)], 50.0, 10),
            scored_game(&[(alice, 50.0), (Uuid::new_v4(), 60.0)], 50.0, 0),
        ];

        assert!(evaluate(&history).is_empty());
    }
}
