use tracing::debug;

use super::models::{GameMode, GameResult, PlayerGuess};

/// Differences closer than this are treated as a tie.
pub const TIE_EPSILON: f64 = 0.01;

pub struct ScoringEngine;

impl ScoringEngine {
    /// Ranks every guess against `actual_price` and assigns points.
    ///
    /// Valid results come first, ordered by ascending difference, followed by
    /// disqualified results in their original guess order. Ranks use
    /// competition ranking: a tie shares the earlier rank and the next
    /// distinct result takes its 1-based position, so a three-way tie for
    /// first is followed by rank 4. Disqualified results all share rank
    /// `valid_count + 1` with zero points.
    pub fn compute_results(
        guesses: &[PlayerGuess],
        actual_price: f64,
        mode: GameMode,
    ) -> Vec<GameResult> {
        let (mut valid, mut disqualified): (Vec<GameResult>, Vec<GameResult>) = guesses
            .iter()
            .map(|guess| GameResult::from_guess(guess, actual_price))
            .partition(|result| !mode.disqualifies(result.guessed_price, actual_price));

        valid.sort_by(|a, b| a.difference().total_cmp(&b.difference()));

        let valid_count = valid.len();
        let mut current_rank = 0u32;
        let mut previous_difference: Option<f64> = None;

        for (index, result) in valid.iter_mut().enumerate() {
            let tied = previous_difference
                .map(|prev| (result.difference() - prev).abs() < TIE_EPSILON)
                .unwrap_or(false);

            if !tied {
                current_rank = index as u32 + 1;
            }

            result.rank = current_rank;
            result.points = Self::points_for(current_rank, valid_count);
            previous_difference = Some(result.difference());
        }

        let disqualified_rank = valid_count as u32 + 1;
        for result in &mut disqualified {
            result.rank = disqualified_rank;
            result.points = 0;
        }

        debug!(
            %mode,
            actual_price,
            valid = valid_count,
            disqualified = disqualified.len(),
            "Computed round results"
        );

        valid.extend(disqualified);
        valid
    }

    pub fn points_for(rank: u32, valid_players: usize) -> i32 {
        Self::base_points(rank) + Self::participation_bonus(valid_players)
    }

    pub fn base_points(rank: u32) -> i32 {
        match rank {
            1 => 10,
            2 => 7,
            3 => 5,
            4 => 3,
            5 => 2,
            _ => 1,
        }
    }

    /// Bonus for bigger rounds, by number of valid players.
    pub fn participation_bonus(valid_players: usize) -> i32 {
        match valid_players {
            0..=3 => 0,
            4..=5 => 1,
            6..=7 => 2,
            _ => 3,
        }
    }
}
