use std::collections::HashMap;
use uuid::Uuid;

use super::models::{PlayerRanking, PlayerStats};
use crate::achievement::PlayerAchievement;
use crate::game::{Game, GameResult};
use crate::roster::repository::compare_names;

/// Folds results into per-player statistics.
///
/// The mean difference is updated incrementally as
/// `(prev * (n - 1) + difference) / n`, which keeps exports comparable with
/// older data bit for bit. Each player's achievements are every entry of
/// `achievements` for that player, in input order.
pub fn aggregate(
    results: &[GameResult],
    achievements: &[PlayerAchievement],
) -> HashMap<Uuid, PlayerStats> {
    let mut stats: HashMap<Uuid, PlayerStats> = HashMap::new();

    for result in results {
        let entry = stats
            .entry(result.player_id)
            .or_insert_with(|| PlayerStats {
                player_id: result.player_id,
                player_name: result.player_name.clone(),
                total_games: 0,
                total_points: 0,
                wins: 0,
                average_difference: 0.0,
                achievements: Vec::new(),
            });

        entry.total_games += 1;
        entry.total_points += result.points;
        let n = entry.total_games as f64;
        entry.average_difference =
            ((entry.average_difference * (n - 1.0)) + result.difference()) / n;

        if result.is_win() {
            entry.wins += 1;
        }
    }

    for achievement in achievements {
        if let Some(entry) = stats.get_mut(&achievement.player_id) {
            entry.achievements.push(achievement.clone());
        }
    }

    stats
}

/// Points leaderboard over every result of `games`.
///
/// Sorted by total points, highest first; equal totals fall back to name
/// order. Ranks are positions (1, 2, 3, ...) with no sharing. The displayed
/// name is the first snapshot met in `games`.
pub fn leaderboard(games: &[Game]) -> Vec<PlayerRanking> {
    let mut totals: HashMap<Uuid, (String, i32, u32)> = HashMap::new();

    for result in games.iter().flat_map(|game| game.results.iter()) {
        let entry = totals
            .entry(result.player_id)
            .or_insert_with(|| (result.player_name.clone(), 0, 0));
        entry.1 += result.points;
        entry.2 += 1;
    }

    let mut rankings: Vec<PlayerRanking> = totals
        .into_iter()
        .map(|(player_id, (name, total_points, games_played))| PlayerRanking {
            player_id,
            name,
            total_points,
            games_played,
            average_points: total_points as f64 / games_played as f64,
            rank: 0,
        })
        .collect();

    rankings.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then_with(|| compare_names(&a.name, &b.name))
            .then_with(|| a.player_id.cmp(&b.player_id))
    });

    for (index, ranking) in rankings.iter_mut().enumerate() {
        ranking.rank = index as u32 + 1;
    }

    rankings
}
