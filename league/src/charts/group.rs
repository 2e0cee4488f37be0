use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use shared::{Game, LeaderboardEntry};

use super::{
    chronological, game_label, max_minigames, mean, podium_color, truncate_name, ChartSeries,
    DataPoint,
};

/// Number of players shown on the victories chart
pub const VICTORY_CHART_LIMIT: usize = 6;

const BAR_LABEL_LEN: usize = 10;
const SERIES_LABEL_LEN: usize = 12;

/// One bar of the victories chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VictoryBar {
    pub label: String,
    pub full_name: String,
    pub victories: i32,
    /// 1-based leaderboard position
    pub rank: usize,
    pub color: String,
}

/// Victories of the leaderboard's top `limit` players, in leaderboard order
pub fn victories_chart(entries: &[LeaderboardEntry], limit: usize) -> Vec<VictoryBar> {
    entries
        .iter()
        .take(limit)
        .enumerate()
        .map(|(i, entry)| VictoryBar {
            label: truncate_name(&entry.player_name, BAR_LABEL_LEN),
            full_name: entry.player_name.clone(),
            victories: entry.games_won,
            rank: i + 1,
            color: podium_color(i + 1).to_string(),
        })
        .collect()
}

/// Integer ticks from 0 to the highest victory count
pub fn victory_ticks(bars: &[VictoryBar]) -> Vec<i32> {
    match bars.iter().map(|b| b.victories).max() {
        Some(max) => (0..=max.max(0)).collect(),
        None => Vec::new(),
    }
}

/// Finishing positions of each leaderboard player across the games they
/// played, oldest game first. Players without positions are omitted.
pub fn position_evolution(entries: &[LeaderboardEntry], games: &[Game]) -> Vec<ChartSeries> {
    let mut positions: HashMap<&str, Vec<i32>> = entries
        .iter()
        .map(|e| (e.player_id.as_str(), Vec::new()))
        .collect();

    for game in chronological(games) {
        let mut results: Vec<_> = game.results().iter().collect();
        results.sort_by_key(|r| r.position);
        for result in results {
            if let Some(track) = positions.get_mut(result.player_id.as_str()) {
                track.push(result.position);
            }
        }
    }

    entries
        .iter()
        .filter_map(|entry| {
            let track = positions.remove(entry.player_id.as_str())?;
            if track.is_empty() {
                return None;
            }
            Some(ChartSeries {
                name: truncate_name(&entry.player_name, SERIES_LABEL_LEN),
                data: track
                    .into_iter()
                    .enumerate()
                    .map(|(i, position)| DataPoint::new((i + 1).to_string(), position))
                    .collect(),
            })
        })
        .collect()
}

/// Average number of minigames the per-game leader needed, over games where
/// somebody won at least one
pub fn minigame_bonus_average(games: &[Game]) -> Option<f64> {
    let maxima: Vec<i32> = games
        .iter()
        .filter(|g| g.is_approved() && g.has_results())
        .map(max_minigames)
        .filter(|&max| max > 0)
        .collect();
    mean(&maxima)
}

/// Coins earned by the whole table in each game, oldest first
pub fn coins_per_game(games: &[Game]) -> ChartSeries {
    ChartSeries {
        name: "Monedas Totales".to_string(),
        data: chronological(games)
            .into_iter()
            .enumerate()
            .map(|(i, game)| {
                let earned: i64 = game
                    .results()
                    .iter()
                    .map(|r| i64::from(r.total_coins_earned))
                    .sum();
                DataPoint::new(game_label(i), earned as f64)
            })
            .collect(),
    }
}
