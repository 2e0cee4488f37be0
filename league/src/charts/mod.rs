pub mod group;
pub mod personal;

use serde::{Deserialize, Serialize};
use shared::Game;

pub use group::{
    coins_per_game, minigame_bonus_average, position_evolution, victories_chart, victory_ticks,
    VictoryBar, VICTORY_CHART_LIMIT,
};
pub use personal::{
    last_victory, personal_coins, personal_minigame_bonus_average, personal_stars,
    position_distribution, ElapsedTime, PositionSlice,
};

/// Chart data point
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
}

impl DataPoint {
    pub fn new(label: impl Into<String>, value: impl Into<f64>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Named series for line and bump charts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    pub data: Vec<DataPoint>,
}

/// Podium colors, gold, silver and bronze, then a neutral blue
pub(crate) fn podium_color(rank: usize) -> &'static str {
    match rank {
        1 => "#eab308",
        2 => "#9ca3af",
        3 => "#ea580c",
        _ => "#3b82f6",
    }
}

/// Shortens a name to `max` characters, marking the cut with "..."
pub(crate) fn truncate_name(name: &str, max: usize) -> String {
    if name.chars().count() > max {
        let mut short: String = name.chars().take(max).collect();
        short.push_str("...");
        short
    } else {
        name.to_string()
    }
}

/// Approved games in the order they were played
pub(crate) fn chronological(games: &[Game]) -> Vec<&Game> {
    let mut ordered: Vec<&Game> = games.iter().filter(|g| g.is_approved()).collect();
    ordered.sort_by_key(|g| g.played_at);
    ordered
}

/// Label of the n-th game on a chart axis, starting at P1
pub(crate) fn game_label(index: usize) -> String {
    format!("P{}", index + 1)
}

/// Largest minigame count in a game, 0 when it has no results
pub(crate) fn max_minigames(game: &Game) -> i32 {
    game.results()
        .iter()
        .map(|r| r.minigames_won)
        .max()
        .unwrap_or(0)
}

pub(crate) fn mean(values: &[i32]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let total: i64 = values.iter().map(|&v| v as i64).sum();
    Some(total as f64 / values.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_name() {
        assert_eq!(truncate_name("Mario", 10), "Mario");
        assert_eq!(truncate_name("0123456789", 10), "0123456789");
        assert_eq!(truncate_name("Bowser Junior", 10), "Bowser Jun...");
        assert_eq!(truncate_name("Señor Ñandú López", 12), "Señor Ñandú ...");
    }

    #[test]
    fn test_podium_colors() {
        assert_eq!(podium_color(1), "#eab308");
        assert_eq!(podium_color(2), "#9ca3af");
        assert_eq!(podium_color(3), "#ea580c");
        assert_eq!(podium_color(4), "#3b82f6");
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[2, 3]), Some(2.5));
    }
}
