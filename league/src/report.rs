use serde::Serialize;
use shared::LeaderboardEntry;

use crate::charts::{
    coins_per_game, minigame_bonus_average, position_evolution, victories_chart, victory_ticks,
    ChartSeries, VictoryBar,
};
use crate::config::Config;
use crate::leaderboard::is_auto_approved;
use crate::usecase::GroupStandings;

/// Group-wide statistics tab
#[derive(Debug, Clone, Serialize)]
pub struct GroupCharts {
    pub victories: Vec<VictoryBar>,
    pub victory_ticks: Vec<i32>,
    pub position_evolution: Vec<ChartSeries>,
    pub minigame_bonus_average: Option<f64>,
    pub coins_per_game: ChartSeries,
}

/// Printable summary of a group's league
#[derive(Debug, Clone, Serialize)]
pub struct LeagueReport {
    pub group_id: String,
    pub group_name: String,
    pub finalized: bool,
    pub invite_link: String,
    pub leaderboard: Vec<LeaderboardEntry>,
    /// Approved games that needed no votes
    pub auto_approved_games: Vec<String>,
    pub charts: GroupCharts,
}

impl LeagueReport {
    pub fn build(standings: &GroupStandings, config: &Config) -> Self {
        let GroupStandings {
            group,
            approved_games,
            leaderboard,
        } = standings;

        let victories = victories_chart(leaderboard, config.chart_limit);
        let charts = GroupCharts {
            victory_ticks: victory_ticks(&victories),
            victories,
            position_evolution: position_evolution(leaderboard, approved_games),
            minigame_bonus_average: minigame_bonus_average(approved_games),
            coins_per_game: coins_per_game(approved_games),
        };

        Self {
            group_id: group.id.clone(),
            group_name: group.name.clone(),
            finalized: group.is_finalized(),
            invite_link: group.invite_link(&config.app_origin),
            leaderboard: leaderboard.clone(),
            auto_approved_games: approved_games
                .iter()
                .filter(|g| is_auto_approved(g, group))
                .map(|g| g.id.clone())
                .collect(),
            charts,
        }
    }
}
