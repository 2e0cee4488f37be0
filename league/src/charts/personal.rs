use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use shared::{Game, GameResult};

use super::{chronological, game_label, max_minigames, mean, podium_color, ChartSeries, DataPoint};

/// Builds the "earned vs final" pair of series for one player, labelling
/// each point with the game's index among all approved games.
fn earned_vs_final(
    games: &[Game],
    member_id: &str,
    earned: impl Fn(&GameResult) -> i32,
    kept: impl Fn(&GameResult) -> i32,
) -> Option<Vec<ChartSeries>> {
    let mut earned_points = Vec::new();
    let mut final_points = Vec::new();

    for (i, game) in chronological(games).into_iter().enumerate() {
        if let Some(result) = game.result_for(member_id) {
            earned_points.push(DataPoint::new(game_label(i), earned(result)));
            final_points.push(DataPoint::new(game_label(i), kept(result)));
        }
    }

    if earned_points.is_empty() {
        return None;
    }
    Some(vec![
        ChartSeries {
            name: "Obtenidas".to_string(),
            data: earned_points,
        },
        ChartSeries {
            name: "Finales".to_string(),
            data: final_points,
        },
    ])
}

/// Coins a player collected vs. ended with, per game. `None` if they never played.
pub fn personal_coins(games: &[Game], member_id: &str) -> Option<Vec<ChartSeries>> {
    earned_vs_final(games, member_id, |r| r.total_coins_earned, |r| r.coins)
}

/// Stars a player collected vs. ended with, per game. `None` if they never played.
pub fn personal_stars(games: &[Game], member_id: &str) -> Option<Vec<ChartSeries>> {
    earned_vs_final(games, member_id, |r| r.total_stars_earned, |r| r.stars)
}

/// Pie slice of a player's finishing positions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PositionSlice {
    pub position: i32,
    pub label: String,
    pub count: u32,
    pub color: String,
}

/// How often a player finished 1st to 4th. Empty positions are left out.
pub fn position_distribution(games: &[Game], member_id: &str) -> Vec<PositionSlice> {
    let mut counts = [0u32; 4];
    for game in games.iter().filter(|g| g.is_approved()) {
        if let Some(result) = game.result_for(member_id) {
            if (1..=4).contains(&result.position) {
                counts[(result.position - 1) as usize] += 1;
            }
        }
    }

    counts
        .iter()
        .enumerate()
        .filter(|(_, count)| **count > 0)
        .map(|(i, &count)| {
            let position = i as i32 + 1;
            let color = if position == 4 { "#6b7280" } else { podium_color(i + 1) };
            PositionSlice {
                position,
                label: format!("{}° Lugar", position),
                count,
                color: color.to_string(),
            }
        })
        .collect()
}

/// Average minigames a player won in the games where they led the minigame
/// count (ties included). `Some(0.0)` means they played but never led.
pub fn personal_minigame_bonus_average(games: &[Game], member_id: &str) -> Option<f64> {
    let played: Vec<&Game> = games
        .iter()
        .filter(|g| g.is_approved() && g.has_results())
        .collect();
    if played.is_empty() {
        return None;
    }

    let wins: Vec<i32> = played
        .into_iter()
        .filter_map(|game| {
            let max = max_minigames(game);
            let result = game.result_for(member_id)?;
            (max > 0 && result.minigames_won == max).then_some(result.minigames_won)
        })
        .collect();

    Some(mean(&wins).unwrap_or(0.0))
}

/// Most recently recorded game the player won
pub fn last_victory<'a>(games: &'a [Game], member_id: &str) -> Option<&'a Game> {
    games
        .iter()
        .filter(|g| g.is_approved())
        .filter(|g| g.result_for(member_id).is_some_and(|r| r.is_win()))
        .max_by_key(|g| g.created_at)
}

/// Time elapsed since an instant, split for a countdown-style display
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ElapsedTime {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl ElapsedTime {
    /// Splits `now - since`; an instant in the future counts as zero
    pub fn between(since: DateTime<FixedOffset>, now: DateTime<FixedOffset>) -> Self {
        let total = (now - since).num_seconds().max(0);
        Self {
            days: total / 86_400,
            hours: (total % 86_400) / 3_600,
            minutes: (total % 3_600) / 60,
            seconds: total % 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use shared::GameStatus;

    fn at(day: i64) -> DateTime<FixedOffset> {
        Utc.with_ymd_and_hms(2025, 2, 1, 21, 0, 0).unwrap().fixed_offset() + Duration::days(day)
    }

    fn game(day: i64, results: Vec<GameResult>) -> Game {
        Game {
            id: format!("game-{}", day),
            played_at: at(day),
            created_at: at(day),
            status: GameStatus::Approved,
            map_name: Some(format!("Board {}", day)),
            results: Some(results),
        }
    }

    fn result(id: &str, position: i32) -> GameResult {
        GameResult::new(id, position, 0)
    }

    #[test]
    fn test_personal_coins_uses_global_game_index() {
        let mut mine = result("a", 1);
        mine.total_coins_earned = 80;
        mine.coins = 25;
        let games = vec![
            game(1, vec![result("b", 1)]),
            game(2, vec![mine, result("b", 2)]),
        ];

        let series = personal_coins(&games, "a").unwrap();
        assert_eq!(series[0].name, "Obtenidas");
        assert_eq!(series[0].data, vec![DataPoint::new("P2", 80)]);
        assert_eq!(series[1].name, "Finales");
        assert_eq!(series[1].data, vec![DataPoint::new("P2", 25)]);
        assert!(personal_coins(&games, "nobody").is_none());
    }

    #[test]
    fn test_personal_stars() {
        let mut mine = result("a", 2);
        mine.total_stars_earned = 4;
        mine.stars = 5;
        let series = personal_stars(&[game(1, vec![mine])], "a").unwrap();
        assert_eq!(series[0].data[0].value, 4.0);
        assert_eq!(series[1].data[0].value, 5.0);
    }

    #[test]
    fn test_position_distribution() {
        let games = vec![
            game(1, vec![result("a", 1)]),
            game(2, vec![result("a", 1)]),
            game(3, vec![result("a", 4)]),
            game(4, vec![result("a", 7)]),
        ];
        let slices = position_distribution(&games, "a");
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].label, "1° Lugar");
        assert_eq!(slices[0].count, 2);
        assert_eq!(slices[0].color, "#eab308");
        assert_eq!(slices[1].position, 4);
        assert_eq!(slices[1].color, "#6b7280");
    }

    #[test]
    fn test_personal_minigame_bonus_average() {
        let led = |id: &str, n: i32| {
            let mut r = result(id, 1);
            r.minigames_won = n;
            r
        };
        let games = vec![
            game(1, vec![led("a", 5), led("b", 2)]),
            game(2, vec![led("a", 3), led("b", 3)]),
            game(3, vec![led("a", 1), led("b", 4)]),
        ];
        assert_eq!(personal_minigame_bonus_average(&games, "a"), Some(4.0));
        assert_eq!(personal_minigame_bonus_average(&games, "c"), Some(0.0));
        assert_eq!(personal_minigame_bonus_average(&[], "a"), None);
    }

    #[test]
    fn test_last_victory() {
        let games = vec![
            game(1, vec![result("a", 1)]),
            game(3, vec![result("a", 1)]),
            game(5, vec![result("a", 2)]),
        ];
        let last = last_victory(&games, "a").unwrap();
        assert_eq!(last.id, "game-3");
        assert_eq!(last.map_name.as_deref(), Some("Board 3"));
        assert!(last_victory(&games, "b").is_none());
    }

    #[test]
    fn test_elapsed_time() {
        let since = at(0);
        let now = since + Duration::days(2) + Duration::hours(5) + Duration::minutes(7) + Duration::seconds(9);
        assert_eq!(
            ElapsedTime::between(since, now),
            ElapsedTime { days: 2, hours: 5, minutes: 7, seconds: 9 }
        );
        assert_eq!(ElapsedTime::between(now, since).days, 0);
    }
}
