use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::SharedError;
use crate::models::game::{Game, GameResult, GameStatus};

/// Per-player result row as returned by the data backend.
///
/// Older rows predate most of the counters, so all of them are optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GameResultRecord {
    pub player_id: Option<String>,
    pub position: Option<i32>,
    pub league_points: Option<i32>,

    pub stars: Option<i32>,
    pub coins: Option<i32>,
    pub minigames_won: Option<i32>,
    pub showdown_wins: Option<i32>,
    pub items_bought: Option<i32>,
    pub items_used: Option<i32>,
    pub spaces_traveled: Option<i32>,
    pub reactions_used: Option<i32>,

    pub blue_spaces: Option<i32>,
    pub red_spaces: Option<i32>,
    pub lucky_spaces: Option<i32>,
    pub unlucky_spaces: Option<i32>,
    pub item_spaces: Option<i32>,
    pub bowser_spaces: Option<i32>,
    pub event_spaces: Option<i32>,
    pub vs_spaces: Option<i32>,

    pub total_coins_earned: Option<i32>,
    pub total_stars_earned: Option<i32>,
}

impl TryFrom<GameResultRecord> for GameResult {
    type Error = SharedError;

    fn try_from(record: GameResultRecord) -> Result<Self, Self::Error> {
        let player_id = record
            .player_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| SharedError::MissingField("result.player_id".to_string()))?;

        Ok(GameResult {
            player_id,
            position: record.position.unwrap_or(0),
            league_points: record.league_points.unwrap_or(0),
            stars: record.stars.unwrap_or(0),
            coins: record.coins.unwrap_or(0),
            minigames_won: record.minigames_won.unwrap_or(0),
            showdown_wins: record.showdown_wins.unwrap_or(0),
            items_bought: record.items_bought.unwrap_or(0),
            items_used: record.items_used.unwrap_or(0),
            spaces_traveled: record.spaces_traveled.unwrap_or(0),
            reactions_used: record.reactions_used.unwrap_or(0),
            blue_spaces: record.blue_spaces.unwrap_or(0),
            red_spaces: record.red_spaces.unwrap_or(0),
            lucky_spaces: record.lucky_spaces.unwrap_or(0),
            unlucky_spaces: record.unlucky_spaces.unwrap_or(0),
            item_spaces: record.item_spaces.unwrap_or(0),
            bowser_spaces: record.bowser_spaces.unwrap_or(0),
            event_spaces: record.event_spaces.unwrap_or(0),
            vs_spaces: record.vs_spaces.unwrap_or(0),
            total_coins_earned: record.total_coins_earned.unwrap_or(0),
            total_stars_earned: record.total_stars_earned.unwrap_or(0),
        })
    }
}

/// Board reference joined onto a game row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapRecord {
    pub name: Option<String>,
}

/// Game as returned by the data backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameRecord {
    pub id: String,
    pub played_at: DateTime<FixedOffset>,
    /// Missing on rows created before the column existed
    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,
    pub status: GameStatus,
    #[serde(default)]
    pub map: Option<MapRecord>,
    #[serde(default)]
    pub results: Option<Vec<GameResultRecord>>,
}

impl TryFrom<GameRecord> for Game {
    type Error = SharedError;

    fn try_from(record: GameRecord) -> Result<Self, Self::Error> {
        // Rows without a player cannot be attributed to anyone; drop them
        // and keep the rest of the game.
        let results = record.results.map(|rows| {
            rows.into_iter()
                .filter_map(|row| match GameResult::try_from(row) {
                    Ok(result) => Some(result),
                    Err(e) => {
                        log::warn!("Dropped result row of game {}: {}", record.id, e);
                        None
                    }
                })
                .collect::<Vec<_>>()
        });

        Ok(Game {
            id: record.id,
            played_at: record.played_at,
            created_at: record.created_at.unwrap_or(record.played_at),
            status: record.status,
            map_name: record.map.and_then(|m| m.name),
            results,
        })
    }
}
