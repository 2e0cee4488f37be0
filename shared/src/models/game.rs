use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Verification state of a played game
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameStatus {
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "approved")]
    Approved,
    #[serde(rename = "rejected")]
    Rejected,
}

/// One player's outcome within one game.
///
/// League points arrive precomputed from the backend. Every counter is a
/// plain integer; absent values were zero-filled when the record was read.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameResult {
    pub player_id: String,
    /// Finishing position, 1 is the winner
    pub position: i32,
    pub league_points: i32,

    pub stars: i32,
    pub coins: i32,
    pub minigames_won: i32,
    pub showdown_wins: i32,
    pub items_bought: i32,
    pub items_used: i32,
    pub spaces_traveled: i32,
    pub reactions_used: i32,

    pub blue_spaces: i32,
    pub red_spaces: i32,
    pub lucky_spaces: i32,
    pub unlucky_spaces: i32,
    pub item_spaces: i32,
    pub bowser_spaces: i32,
    pub event_spaces: i32,
    pub vs_spaces: i32,

    /// Coins collected during the match, before end-of-game spending
    pub total_coins_earned: i32,
    /// Stars collected during the match, before end-of-game awards
    pub total_stars_earned: i32,
}

impl GameResult {
    pub fn new(player_id: impl Into<String>, position: i32, league_points: i32) -> Self {
        Self {
            player_id: player_id.into(),
            position,
            league_points,
            ..Default::default()
        }
    }

    pub fn is_win(&self) -> bool {
        self.position == 1
    }
}

/// A single played match
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Game {
    pub id: String,
    pub played_at: DateTime<FixedOffset>,
    pub created_at: DateTime<FixedOffset>,
    pub status: GameStatus,
    /// Board the game was played on
    pub map_name: Option<String>,
    /// `None` when the backend returned the game without its result set
    pub results: Option<Vec<GameResult>>,
}

impl Game {
    pub fn is_approved(&self) -> bool {
        self.status == GameStatus::Approved
    }

    /// Results of the game, empty when none were loaded
    pub fn results(&self) -> &[GameResult] {
        self.results.as_deref().unwrap_or(&[])
    }

    pub fn has_results(&self) -> bool {
        !self.results().is_empty()
    }

    pub fn result_for(&self, player_id: &str) -> Option<&GameResult> {
        self.results().iter().find(|r| r.player_id == player_id)
    }
}
