use serde::{Deserialize, Serialize};

/// Award category granted when a pro-bonus league is closed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BonusType {
    #[serde(rename = "king_of_victories")]
    KingOfVictories,
    #[serde(rename = "king_of_stars")]
    KingOfStars,
    #[serde(rename = "king_of_coins")]
    KingOfCoins,
}

impl BonusType {
    pub fn label(&self) -> &'static str {
        match self {
            BonusType::KingOfVictories => "Rey de Victorias",
            BonusType::KingOfStars => "Rey de Estrellas",
            BonusType::KingOfCoins => "Rey de Monedas",
        }
    }
}

/// Extra league points granted to a player at league finalization
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bonus {
    pub player_id: String,
    pub player_name: Option<String>,
    pub bonus_points: i32,
    pub bonus_type: BonusType,
}

impl Bonus {
    pub fn new(player_id: impl Into<String>, bonus_points: i32, bonus_type: BonusType) -> Self {
        Self {
            player_id: player_id.into(),
            player_name: None,
            bonus_points,
            bonus_type,
        }
    }
}
