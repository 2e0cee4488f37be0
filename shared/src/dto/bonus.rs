use serde::{Deserialize, Serialize};

use crate::error::SharedError;
use crate::models::bonus::{Bonus, BonusType};

/// Stored league bonus row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BonusRecord {
    pub player_id: String,
    #[serde(default)]
    pub player_name: Option<String>,
    #[serde(default)]
    pub bonus_points: i32,
    pub bonus_type: BonusType,
}

impl TryFrom<BonusRecord> for Bonus {
    type Error = SharedError;

    fn try_from(record: BonusRecord) -> Result<Self, Self::Error> {
        if record.player_id.is_empty() {
            return Err(SharedError::MissingField("bonus.player_id".to_string()));
        }
        Ok(Bonus {
            player_id: record.player_id,
            player_name: record.player_name,
            bonus_points: record.bonus_points,
            bonus_type: record.bonus_type,
        })
    }
}

impl From<&Bonus> for BonusRecord {
    fn from(bonus: &Bonus) -> Self {
        Self {
            player_id: bonus.player_id.clone(),
            player_name: bonus.player_name.clone(),
            bonus_points: bonus.bonus_points,
            bonus_type: bonus.bonus_type,
        }
    }
}

/// Row returned by the close-league procedure of a pro-bonus group
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClosedLeagueBonusRecord {
    pub p_id: String,
    #[serde(default)]
    pub p_name: Option<String>,
    pub b_type: BonusType,
    #[serde(default)]
    pub b_points: i32,
}

impl From<ClosedLeagueBonusRecord> for Bonus {
    fn from(record: ClosedLeagueBonusRecord) -> Self {
        Self {
            player_id: record.p_id,
            player_name: record.p_name,
            bonus_points: record.b_points,
            bonus_type: record.b_type,
        }
    }
}
