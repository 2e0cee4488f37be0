use serde::{Deserialize, Serialize};

use crate::dto::bonus::BonusRecord;
use crate::dto::game::GameRecord;
use crate::dto::member::MemberRecord;
use crate::error::{Result, SharedError};
use crate::models::bonus::Bonus;
use crate::models::game::Game;
use crate::models::group::{Group, LeagueStatus, RuleSet};
use crate::models::member::Member;

fn default_max_members() -> usize {
    4
}

/// Group as returned by the data backend, members embedded
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GroupRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub invite_code: String,
    #[serde(default = "default_max_members")]
    pub max_members: usize,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub rule_set: RuleSet,
    #[serde(default)]
    pub league_status: LeagueStatus,
    #[serde(default)]
    pub members: Option<Vec<MemberRecord>>,
}

impl TryFrom<GroupRecord> for Group {
    type Error = SharedError;

    fn try_from(record: GroupRecord) -> Result<Self> {
        if record.id.is_empty() {
            return Err(SharedError::MissingField("group.id".to_string()));
        }
        let members = record
            .members
            .unwrap_or_default()
            .into_iter()
            .map(Member::try_from)
            .collect::<Result<Vec<_>>>()?;

        Ok(Group {
            id: record.id,
            name: record.name,
            description: record.description.filter(|d| !d.is_empty()),
            invite_code: record.invite_code,
            max_members: record.max_members,
            is_public: record.is_public,
            rule_set: record.rule_set,
            league_status: record.league_status,
            members,
        })
    }
}

/// A group with its games and bonuses, as exported from the data backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GroupSnapshot {
    pub group: GroupRecord,
    #[serde(default)]
    pub games: Vec<GameRecord>,
    #[serde(default)]
    pub bonuses: Vec<BonusRecord>,
}

impl GroupSnapshot {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Normalizes every record, failing on the first malformed one
    pub fn into_parts(self) -> Result<(Group, Vec<Game>, Vec<Bonus>)> {
        let group = Group::try_from(self.group)?;
        let games = self
            .games
            .into_iter()
            .map(Game::try_from)
            .collect::<Result<Vec<_>>>()?;
        let bonuses = self
            .bonuses
            .into_iter()
            .map(Bonus::try_from)
            .collect::<Result<Vec<_>>>()?;
        log::debug!(
            "Loaded snapshot for group {}: {} members, {} games, {} bonuses",
            group.id,
            group.members.len(),
            games.len(),
            bonuses.len()
        );
        Ok((group, games, bonuses))
    }
}
