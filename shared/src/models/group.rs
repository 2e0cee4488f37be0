use serde::{Deserialize, Serialize};

use crate::models::member::Member;

/// Scoring rules a group plays under
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum RuleSet {
    #[serde(rename = "classic")]
    #[default]
    Classic,
    /// Closing the league grants category bonuses
    #[serde(rename = "pro_bonus")]
    ProBonus,
}

/// Whether the group's league still accepts games
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum LeagueStatus {
    #[serde(rename = "active")]
    #[default]
    Active,
    #[serde(rename = "finalized")]
    Finalized,
}

/// A group of players sharing one league
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Group {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub invite_code: String,
    pub max_members: usize,
    pub is_public: bool,
    pub rule_set: RuleSet,
    pub league_status: LeagueStatus,
    pub members: Vec<Member>,
}

impl Group {
    pub fn is_full(&self) -> bool {
        self.members.len() >= self.max_members
    }

    pub fn human_members(&self) -> impl Iterator<Item = &Member> {
        self.members.iter().filter(|m| !m.is_cpu)
    }

    pub fn cpu_members(&self) -> impl Iterator<Item = &Member> {
        self.members.iter().filter(|m| m.is_cpu)
    }

    /// Active human members; a group with one of them approves its own games
    pub fn active_human_count(&self) -> usize {
        self.human_members().filter(|m| m.is_active()).count()
    }

    pub fn member(&self, member_id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.id == member_id)
    }

    pub fn is_finalized(&self) -> bool {
        self.league_status == LeagueStatus::Finalized
    }

    /// Bonus points only count once the league is closed
    pub fn bonuses_apply(&self) -> bool {
        self.is_finalized()
    }

    pub fn invite_link(&self, origin: &str) -> String {
        format!(
            "{}/groups/join/{}",
            origin.trim_end_matches('/'),
            self.invite_code
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::member::MemberStatus;
    use pretty_assertions::assert_eq;

    fn group(members: Vec<Member>) -> Group {
        Group {
            id: "g1".to_string(),
            name: "Viernes".to_string(),
            description: None,
            invite_code: "ABC123".to_string(),
            max_members: 4,
            is_public: false,
            rule_set: RuleSet::Classic,
            league_status: LeagueStatus::Active,
            members,
        }
    }

    #[test]
    fn test_member_partitions() {
        let g = group(vec![
            Member::human("m1", "u1", Some("Ana".to_string())),
            Member::human("m2", "u2", None).with_status(MemberStatus::Inactive),
            Member::cpu("c1", "Boo", None),
        ]);
        assert_eq!(g.human_members().count(), 2);
        assert_eq!(g.cpu_members().count(), 1);
        assert_eq!(g.active_human_count(), 1);
        assert!(!g.is_full());
    }

    #[test]
    fn test_invite_link() {
        let g = group(vec![]);
        assert_eq!(
            g.invite_link("https://league.example/"),
            "https://league.example/groups/join/ABC123"
        );
    }

    #[test]
    fn test_bonuses_apply_only_when_finalized() {
        let mut g = group(vec![]);
        assert!(!g.bonuses_apply());
        g.league_status = LeagueStatus::Finalized;
        assert!(g.bonuses_apply());
    }
}
