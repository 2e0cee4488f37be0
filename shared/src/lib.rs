pub mod models {
    pub mod auth;
    pub mod bonus;
    pub mod game;
    pub mod group;
    pub mod leaderboard;
    pub mod member;
}

pub mod dto {
    pub mod bonus;
    pub mod game;
    pub mod group;
    pub mod member;
}

pub mod error;

// Re-export commonly used items
pub use error::{Result, SharedError};

// Re-export models
pub use models::{
    auth::{AuthCredentials, PasswordResetRequest, User},
    bonus::{Bonus, BonusType},
    game::{Game, GameResult, GameStatus},
    group::{Group, LeagueStatus, RuleSet},
    leaderboard::LeaderboardEntry,
    member::{Member, MemberStatus, NewCpuMember, UNNAMED_MEMBER},
};

// Re-export DTOs
pub use dto::{
    bonus::{BonusRecord, ClosedLeagueBonusRecord},
    game::{GameRecord, GameResultRecord, MapRecord},
    group::{GroupRecord, GroupSnapshot},
    member::{MemberRecord, ProfileRecord},
};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_member_creation() {
        let member = Member {
            id: "m1".to_string(),
            user_id: Some("u1".to_string()),
            is_cpu: false,
            name: Some("Ana".to_string()),
            avatar: None,
            status: MemberStatus::Active,
        };

        assert_eq!(member.display_name(), "Ana");
        assert!(member.is_active());
    }

    #[test]
    fn test_group_creation() {
        let group = Group {
            id: "g1".to_string(),
            name: "Viernes".to_string(),
            description: Some("Liga de los viernes".to_string()),
            invite_code: "ABC123".to_string(),
            max_members: 4,
            is_public: true,
            rule_set: RuleSet::ProBonus,
            league_status: LeagueStatus::Active,
            members: vec![Member::cpu("c1", "Boo", None)],
        };

        assert_eq!(group.name, "Viernes");
        assert_eq!(group.cpu_members().count(), 1);
        assert!(!group.is_finalized());
    }
}
