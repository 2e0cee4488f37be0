use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::Result;

/// Name shown for a human member whose profile has no nickname
pub const UNNAMED_MEMBER: &str = "Usuario sin nombre";

/// Membership status inside a group
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum MemberStatus {
    #[serde(rename = "active")]
    #[default]
    Active,
    #[serde(rename = "inactive")]
    Inactive,
}

/// A participant in a group, either a registered user or a CPU seat filler
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Member {
    /// Member ID, unique within the group
    pub id: String,

    /// Account behind a human member
    pub user_id: Option<String>,

    /// Whether this seat is played by the console
    pub is_cpu: bool,

    /// CPU name or profile nickname, already resolved at the boundary
    pub name: Option<String>,

    /// CPU avatar or profile picture
    pub avatar: Option<String>,

    pub status: MemberStatus,
}

impl Member {
    /// Creates an active human member
    pub fn human(id: impl Into<String>, user_id: impl Into<String>, nickname: Option<String>) -> Self {
        Self {
            id: id.into(),
            user_id: Some(user_id.into()),
            is_cpu: false,
            name: nickname,
            avatar: None,
            status: MemberStatus::Active,
        }
    }

    /// Creates an active CPU member
    pub fn cpu(id: impl Into<String>, name: impl Into<String>, avatar: Option<String>) -> Self {
        Self {
            id: id.into(),
            user_id: None,
            is_cpu: true,
            name: Some(name.into()),
            avatar,
            status: MemberStatus::Active,
        }
    }

    pub fn with_status(mut self, status: MemberStatus) -> Self {
        self.status = status;
        self
    }

    /// Name used on the leaderboard, falling back to a placeholder for unnamed users
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| UNNAMED_MEMBER.to_string())
    }

    pub fn is_active(&self) -> bool {
        self.status == MemberStatus::Active
    }
}

/// Request to add a CPU member to a group
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct NewCpuMember {
    #[validate(length(min = 1, message = "Group is required"))]
    pub group_id: String,

    #[validate(length(min = 1, max = 30, message = "CPU name must be 1-30 characters"))]
    pub cpu_name: String,

    pub cpu_avatar: String,
}

impl NewCpuMember {
    /// Builds a request with the name trimmed, rejecting blank names
    pub fn new(group_id: &str, cpu_name: &str, cpu_avatar: &str) -> Result<Self> {
        let request = Self {
            group_id: group_id.to_string(),
            cpu_name: cpu_name.trim().to_string(),
            cpu_avatar: cpu_avatar.to_string(),
        };
        request.validate()?;
        Ok(request)
    }
}
