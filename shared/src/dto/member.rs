use serde::{Deserialize, Serialize};

use crate::error::SharedError;
use crate::models::member::{Member, MemberStatus};

/// Profile joined onto a human member row
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfileRecord {
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
}

/// Group member as returned by the data backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MemberRecord {
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub is_cpu: bool,
    #[serde(default)]
    pub cpu_name: Option<String>,
    #[serde(default)]
    pub cpu_avatar: Option<String>,
    #[serde(default)]
    pub profile: Option<ProfileRecord>,
    #[serde(default)]
    pub status: MemberStatus,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

impl TryFrom<MemberRecord> for Member {
    type Error = SharedError;

    fn try_from(record: MemberRecord) -> Result<Self, Self::Error> {
        if record.id.is_empty() {
            return Err(SharedError::MissingField("member.id".to_string()));
        }

        let (name, avatar) = if record.is_cpu {
            (non_empty(record.cpu_name), non_empty(record.cpu_avatar))
        } else {
            let profile = record.profile.unwrap_or_default();
            (non_empty(profile.nickname), non_empty(profile.profile_picture))
        };

        Ok(Member {
            id: record.id,
            user_id: record.user_id,
            is_cpu: record.is_cpu,
            name,
            avatar,
            status: record.status,
        })
    }
}
