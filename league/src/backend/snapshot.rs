use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use shared::{
    Bonus, Game, GameStatus, Group, GroupSnapshot, LeagueStatus, Member, NewCpuMember, RuleSet,
};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::DataBackend;
use crate::error::{LeagueError, Result};

#[derive(Debug, Clone)]
struct GroupState {
    group: Group,
    games: Vec<Game>,
    bonuses: Vec<Bonus>,
}

/// In-memory data backend seeded from exported group snapshots
#[derive(Clone, Default)]
pub struct SnapshotBackend {
    groups: Arc<RwLock<HashMap<String, GroupState>>>,
}

impl SnapshotBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a snapshot JSON document from disk, returning the group's ID
    pub async fn load_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await.map_err(|e| {
            LeagueError::Backend(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let group_id = self.load(GroupSnapshot::from_json(&json)?).await?;
        log::info!("Loaded group snapshot from {}", path.display());
        Ok(group_id)
    }

    /// Normalizes and stores a snapshot, replacing any group with the same ID
    pub async fn load(&self, snapshot: GroupSnapshot) -> Result<String> {
        let (group, games, bonuses) = snapshot.into_parts()?;
        let group_id = group.id.clone();
        self.insert(group, games, bonuses).await;
        Ok(group_id)
    }

    pub async fn insert(&self, group: Group, games: Vec<Game>, bonuses: Vec<Bonus>) {
        let mut groups = self.groups.write().await;
        groups.insert(
            group.id.clone(),
            GroupState {
                group,
                games,
                bonuses,
            },
        );
    }
}

#[async_trait]
impl DataBackend for SnapshotBackend {
    async fn get_group(&self, group_id: &str) -> Result<Group> {
        let groups = self.groups.read().await;
        groups
            .get(group_id)
            .map(|state| state.group.clone())
            .ok_or_else(|| LeagueError::GroupNotFound(group_id.to_string()))
    }

    async fn get_group_games(&self, group_id: &str, status: Option<GameStatus>) -> Result<Vec<Game>> {
        let groups = self.groups.read().await;
        let state = groups
            .get(group_id)
            .ok_or_else(|| LeagueError::GroupNotFound(group_id.to_string()))?;
        Ok(state
            .games
            .iter()
            .filter(|g| status.map_or(true, |s| g.status == s))
            .cloned()
            .collect())
    }

    async fn get_game_details(&self, game_id: &str) -> Result<Game> {
        let groups = self.groups.read().await;
        groups
            .values()
            .flat_map(|state| state.games.iter())
            .find(|g| g.id == game_id)
            .cloned()
            .ok_or_else(|| LeagueError::GameNotFound(game_id.to_string()))
    }

    async fn get_league_bonuses(&self, group_id: &str) -> Result<Vec<Bonus>> {
        let groups = self.groups.read().await;
        groups
            .get(group_id)
            .map(|state| state.bonuses.clone())
            .ok_or_else(|| LeagueError::GroupNotFound(group_id.to_string()))
    }

    async fn close_league(&self, group_id: &str) -> Result<Vec<Bonus>> {
        let mut groups = self.groups.write().await;
        let state = groups
            .get_mut(group_id)
            .ok_or_else(|| LeagueError::GroupNotFound(group_id.to_string()))?;
        if state.group.is_finalized() {
            return Err(LeagueError::AlreadyFinalized(group_id.to_string()));
        }
        state.group.league_status = LeagueStatus::Finalized;

        match state.group.rule_set {
            RuleSet::ProBonus => Ok(state.bonuses.clone()),
            RuleSet::Classic => Ok(Vec::new()),
        }
    }

    async fn add_cpu_member(&self, request: NewCpuMember) -> Result<()> {
        let mut groups = self.groups.write().await;
        let state = groups
            .get_mut(&request.group_id)
            .ok_or_else(|| LeagueError::GroupNotFound(request.group_id.clone()))?;
        if state.group.is_full() {
            return Err(LeagueError::GroupFull(request.group_id));
        }
        let avatar = Some(request.cpu_avatar).filter(|a| !a.is_empty());
        state.group.members.push(Member::cpu(
            format!("cpu-{}", Uuid::new_v4()),
            request.cpu_name,
            avatar,
        ));
        Ok(())
    }

    async fn delete_group(&self, group_id: &str) -> Result<()> {
        let mut groups = self.groups.write().await;
        groups
            .remove(group_id)
            .map(|_| ())
            .ok_or_else(|| LeagueError::GroupNotFound(group_id.to_string()))
    }

    async fn get_user_groups(&self, user_id: &str) -> Result<Vec<Group>> {
        let groups = self.groups.read().await;
        let mut found: Vec<Group> = groups
            .values()
            .filter(|state| {
                state
                    .group
                    .members
                    .iter()
                    .any(|m| m.user_id.as_deref() == Some(user_id))
            })
            .map(|state| state.group.clone())
            .collect();
        found.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(found)
    }
}
