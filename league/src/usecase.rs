use serde::Serialize;
use shared::{Bonus, Game, GameStatus, Group, LeaderboardEntry, NewCpuMember, RuleSet};

use crate::backend::DataBackend;
use crate::error::{LeagueError, Result};
use crate::leaderboard::{aggregate, apply_bonuses};

/// Everything the group page needs after a load
#[derive(Debug, Clone, Serialize)]
pub struct GroupStandings {
    pub group: Group,
    pub approved_games: Vec<Game>,
    pub leaderboard: Vec<LeaderboardEntry>,
}

/// Outcome of closing a league
#[derive(Debug, Clone, PartialEq)]
pub enum LeagueClosure {
    /// Pro-bonus leagues report the bonuses they awarded
    ProBonus(Vec<Bonus>),
    Classic,
}

impl LeagueClosure {
    /// Message shown to the group once the league is closed
    pub fn summary(&self) -> String {
        match self {
            LeagueClosure::ProBonus(bonuses) => {
                let mut message = String::from("¡Liga finalizada! Bonos otorgados:\n");
                for bonus in bonuses {
                    message.push_str(&format!(
                        "\n{}: {} (+{} pts)",
                        bonus.bonus_type.label(),
                        bonus.player_name.as_deref().unwrap_or(&bonus.player_id),
                        bonus.bonus_points
                    ));
                }
                message
            }
            LeagueClosure::Classic => {
                "¡Liga cerrada exitosamente! No se podrán agregar más partidas.".to_string()
            }
        }
    }
}

pub struct LeagueUseCase<B: DataBackend> {
    pub backend: B,
}

impl<B: DataBackend> LeagueUseCase<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Loads a group and ranks its approved games. Bonuses only count once
    /// the league is finalized.
    pub async fn load_standings(&self, group_id: &str) -> Result<GroupStandings> {
        let group = self.backend.get_group(group_id).await?;
        let approved_games = self
            .backend
            .get_group_games(group_id, Some(GameStatus::Approved))
            .await?;
        let bonuses = self.backend.get_league_bonuses(group_id).await?;

        let mut leaderboard = aggregate(&group.members, &approved_games);
        if group.bonuses_apply() && !bonuses.is_empty() {
            log::debug!("Applying {} bonuses to group {}", bonuses.len(), group_id);
            leaderboard = apply_bonuses(leaderboard, &bonuses);
        }

        log::info!(
            "Loaded standings for group {}: {} games, {} ranked players",
            group_id,
            approved_games.len(),
            leaderboard.len()
        );
        Ok(GroupStandings {
            group,
            approved_games,
            leaderboard,
        })
    }

    pub async fn close_league(&self, group_id: &str) -> Result<LeagueClosure> {
        let group = self.backend.get_group(group_id).await?;
        if group.is_finalized() {
            return Err(LeagueError::AlreadyFinalized(group_id.to_string()));
        }

        let bonuses = self.backend.close_league(group_id).await.map_err(|e| {
            log::error!("Failed to close league for group {}: {}", group_id, e);
            e
        })?;

        let closure = match group.rule_set {
            RuleSet::ProBonus => LeagueClosure::ProBonus(bonuses),
            RuleSet::Classic => LeagueClosure::Classic,
        };
        log::info!("Closed league for group {}", group_id);
        Ok(closure)
    }

    pub async fn add_cpu_member(&self, group_id: &str, cpu_name: &str, cpu_avatar: &str) -> Result<()> {
        let request = NewCpuMember::new(group_id, cpu_name, cpu_avatar)?;
        let group = self.backend.get_group(group_id).await?;
        if group.is_full() {
            return Err(LeagueError::GroupFull(group_id.to_string()));
        }
        self.backend.add_cpu_member(request).await?;
        log::info!("Added CPU \"{}\" to group {}", cpu_name.trim(), group_id);
        Ok(())
    }

    pub async fn delete_group(&self, group_id: &str) -> Result<()> {
        self.backend.delete_group(group_id).await?;
        log::info!("Deleted group {}", group_id);
        Ok(())
    }

    pub async fn user_groups(&self, user_id: &str) -> Result<Vec<Group>> {
        self.backend.get_user_groups(user_id).await
    }

    pub async fn game_details(&self, game_id: &str) -> Result<Game> {
        self.backend.get_game_details(game_id).await
    }
}
