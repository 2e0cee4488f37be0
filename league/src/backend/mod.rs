pub mod snapshot;

use async_trait::async_trait;
use shared::{Bonus, Game, GameStatus, Group, NewCpuMember};

use crate::error::Result;

pub use snapshot::SnapshotBackend;

/// Remote persistence for groups, games and league bonuses.
///
/// Implementations return normalized models; record shapes stay behind this seam.
#[async_trait]
pub trait DataBackend: Send + Sync {
    async fn get_group(&self, group_id: &str) -> Result<Group>;

    /// Games of a group, optionally restricted to one status
    async fn get_group_games(&self, group_id: &str, status: Option<GameStatus>) -> Result<Vec<Game>>;

    async fn get_game_details(&self, game_id: &str) -> Result<Game>;

    async fn get_league_bonuses(&self, group_id: &str) -> Result<Vec<Bonus>>;

    /// Finalizes the league; pro-bonus groups get the awarded bonuses back
    async fn close_league(&self, group_id: &str) -> Result<Vec<Bonus>>;

    async fn add_cpu_member(&self, request: NewCpuMember) -> Result<()>;

    async fn delete_group(&self, group_id: &str) -> Result<()>;

    /// Groups the signed-in user belongs to
    async fn get_user_groups(&self, user_id: &str) -> Result<Vec<Group>>;
}
