pub mod auth;
pub mod backend;
pub mod charts;
pub mod config;
pub mod error;
pub mod leaderboard;
pub mod report;
pub mod session;
pub mod usecase;

pub use auth::AuthProvider;
pub use backend::{DataBackend, SnapshotBackend};
pub use config::{Config, Environment};
pub use error::{LeagueError, Result};
pub use leaderboard::{aggregate, apply_bonuses, is_auto_approved};
pub use report::{GroupCharts, LeagueReport};
pub use session::Session;
pub use usecase::{GroupStandings, LeagueClosure, LeagueUseCase};
