use std::env;
use std::path::PathBuf;

use dotenv::dotenv;
use log::{info, warn};
use serde::Deserialize;

use crate::charts::VICTORY_CHART_LIMIT;
use crate::error::{LeagueError, Result};

const DEFAULT_APP_ORIGIN: &str = "http://localhost:5173";

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub enum Environment {
    #[default]
    Development,
    Test,
    Production,
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dev" | "development" => Ok(Environment::Development),
            "test" => Ok(Environment::Test),
            "prod" | "production" => Ok(Environment::Production),
            _ => Err(format!("Unknown environment: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub environment: Environment,
    /// Group snapshot read by the report when no path is given
    pub snapshot_path: Option<PathBuf>,
    /// Players shown on the victories chart
    pub chart_limit: usize,
    /// Public origin used to build invite links
    pub app_origin: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            snapshot_path: None,
            chart_limit: VICTORY_CHART_LIMIT,
            app_origin: DEFAULT_APP_ORIGIN.to_string(),
        }
    }
}

impl Config {
    /// Loads `.env` if present, then reads `LEAGUE_*` variables
    pub fn load() -> Result<Self> {
        if dotenv().is_err() {
            info!("No .env file found, using process environment");
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let environment = match lookup("LEAGUE_ENV") {
            Some(value) => value.parse().map_err(LeagueError::Config)?,
            None => Environment::default(),
        };

        let chart_limit = match lookup("LEAGUE_CHART_LIMIT") {
            Some(value) => value.parse::<usize>().map_err(|e| {
                LeagueError::Config(format!("Invalid LEAGUE_CHART_LIMIT {:?}: {}", value, e))
            })?,
            None => VICTORY_CHART_LIMIT,
        };
        if chart_limit == 0 {
            return Err(LeagueError::Config(
                "LEAGUE_CHART_LIMIT must be at least 1".to_string(),
            ));
        }

        let app_origin = lookup("LEAGUE_APP_ORIGIN").unwrap_or_else(|| {
            if environment == Environment::Production {
                warn!("LEAGUE_APP_ORIGIN not set in production, invite links will point to localhost");
            }
            DEFAULT_APP_ORIGIN.to_string()
        });

        Ok(Self {
            environment,
            snapshot_path: lookup("LEAGUE_SNAPSHOT_PATH")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
            chart_limit,
            app_origin,
        })
    }
}
