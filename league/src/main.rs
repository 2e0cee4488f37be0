use anyhow::{anyhow, Context};
use league::{Config, LeagueReport, LeagueUseCase, SnapshotBackend};
use log::error;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        anyhow!(e)
    })?;

    let path = std::env::args()
        .nth(1)
        .map(std::path::PathBuf::from)
        .or_else(|| config.snapshot_path.clone())
        .ok_or_else(|| anyhow!("usage: league-report <snapshot.json> (or set LEAGUE_SNAPSHOT_PATH)"))?;

    let backend = SnapshotBackend::new();
    let group_id = backend
        .load_file(&path)
        .await
        .with_context(|| format!("loading snapshot {}", path.display()))?;

    let usecase = LeagueUseCase::new(backend);
    let standings = usecase
        .load_standings(&group_id)
        .await
        .with_context(|| format!("building standings for group {}", group_id))?;

    let report = LeagueReport::build(&standings, &config);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
