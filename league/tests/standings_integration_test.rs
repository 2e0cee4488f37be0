use std::path::PathBuf;

use league::charts::{last_victory, personal_coins, position_distribution};
use league::{Config, DataBackend, LeagueError, LeagueReport, LeagueUseCase, SnapshotBackend};
use pretty_assertions::assert_eq;
use shared::{GameStatus, GroupSnapshot, UNNAMED_MEMBER};

fn demo_snapshot() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("demos")
        .join("friday_league.json")
}

async fn load_demo() -> (LeagueUseCase<SnapshotBackend>, String) {
    let backend = SnapshotBackend::new();
    let group_id = backend.load_file(demo_snapshot()).await.unwrap();
    (LeagueUseCase::new(backend), group_id)
}

#[tokio::test]
async fn test_snapshot_to_report_workflow() {
    // 1. Load the exported group
    let (usecase, group_id) = load_demo().await;
    assert_eq!(group_id, "8f6d1c2e-viernes");

    // 2. Rank it; the league is finalized so bonuses count
    let standings = usecase.load_standings(&group_id).await.unwrap();
    assert_eq!(standings.approved_games.len(), 3);

    let ranking: Vec<(&str, i32)> = standings
        .leaderboard
        .iter()
        .map(|e| (e.player_id.as_str(), e.total_league_points))
        .collect();
    assert_eq!(
        ranking,
        vec![("m-bea", 10), ("m-ana", 9), ("m-carlos", 1), ("cpu-boo", 1)]
    );
    assert_eq!(standings.leaderboard[2].player_name, UNNAMED_MEMBER);

    // 3. Build the printable report
    let report = LeagueReport::build(&standings, &Config::default());
    assert!(report.finalized);
    assert_eq!(report.invite_link, "http://localhost:5173/groups/join/VIERNES");
    assert_eq!(report.charts.victories[0].label, "Beatriz Mo...");
    assert_eq!(report.charts.victory_ticks, vec![0, 1]);
    assert_eq!(report.charts.minigame_bonus_average, Some(5.5));

    let coins: Vec<f64> = report
        .charts
        .coins_per_game
        .data
        .iter()
        .map(|p| p.value)
        .collect();
    assert_eq!(coins, vec![390.0, 405.0, 0.0]);

    // 4. The report serializes for the CLI
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["group_name"], "Liga de los Viernes");
}

#[tokio::test]
async fn test_personal_statistics_from_snapshot() {
    let (usecase, group_id) = load_demo().await;
    let standings = usecase.load_standings(&group_id).await.unwrap();
    let games = &standings.approved_games;

    let coins = personal_coins(games, "m-carlos").unwrap();
    assert_eq!(coins[0].name, "Obtenidas");
    assert_eq!(coins[0].data.len(), 2);
    assert_eq!(coins[1].data[1].value, 30.0);

    let slices = position_distribution(games, "m-ana");
    let counts: Vec<(i32, u32)> = slices.iter().map(|s| (s.position, s.count)).collect();
    assert_eq!(counts, vec![(1, 1), (2, 1)]);

    assert_eq!(last_victory(games, "m-bea").unwrap().id, "game-2");
    assert!(last_victory(games, "m-carlos").is_none());
}

#[tokio::test]
async fn test_pending_games_stay_out_of_standings() {
    let (usecase, group_id) = load_demo().await;

    let pending = usecase
        .backend
        .get_group_games(&group_id, Some(GameStatus::Pending))
        .await
        .unwrap();
    assert_eq!(pending.len(), 1);

    let standings = usecase.load_standings(&group_id).await.unwrap();
    let carlos = standings
        .leaderboard
        .iter()
        .find(|e| e.player_id == "m-carlos")
        .unwrap();
    assert_eq!(carlos.games_won, 0);
}

#[tokio::test]
async fn test_malformed_snapshot_is_rejected() {
    let path = std::env::temp_dir().join(format!("league-bad-{}.json", std::process::id()));
    tokio::fs::write(&path, r#"{"group": {"id": "g", "name": "x"}, "games": [{"id": 1}]}"#)
        .await
        .unwrap();

    let result = SnapshotBackend::new().load_file(&path).await;
    let _ = tokio::fs::remove_file(&path).await;
    assert!(matches!(result, Err(LeagueError::Shared(_))));

    let missing = SnapshotBackend::new()
        .load_file("/nonexistent/league.json")
        .await;
    assert!(matches!(missing, Err(LeagueError::Backend(_))));
}

#[tokio::test]
async fn test_result_row_without_player_keeps_group_loadable() {
    let snapshot = GroupSnapshot::from_json(
        r#"{
            "group": {"id": "g-rows", "name": "Sueltos", "members": [
                {"id": "m1", "user_id": "u1", "profile": {"nickname": "Ana"}},
                {"id": "m2", "user_id": "u2", "profile": {"nickname": "Bea"}}
            ]},
            "games": [
                {"id": "x1", "played_at": "2025-04-01T20:00:00+00:00", "status": "approved",
                 "results": [
                    {"player_id": "m1", "position": 1, "league_points": 5},
                    {"position": 2, "league_points": 3},
                    {"player_id": "m2", "position": 3, "league_points": 1}
                 ]}
            ]
        }"#,
    )
    .unwrap();

    let backend = SnapshotBackend::new();
    let group_id = backend.load(snapshot).await.unwrap();
    let usecase = LeagueUseCase::new(backend);
    let standings = usecase.load_standings(&group_id).await.unwrap();

    let ranking: Vec<(&str, i32)> = standings
        .leaderboard
        .iter()
        .map(|e| (e.player_id.as_str(), e.total_league_points))
        .collect();
    assert_eq!(ranking, vec![("m1", 5), ("m2", 1)]);
}
