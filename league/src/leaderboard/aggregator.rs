use std::cmp::Ordering;
use std::collections::HashMap;

use shared::{Bonus, Game, Group, LeaderboardEntry, Member};

/// Standings order: league points, then stars, coins, minigames won and
/// showdown wins, all descending.
pub fn compare_standings(a: &LeaderboardEntry, b: &LeaderboardEntry) -> Ordering {
    b.total_league_points
        .cmp(&a.total_league_points)
        .then_with(|| b.total_stars.cmp(&a.total_stars))
        .then_with(|| b.total_coins.cmp(&a.total_coins))
        .then_with(|| b.total_minigames_won.cmp(&a.total_minigames_won))
        .then_with(|| b.total_showdown_wins.cmp(&a.total_showdown_wins))
}

/// Order used once bonuses are added: league points, stars, coins.
///
/// Minigame and showdown tiers are not consulted here, so entries tied on
/// these three keep the order they had before the bonus pass.
pub fn compare_after_bonuses(a: &LeaderboardEntry, b: &LeaderboardEntry) -> Ordering {
    b.total_league_points
        .cmp(&a.total_league_points)
        .then_with(|| b.total_stars.cmp(&a.total_stars))
        .then_with(|| b.total_coins.cmp(&a.total_coins))
}

/// Builds the ranked leaderboard for a group.
///
/// Only approved games count. Results for players that are not members are
/// ignored, and members without any counted game are left out. Players tied
/// on every key keep member order.
pub fn aggregate(members: &[Member], games: &[Game]) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = Vec::with_capacity(members.len());
    let mut index: HashMap<&str, usize> = HashMap::with_capacity(members.len());

    for member in members {
        let entry = LeaderboardEntry::for_member(member);
        match index.get(member.id.as_str()) {
            Some(&slot) => entries[slot] = entry,
            None => {
                index.insert(member.id.as_str(), entries.len());
                entries.push(entry);
            }
        }
    }

    let mut counted_games = 0;
    let mut orphan_results = 0;
    for game in games.iter().filter(|g| g.is_approved()) {
        let Some(results) = game.results.as_ref() else {
            continue;
        };
        counted_games += 1;
        for result in results {
            match index.get(result.player_id.as_str()) {
                Some(&slot) => entries[slot].record(result),
                None => orphan_results += 1,
            }
        }
    }

    if orphan_results > 0 {
        log::debug!(
            "Ignored {} results for players outside the group",
            orphan_results
        );
    }

    let mut leaderboard: Vec<LeaderboardEntry> =
        entries.into_iter().filter(|e| e.has_played()).collect();
    leaderboard.sort_by(compare_standings);

    log::debug!(
        "Aggregated {} games into {} leaderboard entries",
        counted_games,
        leaderboard.len()
    );
    leaderboard
}

/// Adds finalization bonuses to the matching entries and re-ranks them.
///
/// Bonuses for players missing from `entries` are dropped.
pub fn apply_bonuses(mut entries: Vec<LeaderboardEntry>, bonuses: &[Bonus]) -> Vec<LeaderboardEntry> {
    for bonus in bonuses {
        match entries.iter_mut().find(|e| e.player_id == bonus.player_id) {
            Some(entry) => {
                entry.total_league_points =
                    entry.total_league_points.saturating_add(bonus.bonus_points)
            }
            None => log::debug!(
                "Dropped {} bonus for unknown player {}",
                bonus.bonus_type.label(),
                bonus.player_id
            ),
        }
    }

    entries.sort_by(compare_after_bonuses);
    entries
}

/// True when an approved game belongs to a group with a single active human,
/// whose games need no votes from anybody else.
pub fn is_auto_approved(game: &Game, group: &Group) -> bool {
    game.is_approved() && group.active_human_count() == 1
}
