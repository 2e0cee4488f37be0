use serde::{Deserialize, Serialize};

use crate::models::game::GameResult;
use crate::models::member::Member;

/// Aggregated standings row for one player
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub player_id: String,
    pub player_name: String,
    pub is_cpu: bool,
    pub profile_picture: Option<String>,

    pub total_league_points: i32,
    pub games_won: i32,
    pub games_played: i32,

    pub total_stars: i32,
    pub total_coins: i32,
    pub total_minigames_won: i32,
    pub total_showdown_wins: i32,
    pub total_items_bought: i32,
    pub total_items_used: i32,
    pub total_spaces_traveled: i32,
    pub total_reactions_used: i32,

    pub total_blue_spaces: i32,
    pub total_red_spaces: i32,
    pub total_lucky_spaces: i32,
    pub total_unlucky_spaces: i32,
    pub total_item_spaces: i32,
    pub total_bowser_spaces: i32,
    pub total_event_spaces: i32,
    pub total_vs_spaces: i32,
}

impl LeaderboardEntry {
    /// Empty row for a member, every counter at zero
    pub fn for_member(member: &Member) -> Self {
        Self {
            player_id: member.id.clone(),
            player_name: member.display_name(),
            is_cpu: member.is_cpu,
            profile_picture: member.avatar.clone(),
            ..Default::default()
        }
    }

    /// Folds one game result into the running totals. Totals saturate at the
    /// `i32` bounds.
    pub fn record(&mut self, result: &GameResult) {
        self.total_league_points = self.total_league_points.saturating_add(result.league_points);
        if result.is_win() {
            self.games_won = self.games_won.saturating_add(1);
        }
        self.games_played = self.games_played.saturating_add(1);

        self.total_stars = self.total_stars.saturating_add(result.stars);
        self.total_coins = self.total_coins.saturating_add(result.coins);
        self.total_minigames_won = self.total_minigames_won.saturating_add(result.minigames_won);
        self.total_showdown_wins = self.total_showdown_wins.saturating_add(result.showdown_wins);
        self.total_items_bought = self.total_items_bought.saturating_add(result.items_bought);
        self.total_items_used = self.total_items_used.saturating_add(result.items_used);
        self.total_spaces_traveled = self.total_spaces_traveled.saturating_add(result.spaces_traveled);
        self.total_reactions_used = self.total_reactions_used.saturating_add(result.reactions_used);

        self.total_blue_spaces = self.total_blue_spaces.saturating_add(result.blue_spaces);
        self.total_red_spaces = self.total_red_spaces.saturating_add(result.red_spaces);
        self.total_lucky_spaces = self.total_lucky_spaces.saturating_add(result.lucky_spaces);
        self.total_unlucky_spaces = self.total_unlucky_spaces.saturating_add(result.unlucky_spaces);
        self.total_item_spaces = self.total_item_spaces.saturating_add(result.item_spaces);
        self.total_bowser_spaces = self.total_bowser_spaces.saturating_add(result.bowser_spaces);
        self.total_event_spaces = self.total_event_spaces.saturating_add(result.event_spaces);
        self.total_vs_spaces = self.total_vs_spaces.saturating_add(result.vs_spaces);
    }

    pub fn has_played(&self) -> bool {
        self.games_played > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_for_member_copies_identity() {
        let member = Member::cpu("c1", "Boo", Some("boo.png".to_string()));
        let entry = LeaderboardEntry::for_member(&member);
        assert_eq!(entry.player_id, "c1");
        assert_eq!(entry.player_name, "Boo");
        assert!(entry.is_cpu);
        assert_eq!(entry.profile_picture.as_deref(), Some("boo.png"));
        assert!(!entry.has_played());
    }

    #[test]
    fn test_record_accumulates() {
        let member = Member::human("m1", "u1", Some("Ana".to_string()));
        let mut entry = LeaderboardEntry::for_member(&member);

        let mut first = GameResult::new("m1", 1, 5);
        first.stars = 3;
        first.blue_spaces = 7;
        let mut second = GameResult::new("m1", 3, 1);
        second.stars = 1;
        second.coins = 40;

        entry.record(&first);
        entry.record(&second);

        assert_eq!(entry.total_league_points, 6);
        assert_eq!(entry.games_played, 2);
        assert_eq!(entry.games_won, 1);
        assert_eq!(entry.total_stars, 4);
        assert_eq!(entry.total_coins, 40);
        assert_eq!(entry.total_blue_spaces, 7);
    }

    #[test]
    fn test_record_saturates_instead_of_overflowing() {
        let member = Member::human("m1", "u1", None);
        let mut entry = LeaderboardEntry::for_member(&member);

        let mut huge = GameResult::new("m1", 1, i32::MAX);
        huge.coins = i32::MAX;
        let mut debt = GameResult::new("m1", 2, 1);
        debt.coins = 1;

        entry.record(&huge);
        entry.record(&debt);

        assert_eq!(entry.total_league_points, i32::MAX);
        assert_eq!(entry.total_coins, i32::MAX);
        assert_eq!(entry.games_played, 2);
    }
}
