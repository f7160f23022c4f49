// Standings order for teams, with the tie-break chain used for playoff seeding and draft order.
use std::collections::HashMap;

use crate::logic::{game::{Game, GameType, Side, TeamSummary}, team::Team, types::TeamId};

type TieBreaker = fn(&TeamRanking, &Team, &Team) -> i32;

// Applied in order. The first non-zero result decides.
const TIE_BREAKERS: [TieBreaker; 5] = [
    TeamRanking::compare_playoff_rank,
    TeamRanking::compare_wins,
    TeamRanking::compare_division_record,
    TeamRanking::compare_head_to_head,
    TeamRanking::compare_scoring_differential,
];

// Regular season results of one year, as needed by the tie-breakers.
#[derive(Debug, Default, Clone)]
pub struct TeamRanking {
    // (winner, loser) -> number of wins.
    head_to_head: HashMap<(TeamId, TeamId), u16>,
    // Points scored minus points conceded.
    differential: HashMap<TeamId, i64>,
}

impl TeamRanking {
    // Only regular season games and summaries count.
    pub fn build(games: &[Game], summaries: &[TeamSummary]) -> Self {
        let mut ranking = Self::default();

        for game in games.iter().filter(|g| g.game_type == GameType::RegularSeason) {
            if let (Some(winner), Some(loser)) = (game.winner(), game.loser()) {
                *ranking.head_to_head.entry((winner, loser)).or_insert(0) += 1;
            }
        }

        for summary in summaries.iter().filter(|s| s.game_type == GameType::RegularSeason) {
            let score = i64::from(summary.score);
            let diff = ranking.differential.entry(summary.team_id).or_insert(0);
            match summary.side {
                Side::Offense => *diff += score,
                Side::Defense => *diff -= score,
            }
        }

        return ranking;
    }

    // Positive when `a` ranks above `b`, negative when below, zero when they cannot be told apart.
    pub fn compare(&self, a: &Team, b: &Team) -> i32 {
        if a.games() == 0 || b.games() == 0 {
            return 0;
        }

        for tie_breaker in TIE_BREAKERS {
            let result = tie_breaker(self, a, b);
            if result != 0 {
                return result;
            }
        }
        return 0;
    }

    pub fn sort_best_to_worst(&self, teams: &mut [Team]) {
        insertion_sort_by(teams, |a, b| self.compare(a, b) > 0);
    }

    pub fn sort_worst_to_best(&self, teams: &mut [Team]) {
        insertion_sort_by(teams, |a, b| self.compare(a, b) < 0);
    }

    // A missing rank reads as zero, which beats every real rank.
    fn compare_playoff_rank(&self, a: &Team, b: &Team) -> i32 {
        let rank_a = i32::from(a.playoff_rank.unwrap_or(0));
        let rank_b = i32::from(b.playoff_rank.unwrap_or(0));
        rank_b - rank_a
    }

    fn compare_wins(&self, a: &Team, b: &Team) -> i32 {
        i32::from(a.wins) - i32::from(b.wins)
    }

    fn compare_division_record(&self, a: &Team, b: &Team) -> i32 {
        if !a.same_division(b) {
            return 0;
        }
        sign(a.division_win_percentage() - b.division_win_percentage())
    }

    fn compare_head_to_head(&self, a: &Team, b: &Team) -> i32 {
        let wins_a = self.head_to_head.get(&(a.team_id, b.team_id)).copied().unwrap_or(0);
        let wins_b = self.head_to_head.get(&(b.team_id, a.team_id)).copied().unwrap_or(0);
        i32::from(wins_a) - i32::from(wins_b)
    }

    fn compare_scoring_differential(&self, a: &Team, b: &Team) -> i32 {
        let diff_a = self.differential.get(&a.team_id).copied().unwrap_or(0);
        let diff_b = self.differential.get(&b.team_id).copied().unwrap_or(0);
        (diff_a - diff_b).clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
    }
}

fn sign(value: f64) -> i32 {
    if value > 0.0 { 1 } else if value < 0.0 { -1 } else { 0 }
}

// Stable sort that moves an item in front of another only when `before` says so.
// Head-to-head results need not be transitive, which the standard sorts do not allow.
fn insertion_sort_by<T, F: Fn(&T, &T) -> bool>(items: &mut [T], before: F) {
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && before(&items[j], &items[j - 1]) {
            items.swap(j, j - 1);
            j -= 1;
        }
    }
}
