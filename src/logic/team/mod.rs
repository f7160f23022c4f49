pub mod draft;
pub mod ranking;

use sqlx::FromRow;

use crate::logic::types::{TeamId, Year};

// One snapshot per team per season.
#[derive(Debug, PartialEq)]
#[derive(Default, Clone)]
#[derive(FromRow)]
pub struct Team {
    pub team_id: TeamId,
    pub year: Year,
    pub location: String,
    pub nickname: String,
    pub conference: u8,
    // Division numbers are unique across conferences.
    pub division: u8,

    // The win fraction the team expects from its manager.
    pub expectation: f64,

    // Regular season record.
    pub wins: u16,
    pub losses: u16,
    pub ties: u16,
    pub division_wins: u16,
    pub division_losses: u16,
    pub playoff_rank: Option<u8>,
}

impl Team {
    pub fn build(team_id: TeamId, year: Year, location: &str, nickname: &str, conference: u8, division: u8, expectation: f64) -> Self {
        Self {
            team_id,
            year,
            location: location.to_string(),
            nickname: nickname.to_string(),
            conference,
            division,
            expectation,
            ..Default::default()
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.location, self.nickname)
    }

    pub fn games(&self) -> u16 {
        self.wins + self.losses + self.ties
    }

    // Ties count as half a win.
    pub fn win_fraction(&self) -> f64 {
        let games = self.games();
        if games == 0 {
            return 0.0;
        }
        (f64::from(self.wins) + f64::from(self.ties) / 2.0) / f64::from(games)
    }

    // Division win percentage. No division games means 0.
    pub fn division_win_percentage(&self) -> f64 {
        let games = self.division_wins + self.division_losses;
        if games == 0 {
            return 0.0;
        }
        f64::from(self.division_wins) / f64::from(games)
    }

    pub fn same_division(&self, other: &Self) -> bool {
        self.conference == other.conference && self.division == other.division
    }

    // Add a regular season result to the record.
    pub fn record_result(&mut self, points_for: u16, points_against: u16, division_game: bool) {
        if points_for > points_against {
            self.wins += 1;
            if division_game { self.division_wins += 1; }
        }
        else if points_for < points_against {
            self.losses += 1;
            if division_game { self.division_losses += 1; }
        }
        else {
            self.ties += 1;
        }
    }

    // Copy the team into the next season with a clean record.
    pub fn next_season(&self) -> Self {
        Self {
            year: self.year + 1,
            wins: 0,
            losses: 0,
            ties: 0,
            division_wins: 0,
            division_losses: 0,
            playoff_rank: None,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_build_the_record() {
        let mut team = Team::build(1, 2030, "Harbor", "Gulls", 0, 1, 0.5);
        team.record_result(21, 14, true);
        team.record_result(10, 17, true);
        team.record_result(7, 7, false);
        team.record_result(30, 3, false);

        assert_eq!((team.wins, team.losses, team.ties), (2, 1, 1));
        assert_eq!((team.division_wins, team.division_losses), (1, 1));
        assert!((team.win_fraction() - 0.625).abs() < 1e-9);
        assert!((team.division_win_percentage() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn empty_division_record_is_zero() {
        let team = Team::build(1, 2030, "Harbor", "Gulls", 0, 1, 0.5);
        assert_eq!(team.division_win_percentage(), 0.0);
        assert_eq!(team.win_fraction(), 0.0);
    }

    #[test]
    fn next_season_wipes_the_record() {
        let mut team = Team::build(1, 2030, "Harbor", "Gulls", 0, 1, 0.5);
        team.record_result(21, 14, true);
        team.playoff_rank = Some(3);

        let next = team.next_season();
        assert_eq!(next.year, 2031);
        assert_eq!(next.games(), 0);
        assert_eq!(next.playoff_rank, None);
        assert_eq!(next.full_name(), "Harbor Gulls");
    }
}
