// Players. One snapshot per player per season.
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::logic::{person::{Aging, mean}, types::{DraftPick, PlayerId, TeamId, Year}};

// The eight base ratings, between 0 and 1.
#[derive(Debug, PartialEq)]
#[derive(Default, Clone, Copy)]
#[derive(Serialize, Deserialize)]
#[derive(FromRow)]
pub struct PlayerRatings {
    pub scoring: f64,
    pub passing: f64,
    pub ball_control: f64,
    pub tackling: f64,
    pub coverage: f64,
    pub pursuit: f64,
    pub awareness: f64,
    pub discipline: f64,
}

impl PlayerRatings {
    pub fn build(values: [f64; 8]) -> Self {
        let [scoring, passing, ball_control, tackling, coverage, pursuit, awareness, discipline] = values;
        Self { scoring, passing, ball_control, tackling, coverage, pursuit, awareness, discipline }
    }

    // Every rating set to the same value.
    pub fn flat(value: f64) -> Self {
        Self::build([value; 8])
    }

    pub fn offensive(&self) -> f64 {
        mean(&[self.scoring, self.passing, self.ball_control])
    }

    pub fn defensive(&self) -> f64 {
        mean(&[self.tackling, self.coverage, self.pursuit])
    }

    pub fn intangible(&self) -> f64 {
        mean(&[self.ball_control, self.pursuit, self.awareness, self.discipline])
    }

    pub fn penalties(&self) -> f64 {
        mean(&[self.tackling, self.coverage, self.discipline])
    }

    pub fn balanced(&self) -> f64 {
        mean(&[
            self.scoring, self.passing, self.ball_control, self.tackling,
            self.coverage, self.pursuit, self.awareness, self.discipline,
        ])
    }
}

#[derive(Debug, PartialEq)]
#[derive(Default, Clone)]
#[derive(FromRow)]
pub struct Player {
    pub player_id: PlayerId,
    pub year: Year,
    pub forename: String,
    pub surname: String,
    #[sqlx(flatten)]
    pub ratings: PlayerRatings,

    pub age: u8,
    pub vitality: f64,
    pub endurance: f64,
    pub confidence: f64,

    pub rookie: bool,
    pub free_agent: bool,
    pub signed: bool,
    pub released: bool,
    pub retired: bool,

    pub team_id: Option<TeamId>,
    pub former_team_id: Option<TeamId>,
    pub draft_pick: Option<DraftPick>,
}

impl Aging for Player {
    fn age(&self) -> u8 {
        self.age
    }

    fn vitality(&self) -> f64 {
        self.vitality
    }
}

impl Player {
    pub fn build(player_id: PlayerId, year: Year, name: (String, String), ratings: PlayerRatings, age: u8) -> Self {
        Self {
            player_id,
            year,
            forename: name.0,
            surname: name.1,
            ratings,
            age,
            ..Default::default()
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.forename, self.surname)
    }

    // Not retired and without a team.
    pub fn is_available(&self) -> bool {
        self.team_id.is_none() && !self.retired
    }

    // Drafted rookies have a pick number.
    pub fn is_undrafted_rookie(&self) -> bool {
        self.rookie && self.draft_pick.is_none() && self.is_available()
    }

    // Take the player off the team and into the free agent pool.
    pub fn release(&mut self) {
        self.former_team_id = self.team_id;
        self.team_id = None;
        self.released = true;
        self.signed = false;
        self.free_agent = true;
    }

    // Sign the player for a team.
    pub fn sign(&mut self, team_id: TeamId) {
        self.team_id = Some(team_id);
        self.signed = true;
        self.free_agent = false;
    }

    // Retire the player. Former team is recorded only if they were on one.
    pub fn retire(&mut self) {
        if self.team_id.is_some() {
            self.former_team_id = self.team_id;
        }
        self.team_id = None;
        self.free_agent = false;
        self.retired = true;
    }

    // Pick the rookie in the draft.
    pub fn draft(&mut self, team_id: TeamId, pick: DraftPick) {
        self.team_id = Some(team_id);
        self.draft_pick = Some(pick);
        self.free_agent = false;
    }

    // Copy the player into the next season. Rookies are rookies for one season only.
    pub fn next_season(&self) -> Self {
        Self {
            year: self.year + 1,
            rookie: false,
            signed: false,
            released: false,
            former_team_id: None,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composites_use_their_own_ratings() {
        let ratings = PlayerRatings::build([0.9, 0.6, 0.3, 0.2, 0.4, 0.6, 1.0, 0.0]);
        assert!((ratings.offensive() - 0.6).abs() < 1e-9);
        assert!((ratings.defensive() - 0.4).abs() < 1e-9);
        assert!((ratings.intangible() - 0.475).abs() < 1e-9);
        assert!((ratings.penalties() - 0.2).abs() < 1e-9);
        assert!((ratings.balanced() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn release_then_sign_moves_the_player() {
        let mut player = Player::build(7, 2030, ("Ben".into(), "Cole".into()), PlayerRatings::flat(0.5), 25);
        player.sign(1);
        player.release();
        assert_eq!(player.former_team_id, Some(1));
        assert!(player.free_agent && player.released && player.is_available());

        player.sign(2);
        assert_eq!(player.team_id, Some(2));
        assert!(player.signed && !player.free_agent);
    }

    #[test]
    fn free_agent_retirement_has_no_former_team() {
        let mut player = Player::build(7, 2030, ("Ben".into(), "Cole".into()), PlayerRatings::flat(0.5), 38);
        player.free_agent = true;
        player.retire();
        assert!(player.retired && !player.free_agent);
        assert_eq!(player.former_team_id, None);
    }
}
