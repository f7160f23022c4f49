// Managers run the teams. One snapshot per manager per season.
pub mod style;

use sqlx::FromRow;

use crate::logic::{person::{Aging, mean, manager::style::ManagerStyle, player::Player}, types::{ManagerId, TeamId, Year}};

#[derive(Debug, PartialEq)]
#[derive(Default, Clone)]
#[derive(FromRow)]
pub struct Manager {
    pub manager_id: ManagerId,
    pub year: Year,
    pub forename: String,
    pub surname: String,

    // Base ratings, between 0 and 1.
    pub offense: f64,
    pub defense: f64,
    pub intangible: f64,
    pub penalties: f64,
    pub style: ManagerStyle,

    pub age: u8,
    pub vitality: f64,

    pub team_id: Option<TeamId>,
    // Set only when the manager involuntarily left this team.
    pub former_team_id: Option<TeamId>,
    pub released: bool,
    pub retired: bool,
    pub new_hire: bool,

    // Tenure counters with the current team, and career totals.
    pub score: f64,
    pub seasons: u16,
    pub total_score: f64,
    pub total_seasons: u16,
}

impl Aging for Manager {
    fn age(&self) -> u8 {
        self.age
    }

    fn vitality(&self) -> f64 {
        self.vitality
    }
}

impl Manager {
    // Build a manager. The style is derived from the ratings.
    pub fn build(manager_id: ManagerId, year: Year, name: (String, String), ratings: [f64; 4], age: u8, vitality: f64) -> Self {
        let [offense, defense, intangible, penalties] = ratings;
        Self {
            manager_id,
            year,
            forename: name.0,
            surname: name.1,
            offense,
            defense,
            intangible,
            penalties,
            style: ManagerStyle::classify(offense, defense, intangible, penalties),
            age,
            vitality,
            ..Default::default()
        }
    }

    // Turn a retired player into a manager, carrying over their name and know-how.
    pub fn from_retired_player(manager_id: ManagerId, year: Year, player: &Player, years_since: u8) -> Self {
        let ratings = &player.ratings;
        return Self::build(
            manager_id,
            year,
            (player.forename.clone(), player.surname.clone()),
            [ratings.offensive(), ratings.defensive(), ratings.intangible(), ratings.penalties()],
            player.age.saturating_add(years_since),
            player.vitality,
        );
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.forename, self.surname)
    }

    // Mean of the four base ratings.
    pub fn overall_rating(&self) -> f64 {
        mean(&[self.offense, self.defense, self.intangible, self.penalties])
    }

    // Average season score with the current team, falling back to the career average.
    pub fn performance_rating(&self) -> f64 {
        if self.seasons > 0 {
            return self.score / f64::from(self.seasons);
        }
        if self.total_seasons > 0 {
            return self.total_score / f64::from(self.total_seasons);
        }
        return 0.0;
    }

    // Neither on a team nor retired.
    pub fn is_available(&self) -> bool {
        self.team_id.is_none() && !self.retired
    }

    // Leave the game for good.
    pub fn retire(&mut self) {
        if self.team_id.is_some() {
            self.former_team_id = self.team_id;
        }
        self.team_id = None;
        self.retired = true;
    }

    // Get fired by the current team.
    pub fn release(&mut self) {
        self.former_team_id = self.team_id;
        self.team_id = None;
        self.released = true;
    }

    // Take over a team. Tenure counters start from scratch.
    pub fn hire(&mut self, team_id: TeamId) {
        self.team_id = Some(team_id);
        self.new_hire = true;
        self.score = 0.0;
        self.seasons = 0;
    }

    // Add a finished season with the given win fraction.
    pub fn record_season(&mut self, win_fraction: f64) {
        self.score += win_fraction;
        self.seasons += 1;
        self.total_score += win_fraction;
        self.total_seasons += 1;
    }

    // Copy the manager into the next season, dropping the per-season flags.
    pub fn next_season(&self) -> Self {
        Self {
            year: self.year + 1,
            former_team_id: None,
            released: false,
            new_hire: false,
            ..self.clone()
        }
    }
}
