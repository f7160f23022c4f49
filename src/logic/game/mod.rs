// Game results and the per-season scoring summaries built from them.
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::logic::{random::RandomSource, types::{GameId, Sequence, TeamId, Year}};

#[derive(Debug, PartialEq, Eq, Hash)]
#[derive(Clone, Copy)]
#[derive(Serialize, Deserialize)]
#[derive(sqlx::Type)]
pub enum GameType {
    Preseason,
    RegularSeason,
}

// Offense summaries hold points scored, Defense summaries points conceded.
#[derive(Debug, PartialEq, Eq, Hash)]
#[derive(Clone, Copy)]
#[derive(Serialize, Deserialize)]
#[derive(sqlx::Type)]
pub enum Side {
    Offense,
    Defense,
}

#[derive(Debug, PartialEq)]
#[derive(Clone)]
#[derive(FromRow)]
pub struct Game {
    pub game_id: GameId,
    pub year: Year,
    pub sequence: Sequence,
    pub game_type: GameType,
    pub home_team_id: TeamId,
    pub road_team_id: TeamId,
    pub home_score: u16,
    pub road_score: u16,
}

impl Game {
    pub fn build(game_id: GameId, year: Year, sequence: Sequence, game_type: GameType, home_team_id: TeamId, road_team_id: TeamId, score: (u16, u16)) -> Self {
        Self {
            game_id,
            year,
            sequence,
            game_type,
            home_team_id,
            road_team_id,
            home_score: score.0,
            road_score: score.1,
        }
    }

    // None for a tie.
    pub fn winner(&self) -> Option<TeamId> {
        if self.home_score > self.road_score { Some(self.home_team_id) }
        else if self.road_score > self.home_score { Some(self.road_team_id) }
        else { None }
    }

    pub fn loser(&self) -> Option<TeamId> {
        if self.home_score > self.road_score { Some(self.road_team_id) }
        else if self.road_score > self.home_score { Some(self.home_team_id) }
        else { None }
    }
}

#[derive(Debug, PartialEq)]
#[derive(Clone)]
#[derive(FromRow)]
pub struct TeamSummary {
    pub team_id: TeamId,
    pub year: Year,
    pub game_type: GameType,
    pub side: Side,
    pub games: u16,
    pub score: u32,
}

impl TeamSummary {
    pub fn build(team_id: TeamId, year: Year, game_type: GameType, side: Side) -> Self {
        Self { team_id, year, game_type, side, games: 0, score: 0 }
    }

    pub fn add(&mut self, points: u16) {
        self.games += 1;
        self.score += u32::from(points);
    }
}

// Points are a mix of team strength and luck.
const STRENGTH_POINTS: f64 = 28.0;
const LUCK_POINTS: f64 = 24.0;

// Box score for one game: points for home and road, drawn from the two team strengths (0 to 1).
pub fn simulate_score(home_strength: f64, road_strength: f64, rng: &mut dyn RandomSource) -> (u16, u16) {
    let home = home_strength.clamp(0.0, 1.0) * STRENGTH_POINTS + rng.draw() * LUCK_POINTS;
    let road = road_strength.clamp(0.0, 1.0) * STRENGTH_POINTS + rng.draw() * LUCK_POINTS;
    return (home.round() as u16, road.round() as u16);
}
