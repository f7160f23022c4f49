// The season calendar: one entry per simulated day.
pub mod generator;
pub mod matchups;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::Date;

use crate::logic::{error::{LeagueError, Result}, game::GameType, types::{Sequence, Year}};

#[derive(Debug, PartialEq, Eq, Hash)]
#[derive(Clone, Copy)]
#[derive(Serialize, Deserialize)]
#[derive(sqlx::Type)]
pub enum EventType {
    BeginningOfSeason,
    ManagerChanges,
    RookieDraftRound1,
    RookieDraftRound2,
    PlayerChanges,
    TrainingCamp,
    Preseason,
    RegularSeason,
    EndOfRegularSeason,
    EndOfSeason,
}

impl EventType {
    // Days on which games are played, and what kind of games.
    pub fn game_type(&self) -> Option<GameType> {
        match self {
            EventType::Preseason => Some(GameType::Preseason),
            EventType::RegularSeason => Some(GameType::RegularSeason),
            _ => None,
        }
    }
}

// Scheduled -> InProgress -> Completed. There is no way back.
#[derive(Debug, PartialEq, Eq)]
#[derive(Clone, Copy)]
#[derive(Serialize, Deserialize)]
#[derive(sqlx::Type)]
pub enum Status {
    Scheduled,
    InProgress,
    Completed,
}

// Extra data for game days: which day of the round robin to play.
#[derive(Debug, PartialEq)]
#[derive(Clone, Copy)]
#[derive(Serialize, Deserialize)]
pub struct DayPayload {
    pub day: u16,
}

#[derive(Debug, PartialEq)]
#[derive(Clone)]
#[derive(FromRow)]
pub struct ScheduleEntry {
    pub year: Year,
    pub sequence: Sequence,
    pub event_type: EventType,
    pub status: Status,
    pub target_date: Date,
    #[sqlx(json(nullable))]
    pub payload: Option<DayPayload>,
}

impl ScheduleEntry {
    pub fn build(year: Year, sequence: Sequence, event_type: EventType, target_date: Date, payload: Option<DayPayload>) -> Self {
        Self {
            year,
            sequence,
            event_type,
            status: Status::Scheduled,
            target_date,
            payload,
        }
    }

    // The entry may run on or after its target date.
    pub fn is_due(&self, today: Date) -> bool {
        self.target_date <= today
    }

    // The round robin day of a game day entry.
    pub fn day(&self) -> Result<u16> {
        match self.payload {
            Some(payload) => Ok(payload.day),
            None => Err(LeagueError::Processing(format!(
                "{:?} entry {}/{} has no day payload", self.event_type, self.year, self.sequence
            ))),
        }
    }

    pub fn label(&self) -> String {
        format!("{}/{} {:?}", self.year, self.sequence, self.event_type)
    }
}
