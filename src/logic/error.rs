use thiserror::Error;

use crate::logic::{schedule::EventType, types::{TeamId, Year}};

pub type Result<T> = std::result::Result<T, LeagueError>;

#[derive(Error, Debug)]
pub enum LeagueError {
    #[error("processing error: {0}")]
    Processing(String),

    #[error("processing error: {processor} cannot handle {found:?}")]
    WrongEventType { processor: &'static str, found: EventType },

    #[error("processing error: no schedule entry after {year}/{sequence}")]
    ScheduleExhausted { year: Year, sequence: u16 },

    #[error("draft error: {0}")]
    Draft(String),

    #[error("draft error: no eligible manager for team {team_id}")]
    NoEligibleManager { team_id: TeamId },

    #[error("generation error: {0}")]
    Generation(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("date error: {0}")]
    Date(#[from] time::error::ComponentRange),
}

impl LeagueError {
    // Whether the error came from the league rules rather than the storage layer.
    pub fn is_domain_error(&self) -> bool {
        match self {
            LeagueError::Processing(_) => true,
            LeagueError::WrongEventType { .. } => true,
            LeagueError::ScheduleExhausted { .. } => true,
            LeagueError::Draft(_) => true,
            LeagueError::NoEligibleManager { .. } => true,
            LeagueError::Generation(_) => true,
            LeagueError::Config(_) => true,
            _ => false,
        }
    }
}
