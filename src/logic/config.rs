// League configuration, read from a JSON file.
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::logic::{error::{LeagueError, Result}, io::read_json_file, person::retirement::RetirementModel, time::AnnualDate, types::Year};

#[derive(Debug, Clone)]
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueConfig {
    // The year of the first season when a new league is generated.
    pub first_year: Year,

    // Day 1 of every season's calendar.
    pub season_start: AnnualDate,

    pub conferences: u8,
    pub divisions_per_conference: u8,
    pub teams_per_division: u8,

    // Fixed squad size per team.
    pub roster_size: u8,
    pub initial_free_agents: u16,

    pub rookie_count: u16,
    pub rookie_age: u8,

    pub manager_starting_age: u8,
    pub new_managers_per_season: u8,

    // How long a retired player waits before becoming a manager candidate.
    pub years_since_retirement: u8,

    pub preseason_days: u16,

    // How many times every team meets every other team in the regular season.
    pub regular_season_rounds: u8,

    pub player_retirement: RetirementModel,
    pub manager_retirement: RetirementModel,

    // Optional JSON file with "forenames" and "surnames" lists.
    pub names_file: Option<PathBuf>,
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self {
            first_year: 2025,
            season_start: AnnualDate::build(8, 1),
            conferences: 2,
            divisions_per_conference: 2,
            teams_per_division: 4,
            roster_size: 10,
            initial_free_agents: 40,
            rookie_count: 40,
            rookie_age: 20,
            manager_starting_age: 40,
            new_managers_per_season: 2,
            years_since_retirement: 5,
            preseason_days: 3,
            regular_season_rounds: 2,
            player_retirement: RetirementModel::PLAYER,
            manager_retirement: RetirementModel::MANAGER,
            names_file: None,
        }
    }
}

impl LeagueConfig {
    // Load the config from a file, or use the defaults if there is no file.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p,
            None => return Ok(Self::default()),
        };

        let json = read_json_file(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        return Ok(config);
    }

    // A league needs at least one team in every division, and division numbers must fit in a u8.
    pub fn validate(&self) -> Result<()> {
        if self.conferences == 0 || self.divisions_per_conference == 0 || self.teams_per_division == 0 {
            return Err(LeagueError::Config("conferences, divisions and teams per division must all be at least 1".to_string()));
        }

        let divisions = self.division_count();
        if divisions > u16::from(u8::MAX) + 1 {
            return Err(LeagueError::Config(format!("{divisions} divisions is too many")));
        }
        Ok(())
    }

    pub fn division_count(&self) -> u16 {
        u16::from(self.conferences) * u16::from(self.divisions_per_conference)
    }

    // How many teams a new league gets.
    pub fn team_count(&self) -> u16 {
        u16::from(self.conferences) * u16::from(self.divisions_per_conference) * u16::from(self.teams_per_division)
    }
}
