// Shared setup for the integration tests.
#![allow(dead_code)]

use league_sim_lib::{db, logic::{app_data::AppData, config::LeagueConfig, person::{manager::Manager, player::{Player, PlayerRatings}}, schedule::{EventType, ScheduleEntry, Status}, team::Team, types::{ManagerId, PlayerId, TeamId, Year}}};
use time::macros::date;

// A league small enough to play through quickly.
pub fn small_config() -> LeagueConfig {
    LeagueConfig {
        first_year: 2030,
        conferences: 1,
        divisions_per_conference: 2,
        teams_per_division: 2,
        roster_size: 5,
        initial_free_agents: 10,
        rookie_count: 6,
        ..Default::default()
    }
}

pub async fn app(config: LeagueConfig) -> AppData {
    let db = db::setup_in_memory().await.unwrap();
    AppData::build(db, config).unwrap()
}

// Teams 1..=count for each of the given years.
pub async fn seed_teams(data: &AppData, years: &[Year], count: TeamId) {
    for year in years {
        for team_id in 1..=count {
            let team = Team::build(team_id, *year, &format!("City{team_id}"), "Club", 0, (team_id % 2) as u8, 0.5);
            team.save(&data.db).await.unwrap();
        }
    }
}

pub fn manager(manager_id: ManagerId, year: Year, age: u8, vitality: f64, team_id: Option<TeamId>) -> Manager {
    let name = ("Manager".to_string(), manager_id.to_string());
    let mut manager = Manager::build(manager_id, year, name, [0.5; 4], age, vitality);
    manager.team_id = team_id;
    return manager;
}

pub fn player(player_id: PlayerId, year: Year, rating: f64, age: u8, team_id: Option<TeamId>) -> Player {
    let name = ("Player".to_string(), player_id.to_string());
    let mut player = Player::build(player_id, year, name, PlayerRatings::flat(rating), age);
    player.vitality = 1.0;
    player.confidence = 0.5;
    player.endurance = 0.5;
    player.team_id = team_id;
    return player;
}

// Save an entry and move it to InProgress, as the state machine does before calling a processor.
pub async fn started_entry(data: &AppData, year: Year, sequence: u16, event_type: EventType) -> ScheduleEntry {
    let mut entry = ScheduleEntry::build(year, sequence, event_type, date!(2030-08-01), None);
    entry.save(&data.db).await.unwrap();
    entry.start(&data.db).await.unwrap();
    return entry;
}

pub async fn stored_status(data: &AppData, entry: &ScheduleEntry) -> Status {
    ScheduleEntry::fetch_year(&data.db, entry.year).await.unwrap()
        .into_iter()
        .find(|e| e.sequence == entry.sequence)
        .map(|e| e.status)
        .unwrap()
}

pub async fn in_progress_count(data: &AppData) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM ScheduleEntry WHERE status = 'InProgress'")
        .fetch_one(&data.db).await.unwrap()
}
