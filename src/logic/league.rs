// Creating a league and carrying it from one season to the next.
use std::time::Instant;

use rand::seq::SliceRandom;

use crate::logic::{app_data::AppData, error::{LeagueError, Result}, person::{generator, manager::Manager, player::Player}, random::{RandomSource, SourceRng, range_f64, range_u8}, schedule::{generator::generate_schedule, ScheduleEntry}, team::Team, types::{ManagerId, PlayerId, TeamId, Year}};

const LOCATIONS: &[&str] = &[
    "Ashford", "Bayview", "Brookfield", "Cedar Falls", "Clearwater", "Eastport", "Fairhaven", "Glenwood",
    "Granite City", "Harbor Point", "Highland", "Ironwood", "Kingsport", "Lakeside", "Maple Ridge", "Marlow",
    "Millbrook", "New Salem", "Northgate", "Oakdale", "Pine Bluff", "Port Royal", "Redmond", "Riverton",
    "Rockport", "Silver Lake", "Southbridge", "Stonehaven", "Summit", "Westfield", "Willow Creek", "Yorkton",
];

const NICKNAMES: &[&str] = &[
    "Badgers", "Bears", "Blaze", "Bulldogs", "Chargers", "Comets", "Condors", "Cyclones",
    "Eagles", "Falcons", "Foxes", "Giants", "Hawks", "Hornets", "Huskies", "Jaguars",
    "Knights", "Lumberjacks", "Mariners", "Miners", "Mustangs", "Outlaws", "Owls", "Panthers",
    "Pioneers", "Raiders", "Rams", "Rangers", "Stallions", "Thunder", "Vipers", "Wolves",
];

// Teams expect to win somewhere between these fractions of their games.
const EXPECTATION_RANGE: (f64, f64) = (0.35, 0.65);
// Ages of the players in a new league.
const INITIAL_PLAYER_AGES: (u8, u8) = (21, 31);
// Managers of a new league are up to this many years past the starting age.
const INITIAL_MANAGER_AGE_SPREAD: u8 = 15;

// Generate the teams of a new league, each with a unique name.
fn generate_teams(data: &AppData, rng: &mut dyn RandomSource, year: Year) -> Result<Vec<Team>> {
    let config = &data.config;
    config.validate()?;
    let count = usize::from(config.team_count());
    if count > LOCATIONS.len() {
        return Err(LeagueError::Generation(format!("cannot name {count} teams")));
    }

    let mut locations = LOCATIONS.to_vec();
    let mut nicknames = NICKNAMES.to_vec();
    locations.shuffle(&mut SourceRng::new(rng));
    nicknames.shuffle(&mut SourceRng::new(rng));

    let mut teams = Vec::new();
    let mut team_id: TeamId = 1;
    for conference in 0..config.conferences {
        for division_index in 0..config.divisions_per_conference {
            let division = u16::from(conference) * u16::from(config.divisions_per_conference) + u16::from(division_index);
            let division = u8::try_from(division)
                .map_err(|_| LeagueError::Config(format!("division {division} is out of range")))?;
            for _ in 0..config.teams_per_division {
                let i = usize::from(team_id - 1);
                let expectation = range_f64(rng, EXPECTATION_RANGE.0, EXPECTATION_RANGE.1);
                teams.push(Team::build(team_id, year, locations[i], nicknames[i], conference, division, expectation));
                team_id += 1;
            }
        }
    }
    return Ok(teams);
}

// Create a whole new league with its first schedule. Returns the first season.
pub async fn generate_new_league(data: &AppData, rng: &mut dyn RandomSource) -> Result<Year> {
    let now = Instant::now();
    let config = &data.config;
    let year = config.first_year;
    let mut names = data.name_generator().await?;

    let teams = generate_teams(data, rng, year)?;

    let mut managers = Vec::new();
    let mut players = Vec::new();
    let mut player_id: PlayerId = 1;
    for (i, team) in teams.iter().enumerate() {
        let manager_id = ManagerId::try_from(i + 1).unwrap_or(ManagerId::MAX);
        let age = range_u8(rng, config.manager_starting_age, config.manager_starting_age.saturating_add(INITIAL_MANAGER_AGE_SPREAD));
        let mut manager = generator::random_manager(manager_id, year, age, &mut names, rng)?;
        manager.team_id = Some(team.team_id);
        managers.push(manager);

        for _ in 0..config.roster_size {
            let age = range_u8(rng, INITIAL_PLAYER_AGES.0, INITIAL_PLAYER_AGES.1);
            let mut player = generator::random_player(player_id, year, age, &mut names, rng)?;
            player.team_id = Some(team.team_id);
            players.push(player);
            player_id += 1;
        }
    }

    for _ in 0..config.initial_free_agents {
        let age = range_u8(rng, INITIAL_PLAYER_AGES.0, INITIAL_PLAYER_AGES.1);
        let mut player = generator::random_player(player_id, year, age, &mut names, rng)?;
        player.free_agent = true;
        players.push(player);
        player_id += 1;
    }

    let schedule = generate_schedule(year, config, teams.len())?;

    let mut tx = data.db.begin().await?;
    for team in teams.iter() {
        team.save(&mut *tx).await?;
    }
    for manager in managers.iter() {
        manager.save(&mut *tx).await?;
    }
    for player in players.iter() {
        player.save(&mut *tx).await?;
    }
    ScheduleEntry::save_all(&mut tx, &schedule).await?;
    tx.commit().await?;

    tracing::info!("Generated a league of {} teams for {year} in {:.2?}", teams.len(), now.elapsed());
    Ok(year)
}

// Copy everyone still in the game into the next season and give it a schedule. Returns the new season.
pub async fn advance_league_to_new_season(data: &AppData) -> Result<Year> {
    let now = Instant::now();
    let db = &data.db;
    let year = Team::fetch_latest_year(db).await?
        .ok_or(LeagueError::Processing("no league to advance".to_string()))?;
    let next = year + 1;

    let teams: Vec<Team> = Team::fetch_year(db, year).await?.iter().map(Team::next_season).collect();
    let managers: Vec<Manager> = Manager::fetch_active(db, year).await?.iter().map(Manager::next_season).collect();
    let players: Vec<Player> = Player::fetch_active(db, year).await?.iter().map(Player::next_season).collect();
    let schedule = generate_schedule(next, &data.config, teams.len())?;

    let mut tx = db.begin().await?;
    for team in teams.iter() {
        team.save(&mut *tx).await?;
    }
    for manager in managers.iter() {
        manager.save(&mut *tx).await?;
    }
    for player in players.iter() {
        player.save(&mut *tx).await?;
    }
    ScheduleEntry::save_all(&mut tx, &schedule).await?;
    tx.commit().await?;

    tracing::info!("Advanced the league to {next} in {:.2?}", now.elapsed());
    Ok(next)
}
