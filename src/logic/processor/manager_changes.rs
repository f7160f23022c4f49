// Manager changes: retirements, firings, new faces and the manager draft.
use std::collections::HashSet;

use crate::logic::{app_data::AppData, error::Result, person::{generator, manager::Manager, player::Player}, random::RandomSource, schedule::ScheduleEntry, team::{draft, ranking::TeamRanking, Team}, types::{TeamId, Year}};

// Managers get this many seasons before they can be fired.
const MIN_TENURE: u16 = 3;

// A missing playoff rank counts as the worst possible.
fn rank_value(team: &Team) -> u8 {
    team.playoff_rank.unwrap_or(u8::MAX)
}

// Whether the team fires its manager. Needs the team's two previous seasons.
pub fn should_release(manager: &Manager, team: &Team, prior: Option<&Team>, before_prior: Option<&Team>) -> bool {
    if manager.seasons < MIN_TENURE {
        return false;
    }

    let (prior, before_prior) = match (prior, before_prior) {
        (Some(p), Some(b)) => (p, b),
        _ => return false,
    };

    let rank_improved = rank_value(prior) < rank_value(before_prior);
    let wins_improved = prior.wins > before_prior.wins;

    !rank_improved && !wins_improved && manager.performance_rating() < team.expectation
}

fn find(teams: &[Team], team_id: TeamId) -> Option<&Team> {
    teams.iter().find(|team| team.team_id == team_id)
}

pub async fn process(data: &AppData, rng: &mut dyn RandomSource, entry: &mut ScheduleEntry) -> Result<()> {
    let db = &data.db;
    let config = &data.config;
    let year = entry.year;

    // Nothing to change before the league has played a season.
    if !Team::exists_in_year(db, year - 1).await? {
        let mut tx = db.begin().await?;
        entry.complete(&mut *tx).await?;
        tx.commit().await?;
        tracing::debug!("First season of the league, no manager changes");
        return Ok(());
    }

    let teams = Team::fetch_year(db, year).await?;
    let prior = Team::fetch_year(db, year - 1).await?;
    let before_prior = Team::fetch_year(db, year - 2).await?;

    let mut managers = Manager::fetch_active(db, year).await?;
    for manager in managers.iter_mut() {
        manager.age = manager.age.saturating_add(1);

        if config.manager_retirement.ready_to_retire(&*manager, rng) {
            tracing::debug!("{} retires", manager.full_name());
            manager.retire();
            continue;
        }

        let team_id = match manager.team_id {
            Some(id) => id,
            None => continue,
        };
        if let Some(team) = find(&teams, team_id) {
            if should_release(manager, team, find(&prior, team_id), find(&before_prior, team_id)) {
                tracing::debug!("{} released by {}", manager.full_name(), team.full_name());
                manager.release();
            }
        }
    }

    hire_new_managers(data, rng, year, &mut managers).await?;

    let taken: HashSet<TeamId> = managers.iter().filter_map(|m| m.team_id).collect();
    let vacant: Vec<Team> = teams.iter().filter(|t| !taken.contains(&t.team_id)).cloned().collect();

    let prior_complete = teams.iter().all(|t| find(&prior, t.team_id).is_some());
    let prior_for_order: &[Team] = if prior_complete { &prior } else { &[] };
    let ranking = TeamRanking::fetch(db, year - 1).await?;
    let order = draft::draft_order(&vacant, prior_for_order, &ranking, rng);
    let assignments = draft::assign_managers(&order, &mut managers)?;

    let mut tx = db.begin().await?;
    for manager in managers.iter() {
        manager.save(&mut *tx).await?;
    }
    entry.complete(&mut *tx).await?;
    tx.commit().await?;

    tracing::info!("{} managers hired in {year}", assignments.len());
    Ok(())
}

// New managers join the pool: retired players first, then fresh faces.
async fn hire_new_managers(data: &AppData, rng: &mut dyn RandomSource, year: Year, managers: &mut Vec<Manager>) -> Result<()> {
    let config = &data.config;
    let quota = usize::from(config.new_managers_per_season);
    let mut next_id = Manager::fetch_max_id(&data.db).await?.unwrap_or(0) + 1;

    let mut former_players = Player::fetch_retired_in(&data.db, year - Year::from(config.years_since_retirement)).await?;
    former_players.sort_by(|a, b| b.ratings.balanced().total_cmp(&a.ratings.balanced()));

    for player in former_players.iter().take(quota) {
        managers.push(Manager::from_retired_player(next_id, year, player, config.years_since_retirement));
        next_id += 1;
    }

    let fresh = quota.saturating_sub(former_players.len());
    if fresh > 0 {
        let mut names = data.name_generator().await?;
        for _ in 0..fresh {
            managers.push(generator::random_manager(next_id, year, config.manager_starting_age, &mut names, rng)?);
            next_id += 1;
        }
    }

    Ok(())
}
