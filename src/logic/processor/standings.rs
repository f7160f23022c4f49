// End of the regular season: final standings and the managers' season scores.
use crate::logic::{app_data::AppData, error::Result, person::manager::Manager, schedule::ScheduleEntry, team::{ranking::TeamRanking, Team}};

// Rank the teams best first and score every manager on their team's season.
pub fn close_season(ranking: &TeamRanking, teams: &mut [Team], managers: &mut [Manager]) {
    ranking.sort_best_to_worst(teams);
    for (i, team) in teams.iter_mut().enumerate() {
        team.playoff_rank = Some(u8::try_from(i + 1).unwrap_or(u8::MAX));
    }

    for manager in managers.iter_mut() {
        let team = teams.iter().find(|t| Some(t.team_id) == manager.team_id);
        if let Some(team) = team {
            manager.record_season(team.win_fraction());
        }
    }
}

pub async fn process(data: &AppData, entry: &mut ScheduleEntry) -> Result<()> {
    let db = &data.db;
    let mut teams = Team::fetch_year(db, entry.year).await?;
    let mut managers = Manager::fetch_attached(db, entry.year).await?;
    let ranking = TeamRanking::fetch(db, entry.year).await?;

    close_season(&ranking, &mut teams, &mut managers);

    let mut tx = db.begin().await?;
    for team in teams.iter() {
        team.save(&mut *tx).await?;
    }
    for manager in managers.iter() {
        manager.save(&mut *tx).await?;
    }
    entry.complete(&mut *tx).await?;
    tx.commit().await?;

    if let Some(champion) = teams.first() {
        tracing::info!("{} finished the {} regular season on top", champion.full_name(), entry.year);
    }
    Ok(())
}
