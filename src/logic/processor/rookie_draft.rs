// The rookie draft, in two rounds.
use std::collections::HashMap;

use crate::logic::{app_data::AppData, error::{LeagueError, Result}, person::{generator, manager::{style::ManagerStyle, Manager}, player::Player, ranking::PlayerRanking}, random::RandomSource, schedule::{EventType, ScheduleEntry}, team::{draft, ranking::TeamRanking, Team}, types::{DraftPick, TeamId}};

// Every team in order picks the rookie its manager likes best. Returns the number of picks made.
pub fn run_draft(order: &[TeamId], styles: &HashMap<TeamId, ManagerStyle>, rookies: &mut [Player], first_pick: DraftPick) -> usize {
    let mut pick = first_pick;
    let mut picks = 0;

    for team_id in order {
        let style = styles.get(team_id).copied().unwrap_or_default();
        let ranking = PlayerRanking::for_draft(style);
        match ranking.best_index(rookies, |p| p.is_undrafted_rookie()) {
            Some(i) => rookies[i].draft(*team_id, pick),
            None => break,
        }
        pick += 1;
        picks += 1;
    }
    return picks;
}

pub async fn process(data: &AppData, rng: &mut dyn RandomSource, entry: &mut ScheduleEntry) -> Result<()> {
    let db = &data.db;
    let config = &data.config;
    let year = entry.year;

    let teams = Team::fetch_year(db, year).await?;
    let team_count = DraftPick::try_from(teams.len())
        .map_err(|_| LeagueError::Draft(format!("too many teams for a draft: {}", teams.len())))?;

    let (mut rookies, first_pick) = match entry.event_type {
        EventType::RookieDraftRound1 => {
            let mut names = data.name_generator().await?;
            let first_id = Player::fetch_max_id(db).await?.unwrap_or(0) + 1;
            let mut rookies = Vec::new();
            for i in 0..u32::from(config.rookie_count) {
                rookies.push(generator::rookie(first_id + i, year, config.rookie_age, &mut names, rng)?);
            }
            (rookies, 1)
        },
        EventType::RookieDraftRound2 => (Player::fetch_undrafted_rookies(db, year).await?, team_count + 1),
        other => return Err(LeagueError::WrongEventType { processor: "rookie draft", found: other }),
    };

    let styles: HashMap<TeamId, ManagerStyle> = Manager::fetch_attached(db, year).await?
        .into_iter()
        .filter_map(|m| m.team_id.map(|team_id| (team_id, m.style)))
        .collect();

    let prior = Team::fetch_year(db, year - 1).await?;
    let ranking = TeamRanking::fetch(db, year - 1).await?;
    let order = draft::draft_order(&teams, &prior, &ranking, rng);
    let picks = run_draft(&order, &styles, &mut rookies, first_pick);

    let mut tx = db.begin().await?;
    for rookie in rookies.iter() {
        rookie.save(&mut *tx).await?;
    }
    entry.complete(&mut *tx).await?;
    tx.commit().await?;

    tracing::info!("{picks} rookies drafted in {}", entry.label());
    Ok(())
}
