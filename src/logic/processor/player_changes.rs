// Player changes: retirements and the free agent market.
use std::collections::HashMap;

use crate::logic::{app_data::AppData, config::LeagueConfig, error::Result, person::{manager::{style::ManagerStyle, Manager}, player::Player, ranking::PlayerRanking}, random::RandomSource, schedule::ScheduleEntry, team::Team, types::TeamId};

fn roster_count(players: &[Player], team_id: TeamId) -> usize {
    players.iter().filter(|p| p.team_id == Some(team_id)).count()
}

// One team's turn on the market. Returns whether the roster changed.
pub fn market_turn(team_id: TeamId, ranking: &PlayerRanking, players: &mut [Player], roster_size: usize) -> bool {
    let mut changed = false;

    // Fill the empty slots.
    while roster_count(players, team_id) < roster_size {
        match ranking.best_index(players, |p| p.is_available()) {
            Some(i) => players[i].sign(team_id),
            None => break,
        }
        changed = true;
    }

    // Let go of whoever does not fit.
    while roster_count(players, team_id) > roster_size {
        match ranking.worst_index(players, |p| p.team_id == Some(team_id)) {
            Some(i) => players[i].release(),
            None => break,
        }
        changed = true;
    }

    // Trade up while the market has someone better than the weakest link.
    loop {
        let best = ranking.best_index(players, |p| p.is_available());
        let worst = ranking.worst_index(players, |p| p.team_id == Some(team_id));
        match (best, worst) {
            (Some(b), Some(w)) if ranking.compare(&players[b], &players[w]) > 0 => {
                players[w].release();
                players[b].sign(team_id);
                changed = true;
            },
            _ => break,
        }
    }

    return changed;
}

// Teams take turns in ID order until a full round passes without changes.
pub fn clear_market(teams: &[Team], styles: &HashMap<TeamId, ManagerStyle>, players: &mut [Player], roster_size: usize) -> usize {
    let mut rounds = 0;
    loop {
        rounds += 1;
        let mut changed = false;
        for team in teams {
            let style = styles.get(&team.team_id).copied().unwrap_or_default();
            let ranking = PlayerRanking::for_free_agency(style);
            changed |= market_turn(team.team_id, &ranking, players, roster_size);
        }
        if !changed {
            return rounds;
        }
    }
}

// Everything after the retirement draws: the market and the deterministic retirements of leftover free agents.
pub fn settle_players(config: &LeagueConfig, teams: &[Team], styles: &HashMap<TeamId, ManagerStyle>, players: &mut [Player]) -> usize {
    for player in players.iter_mut() {
        if player.is_available() {
            player.free_agent = true;
        }
    }

    let rounds = clear_market(teams, styles, players, usize::from(config.roster_size));

    for player in players.iter_mut() {
        if player.is_available() && !player.signed && config.player_retirement.should_retire(&*player) {
            player.retire();
        }
    }
    return rounds;
}

pub async fn process(data: &AppData, rng: &mut dyn RandomSource, entry: &mut ScheduleEntry) -> Result<()> {
    let db = &data.db;
    let config = &data.config;
    let year = entry.year;

    let teams = Team::fetch_year(db, year).await?;
    let styles: HashMap<TeamId, ManagerStyle> = Manager::fetch_attached(db, year).await?
        .into_iter()
        .filter_map(|m| m.team_id.map(|team_id| (team_id, m.style)))
        .collect();

    let mut players = Player::fetch_active(db, year).await?;
    for player in players.iter_mut().filter(|p| p.team_id.is_some()) {
        if config.player_retirement.ready_to_retire(&*player, rng) {
            player.retire();
        }
    }

    let rounds = settle_players(config, &teams, &styles, &mut players);
    tracing::debug!("Free agent market settled after {rounds} rounds");

    let mut tx = db.begin().await?;
    for player in players.iter() {
        player.save(&mut *tx).await?;
    }
    entry.complete(&mut *tx).await?;
    tx.commit().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::person::player::PlayerRatings;

    fn player(id: u32, rating: f64, age: u8, team_id: Option<TeamId>) -> Player {
        let mut player = Player::build(id, 2030, ("P".into(), id.to_string()), PlayerRatings::flat(rating), age);
        player.vitality = 1.0;
        if let Some(team_id) = team_id {
            player.sign(team_id);
            player.signed = false;
        }
        return player;
    }

    fn config(roster_size: u8) -> LeagueConfig {
        LeagueConfig { roster_size, ..Default::default() }
    }

    #[test]
    fn better_free_agent_replaces_the_worst_player() {
        let teams = vec![Team::build(1, 2030, "A", "A", 0, 0, 0.5)];
        let mut players = vec![
            player(1, 0.6, 25, Some(1)),
            player(2, 0.2, 25, Some(1)),
            player(3, 0.8, 25, None),
        ];

        settle_players(&config(2), &teams, &HashMap::new(), &mut players);

        assert_eq!(players[2].team_id, Some(1));
        assert!(players[2].signed && !players[2].free_agent);
        assert_eq!(players[1].team_id, None);
        assert!(players[1].released && players[1].free_agent);
        assert_eq!(players[1].former_team_id, Some(1));
        assert_eq!(players[0].team_id, Some(1));
    }

    #[test]
    fn empty_slots_are_filled_and_surplus_released() {
        let teams = vec![Team::build(1, 2030, "A", "A", 0, 0, 0.5), Team::build(2, 2030, "B", "B", 0, 0, 0.5)];
        let mut players = vec![
            player(1, 0.5, 25, Some(1)),
            player(2, 0.4, 25, Some(1)),
            player(3, 0.3, 25, Some(1)),
            player(4, 0.7, 25, None),
        ];

        settle_players(&config(2), &teams, &HashMap::new(), &mut players);

        assert_eq!(roster_count(&players, 1), 2);
        assert_eq!(roster_count(&players, 2), 2);
        // Team 1 takes the best free agent first and lets the weakest go, who then lands on team 2.
        assert_eq!(players[3].team_id, Some(1));
        assert_eq!(players[2].team_id, Some(2));
    }

    #[test]
    fn old_unsigned_free_agents_retire() {
        let teams = vec![Team::build(1, 2030, "A", "A", 0, 0, 0.5)];
        let mut players = vec![
            player(1, 0.6, 25, Some(1)),
            player(2, 0.1, 40, None),
            player(3, 0.1, 30, None),
        ];

        settle_players(&config(1), &teams, &HashMap::new(), &mut players);

        assert!(players[1].retired);
        assert_eq!(players[1].former_team_id, None);
        assert!(!players[1].free_agent);
        // Vitality 1.0 keeps a 30-year-old in the pool.
        assert!(!players[2].retired && players[2].free_agent);
    }

    #[test]
    fn style_decides_who_is_signed() {
        let teams = vec![Team::build(1, 2030, "A", "A", 0, 0, 0.5)];
        let mut scorer = player(1, 0.5, 25, None);
        scorer.ratings.scoring = 1.0;
        let mut stopper = player(2, 0.5, 25, None);
        stopper.ratings.tackling = 1.0;
        stopper.ratings.coverage = 1.0;
        let mut players = vec![scorer, stopper];

        let styles = HashMap::from([(1, ManagerStyle::Offensive)]);
        settle_players(&config(1), &teams, &styles, &mut players);
        assert_eq!(players[0].team_id, Some(1));
        assert_eq!(players[1].team_id, None);
    }
}
