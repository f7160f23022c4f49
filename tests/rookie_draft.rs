mod common;

use std::collections::HashSet;

use league_sim_lib::logic::{config::LeagueConfig, person::player::Player, processor::Processor, schedule::{EventType, Status}, team::Team, types::{DraftPick, TeamId}};
use rand::{SeedableRng, rngs::StdRng};

use common::*;

fn picks_in_order(players: &[Player]) -> Vec<(DraftPick, TeamId)> {
    let mut picks: Vec<(DraftPick, TeamId)> = players.iter()
        .filter_map(|p| p.draft_pick.zip(p.team_id))
        .collect();
    picks.sort();
    return picks;
}

#[tokio::test]
async fn two_round_draft_hands_out_unique_picks() {
    let config = LeagueConfig { rookie_count: 10, rookie_age: 21, ..Default::default() };
    let data = app(config).await;
    seed_teams(&data, &[2030], 4).await;
    let mut rng = StdRng::seed_from_u64(7);

    let mut round1 = started_entry(&data, 2030, 3, EventType::RookieDraftRound1).await;
    Processor::RookieDraft.process(&data, &mut rng, &mut round1).await.unwrap();

    let players = Player::fetch_year(&data.db, 2030).await.unwrap();
    assert_eq!(players.len(), 10);
    assert!(players.iter().all(|p| p.rookie && p.age == 21));

    // One pick per team, numbered from 1.
    let picks = picks_in_order(&players);
    assert_eq!(picks.iter().map(|(pick, _)| *pick).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    let teams: HashSet<TeamId> = picks.iter().map(|(_, team)| *team).collect();
    assert_eq!(teams.len(), 4);
    assert_eq!(stored_status(&data, &round1).await, Status::Completed);

    let mut round2 = started_entry(&data, 2030, 4, EventType::RookieDraftRound2).await;
    Processor::RookieDraft.process(&data, &mut rng, &mut round2).await.unwrap();

    let players = Player::fetch_year(&data.db, 2030).await.unwrap();
    assert_eq!(players.len(), 10);
    let picks = picks_in_order(&players);
    assert_eq!(picks.iter().map(|(pick, _)| *pick).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(Player::fetch_undrafted_rookies(&data.db, 2030).await.unwrap().len(), 2);
}

#[tokio::test]
async fn prior_season_sets_the_order() {
    let config = LeagueConfig { rookie_count: 3, ..Default::default() };
    let data = app(config).await;
    seed_teams(&data, &[2031], 3).await;

    // Team 2 was the worst last season, team 3 the best.
    for (team_id, wins) in [(1, 5), (2, 1), (3, 9)] {
        let mut team = Team::build(team_id, 2030, "City", "Club", 0, team_id as u8, 0.5);
        team.wins = wins;
        team.losses = 10 - wins;
        team.save(&data.db).await.unwrap();
    }

    let mut rng = StdRng::seed_from_u64(1);
    let mut entry = started_entry(&data, 2031, 3, EventType::RookieDraftRound1).await;
    Processor::RookieDraft.process(&data, &mut rng, &mut entry).await.unwrap();

    let players = Player::fetch_year(&data.db, 2031).await.unwrap();
    let picks = picks_in_order(&players);
    assert_eq!(picks.iter().map(|(_, team)| *team).collect::<Vec<_>>(), vec![2, 1, 3]);
}

#[tokio::test]
async fn more_teams_than_rookies() {
    let config = LeagueConfig { rookie_count: 2, ..Default::default() };
    let data = app(config).await;
    seed_teams(&data, &[2030], 4).await;

    let mut entry = started_entry(&data, 2030, 3, EventType::RookieDraftRound1).await;
    Processor::RookieDraft.process(&data, &mut StdRng::seed_from_u64(3), &mut entry).await.unwrap();

    let players = Player::fetch_year(&data.db, 2030).await.unwrap();
    assert_eq!(players.len(), 2);
    assert!(players.iter().all(|p| p.draft_pick.is_some()));
    assert_eq!(stored_status(&data, &entry).await, Status::Completed);
}
