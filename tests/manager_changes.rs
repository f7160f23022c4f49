mod common;

use league_sim_lib::logic::{config::LeagueConfig, error::LeagueError, person::manager::Manager, processor::Processor, random::FixedDraws, schedule::{EventType, Status}};

use common::*;

#[tokio::test]
async fn retired_manager_is_replaced_by_one_new_hire() {
    let config = LeagueConfig { new_managers_per_season: 1, ..Default::default() };
    let data = app(config).await;
    seed_teams(&data, &[2030, 2031], 5).await;

    // Manager 1 is far past the cutoff age and retires for sure.
    manager(1, 2031, 80, 0.0, Some(1)).save(&data.db).await.unwrap();
    for id in 2..=5 {
        manager(id, 2031, 40, 0.5, Some(id as u16)).save(&data.db).await.unwrap();
    }

    let mut entry = started_entry(&data, 2031, 2, EventType::ManagerChanges).await;
    Processor::ManagerChanges.process(&data, &mut FixedDraws::constant(0.5), &mut entry).await.unwrap();

    let managers = Manager::fetch_year(&data.db, 2031).await.unwrap();
    assert_eq!(managers.len(), 6);

    let retired = &managers[0];
    assert!(retired.retired);
    assert_eq!(retired.team_id, None);
    assert_eq!(retired.former_team_id, Some(1));
    assert_eq!(retired.age, 81);

    let new_hires: Vec<&Manager> = managers.iter().filter(|m| m.new_hire).collect();
    assert_eq!(new_hires.len(), 1);
    assert_eq!(new_hires[0].team_id, Some(1));
    assert_eq!(new_hires[0].manager_id, 6);
    assert_eq!(new_hires[0].age, 40);

    for manager in &managers[1..5] {
        assert_eq!(manager.team_id, Some(manager.manager_id as u16));
        assert_eq!(manager.age, 41);
    }

    assert_eq!(entry.status, Status::Completed);
    assert_eq!(stored_status(&data, &entry).await, Status::Completed);
}

#[tokio::test]
async fn first_season_changes_nothing() {
    let data = app(LeagueConfig::default()).await;
    seed_teams(&data, &[2030], 2).await;
    manager(1, 2030, 80, 0.0, Some(1)).save(&data.db).await.unwrap();

    let mut entry = started_entry(&data, 2030, 2, EventType::ManagerChanges).await;
    Processor::ManagerChanges.process(&data, &mut FixedDraws::constant(0.0), &mut entry).await.unwrap();

    let managers = Manager::fetch_year(&data.db, 2030).await.unwrap();
    assert_eq!(managers.len(), 1);
    assert!(!managers[0].retired);
    assert_eq!(managers[0].age, 80);
    assert_eq!(stored_status(&data, &entry).await, Status::Completed);
}

#[tokio::test]
async fn retired_players_become_managers_first() {
    let config = LeagueConfig { new_managers_per_season: 2, years_since_retirement: 5, ..Default::default() };
    let data = app(config).await;
    seed_teams(&data, &[2030, 2031], 2).await;

    manager(1, 2031, 80, 0.0, Some(1)).save(&data.db).await.unwrap();
    manager(2, 2031, 40, 0.5, Some(2)).save(&data.db).await.unwrap();

    let mut veteran = player(1, 2026, 0.9, 36, None);
    veteran.retire();
    veteran.save(&data.db).await.unwrap();

    let mut entry = started_entry(&data, 2031, 2, EventType::ManagerChanges).await;
    Processor::ManagerChanges.process(&data, &mut FixedDraws::constant(0.5), &mut entry).await.unwrap();

    let managers = Manager::fetch_year(&data.db, 2031).await.unwrap();
    assert_eq!(managers.len(), 4);

    // The former player keeps their name and is five years older.
    let former_player = managers.iter().find(|m| m.surname == "1" && m.forename == "Player").unwrap();
    assert_eq!(former_player.age, 41);
    assert_eq!(former_player.team_id, Some(1));
    assert_eq!(managers.iter().filter(|m| m.team_id.is_none() && !m.retired).count(), 1);
}

#[tokio::test]
async fn stagnant_team_replaces_its_manager() {
    let config = LeagueConfig { new_managers_per_season: 0, ..Default::default() };
    let data = app(config).await;
    // Three seasons of the same two teams with no wins and no playoff rank.
    seed_teams(&data, &[2029, 2030, 2031], 2).await;

    // Four seasons in, averaging 0.3 against an expectation of 0.5.
    let mut stale = manager(1, 2031, 50, 0.5, Some(1));
    stale.seasons = 4;
    stale.score = 1.2;
    stale.save(&data.db).await.unwrap();
    manager(2, 2031, 40, 0.5, Some(2)).save(&data.db).await.unwrap();
    manager(3, 2031, 40, 0.5, None).save(&data.db).await.unwrap();

    let mut entry = started_entry(&data, 2031, 2, EventType::ManagerChanges).await;
    Processor::ManagerChanges.process(&data, &mut FixedDraws::constant(0.5), &mut entry).await.unwrap();

    let managers = Manager::fetch_year(&data.db, 2031).await.unwrap();
    let released = &managers[0];
    assert!(released.released);
    assert!(!released.retired);
    assert_eq!(released.team_id, None);
    assert_eq!(released.former_team_id, Some(1));

    // The idle manager takes the team. The released one is not sent back.
    assert_eq!(managers[2].team_id, Some(1));
    assert!(managers[2].new_hire);

    // Too new to be fired.
    assert_eq!(managers[1].team_id, Some(2));
    assert!(!managers[1].released);
    assert_eq!(stored_status(&data, &entry).await, Status::Completed);
}

#[tokio::test]
async fn no_candidate_leaves_the_entry_in_progress() {
    let config = LeagueConfig { new_managers_per_season: 0, ..Default::default() };
    let data = app(config).await;
    seed_teams(&data, &[2030, 2031], 2).await;
    manager(1, 2031, 80, 0.0, Some(1)).save(&data.db).await.unwrap();
    manager(2, 2031, 40, 0.5, Some(2)).save(&data.db).await.unwrap();

    let mut entry = started_entry(&data, 2031, 2, EventType::ManagerChanges).await;
    let result = Processor::ManagerChanges.process(&data, &mut FixedDraws::constant(0.5), &mut entry).await;

    assert!(matches!(result, Err(LeagueError::NoEligibleManager { team_id: 1 })));
    assert_eq!(stored_status(&data, &entry).await, Status::InProgress);

    // Nothing was written, so the retry starts from the same state.
    let managers = Manager::fetch_year(&data.db, 2031).await.unwrap();
    assert_eq!(managers[0].age, 80);
    assert!(!managers[0].retired);
}

#[tokio::test]
async fn wrong_event_type_fails_fast() {
    let data = app(LeagueConfig::default()).await;
    let mut entry = started_entry(&data, 2031, 3, EventType::TrainingCamp).await;
    let result = Processor::ManagerChanges.process(&data, &mut FixedDraws::constant(0.5), &mut entry).await;

    assert!(matches!(result, Err(LeagueError::WrongEventType { found: EventType::TrainingCamp, .. })));
    assert_eq!(stored_status(&data, &entry).await, Status::InProgress);
}
