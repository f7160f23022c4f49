// Game days: play the day's round robin games.
use std::collections::HashMap;

use crate::logic::{app_data::AppData, error::{LeagueError, Result}, game::{self, Game, GameType, Side, TeamSummary}, person::{manager::style::ManagerStyle, mean, player::Player, ranking::PlayerRanking}, random::RandomSource, schedule::{matchups, ScheduleEntry}, team::Team, types::{GameId, TeamId}};

// Average game rating of the team's roster. An empty roster has no strength.
pub fn team_strength(players: &[Player], team_id: TeamId) -> f64 {
    let ranking = PlayerRanking::for_game(ManagerStyle::Balanced);
    let ratings: Vec<f64> = players.iter()
        .filter(|p| p.team_id == Some(team_id))
        .map(|p| ranking.rating(p))
        .collect();

    if ratings.is_empty() { 0.0 } else { mean(&ratings) }
}

fn summary<'a>(summaries: &'a mut HashMap<(TeamId, Side), TeamSummary>, entry: &ScheduleEntry, game_type: GameType, team_id: TeamId, side: Side) -> &'a mut TeamSummary {
    summaries.entry((team_id, side))
        .or_insert_with(|| TeamSummary::build(team_id, entry.year, game_type, side))
}

// Record the result in both teams' summaries and, for regular season games, their records.
fn record(game: &Game, teams: &mut [Team], summaries: &mut HashMap<(TeamId, Side), TeamSummary>, entry: &ScheduleEntry) {
    let (home, road) = (game.home_team_id, game.road_team_id);
    summary(summaries, entry, game.game_type, home, Side::Offense).add(game.home_score);
    summary(summaries, entry, game.game_type, home, Side::Defense).add(game.road_score);
    summary(summaries, entry, game.game_type, road, Side::Offense).add(game.road_score);
    summary(summaries, entry, game.game_type, road, Side::Defense).add(game.home_score);

    if game.game_type != GameType::RegularSeason {
        return;
    }

    let division_game = match (teams.iter().find(|t| t.team_id == home), teams.iter().find(|t| t.team_id == road)) {
        (Some(h), Some(r)) => h.same_division(r),
        _ => false,
    };
    for team in teams.iter_mut() {
        if team.team_id == home {
            team.record_result(game.home_score, game.road_score, division_game);
        }
        else if team.team_id == road {
            team.record_result(game.road_score, game.home_score, division_game);
        }
    }
}

pub async fn process(data: &AppData, rng: &mut dyn RandomSource, entry: &mut ScheduleEntry) -> Result<()> {
    let db = &data.db;
    let game_type = entry.event_type.game_type().ok_or(LeagueError::WrongEventType {
        processor: "game day",
        found: entry.event_type,
    })?;
    let day = entry.day()?;

    let mut teams = Team::fetch_year(db, entry.year).await?;
    let players = Player::fetch_active(db, entry.year).await?;
    let mut summaries: HashMap<(TeamId, Side), TeamSummary> = TeamSummary::fetch_year(db, entry.year, game_type).await?
        .into_iter()
        .map(|s| ((s.team_id, s.side), s))
        .collect();
    let mut game_id: GameId = Game::next_id(db).await?;

    let team_ids: Vec<TeamId> = teams.iter().map(|t| t.team_id).collect();
    let mut games = Vec::new();
    for (home, road) in matchups::day_matchups(&team_ids, day) {
        let score = game::simulate_score(team_strength(&players, home), team_strength(&players, road), rng);
        let game = Game::build(game_id, entry.year, entry.sequence, game_type, home, road, score);
        record(&game, &mut teams, &mut summaries, entry);
        games.push(game);
        game_id += 1;
    }

    let mut tx = db.begin().await?;
    for game in games.iter() {
        game.save(&mut *tx).await?;
    }
    for summary in summaries.values() {
        summary.save(&mut *tx).await?;
    }
    if game_type == GameType::RegularSeason {
        for team in teams.iter() {
            team.save(&mut *tx).await?;
        }
    }
    entry.complete(&mut *tx).await?;
    tx.commit().await?;

    tracing::debug!("{} games played on {}", games.len(), entry.label());
    Ok(())
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;
    use crate::logic::{person::player::PlayerRatings, schedule::{DayPayload, EventType}};

    #[test]
    fn strength_is_the_roster_average() {
        let mut players = Vec::new();
        for (id, rating) in [(1, 0.4), (2, 0.8), (3, 1.0)] {
            let mut player = Player::build(id, 2030, ("P".into(), id.to_string()), PlayerRatings::flat(rating), 25);
            player.confidence = 1.0;
            player.endurance = 1.0;
            if id < 3 { player.sign(9); }
            players.push(player);
        }

        assert!((team_strength(&players, 9) - 0.6).abs() < 1e-9);
        assert_eq!(team_strength(&players, 4), 0.0);
    }

    #[test]
    fn regular_season_results_reach_the_standings() {
        let entry = ScheduleEntry::build(2030, 12, EventType::RegularSeason, date!(2030-08-12), Some(DayPayload { day: 0 }));
        let mut teams = vec![
            Team::build(1, 2030, "A", "A", 0, 0, 0.5),
            Team::build(2, 2030, "B", "B", 0, 0, 0.5),
        ];
        let mut summaries = HashMap::new();
        let game = Game::build(1, 2030, 12, GameType::RegularSeason, 1, 2, (24, 17));

        record(&game, &mut teams, &mut summaries, &entry);

        assert_eq!((teams[0].wins, teams[0].division_wins), (1, 1));
        assert_eq!((teams[1].losses, teams[1].division_losses), (1, 1));
        assert_eq!(summaries[&(1, Side::Offense)].score, 24);
        assert_eq!(summaries[&(1, Side::Defense)].score, 17);
        assert_eq!(summaries[&(2, Side::Offense)].games, 1);
    }

    #[test]
    fn preseason_leaves_the_record_alone() {
        let entry = ScheduleEntry::build(2030, 7, EventType::Preseason, date!(2030-08-07), Some(DayPayload { day: 0 }));
        let mut teams = vec![Team::build(1, 2030, "A", "A", 0, 0, 0.5), Team::build(2, 2030, "B", "B", 0, 1, 0.5)];
        let mut summaries = HashMap::new();
        let game = Game::build(1, 2030, 7, GameType::Preseason, 2, 1, (10, 10));

        record(&game, &mut teams, &mut summaries, &entry);

        assert_eq!(teams[0].games(), 0);
        assert_eq!(summaries[&(2, Side::Offense)].game_type, GameType::Preseason);
    }
}
