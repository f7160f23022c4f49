use futures::TryStreamExt as _;
use sqlx::{Executor, FromRow, Sqlite};

use crate::logic::{error::Result, game::{Game, GameType, TeamSummary}, team::ranking::TeamRanking, types::{Db, GameId, Year}};

impl Game {
    // All games of one type in the given season.
    pub async fn fetch_year(db: &Db, year: Year, game_type: GameType) -> Result<Vec<Self>> {
        let mut rows = sqlx::query(
            "SELECT * FROM Game
            WHERE year = $1 AND game_type = $2
            ORDER BY game_id"
        ).bind(year)
        .bind(game_type)
        .fetch(db);

        let mut games = Vec::new();
        while let Some(row) = rows.try_next().await? {
            games.push(Self::from_row(&row)?);
        }
        return Ok(games);
    }

    // The ID the next saved game should get.
    pub async fn next_id(db: &Db) -> Result<GameId> {
        let max: Option<GameId> = sqlx::query_scalar(
            "SELECT MAX(game_id) FROM Game"
        ).fetch_one(db).await?;
        Ok(max.map_or(1, |id| id + 1))
    }

    pub async fn save<'e, E: Executor<'e, Database = Sqlite>>(&self, executor: E) -> Result<()> {
        sqlx::query(
            "INSERT OR REPLACE INTO Game
            (game_id, year, sequence, game_type, home_team_id, road_team_id, home_score, road_score)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)"
        ).bind(self.game_id)
        .bind(self.year)
        .bind(self.sequence)
        .bind(self.game_type)
        .bind(self.home_team_id)
        .bind(self.road_team_id)
        .bind(self.home_score)
        .bind(self.road_score)
        .execute(executor).await?;
        Ok(())
    }
}

impl TeamSummary {
    pub async fn fetch_year(db: &Db, year: Year, game_type: GameType) -> Result<Vec<Self>> {
        Ok(sqlx::query_as(
            "SELECT * FROM TeamSummary
            WHERE year = $1 AND game_type = $2
            ORDER BY team_id, side"
        ).bind(year)
        .bind(game_type)
        .fetch_all(db).await?)
    }

    pub async fn save<'e, E: Executor<'e, Database = Sqlite>>(&self, executor: E) -> Result<()> {
        sqlx::query(
            "INSERT OR REPLACE INTO TeamSummary
            (team_id, year, game_type, side, games, score)
            VALUES ($1, $2, $3, $4, $5, $6)"
        ).bind(self.team_id)
        .bind(self.year)
        .bind(self.game_type)
        .bind(self.side)
        .bind(self.games)
        .bind(self.score)
        .execute(executor).await?;
        Ok(())
    }
}

impl TeamRanking {
    // Build the tie-breaker data from the stored regular season of the given year.
    pub async fn fetch(db: &Db, year: Year) -> Result<Self> {
        let games = Game::fetch_year(db, year, GameType::RegularSeason).await?;
        let summaries = TeamSummary::fetch_year(db, year, GameType::RegularSeason).await?;
        Ok(Self::build(&games, &summaries))
    }
}
