use sqlx::{Executor, Sqlite};

use crate::logic::{error::Result, person::player::Player, types::{Db, PlayerId, Year}};

impl Player {
    pub async fn fetch_year(db: &Db, year: Year) -> Result<Vec<Self>> {
        Ok(sqlx::query_as(
            "SELECT * FROM Player
            WHERE year = $1
            ORDER BY player_id"
        ).bind(year)
        .fetch_all(db).await?)
    }

    // Players of the season that have not retired.
    pub async fn fetch_active(db: &Db, year: Year) -> Result<Vec<Self>> {
        Ok(sqlx::query_as(
            "SELECT * FROM Player
            WHERE year = $1 AND retired = FALSE
            ORDER BY player_id"
        ).bind(year)
        .fetch_all(db).await?)
    }

    // Rookies of the season that nobody has drafted yet.
    pub async fn fetch_undrafted_rookies(db: &Db, year: Year) -> Result<Vec<Self>> {
        Ok(sqlx::query_as(
            "SELECT * FROM Player
            WHERE year = $1 AND rookie = TRUE AND draft_pick IS NULL
            AND team_id IS NULL AND retired = FALSE
            ORDER BY player_id"
        ).bind(year)
        .fetch_all(db).await?)
    }

    // Players whose career ended in the given season.
    pub async fn fetch_retired_in(db: &Db, year: Year) -> Result<Vec<Self>> {
        Ok(sqlx::query_as(
            "SELECT * FROM Player
            WHERE year = $1 AND retired = TRUE
            ORDER BY player_id"
        ).bind(year)
        .fetch_all(db).await?)
    }

    pub async fn fetch_max_id(db: &Db) -> Result<Option<PlayerId>> {
        Ok(sqlx::query_scalar(
            "SELECT MAX(player_id) FROM Player"
        ).fetch_one(db).await?)
    }

    // Insert or overwrite the season snapshot.
    pub async fn save<'e, E: Executor<'e, Database = Sqlite>>(&self, executor: E) -> Result<()> {
        let r = &self.ratings;
        sqlx::query(
            "INSERT OR REPLACE INTO Player
            (player_id, year, forename, surname,
            scoring, passing, ball_control, tackling, coverage, pursuit, awareness, discipline,
            age, vitality, endurance, confidence,
            rookie, free_agent, signed, released, retired,
            team_id, former_team_id, draft_pick)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12,
            $13, $14, $15, $16, $17, $18, $19, $20, $21, $22, $23, $24)"
        ).bind(self.player_id)
        .bind(self.year)
        .bind(&self.forename)
        .bind(&self.surname)
        .bind(r.scoring)
        .bind(r.passing)
        .bind(r.ball_control)
        .bind(r.tackling)
        .bind(r.coverage)
        .bind(r.pursuit)
        .bind(r.awareness)
        .bind(r.discipline)
        .bind(self.age)
        .bind(self.vitality)
        .bind(self.endurance)
        .bind(self.confidence)
        .bind(self.rookie)
        .bind(self.free_agent)
        .bind(self.signed)
        .bind(self.released)
        .bind(self.retired)
        .bind(self.team_id)
        .bind(self.former_team_id)
        .bind(self.draft_pick)
        .execute(executor).await?;
        Ok(())
    }
}
