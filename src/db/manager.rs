use sqlx::{Executor, Sqlite};

use crate::logic::{error::Result, person::manager::Manager, types::{Db, ManagerId, Year}};

impl Manager {
    pub async fn fetch_year(db: &Db, year: Year) -> Result<Vec<Self>> {
        Ok(sqlx::query_as(
            "SELECT * FROM Manager
            WHERE year = $1
            ORDER BY manager_id"
        ).bind(year)
        .fetch_all(db).await?)
    }

    // Managers of the season that have not retired.
    pub async fn fetch_active(db: &Db, year: Year) -> Result<Vec<Self>> {
        Ok(sqlx::query_as(
            "SELECT * FROM Manager
            WHERE year = $1 AND retired = FALSE
            ORDER BY manager_id"
        ).bind(year)
        .fetch_all(db).await?)
    }

    // Managers of the season that run a team.
    pub async fn fetch_attached(db: &Db, year: Year) -> Result<Vec<Self>> {
        Ok(sqlx::query_as(
            "SELECT * FROM Manager
            WHERE year = $1 AND team_id IS NOT NULL
            ORDER BY team_id"
        ).bind(year)
        .fetch_all(db).await?)
    }

    pub async fn fetch_max_id(db: &Db) -> Result<Option<ManagerId>> {
        Ok(sqlx::query_scalar(
            "SELECT MAX(manager_id) FROM Manager"
        ).fetch_one(db).await?)
    }

    // Insert or overwrite the season snapshot.
    pub async fn save<'e, E: Executor<'e, Database = Sqlite>>(&self, executor: E) -> Result<()> {
        sqlx::query(
            "INSERT OR REPLACE INTO Manager
            (manager_id, year, forename, surname, offense, defense, intangible, penalties, style,
            age, vitality, team_id, former_team_id, released, retired, new_hire,
            score, seasons, total_score, total_seasons)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19, $20)"
        ).bind(self.manager_id)
        .bind(self.year)
        .bind(&self.forename)
        .bind(&self.surname)
        .bind(self.offense)
        .bind(self.defense)
        .bind(self.intangible)
        .bind(self.penalties)
        .bind(self.style)
        .bind(self.age)
        .bind(self.vitality)
        .bind(self.team_id)
        .bind(self.former_team_id)
        .bind(self.released)
        .bind(self.retired)
        .bind(self.new_hire)
        .bind(self.score)
        .bind(self.seasons)
        .bind(self.total_score)
        .bind(self.total_seasons)
        .execute(executor).await?;
        Ok(())
    }
}
