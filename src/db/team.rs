use sqlx::{Executor, Sqlite};

use crate::logic::{error::Result, team::Team, types::{Db, Year}};

impl Team {
    // All teams of the given season, by ID.
    pub async fn fetch_year(db: &Db, year: Year) -> Result<Vec<Self>> {
        Ok(sqlx::query_as(
            "SELECT * FROM Team
            WHERE year = $1
            ORDER BY team_id"
        ).bind(year)
        .fetch_all(db).await?)
    }

    // The most recent season with teams in it.
    pub async fn fetch_latest_year(db: &Db) -> Result<Option<Year>> {
        Ok(sqlx::query_scalar(
            "SELECT MAX(year) FROM Team"
        ).fetch_one(db).await?)
    }

    // Whether the league existed in the given season.
    pub async fn exists_in_year(db: &Db, year: Year) -> Result<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM Team
            WHERE year = $1"
        ).bind(year)
        .fetch_one(db).await?;
        Ok(count > 0)
    }

    // Insert or overwrite the season snapshot.
    pub async fn save<'e, E: Executor<'e, Database = Sqlite>>(&self, executor: E) -> Result<()> {
        sqlx::query(
            "INSERT OR REPLACE INTO Team
            (team_id, year, location, nickname, conference, division, expectation,
            wins, losses, ties, division_wins, division_losses, playoff_rank)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)"
        ).bind(self.team_id)
        .bind(self.year)
        .bind(&self.location)
        .bind(&self.nickname)
        .bind(self.conference)
        .bind(self.division)
        .bind(self.expectation)
        .bind(self.wins)
        .bind(self.losses)
        .bind(self.ties)
        .bind(self.division_wins)
        .bind(self.division_losses)
        .bind(self.playoff_rank)
        .execute(executor).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::setup_in_memory;

    #[tokio::test]
    async fn snapshots_are_kept_per_year() {
        let db = setup_in_memory().await.unwrap();
        let mut team = Team::build(3, 2030, "Harbor", "Gulls", 1, 2, 0.55);
        team.record_result(14, 7, true);
        team.playoff_rank = Some(2);
        team.save(&db).await.unwrap();
        team.next_season().save(&db).await.unwrap();

        assert_eq!(Team::fetch_year(&db, 2030).await.unwrap(), vec![team.clone()]);
        assert_eq!(Team::fetch_year(&db, 2031).await.unwrap()[0].games(), 0);
        assert_eq!(Team::fetch_latest_year(&db).await.unwrap(), Some(2031));
        assert!(!Team::exists_in_year(&db, 2029).await.unwrap());

        // Saving again overwrites.
        team.wins = 5;
        team.save(&db).await.unwrap();
        let saved = Team::fetch_year(&db, 2030).await.unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].wins, 5);
    }
}
