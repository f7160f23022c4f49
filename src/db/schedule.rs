use sqlx::{Executor, Sqlite, SqliteConnection, types::Json};

use crate::logic::{error::{LeagueError, Result}, schedule::{ScheduleEntry, Status}, types::{Db, Sequence, Year}};

impl ScheduleEntry {
    // The entry that was started but never finished, if any.
    pub async fn fetch_in_progress(db: &Db) -> Result<Option<Self>> {
        Ok(sqlx::query_as(
            "SELECT * FROM ScheduleEntry
            WHERE status = 'InProgress'"
        ).fetch_optional(db).await?)
    }

    // The latest entry that has been started.
    pub async fn fetch_most_recent(db: &Db) -> Result<Option<Self>> {
        Ok(sqlx::query_as(
            "SELECT * FROM ScheduleEntry
            WHERE status <> 'Scheduled'
            ORDER BY year DESC, sequence DESC
            LIMIT 1"
        ).fetch_optional(db).await?)
    }

    // The entry that follows the given one in calendar order.
    pub async fn fetch_next_after(db: &Db, year: Year, sequence: Sequence) -> Result<Option<Self>> {
        Ok(sqlx::query_as(
            "SELECT * FROM ScheduleEntry
            WHERE year > $1 OR (year = $1 AND sequence > $2)
            ORDER BY year, sequence
            LIMIT 1"
        ).bind(year)
        .bind(sequence)
        .fetch_optional(db).await?)
    }

    // The very first entry of the calendar.
    pub async fn fetch_first(db: &Db) -> Result<Option<Self>> {
        Ok(sqlx::query_as(
            "SELECT * FROM ScheduleEntry
            ORDER BY year, sequence
            LIMIT 1"
        ).fetch_optional(db).await?)
    }

    pub async fn fetch_year(db: &Db, year: Year) -> Result<Vec<Self>> {
        Ok(sqlx::query_as(
            "SELECT * FROM ScheduleEntry
            WHERE year = $1
            ORDER BY sequence"
        ).bind(year)
        .fetch_all(db).await?)
    }

    pub async fn exists_for_year(db: &Db, year: Year) -> Result<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM ScheduleEntry
            WHERE year = $1"
        ).bind(year)
        .fetch_one(db).await?;
        Ok(count > 0)
    }

    // Insert or overwrite the entry.
    pub async fn save<'e, E: Executor<'e, Database = Sqlite>>(&self, executor: E) -> Result<()> {
        sqlx::query(
            "INSERT OR REPLACE INTO ScheduleEntry
            (year, sequence, event_type, status, target_date, payload)
            VALUES ($1, $2, $3, $4, $5, $6)"
        ).bind(self.year)
        .bind(self.sequence)
        .bind(self.event_type)
        .bind(self.status)
        .bind(self.target_date)
        .bind(self.payload.map(Json))
        .execute(executor).await?;
        Ok(())
    }

    // Save a whole calendar, usually through the caller's transaction.
    pub async fn save_all(conn: &mut SqliteConnection, entries: &[Self]) -> Result<()> {
        for entry in entries {
            entry.save(&mut *conn).await?;
        }
        Ok(())
    }

    // Scheduled -> InProgress. Fails if the entry is not Scheduled.
    pub async fn start(&mut self, db: &Db) -> Result<()> {
        self.set_status(db, Status::Scheduled, Status::InProgress).await
    }

    // InProgress -> Completed. Processors call this last, inside their transaction.
    pub async fn complete<'e, E: Executor<'e, Database = Sqlite>>(&mut self, executor: E) -> Result<()> {
        self.set_status(executor, Status::InProgress, Status::Completed).await
    }

    async fn set_status<'e, E: Executor<'e, Database = Sqlite>>(&mut self, executor: E, from: Status, to: Status) -> Result<()> {
        let changed = sqlx::query(
            "UPDATE ScheduleEntry SET status = $1
            WHERE year = $2 AND sequence = $3 AND status = $4"
        ).bind(to)
        .bind(self.year)
        .bind(self.sequence)
        .bind(from)
        .execute(executor).await?
        .rows_affected();

        if changed != 1 {
            return Err(LeagueError::Processing(format!(
                "cannot move {} from {from:?} to {to:?}", self.label()
            )));
        }

        self.status = to;
        Ok(())
    }
}
