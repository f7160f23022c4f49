// Days that only mark a point in the season.
use crate::logic::{app_data::AppData, error::Result, schedule::ScheduleEntry};

pub async fn process(data: &AppData, entry: &mut ScheduleEntry) -> Result<()> {
    let mut tx = data.db.begin().await?;
    entry.complete(&mut *tx).await?;
    tx.commit().await?;
    Ok(())
}
