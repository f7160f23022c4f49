// Training camp: everyone gets a year older.
use crate::logic::{app_data::AppData, error::Result, person::player::Player, schedule::ScheduleEntry};

pub async fn process(data: &AppData, entry: &mut ScheduleEntry) -> Result<()> {
    let mut players = Player::fetch_year(&data.db, entry.year).await?;
    for player in players.iter_mut() {
        player.age = player.age.saturating_add(1);
    }

    let mut tx = data.db.begin().await?;
    for player in players.iter() {
        player.save(&mut *tx).await?;
    }
    entry.complete(&mut *tx).await?;
    tx.commit().await?;

    tracing::debug!("{} players aged in {}", players.len(), entry.year);
    Ok(())
}
