// The season state machine. Each call moves the league one step forward.
use time::Date;

use crate::logic::{app_data::AppData, error::{LeagueError, Result}, league, processor::Processor, random::RandomSource, schedule::{EventType, ScheduleEntry}, types::Year};

#[derive(Debug, PartialEq)]
pub enum Outcome {
    // An interrupted entry was run again.
    Retried(ScheduleEntry),
    // A new league and its first schedule were created.
    Bootstrapped(Year),
    // The league moved into a new season.
    RolledOver(Year),
    // The next entry is not due yet.
    NotDue(ScheduleEntry),
    Processed(ScheduleEntry),
}

async fn run(data: &AppData, rng: &mut dyn RandomSource, entry: &mut ScheduleEntry) -> Result<()> {
    let processor = Processor::resolve(entry.event_type)?;
    processor.process(data, rng, entry).await
}

// Take the next step of the season, if one is due today.
pub async fn advance(data: &AppData, rng: &mut dyn RandomSource, today: Date) -> Result<Outcome> {
    let db = &data.db;

    if let Some(mut entry) = ScheduleEntry::fetch_in_progress(db).await? {
        tracing::info!("Retrying {}", entry.label());
        run(data, rng, &mut entry).await?;
        return Ok(Outcome::Retried(entry));
    }

    let next = match ScheduleEntry::fetch_most_recent(db).await? {
        Some(recent) => {
            let season_over = recent.event_type == EventType::EndOfSeason;
            if season_over && !ScheduleEntry::exists_for_year(db, recent.year + 1).await? {
                let year = league::advance_league_to_new_season(data).await?;
                return Ok(Outcome::RolledOver(year));
            }

            ScheduleEntry::fetch_next_after(db, recent.year, recent.sequence).await?.ok_or(
                LeagueError::ScheduleExhausted { year: recent.year, sequence: recent.sequence }
            )?
        },
        None => match ScheduleEntry::fetch_first(db).await? {
            Some(first) => first,
            None => {
                let year = league::generate_new_league(data, rng).await?;
                return Ok(Outcome::Bootstrapped(year));
            },
        },
    };

    if !next.is_due(today) {
        tracing::debug!("{} is due on {}", next.label(), next.target_date);
        return Ok(Outcome::NotDue(next));
    }

    let mut entry = next;
    entry.start(db).await?;
    run(data, rng, &mut entry).await?;
    Ok(Outcome::Processed(entry))
}
