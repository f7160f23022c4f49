// Building the calendar of a season.
use crate::logic::{config::LeagueConfig, error::Result, schedule::{matchups, DayPayload, EventType, ScheduleEntry}, types::{Sequence, Year}};

// The fixed days before the games start, in order.
const OFFSEASON: [EventType; 6] = [
    EventType::BeginningOfSeason,
    EventType::ManagerChanges,
    EventType::RookieDraftRound1,
    EventType::RookieDraftRound2,
    EventType::PlayerChanges,
    EventType::TrainingCamp,
];

// How many regular season game days a league of this size plays.
pub fn regular_season_days(config: &LeagueConfig, team_count: usize) -> u16 {
    let days = matchups::days_per_cycle(team_count) * usize::from(config.regular_season_rounds);
    u16::try_from(days).unwrap_or(u16::MAX)
}

// One entry per day, starting from the season start date. Every entry starts out Scheduled.
pub fn generate_schedule(year: Year, config: &LeagueConfig, team_count: usize) -> Result<Vec<ScheduleEntry>> {
    let mut days: Vec<(EventType, Option<DayPayload>)> = OFFSEASON.iter().map(|e| (*e, None)).collect();

    for day in 0..config.preseason_days {
        days.push((EventType::Preseason, Some(DayPayload { day })));
    }
    for day in 0..regular_season_days(config, team_count) {
        days.push((EventType::RegularSeason, Some(DayPayload { day })));
    }

    days.push((EventType::EndOfRegularSeason, None));
    days.push((EventType::EndOfSeason, None));

    let mut schedule = Vec::new();
    for (i, (event_type, payload)) in days.into_iter().enumerate() {
        let sequence = Sequence::try_from(i + 1).unwrap_or(Sequence::MAX);
        let date = config.season_start.nth_day(year, sequence)?;
        schedule.push(ScheduleEntry::build(year, sequence, event_type, date, payload));
    }
    return Ok(schedule);
}
