// Event processors: one handler per kind of schedule entry.
pub mod game_day;
pub mod manager_changes;
pub mod milestone;
pub mod player_changes;
pub mod rookie_draft;
pub mod standings;
pub mod training_camp;

use std::{collections::HashMap, time::Instant};

use lazy_static::lazy_static;

use crate::logic::{app_data::AppData, error::{LeagueError, Result}, random::RandomSource, schedule::{EventType, ScheduleEntry}};

#[derive(Debug, PartialEq, Eq)]
#[derive(Clone, Copy)]
pub enum Processor {
    Milestone,
    TrainingCamp,
    ManagerChanges,
    PlayerChanges,
    RookieDraft,
    GameDay,
    Standings,
}

lazy_static! {
    static ref PROCESSORS: HashMap<EventType, Processor> = {
        HashMap::from([
            (EventType::BeginningOfSeason, Processor::Milestone),
            (EventType::ManagerChanges, Processor::ManagerChanges),
            (EventType::RookieDraftRound1, Processor::RookieDraft),
            (EventType::RookieDraftRound2, Processor::RookieDraft),
            (EventType::PlayerChanges, Processor::PlayerChanges),
            (EventType::TrainingCamp, Processor::TrainingCamp),
            (EventType::Preseason, Processor::GameDay),
            (EventType::RegularSeason, Processor::GameDay),
            (EventType::EndOfRegularSeason, Processor::Standings),
            (EventType::EndOfSeason, Processor::Milestone),
        ])
    };
}

impl Processor {
    // Find the processor for the event type.
    pub fn resolve(event_type: EventType) -> Result<Self> {
        PROCESSORS.get(&event_type).copied().ok_or_else(|| {
            LeagueError::Processing(format!("no processor for {event_type:?}"))
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Processor::Milestone => "milestone",
            Processor::TrainingCamp => "training camp",
            Processor::ManagerChanges => "manager changes",
            Processor::PlayerChanges => "player changes",
            Processor::RookieDraft => "rookie draft",
            Processor::GameDay => "game day",
            Processor::Standings => "standings",
        }
    }

    // The event types the processor accepts. None means any.
    fn accepts(&self) -> Option<&'static [EventType]> {
        match self {
            Processor::Milestone => None,
            Processor::TrainingCamp => Some(&[EventType::TrainingCamp]),
            Processor::ManagerChanges => Some(&[EventType::ManagerChanges]),
            Processor::PlayerChanges => Some(&[EventType::PlayerChanges]),
            Processor::RookieDraft => Some(&[EventType::RookieDraftRound1, EventType::RookieDraftRound2]),
            Processor::GameDay => Some(&[EventType::Preseason, EventType::RegularSeason]),
            Processor::Standings => Some(&[EventType::EndOfRegularSeason]),
        }
    }

    pub fn check(&self, entry: &ScheduleEntry) -> Result<()> {
        match self.accepts() {
            Some(types) if !types.contains(&entry.event_type) => Err(LeagueError::WrongEventType {
                processor: self.name(),
                found: entry.event_type,
            }),
            _ => Ok(()),
        }
    }

    // Run the processor on the entry. On success the entry is Completed.
    pub async fn process(&self, data: &AppData, rng: &mut dyn RandomSource, entry: &mut ScheduleEntry) -> Result<()> {
        self.check(entry)?;
        let now = Instant::now();

        match self {
            Processor::Milestone => milestone::process(data, entry).await?,
            Processor::TrainingCamp => training_camp::process(data, entry).await?,
            Processor::ManagerChanges => manager_changes::process(data, rng, entry).await?,
            Processor::PlayerChanges => player_changes::process(data, rng, entry).await?,
            Processor::RookieDraft => rookie_draft::process(data, rng, entry).await?,
            Processor::GameDay => game_day::process(data, rng, entry).await?,
            Processor::Standings => standings::process(data, entry).await?,
        }

        tracing::info!("Processed {} ({}) in {:.2?}", entry.label(), self.name(), now.elapsed());
        Ok(())
    }
}
