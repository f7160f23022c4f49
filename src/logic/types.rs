// Custom types that are widely used are defined here.
use sqlx::SqlitePool;

pub type Db = SqlitePool;

// Database ID types.
pub type TeamId = u16;
pub type ManagerId = u32;
pub type PlayerId = u32;
pub type GameId = u32;

// Season year and the day-number of a schedule entry within it.
pub type Year = i32;
pub type Sequence = u16;

pub type DraftPick = u16;

// Type conversions.
pub mod convert {
    // Convert usize to f64. Counts here never get near the 2^53 precision limit.
    pub fn usize_to_f64(num: usize) -> f64 {
        num as f64
    }
}
