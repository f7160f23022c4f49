// Time-related operations.
use serde::{Deserialize, Serialize};
use time::{format_description::BorrowedFormatItem, macros::format_description, Date, Duration, Month};

use crate::logic::{error::Result, types::Year};

static ISO_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

// A day of the year without the year, given as [month, day].
#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct AnnualDate {
    pub month: u8,
    pub day: u8,
}

impl Default for AnnualDate {
    fn default() -> Self {
        Self::build(8, 1)
    }
}

impl AnnualDate {
    pub fn build(month: u8, day: u8) -> Self {
        Self { month, day }
    }

    // Get a Date object.
    pub fn date_object(&self, year: Year) -> Result<Date> {
        let month = Month::try_from(self.month)?;
        Ok(Date::from_calendar_date(year, month, self.day)?)
    }

    // Get the date that lies this many days after the annual date of the given year.
    // Day 1 is the annual date itself.
    pub fn nth_day(&self, year: Year, day: u16) -> Result<Date> {
        let start = self.date_object(year)?;
        return Ok(start + Duration::days(i64::from(day.saturating_sub(1))));
    }
}

// Convert a Date object to string.
pub fn date_to_string(date: Date) -> String {
    match date.format(&ISO_FORMAT) {
        Ok(s) => s,
        Err(_) => format!("{date}"),
    }
}

// Convert a string to Date object.
pub fn string_to_date(date: &str) -> Result<Date> {
    Date::parse(date, ISO_FORMAT).map_err(|e| {
        crate::logic::error::LeagueError::Processing(format!("invalid date {date}: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    #[test]
    fn nth_day_counts_from_one() {
        let start = AnnualDate::build(8, 1);
        assert_eq!(start.nth_day(2025, 1).unwrap(), date!(2025-08-01));
        assert_eq!(start.nth_day(2025, 32).unwrap(), date!(2025-09-01));
    }

    #[test]
    fn invalid_annual_date_is_an_error() {
        assert!(AnnualDate::build(2, 30).date_object(2025).is_err());
        assert!(AnnualDate::build(13, 1).date_object(2025).is_err());
    }

    #[test]
    fn dates_survive_string_conversion() {
        let date = date!(2031-02-28);
        assert_eq!(string_to_date(&date_to_string(date)).unwrap(), date);
    }
}
