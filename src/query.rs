// File: ./src/query.rs
//! Day-relative questions answered against a resolved table.
//!
//! All functions are read-only over the supplied table. Remembrance Day
//! (4 May) gets one special case: on the day itself the flag is at half-mast
//! only until 18:00 local time.
use crate::model::{Observance, ObservanceTable};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

pub const DEFAULT_HORIZON_DAYS: u32 = 366;

/// Half-mast on 4 May ends at this local time.
pub fn remembrance_cutoff() -> NaiveTime {
    NaiveTime::default() + Duration::hours(18)
}

fn is_remembrance_day(date: NaiveDate) -> bool {
    date.month() == 5 && date.day() == 4
}

pub struct DayQueryEngine;

impl DayQueryEngine {
    pub fn instruction_for(table: &ObservanceTable, date: NaiveDate) -> Option<&Observance> {
        table.get(&date)
    }

    pub fn is_flag_day(table: &ObservanceTable, date: NaiveDate) -> bool {
        table.contains_key(&date)
    }

    /// Whether the flag should be at half-mast on `date`, asked at `now`.
    ///
    /// The 18:00 cutoff for 4 May only applies when `date` is the day of
    /// `now`; for any other day the stored flag is returned as is.
    pub fn is_half_mast(table: &ObservanceTable, date: NaiveDate, now: NaiveDateTime) -> bool {
        let Some(obs) = table.get(&date) else {
            return false;
        };
        if is_remembrance_day(date) && date == now.date() {
            return now.time() < remembrance_cutoff();
        }
        obs.half_mast
    }

    /// First flag day on or after `date`, looking at most `horizon_days` ahead.
    pub fn next_occurrence_from(
        table: &ObservanceTable,
        date: NaiveDate,
        horizon_days: u32,
    ) -> Option<(NaiveDate, &Observance)> {
        if horizon_days == 0 {
            return None;
        }
        let end = date.checked_add_signed(Duration::days(horizon_days as i64))?;
        table.range(date..end).next().map(|(d, obs)| (*d, obs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cutoff_is_six_pm() {
        assert_eq!(remembrance_cutoff(), NaiveTime::from_hms_opt(18, 0, 0).unwrap());
    }
}
