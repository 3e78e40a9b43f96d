// File: ./src/model/variable_days.rs
// Flag days whose date follows a weekday rule instead of a fixed day.
// Weekdays are numbered Monday=0 .. Sunday=6 throughout.
use crate::model::{Observance, ObservanceTable};
use chrono::{Datelike, Duration, NaiveDate};

pub const SATURDAY: u32 = 5;
pub const TUESDAY: u32 = 1;

pub const VETERANS_DAY: &str = "Veteranendag";
pub const BUDGET_DAY: &str = "Prinsjesdag";

/// Last `weekday` of the month (0=Monday).
pub fn last_weekday_of_month(year: i32, month: u32, weekday: u32) -> Option<NaiveDate> {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    let last_day = first_of_next - Duration::days(1);
    let offset = (last_day.weekday().num_days_from_monday() + 7 - weekday) % 7;
    Some(last_day - Duration::days(offset as i64))
}

/// `n`th `weekday` of the month (0=Monday, n starting at 1).
pub fn nth_weekday_of_month(year: i32, month: u32, weekday: u32, n: u32) -> Option<NaiveDate> {
    let first_day = NaiveDate::from_ymd_opt(year, month, 1)?;
    let first_weekday = first_day.weekday().num_days_from_monday();
    let delta = (weekday + 7 - first_weekday) % 7 + (n.saturating_sub(1)) * 7;
    let date = first_day + Duration::days(delta as i64);
    // Fifth occurrences may spill into the next month.
    (date.month() == month).then_some(date)
}

/// Veterans' Day (last Saturday of June) and Budget Day (third Tuesday of
/// September) for `year`, keyed by date.
pub fn compute(year: i32) -> ObservanceTable {
    let mut days = ObservanceTable::new();

    if let Some(d) = last_weekday_of_month(year, 6, SATURDAY) {
        days.insert(d, Observance::new(d, VETERANS_DAY));
    }
    if let Some(d) = nth_weekday_of_month(year, 9, TUESDAY, 3) {
        days.insert(d, Observance::new(d, BUDGET_DAY));
    }

    days
}
