// File: ./src/model/reconcile.rs
//! Turns scraped rows into dated observances.
//!
//! A row's primary cell may carry an alternate date in parentheses, e.g.
//! `4 mei (3 mei)`. The alternate is only used when the main date falls on a
//! Sunday or on a recognized Christian holiday. Rows without an alternate are
//! never shifted.
use crate::model::easter::is_recognized_holiday;
use crate::model::parser::{parse_date_expression, split_parenthetical};
use crate::model::{Observance, ObservanceTable, ParsedDate, RawRow, Scope, variable_days};
use chrono::{Datelike, NaiveDate, Weekday};

const HALF_MAST_MARKERS: &[&str] = &["dodenherdenking", "halfstok"];
const PENNANT_MARKERS: &[&str] = &["konin", "wimpel"];
const PARTIAL_MARKERS: &[&str] = &["alleen", "uitsluitend", "niet alle"];

/// Reconciles one row into zero or more observances, one per target year.
///
/// Rows whose main date cannot be parsed yield nothing. A year-less date
/// targets `current_year` and the year after.
pub fn reconcile_row(row: &RawRow, current_year: i32) -> Vec<Observance> {
    let (main_text, paren_alt) = split_parenthetical(&row.primary_text);
    let alt_text = paren_alt.or_else(|| {
        row.alternate_text
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    });

    let Some(main) = parse_date_expression(&main_text) else {
        log::debug!("Skipping unparseable row: '{}'", row.primary_text);
        return Vec::new();
    };
    let alt = alt_text.as_deref().and_then(parse_date_expression);

    let target_years = match main.year {
        Some(y) => vec![y],
        None => vec![current_year, current_year + 1],
    };

    let reason = row.reason_text.trim();
    let name = if reason.is_empty() {
        main_text.clone()
    } else {
        reason.to_string()
    };
    let lower = reason.to_lowercase();
    let half_mast = HALF_MAST_MARKERS.iter().any(|m| lower.contains(m));
    let pennant = PENNANT_MARKERS.iter().any(|m| lower.contains(m));
    let scope = if PARTIAL_MARKERS.iter().any(|m| lower.contains(m)) {
        Scope::Partial
    } else {
        Scope::All
    };

    target_years
        .into_iter()
        .filter_map(|year| {
            let Some(date) = resolve_date(&main, alt.as_ref(), year) else {
                log::debug!("'{}' does not exist in {}, skipping that year", main_text, year);
                return None;
            };
            Some(Observance {
                date,
                name: name.clone(),
                half_mast,
                pennant,
                scope,
            })
        })
        .collect()
}

/// Applies the shift rule for one target year.
pub fn resolve_date(main: &ParsedDate, alt: Option<&ParsedDate>, year: i32) -> Option<NaiveDate> {
    let main_date = main.resolve(year)?;
    match alt.and_then(|a| a.resolve(year)) {
        Some(alt_date) if needs_shift(main_date) => Some(alt_date),
        _ => Some(main_date),
    }
}

fn needs_shift(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Sun || is_recognized_holiday(date)
}

/// Builds the complete table for one fetch: all rows in order, then the
/// variable days of `current_year` and the year after. Later entries for the
/// same date overwrite earlier ones.
pub fn build_table(rows: &[RawRow], current_year: i32) -> ObservanceTable {
    let mut table = ObservanceTable::new();
    for row in rows {
        for obs in reconcile_row(row, current_year) {
            table.insert(obs.date, obs);
        }
    }
    table.extend(variable_days::compute(current_year));
    table.extend(variable_days::compute(current_year + 1));
    table
}
