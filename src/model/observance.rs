// File: ./src/model/observance.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Resolved flag instructions keyed by full calendar date.
///
/// Keys serialize as `YYYY-MM-DD`, so a lookup always matches on the complete
/// date and never on day-month alone.
pub type ObservanceTable = BTreeMap<NaiveDate, Observance>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Applies to all government buildings.
    #[default]
    All,
    /// Only specific buildings or regions are instructed.
    Partial,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::All => write!(f, "all"),
            Scope::Partial => write!(f, "partial"),
        }
    }
}

/// A single flag instruction for one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observance {
    pub date: NaiveDate,
    pub name: String,
    pub half_mast: bool,
    pub pennant: bool,
    #[serde(default)]
    pub scope: Scope,
}

impl Observance {
    pub fn new(date: NaiveDate, name: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
            half_mast: false,
            pennant: false,
            scope: Scope::All,
        }
    }

    /// ISO form of the date, as used for keys in host attributes.
    pub fn iso_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// One row as delivered by the scraping collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawRow {
    pub primary_text: String,
    #[serde(default)]
    pub alternate_text: Option<String>,
    #[serde(default)]
    pub reason_text: String,
}

impl RawRow {
    pub fn new(primary: &str, reason: &str) -> Self {
        Self {
            primary_text: primary.to_string(),
            alternate_text: None,
            reason_text: reason.to_string(),
        }
    }

    pub fn with_alternate(mut self, alternate: &str) -> Self {
        self.alternate_text = Some(alternate.to_string());
        self
    }
}

/// A day/month pair, optionally qualified with a year.
///
/// A missing year means "every target year": the reconciler instantiates the
/// date once per year it resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedDate {
    pub day: u32,
    pub month: u32,
    pub year: Option<i32>,
}

impl ParsedDate {
    pub fn has_year(&self) -> bool {
        self.year.is_some()
    }

    /// Instantiates the date in its own year, or in `target_year` when it has none.
    /// Returns None when the day does not exist in that year (29 February).
    pub fn resolve(&self, target_year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year.unwrap_or(target_year), self.month, self.day)
    }
}
