// File: ./src/sensor.rs
// Presentation adapters for home-automation hosts.
//
// Every sensor is the same query with a day offset and a flag; no per-sensor
// state is kept. Hosts render the returned state and attributes as-is.
use crate::model::{Observance, ObservanceTable, Scope};
use crate::query::DayQueryEngine;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::Serialize;
use strum::{EnumIter, IntoEnumIterator};

pub const NO_INSTRUCTION: &str = "No flag instruction";
pub const NO_UPCOMING: &str = "No upcoming flag day";

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum SensorKind {
    Today,
    Tomorrow,
    NextFlagDay,
}

impl SensorKind {
    pub fn name(&self) -> &'static str {
        match self {
            SensorKind::Today => "vlaginstructie_today",
            SensorKind::Tomorrow => "vlaginstructie_tomorrow",
            SensorKind::NextFlagDay => "next_flag_day",
        }
    }

    pub fn unique_id(&self) -> &'static str {
        match self {
            SensorKind::Today => "vlaginstructie_sensor_today",
            SensorKind::Tomorrow => "vlaginstructie_sensor_tomorrow",
            SensorKind::NextFlagDay => "vlaginstructie_sensor_next_flag_day",
        }
    }

    pub fn all() -> Vec<SensorKind> {
        SensorKind::iter().collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum BinarySensorKind {
    FlagDayToday,
    HalfMastToday,
}

impl BinarySensorKind {
    pub fn name(&self) -> &'static str {
        match self {
            BinarySensorKind::FlagDayToday => "vlag_uithangen_today",
            BinarySensorKind::HalfMastToday => "vlag_halfstok_today",
        }
    }

    pub fn all() -> Vec<BinarySensorKind> {
        BinarySensorKind::iter().collect()
    }
}

/// Attribute set exposed next to a sensor state.
/// Only `date` is present when a day has no instruction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Attributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<Scope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wimpel: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub halfstok: Option<bool>,
}

impl Attributes {
    fn for_observance(obs: &Observance, half_mast: bool) -> Self {
        Self {
            reason: Some(obs.name.clone()),
            date: Some(obs.iso_date()),
            scope: Some(obs.scope),
            wimpel: Some(obs.pennant),
            halfstok: Some(half_mast),
        }
    }

    fn date_only(date: NaiveDate) -> Self {
        Self {
            date: Some(date.format("%Y-%m-%d").to_string()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SensorState {
    pub name: &'static str,
    pub state: String,
    pub attributes: Attributes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BinaryState {
    pub name: &'static str,
    pub is_on: bool,
    pub attributes: Attributes,
}

/// Renders a sensor for the local moment `now`.
pub fn render(
    kind: SensorKind,
    table: &ObservanceTable,
    now: NaiveDateTime,
    horizon_days: u32,
) -> SensorState {
    let today = now.date();
    let (state, attributes) = match kind {
        SensorKind::Today => day_state(table, today, now),
        SensorKind::Tomorrow => day_state(table, today + Duration::days(1), now),
        SensorKind::NextFlagDay => {
            match DayQueryEngine::next_occurrence_from(table, today, horizon_days) {
                Some((date, obs)) => {
                    let half_mast = DayQueryEngine::is_half_mast(table, date, now);
                    log::debug!("{} - selected next {}", kind.name(), date);
                    (
                        obs.iso_date(),
                        Attributes::for_observance(obs, half_mast),
                    )
                }
                None => {
                    log::debug!("{} - nothing within {} days", kind.name(), horizon_days);
                    (NO_UPCOMING.to_string(), Attributes::default())
                }
            }
        }
    };
    SensorState {
        name: kind.name(),
        state,
        attributes,
    }
}

fn day_state(table: &ObservanceTable, date: NaiveDate, now: NaiveDateTime) -> (String, Attributes) {
    match DayQueryEngine::instruction_for(table, date) {
        Some(obs) => {
            let half_mast = DayQueryEngine::is_half_mast(table, date, now);
            log::debug!("match {} -> {}", date, obs.name);
            (obs.name.clone(), Attributes::for_observance(obs, half_mast))
        }
        None => {
            log::debug!("no match for {}", date);
            (NO_INSTRUCTION.to_string(), Attributes::date_only(date))
        }
    }
}

/// Renders an on/off sensor for today.
pub fn render_binary(kind: BinarySensorKind, table: &ObservanceTable, now: NaiveDateTime) -> BinaryState {
    let today = now.date();
    let obs = DayQueryEngine::instruction_for(table, today);
    let half_mast = DayQueryEngine::is_half_mast(table, today, now);
    let is_on = match kind {
        BinarySensorKind::FlagDayToday => obs.is_some(),
        BinarySensorKind::HalfMastToday => half_mast,
    };
    let attributes = match obs {
        Some(obs) if is_on => Attributes::for_observance(obs, half_mast),
        _ => Attributes::default(),
    };
    BinaryState {
        name: kind.name(),
        is_on,
        attributes,
    }
}

/// Renders every sensor and binary sensor at once.
pub fn render_all(
    table: &ObservanceTable,
    now: NaiveDateTime,
    horizon_days: u32,
) -> (Vec<SensorState>, Vec<BinaryState>) {
    let sensors = SensorKind::all()
        .into_iter()
        .map(|k| render(k, table, now, horizon_days))
        .collect();
    let binaries = BinarySensorKind::all()
        .into_iter()
        .map(|k| render_binary(k, table, now))
        .collect();
    (sensors, binaries)
}
