// File: ./src/cache.rs
// Day-scoped cache of the resolved observance table.
//
// The source is fetched at most once per local calendar day. A failed fetch
// keeps serving the last good table (or an empty one) until the next day.
use crate::model::ObservanceTable;
use crate::model::reconcile::build_table;
use crate::source::RowSource;
use chrono::{Datelike, Local, NaiveDate};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub table: Arc<ObservanceTable>,
    pub fetched_on: NaiveDate,
}

#[derive(Debug, Default)]
struct CacheState {
    entry: Option<CacheEntry>,
    // Day of the last fetch attempt, successful or not.
    attempted_on: Option<NaiveDate>,
    empty: Arc<ObservanceTable>,
}

impl CacheState {
    fn current(&self) -> Arc<ObservanceTable> {
        self.entry
            .as_ref()
            .map(|e| e.table.clone())
            .unwrap_or_else(|| self.empty.clone())
    }
}

/// Owns the observance table and the source it is rebuilt from.
///
/// Concurrent callers serialize on one async lock, so a cold cache triggers a
/// single fetch that every waiting caller then shares.
pub struct ObservanceCache<S: RowSource> {
    source: S,
    state: Mutex<CacheState>,
}

impl<S: RowSource> ObservanceCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: Mutex::new(CacheState::default()),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Table for the caller's local "today".
    pub async fn get_table(&self) -> Arc<ObservanceTable> {
        self.get_table_on(Local::now().date_naive()).await
    }

    /// Table as seen on `today`. Never fails: fetch errors degrade to the last
    /// good table, or an empty one when nothing was ever fetched.
    pub async fn get_table_on(&self, today: NaiveDate) -> Arc<ObservanceTable> {
        let mut state = self.state.lock().await;

        if let Some(entry) = &state.entry
            && entry.fetched_on == today
        {
            return entry.table.clone();
        }
        if state.attempted_on == Some(today) {
            return state.current();
        }

        state.attempted_on = Some(today);
        match self.source.fetch_raw_rows().await {
            Ok(rows) => {
                let table = Arc::new(build_table(&rows, today.year()));
                log::info!(
                    "Fetched {} rows, {} flag days resolved for {}-{}",
                    rows.len(),
                    table.len(),
                    today.year(),
                    today.year() + 1
                );
                state.entry = Some(CacheEntry {
                    table: table.clone(),
                    fetched_on: today,
                });
                table
            }
            Err(e) => {
                match &state.entry {
                    Some(entry) => log::warn!(
                        "Fetch failed ({:#}), serving table from {}",
                        e,
                        entry.fetched_on
                    ),
                    None => log::warn!("Fetch failed ({:#}), no cached table available", e),
                }
                state.current()
            }
        }
    }

    /// Day the current table was fetched, if any.
    pub async fn fetched_on(&self) -> Option<NaiveDate> {
        self.state.lock().await.entry.as_ref().map(|e| e.fetched_on)
    }
}
