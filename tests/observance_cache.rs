// Tests for the once-per-day fetch policy and stale fallback.
use anyhow::Result;
use chrono::NaiveDate;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use vlaginstructie::ObservanceCache;
use vlaginstructie::model::RawRow;
use vlaginstructie::source::RowSource;

#[derive(Default)]
struct MockSource {
    calls: AtomicUsize,
    failing: AtomicBool,
    delay_ms: u64,
}

impl MockSource {
    fn failing() -> Self {
        let s = Self::default();
        s.failing.store(true, Ordering::SeqCst);
        s
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RowSource for MockSource {
    async fn fetch_raw_rows(&self) -> Result<Vec<RawRow>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
        if self.failing.load(Ordering::SeqCst) {
            anyhow::bail!("connection refused");
        }
        Ok(vec![RawRow::new("4 mei (3 mei)", "Dodenherdenking")])
    }
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn test_warm_cache_does_not_refetch() {
    let cache = ObservanceCache::new(MockSource::default());
    let day = ymd(2025, 4, 1);

    let first = cache.get_table_on(day).await;
    let second = cache.get_table_on(day).await;

    assert_eq!(cache.source().calls(), 1);
    assert!(Arc::ptr_eq(&first, &second));
    assert!(first.contains_key(&ymd(2025, 5, 3)));
    assert_eq!(cache.fetched_on().await, Some(day));
}

#[tokio::test]
async fn test_failure_without_cache_returns_same_empty_table() {
    let cache = ObservanceCache::new(MockSource::failing());
    let day = ymd(2025, 4, 1);

    let first = cache.get_table_on(day).await;
    let second = cache.get_table_on(day).await;

    assert!(first.is_empty());
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(cache.source().calls(), 1);
    assert_eq!(cache.fetched_on().await, None);
}

#[tokio::test]
async fn test_failure_serves_stale_table_and_retries_next_day() {
    let cache = ObservanceCache::new(MockSource::default());
    let day1 = ymd(2025, 4, 1);
    let good = cache.get_table_on(day1).await;

    cache.source().failing.store(true, Ordering::SeqCst);
    let day2 = ymd(2025, 4, 2);
    let stale = cache.get_table_on(day2).await;
    let stale_again = cache.get_table_on(day2).await;

    assert!(Arc::ptr_eq(&good, &stale));
    assert!(Arc::ptr_eq(&stale, &stale_again));
    assert_eq!(cache.source().calls(), 2);
    assert_eq!(cache.fetched_on().await, Some(day1));

    cache.source().failing.store(false, Ordering::SeqCst);
    let day3 = ymd(2025, 4, 3);
    let fresh = cache.get_table_on(day3).await;
    assert_eq!(cache.source().calls(), 3);
    assert!(!Arc::ptr_eq(&good, &fresh));
    assert_eq!(cache.fetched_on().await, Some(day3));
}

#[tokio::test]
async fn test_new_year_rebuilds_for_new_years() {
    let cache = ObservanceCache::new(MockSource::default());
    let old = cache.get_table_on(ymd(2025, 12, 31)).await;
    assert!(old.contains_key(&ymd(2026, 5, 4)));
    assert!(!old.contains_key(&ymd(2027, 5, 4)));

    let new = cache.get_table_on(ymd(2026, 1, 1)).await;
    assert!(new.contains_key(&ymd(2027, 5, 4)));
    assert!(!new.contains_key(&ymd(2025, 5, 3)));
}

#[tokio::test]
async fn test_concurrent_callers_share_one_fetch() {
    let cache = Arc::new(ObservanceCache::new(MockSource {
        delay_ms: 50,
        ..Default::default()
    }));
    let day = ymd(2025, 4, 1);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let c = cache.clone();
            tokio::spawn(async move { c.get_table_on(day).await })
        })
        .collect();

    let mut tables = Vec::new();
    for h in handles {
        tables.push(h.await.unwrap());
    }

    assert_eq!(cache.source().calls(), 1);
    for t in &tables[1..] {
        assert!(Arc::ptr_eq(&tables[0], t));
    }
}
