use crate::core::builder::DayMenuBuilder;
use crate::domain::model::WeekWindow;
use crate::domain::ports::HallFetcher;
use chrono::NaiveDate;
use std::sync::{Arc, RwLock};
use tokio::sync::Mutex;

/// The published seven-day window plus the day it was built for.
///
/// Readers clone the current `Arc` and never see a half-built window; the
/// `last_day` mutex makes rebuilds single-writer.
pub struct WeekCache<F: HallFetcher + 'static> {
    builder: DayMenuBuilder<F>,
    current: RwLock<Arc<WeekWindow>>,
    last_day: Mutex<Option<NaiveDate>>,
}

impl<F: HallFetcher + 'static> WeekCache<F> {
    pub fn new(builder: DayMenuBuilder<F>, today: NaiveDate) -> Self {
        Self {
            builder,
            current: RwLock::new(Arc::new(WeekWindow::empty(today))),
            last_day: Mutex::new(None),
        }
    }

    pub fn snapshot(&self) -> Arc<WeekWindow> {
        let guard = self.current.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(&*guard)
    }

    pub async fn last_day(&self) -> Option<NaiveDate> {
        *self.last_day.lock().await
    }

    /// Rebuild unconditionally and publish the result.
    ///
    /// Returns `None` when no hall could be loaded for `today`; the previous
    /// window stays published and `last_day` is left as it was.
    pub async fn refresh(&self, today: NaiveDate) -> Option<Arc<WeekWindow>> {
        let mut last_day = self.last_day.lock().await;
        let window = self.rebuild(today).await?;
        *last_day = Some(today);
        Some(window)
    }

    /// Rebuild only when `today` differs from the last successfully built day.
    ///
    /// Returns the new window when a rebuild happened and was published.
    pub async fn ensure_current(&self, today: NaiveDate) -> Option<Arc<WeekWindow>> {
        let mut last_day = self.last_day.lock().await;
        if *last_day == Some(today) {
            return None;
        }

        tracing::info!("📅 Day changed ({:?} -> {}), rebuilding week window", *last_day, today);
        let window = self.rebuild(today).await?;
        *last_day = Some(today);
        Some(window)
    }

    async fn rebuild(&self, today: NaiveDate) -> Option<Arc<WeekWindow>> {
        let build = self.builder.build_week(today).await;
        if build.first_day_failed() {
            tracing::warn!(
                "⚠️ No hall could be loaded for {}, keeping the previous window",
                today
            );
            return None;
        }

        let window = Arc::new(build.window);
        let mut current = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *current = Arc::clone(&window);
        Some(window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Hall, MealPeriod};
    use crate::utils::error::{MenuError, Result};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::time::Duration;

    struct CountingFetcher {
        calls: AtomicUsize,
        down: AtomicBool,
    }

    #[async_trait]
    impl HallFetcher for CountingFetcher {
        async fn fetch(&self, hall: Hall, _date: NaiveDate, _meal: MealPeriod) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.down.load(Ordering::SeqCst) {
                return Err(MenuError::HttpStatusError {
                    hall: hall.to_string(),
                    status: 503,
                });
            }
            Ok("<table><tr><td><div>Lunch</div><div>Bagel</div></td></tr></table>".to_string())
        }
    }

    fn cache() -> (Arc<WeekCache<CountingFetcher>>, Arc<CountingFetcher>) {
        let fetcher = Arc::new(CountingFetcher {
            calls: AtomicUsize::new(0),
            down: AtomicBool::new(false),
        });
        let builder = DayMenuBuilder::from_shared(Arc::clone(&fetcher), Duration::from_secs(5));
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        (Arc::new(WeekCache::new(builder, today)), fetcher)
    }

    #[tokio::test]
    async fn test_rebuilds_once_per_day() {
        let (cache, fetcher) = cache();
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();

        assert!(cache.ensure_current(today).await.is_some());
        assert!(cache.ensure_current(today).await.is_none());
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 6 * 7);

        let tomorrow = today.succ_opt().unwrap();
        let window = cache.ensure_current(tomorrow).await.unwrap();
        assert_eq!(window.start(), tomorrow);
        assert_eq!(cache.snapshot().start(), tomorrow);
        assert_eq!(cache.last_day().await, Some(tomorrow));
    }

    #[tokio::test]
    async fn test_concurrent_callers_share_one_rebuild() {
        let (cache, fetcher) = cache();
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();

        let tasks: Vec<_> = (0..4)
            .map(|_| {
                let cache = Arc::clone(&cache);
                tokio::spawn(async move { cache.ensure_current(today).await.is_some() })
            })
            .collect();

        let mut rebuilt = 0;
        for task in tasks {
            if task.await.unwrap() {
                rebuilt += 1;
            }
        }

        assert_eq!(rebuilt, 1);
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 6 * 7);
    }

    #[tokio::test]
    async fn test_old_snapshot_survives_swap() {
        let (cache, _) = cache();
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();

        let before = cache.snapshot();
        assert_eq!(before.day(0).unwrap().lunch.get(Hall::Cjl).len(), 0);

        assert!(cache.refresh(today).await.is_some());
        let after = cache.snapshot();

        assert_eq!(before.day(0).unwrap().lunch.get(Hall::Cjl).len(), 0);
        assert_eq!(after.day(0).unwrap().lunch.get(Hall::Cjl)[0].text(), "Bagel");
    }

    #[tokio::test]
    async fn test_outage_keeps_window_and_retries() {
        let (cache, fetcher) = cache();
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert!(cache.ensure_current(today).await.is_some());

        let tomorrow = today.succ_opt().unwrap();
        fetcher.down.store(true, Ordering::SeqCst);
        assert!(cache.ensure_current(tomorrow).await.is_none());
        assert_eq!(cache.last_day().await, Some(today));
        assert_eq!(cache.snapshot().start(), today);

        fetcher.down.store(false, Ordering::SeqCst);
        let window = cache.ensure_current(tomorrow).await.unwrap();
        assert_eq!(window.start(), tomorrow);
        assert_eq!(cache.last_day().await, Some(tomorrow));
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 6 * 7 * 3);
    }
}
