use crate::core::builder::DayMenuBuilder;
use crate::core::history;
use crate::core::views::{self, AboutView, ApiResponse, MealView};
use crate::core::week_cache::WeekCache;
use crate::domain::model::{MealPeriod, WeekWindow};
use crate::domain::ports::{HallFetcher, MenuStore};
use crate::utils::error::Result;
use chrono::{Local, NaiveDate, NaiveDateTime};
use std::sync::Arc;
use std::time::Duration;

/// Owns the week window and the menu history.
///
/// All rebuilds go through [`MenuService::refresh_if_stale`]; view calls only
/// read the current snapshot.
pub struct MenuService<F: HallFetcher + 'static, S: MenuStore> {
    cache: WeekCache<F>,
    store: S,
}

impl<F: HallFetcher + 'static, S: MenuStore> MenuService<F, S> {
    pub fn new(builder: DayMenuBuilder<F>, store: S, today: NaiveDate) -> Self {
        Self {
            cache: WeekCache::new(builder, today),
            store,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn snapshot(&self) -> Arc<WeekWindow> {
        self.cache.snapshot()
    }

    /// Rebuild on day change and record today's menu once.
    ///
    /// The history write is retried on every call until it lands, but only
    /// once a window for `now`'s date has been built successfully. Returns
    /// `true` when the window was rebuilt.
    pub async fn refresh_if_stale(&self, now: NaiveDateTime) -> Result<bool> {
        let today = now.date();
        let rebuilt = self.cache.ensure_current(today).await.is_some();
        if self.cache.last_day().await != Some(today) {
            return Ok(false);
        }

        let window = self.snapshot();
        if let Some(day) = window.day(0) {
            history::record_if_absent(&self.store, now, day).await?;
        }
        Ok(rebuilt)
    }

    /// Single background writer: re-checks the day every `period`.
    pub async fn run_refresher(&self, period: Duration) {
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            let now = Local::now().naive_local();
            match self.refresh_if_stale(now).await {
                Ok(true) => tracing::info!("✅ Menus refreshed for {}", now.date()),
                Ok(false) => tracing::debug!("Menus already current for {}", now.date()),
                Err(e) => tracing::error!(
                    "❌ Refresh failed: {} (Category: {:?}, Severity: {:?})",
                    e,
                    e.category(),
                    e.severity()
                ),
            }
        }
    }

    pub fn meal(&self, meal: MealPeriod, index: usize) -> Result<MealView> {
        views::meal_view(&self.snapshot(), meal, index)
    }

    pub fn lunch(&self, index: usize) -> Result<MealView> {
        self.meal(MealPeriod::Lunch, index)
    }

    pub fn dinner(&self, index: usize) -> Result<MealView> {
        self.meal(MealPeriod::Dinner, index)
    }

    pub fn index(&self, now: NaiveDateTime) -> Result<MealView> {
        views::index_view(&self.snapshot(), now)
    }

    pub fn about(&self) -> AboutView {
        views::about_view(&self.snapshot())
    }

    pub async fn api(&self, month: u32, day: u32, year: i32) -> ApiResponse {
        history::lookup(&self.store, month, day, year).await.into()
    }
}
