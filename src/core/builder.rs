use crate::core::markup::extract_fragments;
use crate::core::reorder::float_main_entrees;
use crate::core::segmenter::{has_meal_sentinel, segment, FooterPolicy};
use crate::domain::model::{DayMenu, Hall, MealPeriod, WeekWindow, WINDOW_DAYS};
use crate::domain::ports::{HallFetcher, HallMeals};
use crate::utils::error::{MenuError, Result};
use chrono::{Duration as DateDuration, NaiveDate};
use std::sync::Arc;
use std::time::Duration;

/// A hall that could not be loaded while building a day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HallFailure {
    pub hall: Hall,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct DayBuild {
    pub menu: DayMenu,
    pub failures: Vec<HallFailure>,
}

/// A built week plus the outcome of its first day.
#[derive(Debug, Clone)]
pub struct WeekBuild {
    pub window: WeekWindow,
    pub first_day_failures: Vec<HallFailure>,
}

impl WeekBuild {
    /// A week whose first day has no hall at all is not worth publishing.
    pub fn first_day_failed(&self) -> bool {
        self.first_day_failures.len() >= Hall::ALL.len()
    }
}

/// Fetches, segments, classifies and reorders every hall for a date.
pub struct DayMenuBuilder<F: HallFetcher> {
    fetcher: Arc<F>,
    fetch_timeout: Duration,
    footer: FooterPolicy,
}

impl<F: HallFetcher> Clone for DayMenuBuilder<F> {
    fn clone(&self) -> Self {
        Self {
            fetcher: Arc::clone(&self.fetcher),
            fetch_timeout: self.fetch_timeout,
            footer: self.footer,
        }
    }
}

impl<F: HallFetcher + 'static> DayMenuBuilder<F> {
    pub fn new(fetcher: F, fetch_timeout: Duration) -> Self {
        Self::from_shared(Arc::new(fetcher), fetch_timeout)
    }

    pub fn from_shared(fetcher: Arc<F>, fetch_timeout: Duration) -> Self {
        Self {
            fetcher,
            fetch_timeout,
            footer: FooterPolicy::default(),
        }
    }

    pub fn with_footer_policy(mut self, footer: FooterPolicy) -> Self {
        self.footer = footer;
        self
    }

    /// Build one hall: fetch, extract, segment, then float main entrees.
    pub async fn build_hall(&self, hall: Hall, date: NaiveDate) -> Result<HallMeals> {
        let fetch = self.fetcher.fetch(hall, date, MealPeriod::Lunch);
        let html = tokio::time::timeout(self.fetch_timeout, fetch)
            .await
            .map_err(|_| MenuError::FetchTimeout {
                hall: hall.to_string(),
                seconds: self.fetch_timeout.as_secs(),
            })??;

        let fragments = extract_fragments(&html)?;
        if !has_meal_sentinel(&fragments) {
            return Err(MenuError::ParseAnomaly {
                message: format!("no Lunch or Dinner section for {} on {}", hall, date),
            });
        }

        let segments = segment(&fragments, self.footer);
        tracing::debug!(
            "{} on {}: {} lunch items, {} dinner items",
            hall,
            date,
            segments.lunch.len(),
            segments.dinner.len()
        );

        Ok((
            float_main_entrees(segments.lunch),
            float_main_entrees(segments.dinner),
        ))
    }

    /// Build every hall for `date`. Failing halls are left empty and reported.
    pub async fn build(&self, date: NaiveDate) -> DayBuild {
        let handles: Vec<_> = Hall::ALL
            .into_iter()
            .map(|hall| {
                let builder = self.clone();
                (hall, tokio::spawn(async move { builder.build_hall(hall, date).await }))
            })
            .collect();

        let mut menu = DayMenu::empty(date);
        let mut failures = Vec::new();

        for (hall, handle) in handles {
            let outcome = match handle.await {
                Ok(result) => result.map_err(|e| e.to_string()),
                Err(join_error) => Err(format!("hall task aborted: {}", join_error)),
            };

            match outcome {
                Ok((lunch, dinner)) => {
                    menu.lunch.set(hall, lunch);
                    menu.dinner.set(hall, dinner);
                }
                Err(reason) => {
                    tracing::warn!("⚠️ {} menu for {} unavailable: {}", hall, date, reason);
                    failures.push(HallFailure { hall, reason });
                }
            }
        }

        DayBuild { menu, failures }
    }

    /// Build the seven days starting at `start`, concurrently.
    pub async fn build_week(&self, start: NaiveDate) -> WeekBuild {
        let handles: Vec<_> = (0..WINDOW_DAYS)
            .map(|offset| {
                let date = start + DateDuration::days(offset as i64);
                let builder = self.clone();
                (date, tokio::spawn(async move { builder.build(date).await }))
            })
            .collect();

        let mut days = Vec::with_capacity(WINDOW_DAYS);
        let mut first_day_failures = None;
        for (date, handle) in handles {
            let build = handle.await.unwrap_or_else(|join_error| {
                tracing::warn!("⚠️ Building {} aborted: {}", date, join_error);
                DayBuild {
                    menu: DayMenu::empty(date),
                    failures: Hall::ALL
                        .into_iter()
                        .map(|hall| HallFailure {
                            hall,
                            reason: format!("day task aborted: {}", join_error),
                        })
                        .collect(),
                }
            });
            if first_day_failures.is_none() {
                first_day_failures = Some(build.failures);
            }
            days.push(build.menu);
        }

        WeekBuild {
            window: WeekWindow::new(start, days),
            first_day_failures: first_day_failures.unwrap_or_default(),
        }
    }
}
