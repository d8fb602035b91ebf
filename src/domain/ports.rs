use crate::domain::model::{FoodItem, Hall, MealPeriod, MenuRecord};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use std::time::Duration;

/// Retrieves the raw menu page for one hall and date.
#[async_trait]
pub trait HallFetcher: Send + Sync {
    async fn fetch(&self, hall: Hall, date: NaiveDate, meal_hint: MealPeriod) -> Result<String>;
}

/// Persistent history of daily menus.
pub trait MenuStore: Send + Sync {
    /// Records whose `date_modified` lies in `[start, end)`.
    fn find_between(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> impl std::future::Future<Output = Result<Vec<MenuRecord>>> + Send;

    fn insert(&self, record: MenuRecord) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn fetch_timeout(&self) -> Duration;
    fn store_path(&self) -> &str;
    fn footer_ends_dinner(&self) -> bool;
    fn refresh_period(&self) -> Duration;

    /// FoodPro location number for `hall`, honoring overrides.
    fn location_num(&self, hall: Hall) -> String {
        hall.location_num().to_string()
    }
}

/// Classified items for one hall, split by meal.
pub type HallMeals = (Vec<FoodItem>, Vec<FoodItem>);
