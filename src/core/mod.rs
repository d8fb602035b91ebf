pub mod builder;
pub mod calendar;
pub mod classifier;
pub mod history;
pub mod markup;
pub mod reorder;
pub mod segmenter;
pub mod service;
pub mod views;
pub mod week_cache;

pub use crate::domain::model::{Category, DayMenu, FoodItem, Hall, HallMenu, MealPeriod, MenuRecord, WeekWindow};
pub use crate::domain::ports::{ConfigProvider, HallFetcher, MenuStore};
pub use crate::utils::error::Result;
